//! The item collection: capture order, the filtered subset and per-item records.

use crate::sorting::SortValue;
use brickwork_types::{ItemId, Point, Size};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    /// Captured by an insert and waiting for its reveal.
    Inserting,
}

#[derive(Debug, Clone, Default)]
pub struct ItemRecord {
    pub size: Size,
    pub visibility: Visibility,
    pub sort_data: HashMap<String, SortValue>,
    /// Last position handed out by a layout pass, padding included.
    pub position: Option<Point>,
}

/// `all` keeps capture order, `filtered` is always a subset of it.
#[derive(Debug, Default)]
pub struct ItemCollection {
    all: Vec<ItemId>,
    filtered: Vec<ItemId>,
    records: HashMap<ItemId, ItemRecord>,
}

impl ItemCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends ids not yet captured, returns the newly captured ones.
    pub fn insert(&mut self, ids: &[ItemId], size: Size) -> Vec<ItemId> {
        let mut added = Vec::with_capacity(ids.len());
        for id in ids {
            if self.records.contains_key(id) {
                continue;
            }
            self.records.insert(
                *id,
                ItemRecord {
                    size,
                    ..ItemRecord::default()
                },
            );
            self.all.push(*id);
            added.push(*id);
        }
        added
    }

    /// Replaces the capture order. Records of dropped ids are removed and the
    /// filtered set keeps only ids still present.
    pub fn replace_all(&mut self, ids: Vec<ItemId>) {
        let mut seen = std::collections::HashSet::with_capacity(ids.len());
        let ids: Vec<ItemId> = ids.into_iter().filter(|id| seen.insert(*id)).collect();
        self.records.retain(|id, _| seen.contains(id));
        for id in &ids {
            self.records.entry(*id).or_default();
        }
        self.filtered.retain(|id| seen.contains(id));
        self.all = ids;
    }

    pub fn remove(&mut self, ids: &[ItemId]) {
        self.all.retain(|id| !ids.contains(id));
        self.filtered.retain(|id| !ids.contains(id));
        for id in ids {
            self.records.remove(id);
        }
    }

    pub fn clear(&mut self) {
        self.all.clear();
        self.filtered.clear();
        self.records.clear();
    }

    pub fn all(&self) -> &[ItemId] {
        &self.all
    }

    pub fn filtered(&self) -> &[ItemId] {
        &self.filtered
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn set_filtered(&mut self, ids: Vec<ItemId>) {
        self.filtered = ids.into_iter().filter(|id| self.records.contains_key(id)).collect();
    }

    pub fn extend_filtered(&mut self, ids: &[ItemId]) {
        for id in ids {
            if self.records.contains_key(id) && !self.filtered.contains(id) {
                self.filtered.push(*id);
            }
        }
    }

    /// Stable sort of the filtered set.
    pub fn sort_filtered_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&ItemRecord, &ItemRecord) -> Ordering,
    {
        let records = &self.records;
        self.filtered.sort_by(|a, b| match (records.get(a), records.get(b)) {
            (Some(a), Some(b)) => compare(a, b),
            _ => Ordering::Equal,
        });
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemRecord> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut ItemRecord> {
        self.records.get_mut(&id)
    }

    pub fn visibility(&self, id: ItemId) -> Option<Visibility> {
        self.records.get(&id).map(|r| r.visibility)
    }

    pub fn set_visibility(&mut self, id: ItemId, visibility: Visibility) {
        if let Some(record) = self.records.get_mut(&id) {
            record.visibility = visibility;
        }
    }

    pub fn size(&self, id: ItemId) -> Option<Size> {
        self.records.get(&id).map(|r| r.size)
    }

    pub fn set_size(&mut self, id: ItemId, size: Size) {
        if let Some(record) = self.records.get_mut(&id) {
            record.size = size;
        }
    }

    pub fn position(&self, id: ItemId) -> Option<Point> {
        self.records.get(&id).and_then(|r| r.position)
    }

    pub fn set_position(&mut self, id: ItemId, position: Point) {
        if let Some(record) = self.records.get_mut(&id) {
            record.position = Some(position);
        }
    }

    pub fn sort_value(&self, id: ItemId, key: &str) -> Option<&SortValue> {
        self.records.get(&id).and_then(|r| r.sort_data.get(key))
    }
}
