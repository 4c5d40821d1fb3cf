//! Sort keys and ordering of the filtered set.

use crate::collection::ItemCollection;
use brickwork_types::ItemId;
use std::cmp::Ordering;
use std::rc::Rc;

/// Assigned once per capture from a monotonically increasing counter.
pub const ORIGINAL_ORDER: &str = "original-order";
/// A fresh random value on every sort data update.
pub const RANDOM: &str = "random";

/// A computed sort key value.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    /// Total order: numbers by value, text lexicographically, numbers before text.
    pub fn total_cmp(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            SortValue::Number(n) => Some(*n),
            SortValue::Text(_) => None,
        }
    }
}

impl From<f64> for SortValue {
    fn from(n: f64) -> Self {
        SortValue::Number(n)
    }
}

impl From<i64> for SortValue {
    fn from(n: i64) -> Self {
        SortValue::Number(n as f64)
    }
}

impl From<&str> for SortValue {
    fn from(s: &str) -> Self {
        SortValue::Text(s.to_string())
    }
}

impl From<String> for SortValue {
    fn from(s: String) -> Self {
        SortValue::Text(s)
    }
}

pub type SortExtractor = Rc<dyn Fn(ItemId) -> SortValue>;

enum KeySource {
    OriginalOrder,
    Random,
    Custom(SortExtractor),
}

/// Registered sort keys and the original-order counter.
pub struct SortRegistry {
    keys: Vec<(String, KeySource)>,
    counter: u64,
}

impl SortRegistry {
    /// Registers the custom extractors plus the two built-in keys. The
    /// built-ins take precedence over custom extractors of the same name.
    pub fn new(custom: &[(String, SortExtractor)]) -> Self {
        let mut registry = Self {
            keys: vec![
                (ORIGINAL_ORDER.to_string(), KeySource::OriginalOrder),
                (RANDOM.to_string(), KeySource::Random),
            ],
            counter: 0,
        };
        for (name, extractor) in custom {
            registry.register(name, extractor.clone());
        }
        registry
    }

    pub fn register(&mut self, name: &str, extractor: SortExtractor) {
        if name == ORIGINAL_ORDER || name == RANDOM {
            log::warn!("ignoring custom sort data for built-in key '{}'", name);
            return;
        }
        match self.keys.iter_mut().find(|(key, _)| key == name) {
            Some((_, source)) => *source = KeySource::Custom(extractor),
            None => self.keys.push((name.to_string(), KeySource::Custom(extractor))),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keys.iter().any(|(key, _)| key == name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|(key, _)| key.as_str())
    }

    /// Recomputes every key for `ids`. "original-order" keeps its value unless
    /// `regenerate_original_order` is set or the item has none yet.
    pub fn update(
        &mut self,
        items: &mut ItemCollection,
        ids: &[ItemId],
        regenerate_original_order: bool,
    ) {
        for id in ids {
            let Some(record) = items.get_mut(*id) else {
                continue;
            };
            for (key, source) in &self.keys {
                let value = match source {
                    KeySource::OriginalOrder => {
                        if !regenerate_original_order && record.sort_data.contains_key(key) {
                            continue;
                        }
                        self.counter += 1;
                        SortValue::Number(self.counter as f64)
                    }
                    KeySource::Random => SortValue::Number(rand::random::<f64>()),
                    KeySource::Custom(extractor) => extractor(*id),
                };
                record.sort_data.insert(key.clone(), value);
            }
        }
    }

    /// Orders the filtered set by `key`. Ties fall back to original order and
    /// the direction applies to both comparisons.
    pub fn sort(&self, items: &mut ItemCollection, key: &str, ascending: bool) {
        let direction = |ordering: Ordering| if ascending { ordering } else { ordering.reverse() };
        items.sort_filtered_by(|a, b| {
            let mut ordering = compare_key(a.sort_data.get(key), b.sort_data.get(key));
            if ordering == Ordering::Equal && key != ORIGINAL_ORDER {
                ordering = compare_key(
                    a.sort_data.get(ORIGINAL_ORDER),
                    b.sort_data.get(ORIGINAL_ORDER),
                );
            }
            direction(ordering)
        });
    }
}

fn compare_key(a: Option<&SortValue>, b: Option<&SortValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
