//! Identity types for the items a container manages.
//!
//! Metadata about an item never lives on the item itself; everything is keyed
//! by [`ItemId`] in side tables owned by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable identifier for one positionable item.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anything a style delta can be applied to: the container or one of its items.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum StyleTarget {
    Container,
    Item(ItemId),
}

impl StyleTarget {
    pub fn item(self) -> Option<ItemId> {
        match self {
            StyleTarget::Item(id) => Some(id),
            StyleTarget::Container => None,
        }
    }
}

impl From<ItemId> for StyleTarget {
    fn from(id: ItemId) -> Self {
        StyleTarget::Item(id)
    }
}

impl fmt::Display for StyleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleTarget::Container => write!(f, "container"),
            StyleTarget::Item(id) => write!(f, "item {}", id),
        }
    }
}
