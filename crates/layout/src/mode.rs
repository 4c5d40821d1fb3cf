use crate::LayoutError;
use crate::axis::Axis;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The placement strategy a container uses.
///
/// Each vertical mode has a horizontal dual with the axes swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum LayoutMode {
    #[default]
    Masonry,
    FitRows,
    CellsByRow,
    StraightDown,
    MasonryHorizontal,
    FitColumns,
    CellsByColumn,
    StraightAcross,
}

/// The algorithm family a mode belongs to, independent of orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Masonry,
    Flow,
    Cells,
    Straight,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 8] = [
        LayoutMode::Masonry,
        LayoutMode::FitRows,
        LayoutMode::CellsByRow,
        LayoutMode::StraightDown,
        LayoutMode::MasonryHorizontal,
        LayoutMode::FitColumns,
        LayoutMode::CellsByColumn,
        LayoutMode::StraightAcross,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Masonry => "masonry",
            LayoutMode::FitRows => "fitRows",
            LayoutMode::CellsByRow => "cellsByRow",
            LayoutMode::StraightDown => "straightDown",
            LayoutMode::MasonryHorizontal => "masonryHorizontal",
            LayoutMode::FitColumns => "fitColumns",
            LayoutMode::CellsByColumn => "cellsByColumn",
            LayoutMode::StraightAcross => "straightAcross",
        }
    }

    /// The direction the container grows in.
    pub fn axis(&self) -> Axis {
        match self {
            LayoutMode::Masonry
            | LayoutMode::FitRows
            | LayoutMode::CellsByRow
            | LayoutMode::StraightDown => Axis::Vertical,
            LayoutMode::MasonryHorizontal
            | LayoutMode::FitColumns
            | LayoutMode::CellsByColumn
            | LayoutMode::StraightAcross => Axis::Horizontal,
        }
    }

    pub fn family(&self) -> Family {
        match self {
            LayoutMode::Masonry | LayoutMode::MasonryHorizontal => Family::Masonry,
            LayoutMode::FitRows | LayoutMode::FitColumns => Family::Flow,
            LayoutMode::CellsByRow | LayoutMode::CellsByColumn => Family::Cells,
            LayoutMode::StraightDown | LayoutMode::StraightAcross => Family::Straight,
        }
    }
}

impl FromStr for LayoutMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| LayoutError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
