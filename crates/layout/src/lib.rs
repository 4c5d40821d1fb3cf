use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("no such layout mode '{0}'")]
    UnknownMode(String),
}

pub mod algorithms;
pub mod axis;
pub mod engine;
pub mod mode;
pub mod segments;

pub use self::axis::Axis;
pub use self::engine::{Brick, ContainerSize, LayoutContext, LayoutState, Placement, PlacementEngine};
pub use self::mode::LayoutMode;
pub use self::segments::{SegmentAxis, SegmentCalculator, SegmentOptions, Segments};

// Re-export geometry so strategies and callers agree on one set of types
pub use brickwork_types::{ItemId, Point, Size};
