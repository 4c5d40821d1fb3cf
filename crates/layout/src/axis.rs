use crate::engine::ContainerSize;
use crate::segments::SegmentAxis;
use brickwork_types::{Point, Size};

/// Growth direction of a layout.
///
/// `Vertical` layouts stack along y and derive the container height;
/// `Horizontal` layouts are the transposed duals and derive the width.
/// "Main" is the growth direction, "cross" the bounded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    pub fn main(self, size: Size) -> f32 {
        match self {
            Axis::Vertical => size.height,
            Axis::Horizontal => size.width,
        }
    }

    pub fn cross(self, size: Size) -> f32 {
        match self {
            Axis::Vertical => size.width,
            Axis::Horizontal => size.height,
        }
    }

    pub fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Axis::Vertical => Point::new(cross, main),
            Axis::Horizontal => Point::new(main, cross),
        }
    }

    /// Segments laid side by side across the bounded direction.
    pub fn cross_segments(self) -> SegmentAxis {
        match self {
            Axis::Vertical => SegmentAxis::Columns,
            Axis::Horizontal => SegmentAxis::Rows,
        }
    }

    pub fn main_segments(self) -> SegmentAxis {
        match self {
            Axis::Vertical => SegmentAxis::Rows,
            Axis::Horizontal => SegmentAxis::Columns,
        }
    }

    pub fn extent(self, main: f32) -> ContainerSize {
        match self {
            Axis::Vertical => ContainerSize::height(main),
            Axis::Horizontal => ContainerSize::width(main),
        }
    }
}
