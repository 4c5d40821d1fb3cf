use crate::axis::Axis;
use brickwork_types::{Point, Size};

/// One brick after another along the main direction.
#[derive(Debug, Clone, PartialEq)]
pub struct StraightState {
    axis: Axis,
    cursor: f32,
}

impl StraightState {
    pub fn new(axis: Axis) -> Self {
        Self { axis, cursor: 0.0 }
    }

    pub fn place(&mut self, size: Size) -> Point {
        let position = self.axis.point(self.cursor, 0.0);
        self.cursor += self.axis.main(size);
        position
    }

    pub fn extent(&self) -> f32 {
        self.cursor
    }
}
