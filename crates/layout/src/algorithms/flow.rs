use crate::axis::Axis;
use brickwork_types::{Point, Size};

/// Line-wrapping flow: bricks advance along the bounded direction and wrap
/// to a new line when the next one would overflow the container.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowState {
    axis: Axis,
    cross: f32,
    main: f32,
    extent: f32,
}

impl FlowState {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            cross: 0.0,
            main: 0.0,
            extent: 0.0,
        }
    }

    pub fn place(&mut self, size: Size, container: Size) -> Point {
        let advance = self.axis.cross(size);
        if self.cross != 0.0 && self.cross + advance > self.axis.cross(container) {
            self.cross = 0.0;
            self.main = self.extent;
        }

        let position = self.axis.point(self.main, self.cross);

        self.extent = self.extent.max(self.main + self.axis.main(size));
        self.cross += advance;
        position
    }

    pub fn extent(&self) -> f32 {
        self.extent
    }
}
