use crate::axis::Axis;
use crate::segments::Segments;
use brickwork_types::{Point, Size};

/// A uniform grid. The n-th brick goes to the n-th cell in reading order
/// along the cross direction and is centred inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct CellsState {
    axis: Axis,
    index: usize,
    cross: Segments,
    main: Segments,
}

impl CellsState {
    /// `cross` are the cells of one line, `main` the line size.
    pub fn new(axis: Axis, cross: Segments, main: Segments) -> Self {
        Self {
            axis,
            index: 0,
            cross,
            main,
        }
    }

    pub fn place(&mut self, size: Size) -> Point {
        let per_line = self.cross.count.max(1);
        let cross_cell = (self.index % per_line) as f32;
        let main_cell = (self.index / per_line) as f32;

        let cross = (cross_cell + 0.5) * self.cross.size - self.axis.cross(size) / 2.0;
        let main = (main_cell + 0.5) * self.main.size - self.axis.main(size) / 2.0;

        self.index += 1;
        self.axis.point(main, cross)
    }

    /// Lines needed for `count` bricks times the line size.
    pub fn extent(&self, count: usize) -> f32 {
        let lines = count.div_ceil(self.cross.count.max(1));
        lines as f32 * self.main.size
    }
}
