use crate::algorithms::{CellsState, FlowState, MasonryState, StraightState};
use crate::mode::{Family, LayoutMode};
use crate::segments::{SegmentCalculator, SegmentOptions};
use brickwork_types::{ItemId, Point, Size};

/// Geometry a pass reads once from the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    pub container: Size,
    /// Outer size of the first item of the filtered set, if any.
    pub first_item: Option<Size>,
    /// Size of the whole filtered set, which may exceed the bricks of one call.
    pub filtered_count: usize,
}

/// One item to lay out with its outer size observed at layout time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    pub id: ItemId,
    pub size: Size,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub id: ItemId,
    pub position: Point,
}

/// The container dimension a strategy derives. Only one side is ever set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerSize {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl ContainerSize {
    pub fn width(width: f32) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    pub fn height(height: f32) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }
}

/// The accumulator of the active strategy. Exactly one variant exists at a
/// time and it is rebuilt by every reset.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutState {
    Masonry(MasonryState),
    Flow(FlowState),
    Cells(CellsState),
    Straight(StraightState),
}

/// Dispatches placement to the strategy selected by a [`LayoutMode`].
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    mode: LayoutMode,
    options: SegmentOptions,
    segments: SegmentCalculator,
    state: Option<LayoutState>,
}

impl PlacementEngine {
    pub fn new(mode: LayoutMode, options: SegmentOptions) -> Self {
        Self {
            mode,
            options,
            segments: SegmentCalculator::new(),
            state: None,
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn state(&self) -> Option<&LayoutState> {
        self.state.as_ref()
    }

    pub fn segments(&self) -> &SegmentCalculator {
        &self.segments
    }

    /// Switches strategy. All state of the previous one is dropped.
    pub fn set_mode(&mut self, mode: LayoutMode, options: SegmentOptions) {
        log::debug!("layout mode {} -> {}", self.mode, mode);
        self.mode = mode;
        self.options = options;
        self.segments.clear();
        self.state = None;
    }

    pub fn set_segment_options(&mut self, options: SegmentOptions) {
        self.options = options;
    }

    pub fn reset(&mut self, ctx: &LayoutContext) {
        let axis = self.mode.axis();
        let state = match self.mode.family() {
            Family::Masonry => {
                let lanes = self.segments.measure(axis.cross_segments(), ctx, &self.options);
                LayoutState::Masonry(MasonryState::new(axis, lanes))
            }
            Family::Flow => LayoutState::Flow(FlowState::new(axis)),
            Family::Cells => {
                let cross = self.segments.measure(axis.cross_segments(), ctx, &self.options);
                let main = self.segments.measure(axis.main_segments(), ctx, &self.options);
                LayoutState::Cells(CellsState::new(axis, cross, main))
            }
            Family::Straight => LayoutState::Straight(StraightState::new(axis)),
        };
        log::debug!("reset {} layout state: {:?}", self.mode, state);
        self.state = Some(state);
    }

    /// Places `bricks` in order, continuing from the current state.
    pub fn place(&mut self, ctx: &LayoutContext, bricks: &[Brick]) -> Vec<Placement> {
        if self.state.is_none() {
            self.reset(ctx);
        }
        let Some(state) = self.state.as_mut() else {
            return Vec::new();
        };

        bricks
            .iter()
            .map(|brick| {
                let position = match &mut *state {
                    LayoutState::Masonry(s) => s.place(brick.size),
                    LayoutState::Flow(s) => s.place(brick.size, ctx.container),
                    LayoutState::Cells(s) => s.place(brick.size),
                    LayoutState::Straight(s) => s.place(brick.size),
                };
                log::trace!("placed {} at ({}, {})", brick.id, position.x, position.y);
                Placement {
                    id: brick.id,
                    position,
                }
            })
            .collect()
    }

    pub fn container_size(&self, ctx: &LayoutContext) -> ContainerSize {
        let axis = self.mode.axis();
        let extent = match &self.state {
            Some(LayoutState::Masonry(s)) => s.extent(),
            Some(LayoutState::Flow(s)) => s.extent(),
            Some(LayoutState::Cells(s)) => s.extent(ctx.filtered_count),
            Some(LayoutState::Straight(s)) => s.extent(),
            None => 0.0,
        };
        axis.extent(extent)
    }

    /// Whether a container resize invalidates the current arrangement.
    ///
    /// Grid strategies only need a new pass when their lane count moves;
    /// flow and straight layouts always do.
    pub fn resize_changed(&mut self, ctx: &LayoutContext) -> bool {
        match self.mode.family() {
            Family::Masonry | Family::Cells => {
                self.segments
                    .changed(self.mode.axis().cross_segments(), ctx, &self.options)
            }
            Family::Flow | Family::Straight => true,
        }
    }
}
