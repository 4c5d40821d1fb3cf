//! Column and row counts for the grid-based strategies.

use crate::engine::LayoutContext;
use brickwork_types::Size;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentAxis {
    Columns,
    Rows,
}

impl SegmentAxis {
    /// The length of `size` that this kind of segment divides.
    pub fn length(self, size: Size) -> f32 {
        match self {
            SegmentAxis::Columns => size.width,
            SegmentAxis::Rows => size.height,
        }
    }
}

/// Per-mode segment sizes. Unset sizes fall back to the first item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmentOptions {
    pub column_width: Option<f32>,
    pub row_height: Option<f32>,
}

impl SegmentOptions {
    pub fn configured(&self, axis: SegmentAxis) -> Option<f32> {
        match axis {
            SegmentAxis::Columns => self.column_width,
            SegmentAxis::Rows => self.row_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segments {
    pub count: usize,
    pub size: f32,
}

impl Segments {
    /// Resolves the segment size as the configured size, else the first item's
    /// outer length, else the whole container; zero lengths count as unset.
    /// The count is `floor(container / size)`, never less than one.
    pub fn resolve(container: f32, configured: Option<f32>, first_item: Option<f32>) -> Self {
        let size = configured
            .filter(|s| *s > 0.0)
            .or(first_item.filter(|s| *s > 0.0))
            .unwrap_or(container);
        let count = if size > 0.0 {
            (container / size).floor() as usize
        } else {
            1
        };
        Segments {
            count: count.max(1),
            size,
        }
    }
}

/// Remembers the last resolved segments per axis so resizes can be compared.
#[derive(Debug, Clone, Default)]
pub struct SegmentCalculator {
    columns: Option<Segments>,
    rows: Option<Segments>,
}

impl SegmentCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, axis: SegmentAxis) -> Option<Segments> {
        match axis {
            SegmentAxis::Columns => self.columns,
            SegmentAxis::Rows => self.rows,
        }
    }

    pub fn measure(
        &mut self,
        axis: SegmentAxis,
        ctx: &LayoutContext,
        options: &SegmentOptions,
    ) -> Segments {
        let segments = Segments::resolve(
            axis.length(ctx.container),
            options.configured(axis),
            ctx.first_item.map(|size| axis.length(size)),
        );
        match axis {
            SegmentAxis::Columns => self.columns = Some(segments),
            SegmentAxis::Rows => self.rows = Some(segments),
        }
        segments
    }

    /// Re-measures `axis` and reports whether the segment count moved.
    pub fn changed(
        &mut self,
        axis: SegmentAxis,
        ctx: &LayoutContext,
        options: &SegmentOptions,
    ) -> bool {
        let previous = self.get(axis).map(|s| s.count);
        let current = self.measure(axis, ctx, options).count;
        previous != Some(current)
    }

    pub fn clear(&mut self) {
        self.columns = None;
        self.rows = None;
    }
}
