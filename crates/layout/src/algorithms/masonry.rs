use crate::axis::Axis;
use crate::segments::Segments;
use brickwork_types::{Point, Size};

/// Bin-packing into a fixed number of lanes (columns for the vertical mode,
/// rows for the horizontal one). Each lane tracks how far it has grown.
#[derive(Debug, Clone, PartialEq)]
pub struct MasonryState {
    axis: Axis,
    lane_size: f32,
    lanes: Vec<f32>,
}

impl MasonryState {
    pub fn new(axis: Axis, segments: Segments) -> Self {
        Self {
            axis,
            lane_size: segments.size,
            lanes: vec![0.0; segments.count.max(1)],
        }
    }

    pub fn lanes(&self) -> &[f32] {
        &self.lanes
    }

    /// Number of lanes a brick covers, between one and the lane count.
    fn span(&self, size: Size) -> usize {
        let span = (self.axis.cross(size) / self.lane_size).ceil();
        // NaN (zero-sized brick in a zero-sized lane) casts to 0.
        (span as usize).clamp(1, self.lanes.len())
    }

    pub fn place(&mut self, size: Size) -> Point {
        let span = self.span(size);

        // For a span of one each window is a single lane.
        let windows: Vec<f32> = self
            .lanes
            .windows(span)
            .map(|group| group.iter().copied().fold(f32::MIN, f32::max))
            .collect();
        let (start, offset) = shortest(&windows);

        let end = offset + self.axis.main(size);
        for lane in &mut self.lanes[start..start + span] {
            *lane = end;
        }

        self.axis.point(offset, self.lane_size * start as f32)
    }

    pub fn extent(&self) -> f32 {
        self.lanes.iter().copied().fold(0.0, f32::max)
    }
}

/// Index and value of the minimum, the first one on ties.
fn shortest(values: &[f32]) -> (usize, f32) {
    values
        .iter()
        .copied()
        .enumerate()
        .fold((0, f32::INFINITY), |best, (i, v)| if v < best.1 { (i, v) } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(count: usize, size: f32) -> MasonryState {
        MasonryState::new(Axis::Vertical, Segments { count, size })
    }

    #[test]
    fn test_unit_span_fills_shortest_column() {
        let mut state = columns(3, 100.0);
        let placed: Vec<Point> = [50.0, 80.0, 30.0, 60.0]
            .into_iter()
            .map(|h| state.place(Size::new(100.0, h)))
            .collect();

        assert_eq!(placed[0], Point::new(0.0, 0.0));
        assert_eq!(placed[1], Point::new(100.0, 0.0));
        assert_eq!(placed[2], Point::new(200.0, 0.0));
        // column 2 was the shortest at 30
        assert_eq!(placed[3], Point::new(200.0, 30.0));
        assert_eq!(state.lanes(), &[50.0, 80.0, 90.0]);
        assert_eq!(state.extent(), 90.0);
    }

    #[test]
    fn test_ties_go_to_leftmost_column() {
        let mut state = columns(3, 100.0);
        state.place(Size::new(100.0, 40.0));
        let second = state.place(Size::new(100.0, 40.0));
        let third = state.place(Size::new(100.0, 40.0));
        let fourth = state.place(Size::new(100.0, 10.0));
        assert_eq!(second.x, 100.0);
        assert_eq!(third.x, 200.0);
        assert_eq!(fourth, Point::new(0.0, 40.0));
    }

    #[test]
    fn test_wide_brick_takes_lowest_window() {
        let mut state = columns(3, 100.0);
        state.place(Size::new(100.0, 90.0));
        state.place(Size::new(100.0, 20.0));
        state.place(Size::new(100.0, 50.0));
        // windows: [0,1] -> 90, [1,2] -> 50
        let wide = state.place(Size::new(150.0, 10.0));
        assert_eq!(wide, Point::new(100.0, 50.0));
        assert_eq!(state.lanes(), &[90.0, 60.0, 60.0]);
    }

    #[test]
    fn test_span_is_capped_at_column_count() {
        let mut state = columns(2, 100.0);
        let huge = state.place(Size::new(900.0, 30.0));
        assert_eq!(huge, Point::zero());
        assert_eq!(state.lanes(), &[30.0, 30.0]);
    }

    #[test]
    fn test_horizontal_dual_grows_rows() {
        let mut state = MasonryState::new(Axis::Horizontal, Segments { count: 2, size: 50.0 });
        assert_eq!(state.place(Size::new(70.0, 50.0)), Point::new(0.0, 0.0));
        assert_eq!(state.place(Size::new(30.0, 50.0)), Point::new(0.0, 50.0));
        assert_eq!(state.place(Size::new(10.0, 50.0)), Point::new(30.0, 50.0));
        assert_eq!(state.extent(), 70.0);
    }

    #[test]
    fn test_zero_sized_lanes_do_not_panic() {
        let mut state = columns(1, 0.0);
        assert_eq!(state.place(Size::zero()), Point::zero());
    }
}
