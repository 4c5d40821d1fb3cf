//! The four strategy families. Each state is built by the engine's `reset`
//! and mutated item by item while a pass places bricks.

pub mod cells;
pub mod flow;
pub mod masonry;
pub mod straight;

pub use cells::CellsState;
pub use flow::FlowState;
pub use masonry::MasonryState;
pub use straight::StraightState;
