pub mod animation;
pub mod geometry;
pub mod ids;
pub mod style;

pub use animation::AnimationOptions;
pub use geometry::{Point, Size};
pub use ids::{ItemId, StyleTarget};
pub use style::{Overflow, Positioning, StyleDelta, StyleProperty};
