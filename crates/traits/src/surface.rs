//! The element abstraction the engine reads geometry from and writes styles to.

use crate::signal::CompletionSignal;
use brickwork_types::{ItemId, Point, Size, StyleDelta, StyleProperty, StyleTarget};
use std::time::Duration;

/// A container and the elements inside it.
///
/// Implementations are expected to use interior mutability; the engine only
/// ever holds a shared reference. Geometry reads on detached or unknown items
/// are the implementation's concern.
pub trait Surface {
    /// Direct children of the container, in document order.
    fn children(&self) -> Vec<ItemId>;

    /// Inner size of the container (padding excluded).
    fn container_size(&self) -> Size;

    /// Left/top padding of the container, used as the placement origin.
    fn padding(&self) -> Point;

    /// Outer size of an item, margins included.
    fn outer_size(&self, id: ItemId) -> Size;

    fn current_style(&self, target: StyleTarget) -> StyleDelta;

    fn apply_style(&self, target: StyleTarget, style: &StyleDelta);

    fn clear_style(&self, target: StyleTarget, properties: &[StyleProperty]);

    /// Computed transition duration of the target. Zero means styles apply instantly.
    fn transition_duration(&self, target: StyleTarget) -> Duration;

    /// Registers a one-shot observer for the target's next transition end.
    fn on_transition_end(&self, target: StyleTarget, signal: CompletionSignal);

    fn add_class(&self, target: StyleTarget, class: &str);

    fn remove_class(&self, target: StyleTarget, class: &str);

    fn has_class(&self, target: StyleTarget, class: &str) -> bool;

    /// Attaches items to the container as children.
    fn append(&self, items: &[ItemId]);

    /// Physically removes items from the container.
    fn detach(&self, items: &[ItemId]);
}
