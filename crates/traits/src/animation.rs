use crate::signal::CompletionSignal;
use brickwork_types::{AnimationOptions, StyleDelta, StyleTarget};

/// A scripted animation engine that tweens styles itself.
pub trait AnimationBackend {
    /// Animates `target` towards `style` and fires `on_finished` when done.
    fn animate(
        &self,
        target: StyleTarget,
        style: &StyleDelta,
        options: &AnimationOptions,
        on_finished: CompletionSignal,
    );
}
