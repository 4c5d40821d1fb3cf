pub mod animation;
pub mod capability;
pub mod memory;
pub mod selector;
pub mod signal;
pub mod surface;

pub use animation::AnimationBackend;
pub use capability::{CapabilityProbe, StaticCapabilities};
pub use memory::{AppliedStyle, InMemoryAnimator, InMemorySurface};
pub use selector::SelectorEngine;
pub use signal::CompletionSignal;
pub use surface::Surface;
