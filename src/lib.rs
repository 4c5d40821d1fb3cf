pub mod collection;
pub mod command;
pub mod completion;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod filtering;
pub mod scene;
pub mod sorting;
pub mod style_queue;
pub mod timers;

pub use collection::{ItemCollection, ItemRecord, Visibility};
pub use command::Command;
pub use completion::{Callback, Completion, Pass};
pub use config::{AnimationEngine, Filter, Hooks, LayoutHook, Options, OptionsPatch, Setting};
pub use controller::{Brickwork, Host, Lifecycle, NO_TRANSITION_CLASS, RESIZE_QUIESCENCE, REVEAL_DELAY};
pub use error::{BrickworkError, ErrorKind, Result};
pub use scene::{Scene, SceneReport};
pub use sorting::{ORIGINAL_ORDER, RANDOM, SortExtractor, SortValue};
pub use style_queue::{FlushMode, StyleQueue, StyleQueueEntry};

pub use brickwork_layout::{ContainerSize, LayoutMode, SegmentOptions};
pub use brickwork_traits::{
    AnimationBackend, CapabilityProbe, CompletionSignal, InMemoryAnimator, InMemorySurface,
    SelectorEngine, StaticCapabilities, Surface,
};
pub use brickwork_types::{
    AnimationOptions, ItemId, Overflow, Point, Positioning, Size, StyleDelta, StyleProperty,
    StyleTarget,
};
