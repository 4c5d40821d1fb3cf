pub mod assertions;
pub mod fixtures;

use brickwork::{
    Brickwork, BrickworkError, Hooks, Host, InMemoryAnimator, InMemorySurface, ItemId, Options,
    Pass, Point, Size, StaticCapabilities, StyleDelta, StyleTarget,
};
use serde_json::Value;
use std::rc::Rc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A container backed by an in-memory surface.
pub struct Harness {
    pub surface: Rc<InMemorySurface>,
    pub animator: Option<Rc<InMemoryAnimator>>,
    pub brickwork: Brickwork,
}

impl Harness {
    /// Builds the surface from a scene fixture (`container`, `padding`, `items`).
    pub fn new(scene: &Value) -> Self {
        Self::build(scene, StaticCapabilities::full(), false)
    }

    pub fn with_capabilities(scene: &Value, capabilities: StaticCapabilities) -> Self {
        Self::build(scene, capabilities, false)
    }

    /// Same as `new` with a scripted animation backend attached.
    pub fn animated(scene: &Value, capabilities: StaticCapabilities) -> Self {
        Self::build(scene, capabilities, true)
    }

    fn build(scene: &Value, capabilities: StaticCapabilities, animated: bool) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let container = size_of(&scene["container"]);
        let padding = &scene["padding"];
        let surface = Rc::new(InMemorySurface::new(container).with_padding(
            padding["x"].as_f64().unwrap_or(0.0) as f32,
            padding["y"].as_f64().unwrap_or(0.0) as f32,
        ));
        for item in scene["items"].as_array().into_iter().flatten() {
            let tags: Vec<&str> = item["tags"]
                .as_array()
                .into_iter()
                .flatten()
                .filter_map(Value::as_str)
                .collect();
            surface.add_item(id(item["id"].as_u64().unwrap()), size_of(item), &tags);
        }

        let mut host = Host::in_memory(surface.clone(), capabilities);
        let animator = animated.then(|| Rc::new(InMemoryAnimator::new(surface.clone())));
        if let Some(animator) = &animator {
            host = host.with_animator(animator.clone());
        }
        Self {
            surface,
            animator,
            brickwork: Brickwork::new(host),
        }
    }

    pub fn init(&mut self, options: Value) -> Result<Pass, BrickworkError> {
        self.init_with(options, Hooks::new())
    }

    pub fn init_with(&mut self, options: Value, hooks: Hooks) -> Result<Pass, BrickworkError> {
        let options = Options::from_json(&options.to_string())?;
        self.brickwork.initialize(options, hooks, None)
    }

    /// The position last applied to an item, whichever representation is used.
    pub fn position(&self, raw: u64) -> Point {
        let style = self.surface.style_of(StyleTarget::Item(id(raw)));
        style.translate.unwrap_or(Point::new(
            style.left.unwrap_or_default(),
            style.top.unwrap_or_default(),
        ))
    }

    pub fn container_style(&self) -> StyleDelta {
        self.surface.style_of(StyleTarget::Container)
    }

    /// How many recorded applications to `raw` carried exactly `style`.
    pub fn applications(&self, raw: u64, style: &StyleDelta) -> usize {
        self.surface
            .log_for(StyleTarget::Item(id(raw)))
            .iter()
            .filter(|applied| &applied.style == style)
            .count()
    }

    pub fn filtered_ids(&self) -> Vec<u64> {
        self.brickwork.filtered().iter().map(|i| i.get()).collect()
    }
}

pub fn id(raw: u64) -> ItemId {
    ItemId::new(raw)
}

pub fn ids(raw: &[u64]) -> Vec<ItemId> {
    raw.iter().copied().map(ItemId::new).collect()
}

fn size_of(value: &Value) -> Size {
    Size::new(
        value["width"].as_f64().unwrap_or(0.0) as f32,
        value["height"].as_f64().unwrap_or(0.0) as f32,
    )
}
