//! JSON scenes: a container, its items and options, laid out in memory.

use crate::config::{Hooks, Options};
use crate::controller::{Brickwork, Host};
use crate::error::Result;
use brickwork_layout::ContainerSize;
use brickwork_traits::{InMemorySurface, StaticCapabilities, Surface};
use brickwork_types::{ItemId, Point, Size, StyleTarget};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneItem {
    pub id: u64,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub container: Size,
    #[serde(default)]
    pub padding: Point,
    #[serde(default)]
    pub options: Options,
    pub items: Vec<SceneItem>,
    /// Argument-free operations run by name after initialization.
    #[serde(default)]
    pub commands: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedItem {
    pub id: ItemId,
    pub position: Point,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneReport {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub items: Vec<PlacedItem>,
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Lays the scene out and reports where every item ended up, in
    /// display order.
    pub fn run(self) -> Result<SceneReport> {
        let surface = Rc::new(
            InMemorySurface::new(self.container).with_padding(self.padding.x, self.padding.y),
        );
        for item in &self.items {
            let tags: Vec<&str> = item.tags.iter().map(String::as_str).collect();
            surface.add_item(ItemId::new(item.id), Size::new(item.width, item.height), &tags);
        }

        let hidden_class = self.options.hidden_class.clone();
        let mut brickwork = Brickwork::new(Host::in_memory(surface.clone(), StaticCapabilities::full()));
        brickwork.initialize(self.options, Hooks::new(), None)?;
        for command in &self.commands {
            brickwork.call(command)?;
        }
        brickwork.run_pending();

        let ContainerSize { width, height } = brickwork.container_size();
        let items = brickwork
            .filtered()
            .iter()
            .map(|id| {
                let style = surface.current_style(StyleTarget::Item(*id));
                let position = style.translate.unwrap_or(Point::new(
                    style.left.unwrap_or_default(),
                    style.top.unwrap_or_default(),
                ));
                PlacedItem {
                    id: *id,
                    position,
                    hidden: surface.has_class(StyleTarget::Item(*id), &hidden_class),
                }
            })
            .collect();
        Ok(SceneReport {
            width,
            height,
            items,
        })
    }
}
