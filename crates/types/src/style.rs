//! Style deltas: the sparse set of visual properties a layout pass mutates.
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Positioning {
    Static,
    Relative,
    Absolute,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    Visible,
    Hidden,
}

/// Names of individual properties, used when clearing engine-applied styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Position,
    Overflow,
    Left,
    Top,
    Width,
    Height,
    Opacity,
    Scale,
    Transform,
}

/// A sparse style map. `None` fields are left untouched when applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Positioning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate: Option<Point>,
}

impl StyleDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate: Some(Point::new(x, y)),
            ..Self::default()
        }
    }

    pub fn offset(left: f32, top: f32) -> Self {
        Self {
            left: Some(left),
            top: Some(top),
            ..Self::default()
        }
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlays every property set in `other` onto `self`.
    pub fn merge(&mut self, other: &StyleDelta) {
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        overlay!(position, overflow, left, top, width, height, opacity, scale, translate);
    }

    pub fn merged(mut self, other: &StyleDelta) -> Self {
        self.merge(other);
        self
    }

    /// Properties this delta sets. `translate` and `scale` both report `Transform`.
    pub fn properties(&self) -> Vec<StyleProperty> {
        let mut properties = Vec::new();
        let mut set = |present: bool, property: StyleProperty| {
            if present && !properties.contains(&property) {
                properties.push(property);
            }
        };
        set(self.position.is_some(), StyleProperty::Position);
        set(self.overflow.is_some(), StyleProperty::Overflow);
        set(self.left.is_some(), StyleProperty::Left);
        set(self.top.is_some(), StyleProperty::Top);
        set(self.width.is_some(), StyleProperty::Width);
        set(self.height.is_some(), StyleProperty::Height);
        set(self.opacity.is_some(), StyleProperty::Opacity);
        set(self.scale.is_some() || self.translate.is_some(), StyleProperty::Transform);
        properties
    }

    pub fn clear(&mut self, property: StyleProperty) {
        match property {
            StyleProperty::Position => self.position = None,
            StyleProperty::Overflow => self.overflow = None,
            StyleProperty::Left => self.left = None,
            StyleProperty::Top => self.top = None,
            StyleProperty::Width => self.width = None,
            StyleProperty::Height => self.height = None,
            StyleProperty::Opacity => self.opacity = None,
            StyleProperty::Scale => self.scale = None,
            StyleProperty::Transform => {
                self.translate = None;
                self.scale = None;
            }
        }
    }
}
