//! Engine options, partial updates and the function-valued hooks.

use crate::error::BrickworkError;
use crate::sorting::{ORIGINAL_ORDER, SortExtractor};
use brickwork_layout::{LayoutMode, SegmentOptions};
use brickwork_traits::SelectorEngine;
use brickwork_types::{AnimationOptions, ItemId, Overflow, Positioning, StyleDelta};
use serde::Deserialize;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// How a flush applies its styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum AnimationEngine {
    /// Native transitions when the host has them, a scripted backend otherwise.
    #[default]
    BestAvailable,
    Css,
    None,
    Scripted,
}

impl AnimationEngine {
    /// Whether positions are animated by the scripted backend.
    pub fn is_scripted(self, transitions: bool) -> bool {
        match self {
            AnimationEngine::BestAvailable => !transitions,
            AnimationEngine::Css | AnimationEngine::None => false,
            AnimationEngine::Scripted => true,
        }
    }
}

impl FromStr for AnimationEngine {
    type Err = BrickworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "bestavailable" => Ok(AnimationEngine::BestAvailable),
            "css" => Ok(AnimationEngine::Css),
            "none" => Ok(AnimationEngine::None),
            "jquery" | "scripted" => Ok(AnimationEngine::Scripted),
            _ => Err(BrickworkError::UnknownAnimationEngine(s.to_string())),
        }
    }
}

impl TryFrom<String> for AnimationEngine {
    type Error = BrickworkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

pub type FilterPredicate = Rc<dyn Fn(ItemId) -> bool>;

/// The rule deciding which items are eligible for display.
#[derive(Clone, Deserialize)]
#[serde(from = "String")]
pub enum Filter {
    All,
    Selector(String),
    Predicate(FilterPredicate),
}

impl Filter {
    pub fn selector(selector: impl Into<String>) -> Self {
        Filter::from(selector.into())
    }

    pub fn predicate(predicate: impl Fn(ItemId) -> bool + 'static) -> Self {
        Filter::Predicate(Rc::new(predicate))
    }

    pub fn matches(&self, id: ItemId, selectors: &dyn SelectorEngine) -> bool {
        match self {
            Filter::All => true,
            Filter::Selector(selector) => selectors.matches(id, selector),
            Filter::Predicate(predicate) => predicate(id),
        }
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        match value.trim() {
            "" | "*" => Filter::All,
            selector => Filter::Selector(selector.to_string()),
        }
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        Filter::from(value.to_string())
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("All"),
            Filter::Selector(s) => f.debug_tuple("Selector").field(s).finish(),
            Filter::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    pub resizable: bool,
    pub layout_mode: LayoutMode,
    pub item_selector: Option<String>,
    pub filter: Option<Filter>,
    pub sort_by: String,
    pub sort_ascending: bool,
    pub container_class: String,
    pub item_class: String,
    pub hidden_class: String,
    pub hidden_style: StyleDelta,
    pub visible_style: StyleDelta,
    pub container_style: StyleDelta,
    pub animation_engine: AnimationEngine,
    pub animation_options: AnimationOptions,
    pub resizes_container: bool,
    pub transforms_enabled: bool,
    pub item_position_data_enabled: bool,
    pub masonry: SegmentOptions,
    pub masonry_horizontal: SegmentOptions,
    pub cells_by_row: SegmentOptions,
    pub cells_by_column: SegmentOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            resizable: true,
            layout_mode: LayoutMode::Masonry,
            item_selector: None,
            filter: None,
            sort_by: ORIGINAL_ORDER.to_string(),
            sort_ascending: true,
            container_class: "brickwork".to_string(),
            item_class: "brickwork-item".to_string(),
            hidden_class: "brickwork-hidden".to_string(),
            hidden_style: StyleDelta::new().opacity(0.0).scale(0.001),
            visible_style: StyleDelta::new().opacity(1.0).scale(1.0),
            container_style: StyleDelta {
                position: Some(Positioning::Relative),
                overflow: Some(Overflow::Hidden),
                ..StyleDelta::default()
            },
            animation_engine: AnimationEngine::BestAvailable,
            animation_options: AnimationOptions::default(),
            resizes_container: true,
            transforms_enabled: true,
            item_position_data_enabled: false,
            masonry: SegmentOptions::default(),
            masonry_horizontal: SegmentOptions::default(),
            cells_by_row: SegmentOptions::default(),
            cells_by_column: SegmentOptions::default(),
        }
    }
}

impl Options {
    pub fn from_json(json: &str) -> Result<Self, BrickworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Segment settings of the given mode. Flow and straight modes have none.
    pub fn segment_options(&self, mode: LayoutMode) -> SegmentOptions {
        match mode {
            LayoutMode::Masonry => self.masonry,
            LayoutMode::MasonryHorizontal => self.masonry_horizontal,
            LayoutMode::CellsByRow => self.cells_by_row,
            LayoutMode::CellsByColumn => self.cells_by_column,
            _ => SegmentOptions::default(),
        }
    }
}

/// A setting touched by an [`OptionsPatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    Resizable,
    LayoutMode,
    Segments,
    ItemSelector,
    Filter,
    SortBy,
    SortAscending,
    Classes,
    HiddenStyle,
    VisibleStyle,
    ContainerStyle,
    AnimationEngine,
    AnimationOptions,
    ResizesContainer,
    TransformsEnabled,
    ItemPositionDataEnabled,
}

/// A partial update of [`Options`]. Style maps merge into the current ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsPatch {
    pub resizable: Option<bool>,
    pub layout_mode: Option<LayoutMode>,
    pub item_selector: Option<String>,
    pub filter: Option<Filter>,
    pub sort_by: Option<String>,
    pub sort_ascending: Option<bool>,
    pub container_class: Option<String>,
    pub item_class: Option<String>,
    pub hidden_class: Option<String>,
    pub hidden_style: Option<StyleDelta>,
    pub visible_style: Option<StyleDelta>,
    pub container_style: Option<StyleDelta>,
    pub animation_engine: Option<AnimationEngine>,
    pub animation_options: Option<AnimationOptions>,
    pub resizes_container: Option<bool>,
    pub transforms_enabled: Option<bool>,
    pub item_position_data_enabled: Option<bool>,
    pub masonry: Option<SegmentOptions>,
    pub masonry_horizontal: Option<SegmentOptions>,
    pub cells_by_row: Option<SegmentOptions>,
    pub cells_by_column: Option<SegmentOptions>,
}

impl OptionsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, BrickworkError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_sort_by(mut self, key: impl Into<String>) -> Self {
        self.sort_by = Some(key.into());
        self
    }

    pub fn with_layout_mode(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = Some(mode);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.changes().is_empty()
    }

    /// Settings this patch touches, in application order.
    pub fn changes(&self) -> Vec<Setting> {
        let mut changes = Vec::new();
        let mut touch = |present: bool, setting: Setting| {
            if present && !changes.contains(&setting) {
                changes.push(setting);
            }
        };
        touch(self.resizable.is_some(), Setting::Resizable);
        touch(self.layout_mode.is_some(), Setting::LayoutMode);
        touch(
            self.masonry.is_some()
                || self.masonry_horizontal.is_some()
                || self.cells_by_row.is_some()
                || self.cells_by_column.is_some(),
            Setting::Segments,
        );
        touch(self.item_selector.is_some(), Setting::ItemSelector);
        touch(self.filter.is_some(), Setting::Filter);
        touch(self.sort_by.is_some(), Setting::SortBy);
        touch(self.sort_ascending.is_some(), Setting::SortAscending);
        touch(
            self.container_class.is_some()
                || self.item_class.is_some()
                || self.hidden_class.is_some(),
            Setting::Classes,
        );
        touch(self.hidden_style.is_some(), Setting::HiddenStyle);
        touch(self.visible_style.is_some(), Setting::VisibleStyle);
        touch(self.container_style.is_some(), Setting::ContainerStyle);
        touch(self.animation_engine.is_some(), Setting::AnimationEngine);
        touch(self.animation_options.is_some(), Setting::AnimationOptions);
        touch(self.resizes_container.is_some(), Setting::ResizesContainer);
        touch(self.transforms_enabled.is_some(), Setting::TransformsEnabled);
        touch(
            self.item_position_data_enabled.is_some(),
            Setting::ItemPositionDataEnabled,
        );
        changes
    }

    /// Merges the patch into `options` and returns the touched settings.
    pub fn apply(self, options: &mut Options) -> Vec<Setting> {
        let changes = self.changes();

        macro_rules! replace {
            ($($field:ident),*) => {
                $(if let Some(value) = self.$field { options.$field = value; })*
            };
        }
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if let Some(value) = &self.$field { options.$field.merge(value); })*
            };
        }

        overlay!(hidden_style, visible_style, container_style);
        replace!(
            resizable,
            layout_mode,
            sort_by,
            sort_ascending,
            container_class,
            item_class,
            hidden_class,
            animation_engine,
            animation_options,
            resizes_container,
            transforms_enabled,
            item_position_data_enabled,
            masonry,
            masonry_horizontal,
            cells_by_row,
            cells_by_column
        );
        if let Some(selector) = self.item_selector {
            options.item_selector = Some(selector);
        }
        if let Some(filter) = self.filter {
            options.filter = Some(filter);
        }
        changes
    }
}

impl OptionsPatch {
    /// The settings of `options` that differ from [`Options::default`].
    /// Unset selector and filter stay unset.
    pub fn changed_from_default(options: Options) -> Self {
        fn changed<T: PartialEq>(value: T, default: T) -> Option<T> {
            (value != default).then_some(value)
        }
        let defaults = Options::default();
        Self {
            resizable: changed(options.resizable, defaults.resizable),
            layout_mode: changed(options.layout_mode, defaults.layout_mode),
            item_selector: options.item_selector,
            filter: options.filter,
            sort_by: changed(options.sort_by, defaults.sort_by),
            sort_ascending: changed(options.sort_ascending, defaults.sort_ascending),
            container_class: changed(options.container_class, defaults.container_class),
            item_class: changed(options.item_class, defaults.item_class),
            hidden_class: changed(options.hidden_class, defaults.hidden_class),
            hidden_style: changed(options.hidden_style, defaults.hidden_style),
            visible_style: changed(options.visible_style, defaults.visible_style),
            container_style: changed(options.container_style, defaults.container_style),
            animation_engine: changed(options.animation_engine, defaults.animation_engine),
            animation_options: changed(options.animation_options, defaults.animation_options),
            resizes_container: changed(options.resizes_container, defaults.resizes_container),
            transforms_enabled: changed(options.transforms_enabled, defaults.transforms_enabled),
            item_position_data_enabled: changed(
                options.item_position_data_enabled,
                defaults.item_position_data_enabled,
            ),
            masonry: changed(options.masonry, defaults.masonry),
            masonry_horizontal: changed(options.masonry_horizontal, defaults.masonry_horizontal),
            cells_by_row: changed(options.cells_by_row, defaults.cells_by_row),
            cells_by_column: changed(options.cells_by_column, defaults.cells_by_column),
        }
    }
}

pub type LayoutHook = Rc<dyn Fn(&[ItemId])>;

/// Function-valued settings. Never serialized.
#[derive(Clone, Default)]
pub struct Hooks {
    pub get_sort_data: Vec<(String, SortExtractor)>,
    /// Runs after every completed layout pass with the laid out items.
    pub on_layout: Option<LayoutHook>,
    /// Runs when the animation of a pass completes.
    pub on_animation_complete: Option<LayoutHook>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_data(
        mut self,
        name: impl Into<String>,
        extractor: impl Fn(ItemId) -> crate::sorting::SortValue + 'static,
    ) -> Self {
        self.get_sort_data.push((name.into(), Rc::new(extractor)));
        self
    }

    pub fn on_layout(mut self, hook: impl Fn(&[ItemId]) + 'static) -> Self {
        self.on_layout = Some(Rc::new(hook));
        self
    }

    pub fn on_animation_complete(mut self, hook: impl Fn(&[ItemId]) + 'static) -> Self {
        self.on_animation_complete = Some(Rc::new(hook));
        self
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.get_sort_data.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("Hooks")
            .field("get_sort_data", &keys)
            .field("on_layout", &self.on_layout.is_some())
            .field("on_animation_complete", &self.on_animation_complete.is_some())
            .finish()
    }
}
