//! In-memory collaborators.
//!
//! `InMemorySurface` models a container and its items without any rendering:
//! styles are merged into per-target maps and every application is recorded,
//! transition-end observers are held until [`InMemorySurface::finish_transitions`].
//! It works in any environment and backs the engine's own tests.

use crate::animation::AnimationBackend;
use crate::selector::SelectorEngine;
use crate::signal::CompletionSignal;
use crate::surface::Surface;
use brickwork_types::{
    AnimationOptions, ItemId, Point, Size, StyleDelta, StyleProperty, StyleTarget,
};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use std::time::Duration;

/// One recorded style application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedStyle {
    pub target: StyleTarget,
    pub style: StyleDelta,
    pub animated: bool,
}

#[derive(Debug, Default)]
struct Element {
    size: Size,
    tags: BTreeSet<String>,
    classes: BTreeSet<String>,
    style: StyleDelta,
    transition: Duration,
}

#[derive(Debug, Default)]
struct SurfaceState {
    container_size: Size,
    padding: Point,
    container_style: StyleDelta,
    container_classes: BTreeSet<String>,
    children: Vec<ItemId>,
    elements: HashMap<ItemId, Element>,
    log: Vec<AppliedStyle>,
    observers: Vec<(StyleTarget, CompletionSignal)>,
    detached: Vec<ItemId>,
}

#[derive(Debug, Default)]
pub struct InMemorySurface {
    state: RefCell<SurfaceState>,
}

impl InMemorySurface {
    pub fn new(container_size: Size) -> Self {
        let surface = Self::default();
        surface.state.borrow_mut().container_size = container_size;
        surface
    }

    pub fn with_padding(self, left: f32, top: f32) -> Self {
        self.state.borrow_mut().padding = Point::new(left, top);
        self
    }

    /// Adds an attached child with the given outer size and selector tags.
    pub fn add_item(&self, id: ItemId, size: Size, tags: &[&str]) {
        self.create_item(id, size, tags);
        self.state.borrow_mut().children.push(id);
    }

    /// Creates an element that is not yet a child of the container.
    pub fn create_item(&self, id: ItemId, size: Size, tags: &[&str]) {
        let element = Element {
            size,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Element::default()
        };
        self.state.borrow_mut().elements.insert(id, element);
    }

    pub fn set_size(&self, id: ItemId, size: Size) {
        if let Some(element) = self.state.borrow_mut().elements.get_mut(&id) {
            element.size = size;
        }
    }

    pub fn set_container_size(&self, size: Size) {
        self.state.borrow_mut().container_size = size;
    }

    pub fn set_tags(&self, id: ItemId, tags: &[&str]) {
        if let Some(element) = self.state.borrow_mut().elements.get_mut(&id) {
            element.tags = tags.iter().map(|t| t.to_string()).collect();
        }
    }

    /// Sets the transition duration reported for every element.
    pub fn set_transition_duration(&self, duration: Duration) {
        for element in self.state.borrow_mut().elements.values_mut() {
            element.transition = duration;
        }
    }

    pub fn style_of(&self, target: StyleTarget) -> StyleDelta {
        self.current_style(target)
    }

    pub fn log(&self) -> Vec<AppliedStyle> {
        self.state.borrow().log.clone()
    }

    /// Recorded applications for one target, oldest first.
    pub fn log_for(&self, target: StyleTarget) -> Vec<AppliedStyle> {
        self.state
            .borrow()
            .log
            .iter()
            .filter(|entry| entry.target == target)
            .cloned()
            .collect()
    }

    pub fn clear_log(&self) {
        self.state.borrow_mut().log.clear();
    }

    pub(crate) fn record_animated(&self, target: StyleTarget, style: &StyleDelta) {
        self.write_style(target, style, true);
    }

    pub fn pending_transitions(&self) -> usize {
        self.state.borrow().observers.len()
    }

    /// Ends every running transition, firing the observers registered for them.
    pub fn finish_transitions(&self) {
        let observers = std::mem::take(&mut self.state.borrow_mut().observers);
        for (_, signal) in observers {
            signal.fire();
        }
    }

    pub fn is_attached(&self, id: ItemId) -> bool {
        self.state.borrow().children.contains(&id)
    }

    pub fn detached(&self) -> Vec<ItemId> {
        self.state.borrow().detached.clone()
    }

    fn write_style(&self, target: StyleTarget, style: &StyleDelta, animated: bool) {
        let mut state = self.state.borrow_mut();
        match target {
            StyleTarget::Container => state.container_style.merge(style),
            StyleTarget::Item(id) => {
                if let Some(element) = state.elements.get_mut(&id) {
                    element.style.merge(style);
                }
            }
        }
        state.log.push(AppliedStyle {
            target,
            style: style.clone(),
            animated,
        });
    }
}

impl Surface for InMemorySurface {
    fn children(&self) -> Vec<ItemId> {
        self.state.borrow().children.clone()
    }

    fn container_size(&self) -> Size {
        self.state.borrow().container_size
    }

    fn padding(&self) -> Point {
        self.state.borrow().padding
    }

    fn outer_size(&self, id: ItemId) -> Size {
        self.state
            .borrow()
            .elements
            .get(&id)
            .map(|element| element.size)
            .unwrap_or_default()
    }

    fn current_style(&self, target: StyleTarget) -> StyleDelta {
        let state = self.state.borrow();
        match target {
            StyleTarget::Container => state.container_style.clone(),
            StyleTarget::Item(id) => state
                .elements
                .get(&id)
                .map(|element| element.style.clone())
                .unwrap_or_default(),
        }
    }

    fn apply_style(&self, target: StyleTarget, style: &StyleDelta) {
        self.write_style(target, style, false);
    }

    fn clear_style(&self, target: StyleTarget, properties: &[StyleProperty]) {
        let mut state = self.state.borrow_mut();
        let style = match target {
            StyleTarget::Container => Some(&mut state.container_style),
            StyleTarget::Item(id) => state.elements.get_mut(&id).map(|e| &mut e.style),
        };
        if let Some(style) = style {
            for property in properties {
                style.clear(*property);
            }
        }
    }

    fn transition_duration(&self, target: StyleTarget) -> Duration {
        let state = self.state.borrow();
        match target {
            StyleTarget::Container => Duration::ZERO,
            StyleTarget::Item(id) => state
                .elements
                .get(&id)
                .map(|element| element.transition)
                .unwrap_or_default(),
        }
    }

    fn on_transition_end(&self, target: StyleTarget, signal: CompletionSignal) {
        self.state.borrow_mut().observers.push((target, signal));
    }

    fn add_class(&self, target: StyleTarget, class: &str) {
        let mut state = self.state.borrow_mut();
        match target {
            StyleTarget::Container => {
                state.container_classes.insert(class.to_string());
            }
            StyleTarget::Item(id) => {
                if let Some(element) = state.elements.get_mut(&id) {
                    element.classes.insert(class.to_string());
                }
            }
        }
    }

    fn remove_class(&self, target: StyleTarget, class: &str) {
        let mut state = self.state.borrow_mut();
        match target {
            StyleTarget::Container => {
                state.container_classes.remove(class);
            }
            StyleTarget::Item(id) => {
                if let Some(element) = state.elements.get_mut(&id) {
                    element.classes.remove(class);
                }
            }
        }
    }

    fn has_class(&self, target: StyleTarget, class: &str) -> bool {
        let state = self.state.borrow();
        match target {
            StyleTarget::Container => state.container_classes.contains(class),
            StyleTarget::Item(id) => state
                .elements
                .get(&id)
                .is_some_and(|element| element.classes.contains(class)),
        }
    }

    fn append(&self, items: &[ItemId]) {
        let mut state = self.state.borrow_mut();
        for id in items {
            if !state.children.contains(id) {
                state.children.push(*id);
            }
        }
    }

    fn detach(&self, items: &[ItemId]) {
        let mut state = self.state.borrow_mut();
        state.children.retain(|id| !items.contains(id));
        state.detached.extend_from_slice(items);
    }
}

/// Supports `*`, `.tag`, bare `tag` and comma-separated alternatives.
impl SelectorEngine for InMemorySurface {
    fn matches(&self, id: ItemId, selector: &str) -> bool {
        let state = self.state.borrow();
        let Some(element) = state.elements.get(&id) else {
            return false;
        };
        selector.split(',').map(str::trim).any(|part| match part {
            "*" => true,
            "" => false,
            _ => {
                let tag = part.strip_prefix('.').unwrap_or(part);
                element.tags.contains(tag) || element.classes.contains(tag)
            }
        })
    }
}

/// A scripted backend that jumps straight to the final style and holds the
/// completion signals until [`InMemoryAnimator::finish`].
pub struct InMemoryAnimator {
    surface: Rc<InMemorySurface>,
    running: RefCell<Vec<CompletionSignal>>,
    calls: RefCell<Vec<(StyleTarget, AnimationOptions)>>,
}

impl InMemoryAnimator {
    pub fn new(surface: Rc<InMemorySurface>) -> Self {
        Self {
            surface,
            running: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn running(&self) -> usize {
        self.running.borrow().len()
    }

    pub fn calls(&self) -> Vec<(StyleTarget, AnimationOptions)> {
        self.calls.borrow().clone()
    }

    pub fn finish(&self) {
        let running = std::mem::take(&mut *self.running.borrow_mut());
        log::trace!("finishing {} animations", running.len());
        for signal in running {
            signal.fire();
        }
    }
}

impl AnimationBackend for InMemoryAnimator {
    fn animate(
        &self,
        target: StyleTarget,
        style: &StyleDelta,
        options: &AnimationOptions,
        on_finished: CompletionSignal,
    ) {
        self.surface.record_animated(target, style);
        self.calls.borrow_mut().push((target, options.clone()));
        self.running.borrow_mut().push(on_finished);
    }
}
