//! The lifecycle controller driving every other component.

use crate::collection::{ItemCollection, Visibility};
use crate::completion::{Callback, Completion, Pass};
use crate::config::{Hooks, Options, OptionsPatch, Setting};
use crate::debounce::Debouncer;
use crate::error::{BrickworkError, Result};
use crate::filtering::{FilterStyles, apply_filter};
use crate::sorting::{RANDOM, SortExtractor, SortRegistry};
use crate::style_queue::{FlushEnv, StyleQueue};
use crate::timers::Timers;
use brickwork_layout::{Brick, ContainerSize, LayoutContext, PlacementEngine};
use brickwork_traits::{
    AnimationBackend, CapabilityProbe, InMemorySurface, SelectorEngine, StaticCapabilities,
    Surface,
};
use brickwork_types::{
    ItemId, Point, Positioning, StyleDelta, StyleProperty, StyleTarget,
};
use std::rc::Rc;
use std::time::Duration;
use tokio::time::Instant;

/// Delay between hiding freshly inserted items and revealing them.
pub const REVEAL_DELAY: Duration = Duration::from_millis(10);
/// Quiet period after the last resize notification before recomputing.
pub const RESIZE_QUIESCENCE: Duration = Duration::from_millis(100);
/// Marks items that must not animate while an insert is in progress.
pub const NO_TRANSITION_CLASS: &str = "no-transition";

/// The collaborators a container is bound to.
#[derive(Clone)]
pub struct Host {
    pub surface: Rc<dyn Surface>,
    pub selectors: Rc<dyn SelectorEngine>,
    pub capabilities: Rc<dyn CapabilityProbe>,
    /// Scripted animation backend, used when the animation engine asks for one.
    pub animator: Option<Rc<dyn AnimationBackend>>,
}

impl Host {
    pub fn new(
        surface: Rc<dyn Surface>,
        selectors: Rc<dyn SelectorEngine>,
        capabilities: Rc<dyn CapabilityProbe>,
    ) -> Self {
        Self {
            surface,
            selectors,
            capabilities,
            animator: None,
        }
    }

    pub fn with_animator(mut self, animator: Rc<dyn AnimationBackend>) -> Self {
        self.animator = Some(animator);
        self
    }

    /// A host whose surface also answers selector queries.
    pub fn in_memory(surface: Rc<InMemorySurface>, capabilities: StaticCapabilities) -> Self {
        Self::new(surface.clone(), surface, Rc::new(capabilities))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Initialized,
    /// Re-entered by every completed layout pass.
    LaidOut,
}

enum Deferred {
    MarkActive,
    Insert {
        items: Vec<ItemId>,
        completion: Completion,
    },
    Reveal {
        items: Vec<ItemId>,
        completion: Completion,
    },
}

/// A laid out container.
///
/// All work happens on the caller's thread. Deferred steps (the container
/// class, insert reveals, debounced resizes) run when the host calls
/// [`Brickwork::run_pending`] or awaits [`Brickwork::settle`].
pub struct Brickwork {
    host: Host,
    options: Options,
    hooks: Hooks,
    lifecycle: Lifecycle,
    items: ItemCollection,
    sorter: SortRegistry,
    engine: PlacementEngine,
    queue: StyleQueue,
    offset: Point,
    original_container_style: StyleDelta,
    using_script_animation: bool,
    using_transforms: bool,
    inserting: bool,
    timers: Timers<Deferred>,
    resize: Debouncer,
    listening: bool,
    container: ContainerSize,
}

impl Brickwork {
    pub fn new(host: Host) -> Self {
        let options = Options::default();
        Self {
            engine: PlacementEngine::new(options.layout_mode, options.segment_options(options.layout_mode)),
            host,
            options,
            hooks: Hooks::default(),
            lifecycle: Lifecycle::Uninitialized,
            items: ItemCollection::new(),
            sorter: SortRegistry::new(&[]),
            queue: StyleQueue::new(),
            offset: Point::zero(),
            original_container_style: StyleDelta::default(),
            using_script_animation: false,
            using_transforms: false,
            inserting: false,
            timers: Timers::new(),
            resize: Debouncer::new(RESIZE_QUIESCENCE),
            listening: false,
            container: ContainerSize::default(),
        }
    }

    /// Captures the container's children and lays them out.
    ///
    /// Calling it again on an initialized container merges the settings of
    /// `options` that differ from the defaults, see [`Brickwork::reinitialize`].
    pub fn initialize(
        &mut self,
        options: Options,
        hooks: Hooks,
        on_done: Option<Callback>,
    ) -> Result<Pass> {
        if self.lifecycle != Lifecycle::Uninitialized {
            return self.reinitialize(OptionsPatch::changed_from_default(options), hooks, on_done);
        }

        let sorter = SortRegistry::new(&hooks.get_sort_data);
        if !sorter.contains(&options.sort_by) {
            return Err(BrickworkError::UnknownSortKey(options.sort_by).report());
        }

        let mode = options.layout_mode;
        self.engine = PlacementEngine::new(mode, options.segment_options(mode));
        self.sorter = sorter;
        self.options = options;
        self.hooks = hooks;
        self.create();
        self.lifecycle = Lifecycle::Initialized;
        log::info!(
            "initialized {} layout with {} items",
            self.options.layout_mode,
            self.items.len()
        );
        self.arrange(on_done)
    }

    /// Merges `patch` into the options of an initialized container,
    /// registers the new hooks and re-arranges. Nothing changes when the
    /// patch names an unknown sort key.
    pub fn reinitialize(
        &mut self,
        patch: OptionsPatch,
        hooks: Hooks,
        on_done: Option<Callback>,
    ) -> Result<Pass> {
        self.require("initialize")?;
        if let Some(key) = &patch.sort_by
            && !self.sorter.contains(key)
            && !hooks.get_sort_data.iter().any(|(name, _)| name == key)
        {
            return Err(BrickworkError::UnknownSortKey(key.clone()).report());
        }

        for (name, extractor) in &hooks.get_sort_data {
            self.sorter.register(name, extractor.clone());
        }
        if !hooks.get_sort_data.is_empty() {
            let all = self.items.all().to_vec();
            self.sorter.update(&mut self.items, &all, false);
        }
        self.reconfigure(patch)?;
        self.merge_hooks(hooks);
        self.arrange(on_done)
    }

    fn create(&mut self) {
        let surface = Rc::clone(&self.host.surface);
        self.original_container_style = surface.current_style(StyleTarget::Container);
        surface.apply_style(StyleTarget::Container, &self.options.container_style);

        self.update_animation_engine();
        self.capture_all();
        self.offset = surface.padding();

        self.timers.schedule(Duration::ZERO, Deferred::MarkActive);
        self.listening = self.options.resizable;
    }

    fn merge_hooks(&mut self, hooks: Hooks) {
        let Hooks {
            get_sort_data,
            on_layout,
            on_animation_complete,
        } = hooks;
        self.hooks.get_sort_data.extend(get_sort_data);
        if on_layout.is_some() {
            self.hooks.on_layout = on_layout;
        }
        if on_animation_complete.is_some() {
            self.hooks.on_animation_complete = on_animation_complete;
        }
    }

    fn require(&self, operation: &str) -> Result<()> {
        if self.lifecycle == Lifecycle::Uninitialized {
            return Err(BrickworkError::NotInitialized {
                operation: operation.to_string(),
            }
            .report());
        }
        Ok(())
    }

    /// Merges `patch` into the options and runs the update step of every
    /// touched setting.
    pub fn reconfigure(&mut self, patch: OptionsPatch) -> Result<()> {
        self.require("option")?;
        if let Some(key) = &patch.sort_by
            && !self.sorter.contains(key)
        {
            return Err(BrickworkError::UnknownSortKey(key.clone()).report());
        }

        for setting in patch.apply(&mut self.options) {
            log::debug!("option changed: {:?}", setting);
            match setting {
                Setting::AnimationEngine => self.update_animation_engine(),
                Setting::TransformsEnabled => self.update_using_transforms(),
                Setting::LayoutMode => {
                    let mode = self.options.layout_mode;
                    self.engine.set_mode(mode, self.options.segment_options(mode));
                }
                Setting::Segments => {
                    let mode = self.engine.mode();
                    self.engine
                        .set_segment_options(self.options.segment_options(mode));
                }
                Setting::Resizable => {
                    self.listening = self.options.resizable;
                    if !self.listening {
                        self.resize.cancel();
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn update_animation_engine(&mut self) {
        let transitions = self.host.capabilities.transitions();
        self.using_script_animation = self.options.animation_engine.is_scripted(transitions);
        if self.using_script_animation && self.host.animator.is_none() {
            log::warn!("scripted animation requested without a backend, styles apply directly");
        }
        self.update_using_transforms();
    }

    fn update_using_transforms(&mut self) {
        let capabilities = &self.host.capabilities;
        self.using_transforms = self.options.transforms_enabled
            && capabilities.transforms()
            && capabilities.transitions()
            && !self.using_script_animation;
        if !self.using_transforms {
            self.options.hidden_style.clear(StyleProperty::Scale);
            self.options.visible_style.clear(StyleProperty::Scale);
        }
    }

    // ---------------------------------------------------------------
    // Capture

    /// Narrows `candidates` to items and gives them the item base style.
    fn select_atoms(&self, candidates: &[ItemId]) -> Vec<ItemId> {
        let atoms = match &self.options.item_selector {
            Some(selector) => {
                let atoms = self.host.selectors.select(candidates, selector);
                if atoms.is_empty() && !candidates.is_empty() {
                    BrickworkError::EmptySelection {
                        selector: selector.clone(),
                    }
                    .report();
                }
                atoms
            }
            None => candidates.to_vec(),
        };

        let mut base = StyleDelta {
            position: Some(Positioning::Absolute),
            ..StyleDelta::default()
        };
        if self.using_transforms {
            base.left = Some(0.0);
            base.top = Some(0.0);
        }
        let surface = &self.host.surface;
        for id in &atoms {
            surface.apply_style(StyleTarget::Item(*id), &base);
            surface.add_class(StyleTarget::Item(*id), &self.options.item_class);
        }
        atoms
    }

    fn capture_all(&mut self) {
        let children = self.host.surface.children();
        let atoms = self.select_atoms(&children);
        self.items.replace_all(atoms.clone());
        for id in &atoms {
            self.items.set_size(*id, self.host.surface.outer_size(*id));
        }
        self.sorter.update(&mut self.items, &atoms, true);
    }

    fn capture_new(&mut self, ids: &[ItemId]) -> Vec<ItemId> {
        let atoms = self.select_atoms(ids);
        let mut added = Vec::with_capacity(atoms.len());
        for id in &atoms {
            added.extend(self.items.insert(&[*id], self.host.surface.outer_size(*id)));
        }
        self.sorter.update(&mut self.items, &added, true);
        added
    }

    /// Adds items to the collection without laying them out. Returns the
    /// ones that were not captured before.
    pub fn add_items(&mut self, ids: &[ItemId]) -> Result<Vec<ItemId>> {
        self.require("addItems")?;
        Ok(self.capture_new(ids))
    }

    /// Re-captures every child of the container. Original order is
    /// regenerated for all of them.
    pub fn reload_items(&mut self) -> Result<()> {
        self.require("reloadItems")?;
        self.capture_all();
        Ok(())
    }

    // ---------------------------------------------------------------
    // Sorting and filtering

    fn filter(&mut self, ids: &[ItemId]) -> Vec<ItemId> {
        let styles = FilterStyles {
            hidden: &self.options.hidden_style,
            visible: &self.options.visible_style,
            hidden_class: &self.options.hidden_class,
        };
        apply_filter(
            self.options.filter.as_ref(),
            ids,
            &mut self.items,
            &*self.host.selectors,
            &*self.host.surface,
            &mut self.queue,
            &styles,
        )
    }

    fn sort(&mut self) {
        self.sorter
            .sort(&mut self.items, &self.options.sort_by, self.options.sort_ascending);
    }

    /// Recomputes the sort keys of `ids`. Original order is kept.
    pub fn update_sort_data(&mut self, ids: &[ItemId]) -> Result<()> {
        self.require("updateSortData")?;
        self.sorter.update(&mut self.items, ids, false);
        Ok(())
    }

    /// Registers a sort key and computes it for every item.
    pub fn add_sort_data(
        &mut self,
        name: &str,
        extractor: impl Fn(ItemId) -> crate::sorting::SortValue + 'static,
    ) -> Result<()> {
        self.require("addSortData")?;
        let extractor: SortExtractor = Rc::new(extractor);
        self.sorter.register(name, extractor.clone());
        self.hooks.get_sort_data.push((name.to_string(), extractor));
        let all = self.items.all().to_vec();
        self.sorter.update(&mut self.items, &all, false);
        Ok(())
    }

    // ---------------------------------------------------------------
    // Layout passes

    fn context(&self) -> LayoutContext {
        let surface = &self.host.surface;
        LayoutContext {
            container: surface.container_size(),
            first_item: self.items.filtered().first().map(|id| surface.outer_size(*id)),
            filtered_count: self.items.filtered().len(),
        }
    }

    /// Filters, sorts and lays out the whole collection.
    pub fn arrange(&mut self, on_done: Option<Callback>) -> Result<Pass> {
        self.require("arrange")?;
        let (completion, pass) = Completion::new();
        self.arrange_with(completion.then_boxed(on_done));
        Ok(pass)
    }

    fn arrange_with(&mut self, completion: Completion) {
        let all = self.items.all().to_vec();
        let matching = self.filter(&all);
        self.items.set_filtered(matching);
        self.sort();
        self.relayout_with(completion);
    }

    /// Resets the strategy and lays out the filtered set again.
    pub fn relayout(&mut self, on_done: Option<Callback>) -> Result<Pass> {
        self.require("reLayout")?;
        let (completion, pass) = Completion::new();
        self.relayout_with(completion.then_boxed(on_done));
        Ok(pass)
    }

    fn relayout_with(&mut self, completion: Completion) {
        let ctx = self.context();
        self.engine.reset(&ctx);
        let filtered = self.items.filtered().to_vec();
        self.lay_out(&filtered, completion);
    }

    /// Places `ids` continuing from the current strategy state.
    pub fn layout(&mut self, ids: &[ItemId], on_done: Option<Callback>) -> Result<Pass> {
        self.require("layout")?;
        let (completion, pass) = Completion::new();
        self.lay_out(ids, completion.then_boxed(on_done));
        Ok(pass)
    }

    fn lay_out(&mut self, ids: &[ItemId], completion: Completion) {
        let ctx = self.context();
        let bricks: Vec<Brick> = ids
            .iter()
            .filter(|id| self.items.contains(**id))
            .map(|id| Brick {
                id: *id,
                size: self.host.surface.outer_size(*id),
            })
            .collect();
        for brick in &bricks {
            self.items.set_size(brick.id, brick.size);
        }

        for placement in self.engine.place(&ctx, &bricks) {
            self.push_position(placement.id, placement.position);
        }

        if self.options.resizes_container {
            self.container = self.engine.container_size(&ctx);
            let style = StyleDelta {
                width: self.container.width,
                height: self.container.height,
                ..StyleDelta::default()
            };
            self.queue.enqueue(vec![StyleTarget::Container], style);
        }

        log::debug!(
            "laid out {} items in {} mode",
            bricks.len(),
            self.engine.mode()
        );
        self.process_queue(ids, completion);
        self.lifecycle = Lifecycle::LaidOut;
    }

    fn push_position(&mut self, id: ItemId, position: Point) {
        let position = (position + self.offset).round();
        let style = if self.using_transforms {
            StyleDelta::translate(position.x, position.y)
        } else {
            StyleDelta::offset(position.x, position.y)
        };
        self.queue.enqueue_items(&[id], style);
        if self.options.item_position_data_enabled {
            self.items.set_position(id, position);
        }
    }

    fn process_queue(&mut self, ids: &[ItemId], completion: Completion) {
        let signal = completion
            .hook(self.hooks.on_layout.as_ref())
            .hook(self.hooks.on_animation_complete.as_ref())
            .into_signal(ids.to_vec());

        let items = &self.items;
        let no_transition = |id: ItemId| items.visibility(id) == Some(Visibility::Inserting);
        let animator = if self.using_script_animation {
            self.host.animator.as_deref()
        } else {
            None
        };
        let env = FlushEnv {
            surface: &*self.host.surface,
            animator,
            engine: self.options.animation_engine,
            transitions: self.host.capabilities.transitions(),
            animation: &self.options.animation_options,
            laid_out: self.lifecycle == Lifecycle::LaidOut,
            inserting: self.inserting,
            no_transition: &no_transition,
        };
        self.queue.flush(&env, signal);
    }

    // ---------------------------------------------------------------
    // Adding and removing

    /// Appends `ids` to the container, then hides, positions and reveals them.
    ///
    /// The ids join the collection at once; filtering and layout run on the
    /// next tick and the reveal [`REVEAL_DELAY`] later. The pass completes
    /// with the reveal.
    pub fn insert(&mut self, ids: &[ItemId], on_done: Option<Callback>) -> Result<Pass> {
        self.require("insert")?;
        self.host.surface.append(ids);
        let added = self.capture_new(ids);
        let (completion, pass) = Completion::new();
        self.timers.schedule(
            Duration::ZERO,
            Deferred::Insert {
                items: added,
                completion: completion.then_boxed(on_done),
            },
        );
        Ok(pass)
    }

    /// For items the host already attached: hides them, lays out only them
    /// and reveals them after [`REVEAL_DELAY`].
    pub fn appended(&mut self, ids: &[ItemId], on_done: Option<Callback>) -> Result<Pass> {
        self.require("appended")?;
        let added = self.capture_new(ids);
        self.hide_appended(&added);
        self.lay_out(&added, Completion::detached());
        let (completion, pass) = Completion::new();
        self.timers.schedule(
            REVEAL_DELAY,
            Deferred::Reveal {
                items: added,
                completion: completion.then_boxed(on_done),
            },
        );
        Ok(pass)
    }

    fn run_insert(&mut self, added: Vec<ItemId>, completion: Completion) {
        let matching = self.filter(&added);
        self.hide_appended(&matching);
        self.sort();
        self.relayout_with(Completion::detached());
        self.timers.schedule(
            REVEAL_DELAY,
            Deferred::Reveal {
                items: matching,
                completion,
            },
        );
    }

    fn hide_appended(&mut self, ids: &[ItemId]) {
        self.items.extend_filtered(ids);
        for id in ids {
            self.items.set_visibility(*id, Visibility::Inserting);
            self.host
                .surface
                .add_class(StyleTarget::Item(*id), NO_TRANSITION_CLASS);
        }
        self.inserting = true;
        self.queue
            .enqueue_items(ids, self.options.hidden_style.clone());
    }

    fn reveal(&mut self, ids: Vec<ItemId>, completion: Completion) {
        let ids: Vec<ItemId> = ids.into_iter().filter(|id| self.items.contains(*id)).collect();
        for id in &ids {
            if self.items.visibility(*id) == Some(Visibility::Inserting) {
                self.items.set_visibility(*id, Visibility::Visible);
            }
            self.host
                .surface
                .remove_class(StyleTarget::Item(*id), NO_TRANSITION_CLASS);
        }
        self.queue
            .enqueue_items(&ids, self.options.visible_style.clone());
        self.inserting = false;
        self.process_queue(&ids, completion);
    }

    /// Drops `ids` from the collection. Visible ones fade out with a
    /// relayout and are detached once it completes; if all of them were
    /// hidden they are detached at once.
    pub fn remove(&mut self, ids: &[ItemId], on_done: Option<Callback>) -> Result<Pass> {
        self.require("remove")?;
        let any_visible = ids
            .iter()
            .any(|id| matches!(self.items.visibility(*id), Some(v) if v != Visibility::Hidden));
        self.items.remove(ids);

        let surface = Rc::clone(&self.host.surface);
        let detached = ids.to_vec();
        let (completion, pass) = Completion::new();
        let completion = completion
            .then(move |_| surface.detach(&detached))
            .then_boxed(on_done);

        if any_visible {
            self.queue
                .enqueue_items(ids, self.options.hidden_style.clone());
            self.sort();
            self.relayout_with(completion);
        } else {
            completion.into_signal(Vec::new()).fire();
        }
        Ok(pass)
    }

    /// Sorts by fresh random values and lays out again. `sortBy` stays
    /// "random" afterwards.
    pub fn shuffle(&mut self, on_done: Option<Callback>) -> Result<Pass> {
        self.require("shuffle")?;
        let all = self.items.all().to_vec();
        self.sorter.update(&mut self.items, &all, false);
        self.options.sort_by = RANDOM.to_string();
        self.sort();
        let (completion, pass) = Completion::new();
        self.relayout_with(completion.then_boxed(on_done));
        Ok(pass)
    }

    // ---------------------------------------------------------------
    // Resizing and scheduling

    /// Lays out again if the container change invalidates the arrangement.
    pub fn resize(&mut self) -> Result<Option<Pass>> {
        self.require("resize")?;
        let ctx = self.context();
        if !self.engine.resize_changed(&ctx) {
            log::trace!("resize keeps the current arrangement");
            return Ok(None);
        }
        let (completion, pass) = Completion::new();
        self.relayout_with(completion);
        Ok(Some(pass))
    }

    /// Reports a raw resize event. Recomputation runs once the events have
    /// been quiet for [`RESIZE_QUIESCENCE`].
    pub fn notify_resize(&mut self) {
        if self.listening {
            self.resize.notify();
        }
    }

    /// Schedules a resize check for the next [`Brickwork::run_pending`].
    pub fn notify_resize_now(&mut self) {
        if self.listening {
            self.resize.notify_now();
        }
    }

    /// Runs every deferred step that is due. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        loop {
            let now = Instant::now();
            let due = self.timers.take_due(now);
            let resize_due = self.resize.poll(now);
            if due.is_empty() && !resize_due {
                break;
            }
            for task in due {
                self.run_deferred(task);
                ran += 1;
            }
            if resize_due && self.listening && self.resize().is_ok() {
                ran += 1;
            }
        }
        ran
    }

    fn run_deferred(&mut self, task: Deferred) {
        match task {
            Deferred::MarkActive => self
                .host
                .surface
                .add_class(StyleTarget::Container, &self.options.container_class),
            Deferred::Insert { items, completion } => self.run_insert(items, completion),
            Deferred::Reveal { items, completion } => self.reveal(items, completion),
        }
    }

    /// The earliest deadline of any deferred step.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.timers.next_deadline(), self.resize.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Sleeps until every deferred step has run.
    pub async fn settle(&mut self) {
        loop {
            self.run_pending();
            match self.next_deadline() {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => break,
            }
        }
    }

    // ---------------------------------------------------------------
    // Teardown

    /// Reverts every engine-applied style and class and forgets all items.
    pub fn destroy(&mut self) -> Result<()> {
        self.require("destroy")?;
        let surface = Rc::clone(&self.host.surface);

        let mut item_properties = vec![
            StyleProperty::Position,
            StyleProperty::Top,
            StyleProperty::Left,
            StyleProperty::Opacity,
        ];
        if self.using_transforms {
            item_properties.push(StyleProperty::Transform);
        }
        for id in self.items.all() {
            let target = StyleTarget::Item(*id);
            surface.remove_class(target, &self.options.hidden_class);
            surface.remove_class(target, &self.options.item_class);
            surface.remove_class(target, NO_TRANSITION_CLASS);
            surface.clear_style(target, &item_properties);
        }

        let mut container_properties = vec![StyleProperty::Width, StyleProperty::Height];
        container_properties.extend(self.options.container_style.properties());
        surface.clear_style(StyleTarget::Container, &container_properties);
        surface.apply_style(StyleTarget::Container, &self.original_container_style);
        surface.remove_class(StyleTarget::Container, &self.options.container_class);

        self.listening = false;
        self.resize.cancel();
        self.timers.clear();
        self.queue.clear();
        self.items.clear();
        self.inserting = false;
        self.container = ContainerSize::default();
        let mode = self.options.layout_mode;
        self.engine = PlacementEngine::new(mode, self.options.segment_options(mode));
        self.lifecycle = Lifecycle::Uninitialized;
        log::info!("destroyed {} layout", mode);
        Ok(())
    }

    // ---------------------------------------------------------------
    // Accessors

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn items(&self) -> &[ItemId] {
        self.items.all()
    }

    pub fn filtered(&self) -> &[ItemId] {
        self.items.filtered()
    }

    pub fn collection(&self) -> &ItemCollection {
        &self.items
    }

    /// Last placed position including the padding offset. Only recorded
    /// when `itemPositionDataEnabled` is set.
    pub fn item_position(&self, id: ItemId) -> Option<Point> {
        self.items.position(id)
    }

    /// The container size derived by the last completed pass.
    pub fn container_size(&self) -> ContainerSize {
        self.container
    }

    pub fn uses_transforms(&self) -> bool {
        self.using_transforms
    }

    pub fn uses_script_animation(&self) -> bool {
        self.using_script_animation
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }
}
