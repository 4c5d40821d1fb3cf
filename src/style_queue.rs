//! Batched style application with a single completion per flush.

use crate::config::AnimationEngine;
use brickwork_traits::{AnimationBackend, CompletionSignal, Surface};
use brickwork_types::{AnimationOptions, ItemId, StyleDelta, StyleTarget};

#[derive(Debug, Clone, PartialEq)]
pub struct StyleQueueEntry {
    pub targets: Vec<StyleTarget>,
    pub style: StyleDelta,
}

/// How a flush applied its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushMode {
    /// Applied synchronously, completion fired at once.
    Immediate,
    /// Handed to the animation backend, completion on its first finish.
    Animated,
    /// Applied with native transitions running, completion on the first transition end.
    Transition,
    /// Insert in progress: items flagged no-transition applied directly, the rest animated.
    Inserting,
}

/// What a flush needs to know about its surroundings.
pub struct FlushEnv<'a> {
    pub surface: &'a dyn Surface,
    /// Present when positions are animated by a scripted backend.
    pub animator: Option<&'a dyn AnimationBackend>,
    pub engine: AnimationEngine,
    pub transitions: bool,
    pub animation: &'a AnimationOptions,
    /// False until the first pass has completed; earlier flushes never animate.
    pub laid_out: bool,
    pub inserting: bool,
    pub no_transition: &'a dyn Fn(ItemId) -> bool,
}

#[derive(Debug, Default)]
pub struct StyleQueue {
    entries: Vec<StyleQueueEntry>,
}

impl StyleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, targets: Vec<StyleTarget>, style: StyleDelta) {
        if targets.is_empty() {
            return;
        }
        self.entries.push(StyleQueueEntry { targets, style });
    }

    pub fn enqueue_items(&mut self, items: &[ItemId], style: StyleDelta) {
        self.enqueue(items.iter().copied().map(StyleTarget::Item).collect(), style);
    }

    pub fn entries(&self) -> &[StyleQueueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Applies every entry in order and drains the queue. `signal` fires
    /// exactly once, either before this returns or when the first awaited
    /// animation or transition reports its end.
    pub fn flush(&mut self, env: &FlushEnv<'_>, signal: CompletionSignal) -> FlushMode {
        let entries = std::mem::take(&mut self.entries);
        let mode = select_mode(env, &entries);
        log::debug!("flushing {} style entries ({:?})", entries.len(), mode);

        let mut awaited = false;
        for entry in &entries {
            for target in &entry.targets {
                match mode {
                    FlushMode::Immediate => env.surface.apply_style(*target, &entry.style),
                    FlushMode::Animated => {
                        animate(env, *target, &entry.style, &signal);
                        awaited = true;
                    }
                    FlushMode::Inserting => {
                        let skip = target.item().is_some_and(|id| (env.no_transition)(id));
                        if skip {
                            env.surface.apply_style(*target, &entry.style);
                        } else {
                            animate(env, *target, &entry.style, &signal);
                            awaited = true;
                        }
                    }
                    FlushMode::Transition => {
                        env.surface.apply_style(*target, &entry.style);
                        env.surface.on_transition_end(*target, signal.clone());
                        awaited = true;
                    }
                }
            }
        }

        if !awaited {
            signal.fire();
        }
        mode
    }
}

fn animate(env: &FlushEnv<'_>, target: StyleTarget, style: &StyleDelta, signal: &CompletionSignal) {
    match env.animator {
        Some(animator) => animator.animate(target, style, env.animation, signal.clone()),
        None => env.surface.apply_style(target, style),
    }
}

fn select_mode(env: &FlushEnv<'_>, entries: &[StyleQueueEntry]) -> FlushMode {
    if !env.laid_out {
        return FlushMode::Immediate;
    }
    if env.animator.is_some() {
        return if env.inserting {
            FlushMode::Inserting
        } else {
            FlushMode::Animated
        };
    }
    // a scripted engine without a backend never waits on native transitions
    if env.engine.is_scripted(env.transitions)
        || !env.transitions
        || env.engine == AnimationEngine::None
    {
        return FlushMode::Immediate;
    }
    // only the first element with a target is inspected
    let probe = entries.iter().find_map(|entry| entry.targets.first());
    match probe {
        Some(target) if !env.surface.transition_duration(*target).is_zero() => {
            FlushMode::Transition
        }
        _ => FlushMode::Immediate,
    }
}
