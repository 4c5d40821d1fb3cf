//! Deferred tasks keyed by deadline.

use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug)]
struct Entry<T> {
    due: Instant,
    seq: u64,
    task: T,
}

/// A queue of tasks that become runnable at a deadline. Tasks with equal
/// deadlines run in scheduling order.
#[derive(Debug)]
pub struct Timers<T> {
    entries: Vec<Entry<T>>,
    seq: u64,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            seq: 0,
        }
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay: Duration, task: T) {
        self.seq += 1;
        self.entries.push(Entry {
            due: Instant::now() + delay,
            seq: self.seq,
            task,
        });
    }

    /// Removes and returns every task due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|entry| entry.due <= now);
        self.entries = pending;
        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.task).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
