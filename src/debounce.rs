//! Trailing-edge debouncing of resize notifications.

use std::time::Duration;
use tokio::time::Instant;

/// Fires once the notifications have been quiet for `window`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Restarts the quiet window.
    pub fn notify(&mut self) {
        self.deadline = Some(Instant::now() + self.window);
    }

    /// Makes the next poll fire regardless of the window.
    pub fn notify_now(&mut self) {
        self.deadline = Some(Instant::now());
    }

    /// Returns true exactly once per burst, when its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
