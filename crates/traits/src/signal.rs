//! A single-shot completion primitive.
//!
//! Several independent sources may report that a pass has finished (every
//! animated element, every transition-end observer). The signal runs its
//! action on the first report and absorbs the rest.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Action = Box<dyn FnOnce()>;

#[derive(Clone)]
pub struct CompletionSignal {
    action: Rc<RefCell<Option<Action>>>,
}

impl CompletionSignal {
    pub fn new(action: impl FnOnce() + 'static) -> Self {
        Self {
            action: Rc::new(RefCell::new(Some(Box::new(action)))),
        }
    }

    /// A signal with nothing attached. Firing it only marks it fired.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    /// Runs the action if no clone of this signal has fired yet.
    ///
    /// The action is taken out before it runs, so a re-entrant `fire` from
    /// inside the action is a no-op.
    pub fn fire(&self) {
        let action = self.action.borrow_mut().take();
        if let Some(action) = action {
            action();
        }
    }

    pub fn is_fired(&self) -> bool {
        self.action.borrow().is_none()
    }
}

impl fmt::Debug for CompletionSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionSignal")
            .field("fired", &self.is_fired())
            .finish()
    }
}
