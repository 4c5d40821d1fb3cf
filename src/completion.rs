//! Per-pass completion: one signal, several listeners, one awaitable.

use crate::config::LayoutHook;
use brickwork_traits::CompletionSignal;
use brickwork_types::ItemId;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

pub type Callback = Box<dyn FnOnce(&[ItemId])>;

/// Collects everything that must run when a pass completes.
///
/// Turned into a [`CompletionSignal`], so the listeners run once no matter
/// how many sources report the end of the pass.
#[derive(Default)]
pub struct Completion {
    callbacks: Vec<Callback>,
    notify: Option<oneshot::Sender<Vec<ItemId>>>,
}

impl Completion {
    /// A completion paired with the [`Pass`] that resolves when it fires.
    pub fn new() -> (Self, Pass) {
        let (tx, rx) = oneshot::channel();
        let completion = Self {
            callbacks: Vec::new(),
            notify: Some(tx),
        };
        (completion, Pass::new(rx))
    }

    /// A completion nobody awaits.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn then(mut self, callback: impl FnOnce(&[ItemId]) + 'static) -> Self {
        self.callbacks.push(Box::new(callback));
        self
    }

    pub fn then_boxed(mut self, callback: Option<Callback>) -> Self {
        if let Some(callback) = callback {
            self.callbacks.push(callback);
        }
        self
    }

    pub fn hook(self, hook: Option<&LayoutHook>) -> Self {
        match hook {
            Some(hook) => {
                let hook = Rc::clone(hook);
                self.then(move |items| hook(items))
            }
            None => self,
        }
    }

    /// Binds the completion to the items of its pass.
    pub fn into_signal(self, items: Vec<ItemId>) -> CompletionSignal {
        let Completion { callbacks, notify } = self;
        CompletionSignal::new(move || {
            for callback in callbacks {
                callback(&items);
            }
            if let Some(tx) = notify {
                // the receiver may have been dropped by a host that does not await
                let _ = tx.send(items);
            }
        })
    }
}

/// Resolves with the laid out items once the pass has completed.
///
/// Resolves to `None` if the pass was dropped without completing, e.g. by
/// `destroy` clearing a pending reveal.
#[derive(Debug)]
pub struct Pass {
    rx: oneshot::Receiver<Vec<ItemId>>,
    done: Option<Option<Vec<ItemId>>>,
}

impl Pass {
    fn new(rx: oneshot::Receiver<Vec<ItemId>>) -> Self {
        Self { rx, done: None }
    }

    /// Non-blocking completion check.
    pub fn is_complete(&mut self) -> bool {
        if self.done.is_some() {
            return true;
        }
        match self.rx.try_recv() {
            Ok(items) => {
                self.done = Some(Some(items));
                true
            }
            Err(oneshot::error::TryRecvError::Closed) => {
                self.done = Some(None);
                true
            }
            Err(oneshot::error::TryRecvError::Empty) => false,
        }
    }

    /// The completed items if the pass has completed.
    pub fn items(&mut self) -> Option<&[ItemId]> {
        if !self.is_complete() {
            return None;
        }
        self.done.as_ref().and_then(|items| items.as_deref())
    }
}

impl Future for Pass {
    type Output = Option<Vec<ItemId>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(done) = self.done.take() {
            return Poll::Ready(done);
        }
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(result) => Poll::Ready(result.ok()),
            Poll::Pending => Poll::Pending,
        }
    }
}
