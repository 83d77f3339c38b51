//! Explicit hand-off of work to the UI thread.
//!
//! Background tasks never touch UI state directly: they submit a closure
//! through a [`UiHandle`] and the UI loop drains the queue with
//! [`UiDispatcher::run_pending`] at a point of its choosing.
//!
//! - [`UiHandle::post`] is fire-and-forget.
//! - [`UiHandle::call`] waits for the closure's return value.

use crate::error::{Result, TvError};
use tokio::sync::{mpsc, oneshot};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Receiving end, owned by the UI loop.
#[derive(Debug)]
pub struct UiDispatcher {
    rx: mpsc::UnboundedReceiver<Job>,
    handle: UiHandle,
}

/// Cloneable submitting end, handed to background tasks.
#[derive(Debug, Clone)]
pub struct UiHandle {
    tx: mpsc::UnboundedSender<Job>,
}

impl UiDispatcher {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            rx,
            handle: UiHandle { tx },
        }
    }

    pub fn handle(&self) -> UiHandle {
        self.handle.clone()
    }

    /// Run every job queued so far on the calling thread.  Returns how many
    /// ran.  Never blocks.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.rx.try_recv() {
            job();
            ran += 1;
        }
        ran
    }
}

impl Default for UiDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl UiHandle {
    /// Queue `f` for the UI thread without waiting for it.
    pub fn post<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.tx
            .send(Box::new(f))
            .map_err(|_| TvError::Dispatch("UI dispatcher is gone".into()))
    }

    /// Queue `f` for the UI thread and wait for its result.
    pub async fn call<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        let (done_tx, done_rx) = oneshot::channel();
        self.post(move || {
            let _ = done_tx.send(f());
        })?;
        done_rx
            .await
            .map_err(|_| TvError::Dispatch("UI dispatcher dropped the call".into()))
    }
}
