// file: src/api/lifetime.rs
// description: cancellation scoped to a mounted view and the load state it guards

use crate::error::{DashboardError, Result};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;
use tracing::debug;

/// Outcome of a view's one-shot fetch as seen by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result(outcome: Result<T>) -> Self {
        match outcome {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

struct Inner {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Shared flag set when a view goes away. Clones observe the same flag.
#[derive(Clone)]
pub struct ViewLifetime {
    inner: Arc<Inner>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                cancelled: AtomicBool::new(false),
                notify: Notify::new(),
            }),
        }
    }

    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
        self.inner.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once `cancel` has been called.
    pub async fn cancelled(&self) {
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }

    /// Stores `outcome` into `slot` unless the view is gone. Returns whether
    /// the outcome was applied.
    pub fn commit<T>(&self, slot: &mut LoadState<T>, outcome: Result<T>) -> bool {
        if self.is_cancelled() {
            debug!("View unmounted, discarding late fetch result");
            return false;
        }
        *slot = LoadState::from_result(outcome);
        true
    }

    /// Runs `fetch` until it completes or the view is cancelled.
    pub async fn run<T, F>(&self, fetch: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::select! {
            outcome = fetch => outcome,
            _ = self.cancelled() => Err(DashboardError::Fetch("View closed before data arrived".to_string())),
        }
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}
