//! Tracking of in-flight background work.

use std::future::Future;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::{TaskTracker, task_tracker::TaskTrackerToken};
use tracing::{debug, info};

/// Registry of background tasks that shutdown must wait for.
///
/// Tasks register before they start (via [`spawn`](Self::spawn) or
/// [`token`](Self::token)) and deregister when they finish. [`drain`](Self::drain)
/// signals cancellation and blocks until the count reaches zero.
#[derive(Debug, Clone, Default)]
pub struct BackgroundTasks {
    tracker: TaskTracker,
    cancel: CancellationToken,
}

impl BackgroundTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a tracked task on the current runtime.
    pub fn spawn<F>(&self, name: &'static str, task: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        debug!(task = name, "Background task started");
        self.tracker.spawn(async move {
            task.await;
            debug!(task = name, "Background task finished");
        })
    }

    /// Registers work that is not a spawned task. Dropping the token deregisters it.
    pub fn token(&self) -> TaskTrackerToken {
        self.tracker.token()
    }

    /// Cancelled when shutdown begins. Long-running tasks should select on it.
    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Number of tasks still running.
    pub fn len(&self) -> usize {
        self.tracker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracker.is_empty()
    }

    /// Signals cancellation and waits for every registered task to finish.
    pub async fn drain(&self) {
        info!(tasks = self.len(), "Waiting for background tasks");
        self.cancel.cancel();
        self.tracker.close();
        self.tracker.wait().await;
    }
}
