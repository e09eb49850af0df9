//! Read-only process introspection for the debug endpoint.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tokio::runtime::Handle;

use super::BackgroundTasks;
use crate::storage::{DatabasePool, PoolStats};

/// Point-in-time introspection values.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub version: String,
    /// Tasks alive on the async runtime.
    pub runtime_tasks: usize,
    /// Worker threads of the async runtime.
    pub runtime_workers: usize,
    /// Tracked background tasks still running.
    pub background_tasks: usize,
    pub database: PoolStats,
    /// Current Unix time in seconds.
    pub timestamp: i64,
}

/// Diagnostics computes every value when read; nothing is cached.
#[derive(Clone)]
pub struct Diagnostics {
    version: String,
    pool: Arc<dyn DatabasePool>,
    tasks: BackgroundTasks,
}

impl Diagnostics {
    pub fn new(version: impl Into<String>, pool: Arc<dyn DatabasePool>, tasks: BackgroundTasks) -> Self {
        Self {
            version: version.into(),
            pool,
            tasks,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let (runtime_tasks, runtime_workers) = Handle::try_current()
            .map(|handle| {
                let metrics = handle.metrics();
                (metrics.num_alive_tasks(), metrics.num_workers())
            })
            .unwrap_or((0, 0));

        Snapshot {
            version: self.version.clone(),
            runtime_tasks,
            runtime_workers,
            background_tasks: self.tasks.len(),
            database: self.pool.stats(),
            timestamp: Utc::now().timestamp(),
        }
    }

    /// Snapshot as a JSON object, for the debug endpoint.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.snapshot())
    }
}
