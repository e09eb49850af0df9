//! In-memory pool doubles for tests.

use crate::storage::{DatabasePool, PoolLimits, PoolOpener, PoolStats, StorageError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How the stub pool answers a ping.
#[derive(Debug, Clone, Copy)]
pub(crate) enum PingBehavior {
    Ok,
    Fail,
    Delay(Duration),
}

pub(crate) struct StubPool {
    limits: PoolLimits,
    ping: PingBehavior,
    pings: AtomicUsize,
    closes: AtomicUsize,
}

impl StubPool {
    pub(crate) fn new(limits: PoolLimits, ping: PingBehavior) -> Self {
        Self {
            limits,
            ping,
            pings: AtomicUsize::new(0),
            closes: AtomicUsize::new(0),
        }
    }

    pub(crate) fn ping_count(&self) -> usize {
        self.pings.load(Ordering::SeqCst)
    }

    pub(crate) fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatabasePool for StubPool {
    fn limits(&self) -> PoolLimits {
        self.limits
    }

    fn stats(&self) -> PoolStats {
        PoolStats {
            max_open_connections: self.limits.max_open_conns,
            open_connections: 1,
            in_use: 0,
            idle: 1,
        }
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.pings.fetch_add(1, Ordering::SeqCst);
        match self.ping {
            PingBehavior::Ok => Ok(()),
            PingBehavior::Fail => Err(StorageError::Database(sqlx::Error::PoolTimedOut)),
            PingBehavior::Delay(delay) => {
                tokio::time::sleep(delay).await;
                Ok(())
            }
        }
    }

    async fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Records every open call and hands out [`StubPool`]s.
pub(crate) struct StubOpener {
    ping: PingBehavior,
    opened: Mutex<Vec<(String, Arc<StubPool>)>>,
}

impl StubOpener {
    pub(crate) fn new(ping: PingBehavior) -> Self {
        Self {
            ping,
            opened: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn open_count(&self) -> usize {
        self.opened.lock().unwrap().len()
    }

    pub(crate) fn last(&self) -> Option<(String, Arc<StubPool>)> {
        self.opened.lock().unwrap().last().cloned()
    }
}

impl PoolOpener for StubOpener {
    fn open(&self, dsn: &str, limits: PoolLimits) -> Result<Arc<dyn DatabasePool>, StorageError> {
        let pool = Arc::new(StubPool::new(limits, self.ping));
        self.opened
            .lock()
            .unwrap()
            .push((dsn.to_string(), Arc::clone(&pool)));
        Ok(pool)
    }
}
