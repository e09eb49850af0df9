//! Database connection pool interfaces and the PostgreSQL implementation.

mod models;
mod postgres;

pub use models::Models;
pub use postgres::PgOpener;

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Upper bound on the startup liveness check.
pub const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool sizing limits. Each one is applied independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolLimits {
    /// Maximum number of open connections (in use plus idle).
    pub max_open_conns: u32,
    /// Maximum number of idle connections retained for reuse.
    pub max_idle_conns: u32,
    /// Idle connections older than this are closed.
    pub max_idle_time: Duration,
}

/// Point-in-time pool statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    pub max_open_connections: u32,
    pub open_connections: u32,
    pub in_use: u32,
    pub idle: u32,
}

/// DatabasePool is a shared handle over a set of database connections.
///
/// Implementations must be safe for concurrent use without extra locking.
#[async_trait]
pub trait DatabasePool: Send + Sync {
    /// Limits the pool was configured with.
    fn limits(&self) -> PoolLimits;

    /// Current connection counts.
    fn stats(&self) -> PoolStats;

    /// Verifies a connection can be established and is responsive.
    async fn ping(&self) -> Result<(), StorageError>;

    /// Closes every connection. Later acquisitions fail.
    async fn close(&self);
}

/// PoolOpener creates a pool handle without connecting.
pub trait PoolOpener: Send + Sync {
    fn open(&self, dsn: &str, limits: PoolLimits) -> Result<Arc<dyn DatabasePool>, StorageError>;
}

/// Opens a pool and verifies it within [`PING_TIMEOUT`].
///
/// On a failed or timed out ping the pool is closed before the error is
/// returned.
pub async fn connect(
    opener: &dyn PoolOpener,
    dsn: &str,
    limits: PoolLimits,
) -> Result<Arc<dyn DatabasePool>, StorageError> {
    let pool = opener.open(dsn, limits)?;

    let result = match tokio::time::timeout(PING_TIMEOUT, pool.ping()).await {
        Ok(result) => result,
        Err(_) => Err(StorageError::PingTimeout(PING_TIMEOUT)),
    };

    if let Err(e) = result {
        warn!(error = %e, "Database liveness check failed, closing pool");
        pool.close().await;
        return Err(e);
    }

    info!(
        max_open_conns = limits.max_open_conns,
        max_idle_conns = limits.max_idle_conns,
        max_idle_time = ?limits.max_idle_time,
        "Database connection pool established"
    );
    Ok(pool)
}

/// StorageError represents errors that can occur while opening or probing the pool.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid DSN: {0}")]
    InvalidDsn(String),

    #[error("Invalid pool limits: {0}")]
    InvalidLimits(String),

    #[error("Database ping timed out after {0:?}")]
    PingTimeout(Duration),
}

#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod tests;
