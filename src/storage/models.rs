//! Data-access façade shared by request handlers.

use std::sync::Arc;

use crate::storage::DatabasePool;

/// Models groups the repositories that operate on the connection pool.
#[derive(Clone)]
pub struct Models {
    pool: Arc<dyn DatabasePool>,
}

impl Models {
    pub fn new(pool: Arc<dyn DatabasePool>) -> Self {
        Self { pool }
    }

    /// Shared pool handle.
    pub fn pool(&self) -> &Arc<dyn DatabasePool> {
        &self.pool
    }
}
