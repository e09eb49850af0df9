//! Application error types.

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Fatal startup or runtime error. Any of these ends the process with a
/// non-zero exit code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Storage(#[from] StorageError),
    #[error("signal handler error: {0}")]
    Signal(#[from] std::io::Error),
}
