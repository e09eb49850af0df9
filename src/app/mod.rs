//! Long-lived application context.
//!
//! Built once by [`bootstrap`] and handed to the HTTP layer. Owns the pool
//! handle and releases it exactly once, after background work has drained.

mod bootstrap;
mod diagnostics;
mod error;
mod signals;
mod tasks;

pub use bootstrap::bootstrap;
pub use diagnostics::Diagnostics;
pub use error::AppError;
pub use signals::shutdown_signal;
pub use tasks::BackgroundTasks;

use std::future::Future;
use std::io;
use std::sync::Arc;

use tracing::{Instrument, Span, debug, info, info_span};

use crate::config::Config;
use crate::mailer::Mailer;
use crate::storage::{DatabasePool, Models};

/// Application context shared by request handlers.
pub struct Application {
    config: Arc<Config>,
    span: Span,
    models: Models,
    mailer: Mailer,
    tasks: BackgroundTasks,
    diagnostics: Diagnostics,
}

impl Application {
    /// Assembles the context around a verified pool.
    pub fn new(config: Config, pool: Arc<dyn DatabasePool>, version: &str) -> Self {
        let span = info_span!("greenlight", env = %config.app.env, version = %version);
        let tasks = BackgroundTasks::new();
        let diagnostics = Diagnostics::new(version, Arc::clone(&pool), tasks.clone());

        Self {
            mailer: Mailer::new(config.smtp.clone()),
            models: Models::new(pool),
            config: Arc::new(config),
            span,
            tasks,
            diagnostics,
        }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Root span; request and task spans are created beneath it.
    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn models(&self) -> &Models {
        &self.models
    }

    pub fn mailer(&self) -> &Mailer {
        &self.mailer
    }

    pub fn tasks(&self) -> &BackgroundTasks {
        &self.tasks
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Runs until `shutdown_signal` completes, then shuts down.
    ///
    /// Shutdown happens even when waiting for the signal failed; the signal
    /// error is returned afterwards.
    pub async fn run<S>(self, shutdown_signal: S) -> Result<(), AppError>
    where
        S: Future<Output = io::Result<()>>,
    {
        let span = self.span.clone();
        async move {
            let limiter = &self.config.limiter;
            info!(
                port = self.config.app.port,
                limiter_enabled = limiter.enabled,
                limiter_rps = limiter.rps,
                limiter_burst = limiter.burst,
                trusted_origins = ?self.config.cors.trusted_origins,
                smtp = %self.mailer.endpoint(),
                sender = %self.mailer.sender(),
                "Application started"
            );
            debug!(diagnostics = ?self.diagnostics.snapshot(), "Startup diagnostics");

            let signal = shutdown_signal.await;
            self.shutdown().await;
            signal.map_err(AppError::from)
        }
        .instrument(span)
        .await
    }

    /// Waits for background tasks to finish, then closes the pool.
    pub async fn shutdown(self) {
        info!("Shutting down");
        self.tasks.drain().await;
        self.models.pool().close().await;
        info!("Database connection pool closed");
    }
}
