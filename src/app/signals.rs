//! OS signal handling.

use std::io;
use tracing::info;

/// Completes on SIGINT or, on unix, SIGTERM.
pub async fn shutdown_signal() -> io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result?;
                info!(signal = "SIGINT", "Shutdown signal received");
            }
            _ = terminate.recv() => {
                info!(signal = "SIGTERM", "Shutdown signal received");
            }
        }
        Ok(())
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        info!(signal = "ctrl-c", "Shutdown signal received");
        Ok(())
    }
}
