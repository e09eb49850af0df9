//! Startup sequence: env file, configuration, database pool, application context.

use tracing::{info, warn};

use super::{AppError, Application};
use crate::config::{self, Cli, Config};
use crate::storage::{self, PoolOpener};
use crate::vcs;

/// Builds the application from parsed flags.
///
/// `lookup` resolves environment variables and is consulted after the env
/// file has been loaded. Configuration errors are returned before `opener`
/// is touched. A pool that fails its liveness check is closed before the
/// error is returned.
pub async fn bootstrap<F>(
    cli: &Cli,
    lookup: F,
    opener: &dyn PoolOpener,
) -> Result<Application, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let env_file = cli.env_file.display();
    if config::load_env_file(&cli.env_file)? {
        info!(path = %env_file, "Environment file loaded");
    } else {
        warn!(path = %env_file, "Environment file not found, using process environment");
    }

    let config = Config::from_cli(cli, lookup)?;

    let pool = storage::connect(opener, &config.db.dsn, config.db.limits()).await?;

    Ok(Application::new(config, pool, vcs::version()))
}
