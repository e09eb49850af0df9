mod app;
mod config;
mod mailer;
mod storage;
mod vcs;

use clap::Parser;
use config::Cli;
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;
use storage::PgOpener;
use tracing::{Level, error};
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stdout)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Prints the version when `--version` was passed. Returns true if it did.
fn display_version(cli: &Cli, out: &mut impl Write) -> io::Result<bool> {
    if !cli.version {
        return Ok(false);
    }
    writeln!(out, "Version:\t{}", vcs::version())?;
    Ok(true)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match display_version(&cli, &mut io::stdout()) {
        Ok(true) => return ExitCode::SUCCESS,
        Ok(false) => {}
        Err(e) => {
            eprintln!("Failed to print version: {}", e);
            return ExitCode::FAILURE;
        }
    }

    init_tracing(Some(&cli.log_level));

    let app = match app::bootstrap(&cli, |name| env::var(name).ok(), &PgOpener).await {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "Startup failed");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = app.run(app::shutdown_signal()).await {
        error!(error = %e, "Application error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
