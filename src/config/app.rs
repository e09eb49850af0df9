//! Application-level configuration.

use clap::ValueEnum;
use std::fmt;

/// Deployment environment tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application-level settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the API server listens on.
    pub port: u16,
    /// Environment: "development", "staging", or "production".
    pub env: Environment,
    /// Logging verbosity: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
}
