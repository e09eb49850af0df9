//! Outbound mail configuration.

use std::fmt;

use super::ConfigError;

pub const SMTP_HOST: &str = "SMTP_HOST";
pub const SMTP_PORT: &str = "SMTP_PORT";
pub const SMTP_USERNAME: &str = "SMTP_USERNAME";
pub const SMTP_PASSWORD: &str = "SMTP_PASSWORD";
pub const SMTP_SENDER: &str = "SMTP_SENDER";

/// SMTP credentials. Every field is required at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Address used in the `From` header, e.g. `Greenlight <no-reply@example.com>`.
    pub sender: String,
}

impl SmtpConfig {
    /// Reads SMTP credentials through `lookup`, failing on the first missing
    /// or malformed variable.
    pub fn from_env<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| lookup(name).ok_or(ConfigError::MissingEnv(name));

        let host = require(SMTP_HOST)?;

        let raw_port = require(SMTP_PORT)?;
        let port = raw_port
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnv {
                name: SMTP_PORT,
                value: raw_port.clone(),
                reason: e.to_string(),
            })?;

        let username = require(SMTP_USERNAME)?;
        let password = require(SMTP_PASSWORD)?;
        let sender = require(SMTP_SENDER)?;

        Ok(Self {
            host,
            port,
            username,
            password,
            sender,
        })
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("sender", &self.sender)
            .finish()
    }
}
