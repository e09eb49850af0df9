//! Outbound mail façade.

use std::sync::Arc;

use crate::config::SmtpConfig;

/// Mailer holds the SMTP credentials used to send account emails.
///
/// Cheap to clone; every clone shares the same credentials.
#[derive(Debug, Clone)]
pub struct Mailer {
    smtp: Arc<SmtpConfig>,
}

impl Mailer {
    pub fn new(smtp: SmtpConfig) -> Self {
        Self {
            smtp: Arc::new(smtp),
        }
    }

    /// `host:port` of the SMTP relay.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.smtp.host, self.smtp.port)
    }

    /// Address used in the `From` header.
    pub fn sender(&self) -> &str {
        &self.smtp.sender
    }
}
