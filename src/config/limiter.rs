//! Rate limiter configuration.

/// Token-bucket parameters consumed by the HTTP middleware.
#[derive(Debug, Clone, PartialEq)]
pub struct LimiterConfig {
    /// Tokens added per second.
    pub rps: f64,
    /// Bucket capacity.
    pub burst: u32,
    pub enabled: bool,
}
