//! CORS configuration.

/// Origins allowed to make cross-origin requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub trusted_origins: Vec<String>,
}

impl CorsConfig {
    /// Splits a whitespace-separated list of origins, keeping first-seen order
    /// and dropping repeats.
    pub fn parse(value: Option<&str>) -> Self {
        let mut trusted_origins: Vec<String> = Vec::new();
        for origin in value.unwrap_or_default().split_whitespace() {
            if !trusted_origins.iter().any(|o| o == origin) {
                trusted_origins.push(origin.to_string());
            }
        }
        Self { trusted_origins }
    }
}
