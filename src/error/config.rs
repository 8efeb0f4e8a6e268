//! Configuration errors.

/// Errors raised while assembling [`BrowserConfig`](crate::config::BrowserConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No provider API key was supplied.
    #[error("no API key configured: set TENOR_API_KEY or pass --api-key")]
    MissingApiKey,

    /// The request timeout could not be parsed as a positive number of seconds.
    #[error("invalid request timeout '{value}': expected a positive number of seconds")]
    InvalidTimeout { value: String },

    /// The base URL is not an absolute http(s) URL.
    #[error("invalid base URL '{value}'")]
    InvalidBaseUrl { value: String },
}
