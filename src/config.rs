//! Browser configuration.
//!
//! The provider API key is the only required setting. It is injected from
//! the environment or the command line and never compiled in.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Default provider base URL.
pub const DEFAULT_BASE_URL: &str = "https://g.tenor.com/v1";

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "TENOR_API_KEY";
/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "GIFGRID_BASE_URL";
/// Environment variable holding a request timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "GIFGRID_TIMEOUT_SECS";

/// Configuration for the GIF API client.
///
/// Use the builder methods to customize it.
///
/// # Example
///
/// ```ignore
/// use gifgrid::config::BrowserConfig;
///
/// let config = BrowserConfig::new("my-key")
///     .with_base_url("http://localhost:8080/v1")
///     .with_request_timeout(Duration::from_secs(5));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Provider API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL the endpoint paths are appended to (no trailing slash)
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl BrowserConfig {
    /// Create a config for `api_key` against the default provider.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }

    /// Set the base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Replace the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Build a config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).unwrap_or_default();
        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(base_url.trim());
        }

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_request_timeout(parse_timeout(&raw)?);
        }

        Ok(config)
    }

    /// Check that the config can be used to reach the provider.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl {
                value: self.base_url.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for BrowserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_new_uses_defaults() {
        let config = BrowserConfig::new("key");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_builder() {
        let config = BrowserConfig::new("key")
            .with_base_url("http://localhost:9000/v1/")
            .with_request_timeout(Duration::from_secs(3))
            .with_api_key("other");

        assert_eq!(config.api_key, "other");
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_from_lookup_reads_all_vars() {
        let config = BrowserConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "abc"),
            (BASE_URL_ENV, "http://127.0.0.1:8080/v1"),
            (TIMEOUT_ENV, "7"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "abc");
        assert_eq!(config.base_url, "http://127.0.0.1:8080/v1");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(7)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_missing_key_fails_validation() {
        let config = BrowserConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn test_from_lookup_invalid_timeout() {
        for bad in ["0", "-3", "soon"] {
            let result = BrowserConfig::from_lookup(lookup_from(&[
                (API_KEY_ENV, "abc"),
                (TIMEOUT_ENV, bad),
            ]));
            assert_eq!(
                result,
                Err(ConfigError::InvalidTimeout {
                    value: bad.to_string()
                })
            );
        }
    }

    #[test]
    fn test_validate_rejects_relative_base_url() {
        let config = BrowserConfig::new("abc").with_base_url("g.tenor.com/v1");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = BrowserConfig::new("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
