//! # Remote Configuration
//!
//! Configuration for the document-store client.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Explicit builder calls (highest priority)                          │
//! │     RemoteConfig::new(url).api_key(key)                                │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     VITRINA_API_URL=https://api.example.com                            │
//! │     VITRINA_API_KEY=secret (optional)                                  │
//! │                                                                         │
//! │  3. Default Values (timeouts only)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The seed binary loads a `.env` file first via dotenvy, then calls
//! [`RemoteConfig::from_env`].

use std::env;
use std::time::Duration;

use crate::error::{RemoteError, RemoteResult};

/// Environment variable holding the backend base URL.
pub const ENV_API_URL: &str = "VITRINA_API_URL";

/// Environment variable holding the optional API key.
pub const ENV_API_KEY: &str = "VITRINA_API_KEY";

/// Document-store client configuration.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,

    /// Optional bearer token sent with every request.
    pub api_key: Option<String>,

    /// Per-request timeout.
    /// Default: 15 seconds
    pub request_timeout: Duration,

    /// Timeout for the connectivity probe.
    /// Default: 3 seconds (an upfront check must stay cheap)
    pub probe_timeout: Duration,
}

impl RemoteConfig {
    /// Creates a configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        RemoteConfig {
            base_url,
            api_key: None,
            request_timeout: Duration::from_secs(15),
            probe_timeout: Duration::from_secs(3),
        }
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the connectivity probe timeout.
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Builds a configuration from environment variables.
    ///
    /// ## Errors
    /// `RemoteError::InvalidConfig` when `VITRINA_API_URL` is unset or empty.
    pub fn from_env() -> RemoteResult<Self> {
        let base_url = env::var(ENV_API_URL)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                RemoteError::InvalidConfig(format!("{} is not set", ENV_API_URL))
            })?;

        let mut config = RemoteConfig::new(base_url);

        if let Ok(key) = env::var(ENV_API_KEY) {
            if !key.trim().is_empty() {
                config = config.api_key(key);
            }
        }

        Ok(config)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = RemoteConfig::new("https://api.example.com/");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_builder_defaults() {
        let config = RemoteConfig::new("https://api.example.com");
        assert!(config.api_key.is_none());
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.probe_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_builder_overrides() {
        let config = RemoteConfig::new("https://api.example.com")
            .api_key("secret")
            .request_timeout(Duration::from_secs(5));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
