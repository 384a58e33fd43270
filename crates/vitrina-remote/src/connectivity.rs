//! # Connectivity Probe
//!
//! The upfront online/offline check the repository consults before choosing
//! between the remote gateway and the local cache.
//!
//! The probe is deliberately coarse: one GET against the backend's health
//! endpoint with a short timeout, answering a plain bool. It never errors -
//! an unreachable health endpoint simply means "offline" and the caller
//! degrades to the cache. A mid-flight drop after a positive probe is still
//! handled by the repository's error classification.

use std::time::Duration;
use tracing::debug;

use crate::config::RemoteConfig;

/// HTTP connectivity probe against the backend health endpoint.
#[derive(Debug, Clone)]
pub struct HttpConnectivity {
    http: reqwest::Client,
    health_url: String,
}

impl HttpConnectivity {
    /// Builds a probe from configuration.
    pub fn new(config: &RemoteConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.probe_timeout)
            .build()
            .unwrap_or_default();

        HttpConnectivity {
            http,
            health_url: format!("{}/health", config.base_url),
        }
    }

    /// Overrides the probe timeout (mainly for tests).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if let Ok(http) = reqwest::Client::builder().timeout(timeout).build() {
            self.http = http;
        }
        self
    }

    /// Returns true when the backend health endpoint answers with success.
    pub async fn is_online(&self) -> bool {
        match self.http.get(&self.health_url).send().await {
            Ok(response) => {
                let online = response.status().is_success();
                debug!(online, "Connectivity probe completed");
                online
            }
            Err(_) => {
                debug!("Connectivity probe failed, treating as offline");
                false
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_offline() {
        // Reserved TEST-NET-1 address; nothing listens there
        let config = RemoteConfig::new("http://192.0.2.1:9")
            .probe_timeout(Duration::from_millis(200));
        let probe = HttpConnectivity::new(&config);

        assert!(!probe.is_online().await);
    }
}
