//! # Failure Taxonomy
//!
//! The success-or-failure outcome type returned by every repository method.
//!
//! ## Failure Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Failure Propagation                                  │
//! │                                                                         │
//! │  reqwest / sqlx error                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RemoteError / CacheError ← Typed per-layer errors                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Failure (this module) ← One of three categories the UI understands    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Screen pattern-matches and renders an inline error + retry action     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories never throw: every method returns `Result<T, Failure>` so
//! calling code always pattern-matches on the outcome.

use thiserror::Error;

/// Message returned when the device is offline and no cached snapshot exists.
pub const NO_CACHED_DATA: &str = "network unavailable and no cached data";

/// The three failure categories surfaced to screens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// The remote operation was rejected or threw a non-network error.
    ///
    /// ## When This Occurs
    /// - HTTP 4xx/5xx from the document store
    /// - Malformed response payload
    /// - Any remote error that is not a connectivity problem
    #[error("server failure: {message}")]
    Server { message: String },

    /// Connectivity is absent and no cache fallback was available.
    ///
    /// ## When This Occurs
    /// - Upfront connectivity check reports offline and the cache is empty
    /// - A mid-flight network drop with no cached snapshot to fall back to
    #[error("network failure: {message}")]
    Network { message: String },

    /// The local cache store failed to read or deserialize.
    ///
    /// ## When This Occurs
    /// - Corrupt cached payload
    /// - SQLite read error while offline
    ///
    /// Note: cache *write* failures during an online read are swallowed and
    /// never surface as this variant.
    #[error("cache failure: {message}")]
    Cache { message: String },
}

impl Failure {
    /// Creates a server failure.
    pub fn server(message: impl Into<String>) -> Self {
        Failure::Server {
            message: message.into(),
        }
    }

    /// Creates a network failure.
    pub fn network(message: impl Into<String>) -> Self {
        Failure::Network {
            message: message.into(),
        }
    }

    /// Creates the canonical "offline with empty cache" failure.
    pub fn no_cached_data() -> Self {
        Failure::Network {
            message: NO_CACHED_DATA.to_string(),
        }
    }

    /// Creates a cache failure.
    pub fn cache(message: impl Into<String>) -> Self {
        Failure::Cache {
            message: message.into(),
        }
    }

    /// Returns the human-readable message carried by this failure.
    pub fn message(&self) -> &str {
        match self {
            Failure::Server { message } => message,
            Failure::Network { message } => message,
            Failure::Cache { message } => message,
        }
    }
}

/// Result type for repository operations.
pub type FailureResult<T> = Result<T, Failure>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_constructors() {
        let f = Failure::server("rejected");
        assert_eq!(f, Failure::Server { message: "rejected".into() });
        assert_eq!(f.message(), "rejected");

        let f = Failure::network("offline");
        assert!(matches!(f, Failure::Network { .. }));

        let f = Failure::cache("corrupt payload");
        assert!(matches!(f, Failure::Cache { .. }));
    }

    #[test]
    fn test_no_cached_data_is_a_network_failure() {
        let f = Failure::no_cached_data();
        assert!(matches!(f, Failure::Network { .. }));
        assert!(f.message().contains("no cached data"));
    }

    #[test]
    fn test_display_includes_category() {
        assert_eq!(
            Failure::server("boom").to_string(),
            "server failure: boom"
        );
    }
}
