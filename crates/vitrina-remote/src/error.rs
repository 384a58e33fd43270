//! # Remote Error Types
//!
//! Error types for document-store operations, with the network/server
//! classification the fallback policy depends on.
//!
//! ## Error Mapping
//! ```text
//! reqwest connect/timeout error   → RemoteError::Network  (cache fallback)
//! transport drop mid-flight       → RemoteError::Network  (cache fallback)
//! HTTP 4xx/5xx                    → RemoteError::Server   (surfaced as-is)
//! undecodable response body       → RemoteError::Decode   (surfaced as-is)
//! ```
//!
//! The repository only falls back to the cache for `is_network()` errors;
//! everything else surfaces directly as a server failure.

use thiserror::Error;

/// Remote document-store errors.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Connectivity problem: failed to connect, timed out, or the transport
    /// dropped mid-flight.
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the operation (HTTP status or explicit error).
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response body could not be decoded into the expected record.
    #[error("decode error: {0}")]
    Decode(String),

    /// The gateway was misconfigured (bad base URL, missing env var).
    #[error("invalid remote config: {0}")]
    InvalidConfig(String),
}

impl RemoteError {
    /// Creates a server error without an HTTP status (status 0).
    pub fn server(message: impl Into<String>) -> Self {
        RemoteError::Server {
            status: 0,
            message: message.into(),
        }
    }

    /// Returns true when this error is a connectivity problem the repository
    /// may answer from the cache.
    pub fn is_network(&self) -> bool {
        matches!(self, RemoteError::Network(_))
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            return RemoteError::Network(err.to_string());
        }

        if err.is_decode() {
            return RemoteError::Decode(err.to_string());
        }

        if let Some(status) = err.status() {
            return RemoteError::Server {
                status: status.as_u16(),
                message: err.to_string(),
            };
        }

        // Remaining reqwest errors are transport-level (request/body), i.e.
        // the connection died underneath us.
        RemoteError::Network(err.to_string())
    }
}

/// Result type for remote operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_classification() {
        assert!(RemoteError::Network("down".into()).is_network());
        assert!(!RemoteError::server("rejected").is_network());
        assert!(!RemoteError::Decode("bad json".into()).is_network());
        assert!(!RemoteError::InvalidConfig("no url".into()).is_network());
    }

    #[test]
    fn test_server_display_includes_status() {
        let err = RemoteError::Server {
            status: 503,
            message: "unavailable".into(),
        };
        assert_eq!(err.to_string(), "server error (503): unavailable");
    }
}
