//! # Cache Error Types
//!
//! Error types for local cache operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite error (sqlx::Error) / JSON error (serde_json::Error)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CacheError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Failure::Cache (vitrina-core) ← Only on the offline READ path;        │
//! │  write failures during an online fetch are swallowed by the repository │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Local cache operation errors.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Database file could not be opened or the pool could not connect.
    #[error("cache connection failed: {0}")]
    ConnectionFailed(String),

    /// Schema setup failed.
    #[error("cache schema setup failed: {0}")]
    SchemaFailed(String),

    /// A read or write against the cache table failed.
    #[error("cache storage error: {0}")]
    Storage(String),

    /// A cached payload could not be serialized or deserialized.
    ///
    /// ## When This Occurs
    /// - Corrupt row written by an older build
    /// - Hand-edited database file
    #[error("cache serialization error: {0}")]
    Serialization(String),
}

impl From<sqlx::Error> for CacheError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                CacheError::ConnectionFailed(err.to_string())
            }
            _ => CacheError::Storage(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::Serialization(err.to_string())
    }
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;
