//! # Cache Store Pool Management
//!
//! Connection pool creation and configuration for the SQLite cache file.
//!
//! ## WAL Mode
//! SQLite WAL (Write-Ahead Logging) mode is enabled for:
//! - Better concurrent read performance
//! - Readers don't block writers
//! - Better crash recovery
//!
//! The cache is small (a handful of rows), so pool sizes stay modest.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::business::BusinessCache;
use crate::error::{CacheError, CacheResult};
use crate::schema;

// =============================================================================
// Configuration
// =============================================================================

/// Cache store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = CacheConfig::new("/path/to/vitrina_cache.db")
///     .max_connections(2);
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 2 (the cache sees one reader and one writer at most)
    pub max_connections: u32,

    /// Connection timeout duration.
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Whether to apply the schema on open.
    /// Default: true
    pub apply_schema: bool,
}

impl CacheConfig {
    /// Creates a configuration with the given path. The file is created if
    /// it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CacheConfig {
            database_path: path.into(),
            max_connections: 2,
            connect_timeout: Duration::from_secs(5),
            apply_schema: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Creates an in-memory cache configuration (for testing).
    pub fn in_memory() -> Self {
        CacheConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1, // In-memory requires a single connection
            connect_timeout: Duration::from_secs(5),
            apply_schema: true,
        }
    }
}

// =============================================================================
// Cache Store
// =============================================================================

/// Handle to the local cache database.
#[derive(Debug, Clone)]
pub struct CacheStore {
    pool: SqlitePool,
}

impl CacheStore {
    /// Opens (and if needed creates) the cache database.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Enables WAL mode and NORMAL synchronous
    /// 3. Creates the connection pool
    /// 4. Applies the schema (if enabled)
    pub async fn open(config: CacheConfig) -> CacheResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Opening cache store"
        );

        let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());

        let connect_options = SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);

        debug!("Cache connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(connect_options)
            .await
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;

        let store = CacheStore { pool };

        if config.apply_schema {
            schema::apply_schema(&store.pool).await?;
        }

        Ok(store)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the business snapshot cache.
    pub fn businesses(&self) -> BusinessCache {
        BusinessCache::new(self.pool.clone())
    }

    /// Checks if the cache database is responsive.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    /// Closes the connection pool.
    pub async fn close(&self) {
        info!("Closing cache store");
        self.pool.close().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
