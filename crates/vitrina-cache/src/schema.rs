//! # Cache Schema
//!
//! Inline idempotent DDL for the cache table, applied every time a store is
//! opened. A single table is all the cache needs: one row per cache key,
//! payload is the JSON-serialized record array.
//!
//! ## Adding Schema Changes
//! Keep every statement idempotent (`IF NOT EXISTS`); the cache is
//! disposable, so destructive changes are handled by bumping the key
//! namespace rather than migrating rows.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{CacheError, CacheResult};

/// The cache table.
///
/// `cache_key` carries the namespace prefix (`vitrina_cache:<key>`), so a
/// shared database file can hold unrelated tables without `clear_cache`
/// touching them.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS cache_entries (
    cache_key  TEXT PRIMARY KEY,
    payload    TEXT NOT NULL,
    cached_at  TEXT NOT NULL
);
"#;

/// Applies the cache schema.
///
/// ## Safety
/// - Idempotent: safe to run on every open
/// - No versioning: the cache holds disposable snapshots only
pub async fn apply_schema(pool: &SqlitePool) -> CacheResult<()> {
    sqlx::query(SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| CacheError::SchemaFailed(e.to_string()))?;

    info!("Cache schema applied");
    Ok(())
}
