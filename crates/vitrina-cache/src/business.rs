//! # Business Snapshot Cache
//!
//! Persists business record lists under namespaced keys so the repository
//! can degrade to the last-seen snapshot while offline.
//!
//! ## Key Operations
//! - `cache_businesses` - overwrite the snapshot for a query selector key
//! - `get_cached_businesses` - read it back (None if absent)
//! - `clear_cache` - one batch delete of everything under the namespace
//!
//! ## Timestamp Flattening
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WRITE: BusinessRecord { created_at: Timestamp{..} }                   │
//! │            │ flatten                                                    │
//! │            ▼                                                            │
//! │         CachedBusinessRecord { created_at_ms: i64 } → JSON row         │
//! │                                                                         │
//! │  READ:  JSON row → CachedBusinessRecord                                │
//! │            │ reconstruct                                                │
//! │            ▼                                                            │
//! │         BusinessRecord { created_at: Timestamp{..} }                   │
//! │                                                                         │
//! │  Mapper code treats cached and live records uniformly; the round       │
//! │  trip is exact at millisecond precision.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::CacheResult;
use vitrina_core::record::CachedBusinessRecord;
use vitrina_core::{BusinessRecord, CACHE_NAMESPACE};

/// Repository for cached business snapshots.
#[derive(Debug, Clone)]
pub struct BusinessCache {
    pool: SqlitePool,
}

impl BusinessCache {
    /// Creates a new BusinessCache over an open pool.
    pub fn new(pool: SqlitePool) -> Self {
        BusinessCache { pool }
    }

    /// Prefixes a logical cache key with the namespace.
    fn namespaced(key: &str) -> String {
        format!("{}:{}", CACHE_NAMESPACE, key)
    }

    /// Overwrites the snapshot stored under `key`.
    ///
    /// ## Behavior
    /// - Existing entries at the same key are replaced (upsert)
    /// - Timestamps are flattened to numeric milliseconds
    ///
    /// ## Errors
    /// `CacheError::Serialization` / `CacheError::Storage` - the caller
    /// (the repository's online read path) swallows these by design.
    pub async fn cache_businesses(&self, key: &str, records: &[BusinessRecord]) -> CacheResult<()> {
        let cached: Vec<CachedBusinessRecord> =
            records.iter().map(CachedBusinessRecord::from).collect();
        let payload = serde_json::to_string(&cached)?;

        let cache_key = Self::namespaced(key);
        let now = Utc::now().to_rfc3339();

        debug!(key = %cache_key, count = records.len(), "Caching business snapshot");

        sqlx::query(
            r#"
            INSERT INTO cache_entries (cache_key, payload, cached_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(cache_key) DO UPDATE SET
                payload = excluded.payload,
                cached_at = excluded.cached_at
            "#,
        )
        .bind(&cache_key)
        .bind(&payload)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Reads the snapshot stored under `key`.
    ///
    /// ## Returns
    /// * `Ok(Some(records))` - snapshot present, timestamps reconstructed
    /// * `Ok(None)` - no entry at that key
    /// * `Err(CacheError::Serialization)` - entry present but undecodable
    pub async fn get_cached_businesses(&self, key: &str) -> CacheResult<Option<Vec<BusinessRecord>>> {
        let cache_key = Self::namespaced(key);

        let payload: Option<String> =
            sqlx::query_scalar("SELECT payload FROM cache_entries WHERE cache_key = ?1")
                .bind(&cache_key)
                .fetch_optional(&self.pool)
                .await?;

        let Some(payload) = payload else {
            debug!(key = %cache_key, "Cache miss");
            return Ok(None);
        };

        let cached: Vec<CachedBusinessRecord> = serde_json::from_str(&payload)?;
        let records = cached.into_iter().map(BusinessRecord::from).collect();

        debug!(key = %cache_key, "Cache hit");
        Ok(Some(records))
    }

    /// Removes every entry under the cache namespace in one statement.
    ///
    /// Rows outside the namespace (if the file is shared) are untouched.
    pub async fn clear_cache(&self) -> CacheResult<()> {
        let prefix = format!("{}:%", CACHE_NAMESPACE);

        let result = sqlx::query("DELETE FROM cache_entries WHERE cache_key LIKE ?1")
            .bind(&prefix)
            .execute(&self.pool)
            .await?;

        debug!(removed = result.rows_affected(), "Cleared cache namespace");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CacheConfig, CacheStore};
    use vitrina_core::record::Timestamp;

    async fn open_store() -> CacheStore {
        CacheStore::open(CacheConfig::in_memory()).await.unwrap()
    }

    fn record(id: &str, created_ms: i64) -> BusinessRecord {
        BusinessRecord {
            id: id.to_string(),
            name: format!("Business {}", id),
            description: "".into(),
            category_id: "restaurants".into(),
            subcategory_id: "cafe".into(),
            location: "Main St".into(),
            latitude: None,
            longitude: None,
            image_urls: vec![],
            rating: 4.0,
            review_count: 3,
            is_featured: false,
            is_open: true,
            owner_id: "owner".into(),
            created_at: Timestamp::from_millis(created_ms),
            updated_at: Timestamp::from_millis(created_ms + 500),
        }
    }

    #[tokio::test]
    async fn test_round_trip_preserves_millisecond_instants() {
        let store = open_store().await;
        let cache = store.businesses();

        let records = vec![record("a", 1_700_000_000_123), record("b", 1_700_000_111_999)];
        cache.cache_businesses("featured", &records).await.unwrap();

        let restored = cache
            .get_cached_businesses("featured")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(restored, records);
        assert_eq!(restored[0].created_at.as_millis(), 1_700_000_000_123);
        assert_eq!(restored[1].updated_at.as_millis(), 1_700_000_112_499);
    }

    #[tokio::test]
    async fn test_absent_key_returns_none() {
        let store = open_store().await;
        let cache = store.businesses();

        assert!(cache
            .get_cached_businesses("category_beauty")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_entry() {
        let store = open_store().await;
        let cache = store.businesses();

        cache
            .cache_businesses("featured", &[record("a", 1_000)])
            .await
            .unwrap();
        cache
            .cache_businesses("featured", &[record("b", 2_000)])
            .await
            .unwrap();

        let restored = cache
            .get_cached_businesses("featured")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].id, "b");
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let store = open_store().await;
        let cache = store.businesses();

        cache
            .cache_businesses("featured", &[record("a", 1_000)])
            .await
            .unwrap();
        cache
            .cache_businesses("category_beauty", &[record("b", 2_000)])
            .await
            .unwrap();

        let featured = cache
            .get_cached_businesses("featured")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(featured[0].id, "a");
    }

    #[tokio::test]
    async fn test_clear_cache_removes_namespace_only() {
        let store = open_store().await;
        let cache = store.businesses();

        // A foreign row sharing the table but outside the namespace
        sqlx::query("INSERT INTO cache_entries (cache_key, payload, cached_at) VALUES ('other:row', '[]', '')")
            .execute(store.pool())
            .await
            .unwrap();

        cache
            .cache_businesses("featured", &[record("a", 1_000)])
            .await
            .unwrap();
        cache.clear_cache().await.unwrap();

        assert!(cache
            .get_cached_businesses("featured")
            .await
            .unwrap()
            .is_none());

        let foreign: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM cache_entries WHERE cache_key = 'other:row'")
                .fetch_one(store.pool())
                .await
                .unwrap();
        assert_eq!(foreign, 1);
    }

    #[tokio::test]
    async fn test_corrupt_payload_is_a_serialization_error() {
        let store = open_store().await;
        let cache = store.businesses();

        sqlx::query(
            "INSERT INTO cache_entries (cache_key, payload, cached_at) VALUES (?1, 'not json', '')",
        )
        .bind(format!("{}:featured", CACHE_NAMESPACE))
        .execute(store.pool())
        .await
        .unwrap();

        let err = cache.get_cached_businesses("featured").await.unwrap_err();
        assert!(matches!(err, crate::CacheError::Serialization(_)));
    }
}
