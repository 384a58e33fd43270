//! # Business Repository
//!
//! The fallback read policy for business lists, plus detail reads and
//! owner-facing writes.
//!
//! ## Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     businesses(selector, viewer)                        │
//! │                                                                         │
//! │  1. Probe connectivity. Offline → answer from the cache.               │
//! │  2. Fetch the list remotely. A network-classified error → cache;       │
//! │     any other error → Server failure, cache untouched.                 │
//! │  3. Resolve the viewer's favorite-id set (empty for anonymous).        │
//! │  4. Best-effort cache write under the selector's key; a failed write   │
//! │     is logged and swallowed - the read still succeeds.                 │
//! │  5. Map records; favorite flag = membership in the id set.             │
//! │                                                                         │
//! │  Cache answers carry is_favorite == false on every item: favorites     │
//! │  live remotely and cannot be resolved offline.                         │
//! │                                                                         │
//! │  No retry, no backoff. One remote attempt, one fallback.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, warn};

use crate::remote_failure;
use crate::traits::{BusinessCache, BusinessSource, Connectivity, FavoriteStore};
use vitrina_core::error::{Failure, FailureResult};
use vitrina_core::{mapper, Business, BusinessDetail, BusinessRecord, BusinessSelector};
use vitrina_core::DEFAULT_PAGE_SIZE;

/// Repository for business lists, details and owner writes.
#[derive(Debug, Clone)]
pub struct BusinessRepository<S, C, N, F> {
    source: S,
    cache: C,
    connectivity: N,
    favorites: F,
}

impl<S, C, N, F> BusinessRepository<S, C, N, F>
where
    S: BusinessSource,
    C: BusinessCache,
    N: Connectivity,
    F: FavoriteStore,
{
    /// Creates a new BusinessRepository over the given seams.
    pub fn new(source: S, cache: C, connectivity: N, favorites: F) -> Self {
        BusinessRepository {
            source,
            cache,
            connectivity,
            favorites,
        }
    }

    /// Reads the business list a selector describes.
    ///
    /// ## Arguments
    /// * `selector` - Featured carousel or a category listing
    /// * `viewer` - The signed-in user id, if any; drives favorite flags
    ///
    /// ## Returns
    /// Mapped view models, or one of the three failure categories. See the
    /// module docs for the full decision tree.
    pub async fn businesses(
        &self,
        selector: &BusinessSelector,
        viewer: Option<&str>,
    ) -> FailureResult<Vec<Business>> {
        if !self.connectivity.is_online().await {
            debug!(selector = %selector, "Offline, answering from cache");
            return self.read_cached(selector).await;
        }

        let records = match self.source.fetch(selector, DEFAULT_PAGE_SIZE).await {
            Ok(records) => records,
            Err(err) if err.is_network() => {
                debug!(selector = %selector, error = %err, "Network drop mid-flight, falling back to cache");
                return self.read_cached(selector).await;
            }
            Err(err) => return Err(remote_failure(err)),
        };

        let favorite_ids = match viewer {
            Some(user_id) => match self.favorites.ids_for_user(user_id).await {
                Ok(ids) => ids,
                Err(err) if err.is_network() => {
                    debug!(error = %err, "Favorite lookup lost connectivity, falling back to cache");
                    return self.read_cached(selector).await;
                }
                Err(err) => return Err(remote_failure(err)),
            },
            None => HashSet::new(),
        };

        // Best effort: a failed write never spoils a successful fetch.
        let key = selector.cache_key();
        if let Err(err) = self.cache.put(&key, &records).await {
            warn!(key = %key, error = %err, "Cache write failed, serving fetched data anyway");
        }

        Ok(records
            .iter()
            .map(|r| mapper::map_business(r, &favorite_ids))
            .collect())
    }

    /// Answers a list read from the cached snapshot.
    ///
    /// Cached answers always carry `is_favorite == false`.
    async fn read_cached(&self, selector: &BusinessSelector) -> FailureResult<Vec<Business>> {
        let key = selector.cache_key();

        match self.cache.get(&key).await {
            Ok(Some(records)) => {
                debug!(key = %key, count = records.len(), "Served from cache");
                let no_favorites = HashSet::new();
                Ok(records
                    .iter()
                    .map(|r| mapper::map_business(r, &no_favorites))
                    .collect())
            }
            Ok(None) => Err(Failure::no_cached_data()),
            Err(err) => Err(Failure::cache(err.to_string())),
        }
    }

    /// Fetches the full detail page for a business. Online-only.
    pub async fn business_detail(
        &self,
        business_id: &str,
        viewer: Option<&str>,
    ) -> FailureResult<BusinessDetail> {
        if !self.connectivity.is_online().await {
            return Err(Failure::network("network unavailable"));
        }

        let record = self
            .source
            .detail(business_id)
            .await
            .map_err(remote_failure)?
            .ok_or_else(|| Failure::server(format!("business {} not found", business_id)))?;

        let is_favorite = match viewer {
            Some(user_id) => self
                .favorites
                .exists(user_id, business_id)
                .await
                .map_err(remote_failure)?,
            None => false,
        };

        Ok(mapper::map_business_detail(&record, is_favorite))
    }

    /// Registers a new listing. Pass-through write with failure mapping.
    pub async fn register_business(&self, record: &BusinessRecord) -> FailureResult<()> {
        self.source.register(record).await.map_err(remote_failure)
    }

    /// Applies a partial field update from the owner-facing editor.
    pub async fn update_business(&self, business_id: &str, fields: &Value) -> FailureResult<()> {
        self.source
            .update(business_id, fields)
            .await
            .map_err(remote_failure)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
