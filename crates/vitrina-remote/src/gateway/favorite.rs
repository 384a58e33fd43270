//! # Favorite Gateway
//!
//! The `favorites` collection: join records keyed `{userId}_{businessId}`.
//! Existence of the document is the whole relation - there are no other
//! meaningful fields and no ordering is relied upon.

use std::collections::HashSet;

use tracing::debug;

use crate::client::{DocumentClient, ListQuery};
use crate::error::RemoteResult;
use vitrina_core::record::FavoriteRecord;
use vitrina_core::DEFAULT_PAGE_SIZE;

const COLLECTION: &str = "favorites";

/// Gateway for the `favorites` collection.
#[derive(Debug, Clone)]
pub struct FavoriteGateway {
    client: DocumentClient,
}

impl FavoriteGateway {
    /// Creates a new FavoriteGateway.
    pub fn new(client: DocumentClient) -> Self {
        FavoriteGateway { client }
    }

    /// Returns the set of business ids the user has favorited.
    ///
    /// Fetched alongside a business list read so the mapper can compute
    /// per-item favorite flags by set membership.
    pub async fn ids_for_user(&self, user_id: &str) -> RemoteResult<HashSet<String>> {
        // Favorites have no pagination surface either; one page covers the
        // ids that can appear on a single list screen.
        let query = ListQuery::new(DEFAULT_PAGE_SIZE * 10).filter_eq("user_id", user_id);

        let records: Vec<FavoriteRecord> = self.client.list(COLLECTION, &query).await?;
        debug!(user_id = %user_id, count = records.len(), "Fetched favorite ids");

        Ok(records.into_iter().map(|r| r.business_id).collect())
    }

    /// Checks whether the join record exists.
    pub async fn exists(&self, user_id: &str, business_id: &str) -> RemoteResult<bool> {
        let doc_id = FavoriteRecord::doc_id(user_id, business_id);
        let record: Option<FavoriteRecord> = self.client.get(COLLECTION, &doc_id).await?;
        Ok(record.is_some())
    }

    /// Creates the join record (idempotent: PUT at the composite id).
    pub async fn add(&self, user_id: &str, business_id: &str) -> RemoteResult<()> {
        let record = FavoriteRecord::new(user_id, business_id);
        self.client.put(COLLECTION, &record.id, &record).await
    }

    /// Removes the join record (absent records are not an error).
    pub async fn remove(&self, user_id: &str, business_id: &str) -> RemoteResult<()> {
        let doc_id = FavoriteRecord::doc_id(user_id, business_id);
        self.client.delete(COLLECTION, &doc_id).await
    }
}
