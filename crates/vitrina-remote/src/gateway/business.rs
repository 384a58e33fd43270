//! # Business Gateway
//!
//! Queries and writes against the `businesses` collection.
//!
//! ## Key Operations
//! - Featured and per-category list reads (rating-sorted, fixed limit)
//! - Owner-facing reads and writes (register, partial update)
//! - Detail fetch for the business page

use tracing::debug;

use crate::client::{DocumentClient, ListQuery, SortDirection};
use crate::error::RemoteResult;
use vitrina_core::record::BusinessDetailRecord;
use vitrina_core::BusinessRecord;

const COLLECTION: &str = "businesses";

/// Gateway for the `businesses` collection.
#[derive(Debug, Clone)]
pub struct BusinessGateway {
    client: DocumentClient,
}

impl BusinessGateway {
    /// Creates a new BusinessGateway.
    pub fn new(client: DocumentClient) -> Self {
        BusinessGateway { client }
    }

    /// Lists featured businesses, best-rated first.
    pub async fn featured(&self, limit: u32) -> RemoteResult<Vec<BusinessRecord>> {
        let query = ListQuery::new(limit)
            .filter_eq("is_featured", "true")
            .order_by("rating", SortDirection::Descending);

        let records: Vec<BusinessRecord> = self.client.list(COLLECTION, &query).await?;
        debug!(count = records.len(), "Fetched featured businesses");
        Ok(records)
    }

    /// Lists businesses in one category, best-rated first.
    pub async fn by_category(&self, category_id: &str, limit: u32) -> RemoteResult<Vec<BusinessRecord>> {
        let query = ListQuery::new(limit)
            .filter_eq("category_id", category_id)
            .order_by("rating", SortDirection::Descending);

        let records: Vec<BusinessRecord> = self.client.list(COLLECTION, &query).await?;
        debug!(
            category_id = %category_id,
            count = records.len(),
            "Fetched category businesses"
        );
        Ok(records)
    }

    /// Lists the businesses owned by a user (the owner profile screen).
    pub async fn by_owner(&self, owner_id: &str, limit: u32) -> RemoteResult<Vec<BusinessRecord>> {
        let query = ListQuery::new(limit)
            .filter_eq("owner_id", owner_id)
            .order_by("created_at", SortDirection::Descending);

        self.client.list(COLLECTION, &query).await
    }

    /// Fetches the full detail document for a business.
    pub async fn detail(&self, business_id: &str) -> RemoteResult<Option<BusinessDetailRecord>> {
        self.client.get(COLLECTION, business_id).await
    }

    /// Registers a new business listing at its client-generated id.
    pub async fn register(&self, record: &BusinessRecord) -> RemoteResult<()> {
        debug!(id = %record.id, name = %record.name, "Registering business");
        self.client.put(COLLECTION, &record.id, record).await
    }

    /// Applies a partial field update from the owner-facing editor.
    ///
    /// `fields` holds only the changed snake_case fields, e.g.
    /// `{"description": "...", "is_open": false}`.
    pub async fn update(&self, business_id: &str, fields: &serde_json::Value) -> RemoteResult<()> {
        debug!(id = %business_id, "Updating business");
        self.client.patch(COLLECTION, business_id, fields).await
    }
}
