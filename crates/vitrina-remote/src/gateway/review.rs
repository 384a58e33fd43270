//! # Review Gateway
//!
//! The `reviews` subcollection of a business. Reviews are created by end
//! users through the category-parameterized review form and are otherwise
//! read-only in the client.

use tracing::debug;

use crate::client::{DocumentClient, ListQuery, SortDirection};
use crate::error::RemoteResult;
use vitrina_core::record::ReviewRecord;

fn collection(business_id: &str) -> String {
    format!("businesses/{}/reviews", business_id)
}

/// Gateway for per-business review subcollections.
#[derive(Debug, Clone)]
pub struct ReviewGateway {
    client: DocumentClient,
}

impl ReviewGateway {
    /// Creates a new ReviewGateway.
    pub fn new(client: DocumentClient) -> Self {
        ReviewGateway { client }
    }

    /// Lists reviews for a business, newest first.
    pub async fn for_business(&self, business_id: &str, limit: u32) -> RemoteResult<Vec<ReviewRecord>> {
        let query = ListQuery::new(limit).order_by("created_at", SortDirection::Descending);

        let records: Vec<ReviewRecord> =
            self.client.list(&collection(business_id), &query).await?;
        debug!(business_id = %business_id, count = records.len(), "Fetched reviews");
        Ok(records)
    }

    /// Submits a review at its client-generated id.
    pub async fn submit(&self, review: &ReviewRecord) -> RemoteResult<()> {
        debug!(business_id = %review.business_id, "Submitting review");
        self.client
            .put(&collection(&review.business_id), &review.id, review)
            .await
    }
}
