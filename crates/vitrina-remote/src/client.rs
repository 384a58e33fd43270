//! # Document Client
//!
//! A thin typed wrapper over reqwest for the backend's document API.
//!
//! ## Wire Conventions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Document API Surface                               │
//! │                                                                         │
//! │  GET    {base}/v1/{collection}                 list (filters, sort,    │
//! │           ?filter=field:op:value&order_by=..    fixed limit)           │
//! │  GET    {base}/v1/{collection}/{id}            fetch one (404 → None)  │
//! │  POST   {base}/v1/{collection}                 create, server id       │
//! │  PUT    {base}/v1/{collection}/{id}            create/replace at id    │
//! │  PATCH  {base}/v1/{collection}/{id}            partial field update    │
//! │  DELETE {base}/v1/{collection}/{id}            remove                  │
//! │                                                                         │
//! │  List responses: { "documents": [ ... ] }                              │
//! │  Subcollections nest in the path:                                      │
//! │    businesses/{id}/reviews                                             │
//! │    conversations/{id}/messages                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The client knows nothing about entity semantics; the per-collection
//! gateways in [`crate::gateway`] build queries and choose types.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::RemoteConfig;
use crate::error::{RemoteError, RemoteResult};

// =============================================================================
// Query Building
// =============================================================================

/// Filter operators supported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Field equals value.
    Eq,
    /// Array field contains value (used for conversation participants).
    Contains,
}

impl FilterOp {
    fn as_token(&self) -> &'static str {
        match self {
            FilterOp::Eq => "eq",
            FilterOp::Contains => "contains",
        }
    }
}

/// A single field filter.
#[derive(Debug, Clone)]
pub struct Filter {
    pub field: String,
    pub op: FilterOp,
    pub value: String,
}

/// Sort direction for the single-field sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn as_token(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// A list query: filters, optional single-field sort, fixed limit.
///
/// ## Example
/// ```rust,ignore
/// let query = ListQuery::new(20)
///     .filter_eq("category_id", "beauty")
///     .order_by("rating", SortDirection::Descending);
/// ```
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub filters: Vec<Filter>,
    pub order_by: Option<(String, SortDirection)>,
    pub limit: u32,
}

impl ListQuery {
    /// Creates a query with the given page limit and no filters.
    pub fn new(limit: u32) -> Self {
        ListQuery {
            filters: Vec::new(),
            order_by: None,
            limit,
        }
    }

    /// Adds an equality filter.
    pub fn filter_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(Filter {
            field: field.into(),
            op: FilterOp::Eq,
            value: value.into(),
        });
        self
    }

    /// Adds an array-contains filter.
    pub fn filter_contains(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(Filter {
            field: field.into(),
            op: FilterOp::Contains,
            value: value.into(),
        });
        self
    }

    /// Sets the single-field sort.
    pub fn order_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by = Some((field.into(), direction));
        self
    }

    /// Renders the query-string pairs for the request.
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 2);

        for filter in &self.filters {
            pairs.push((
                "filter".to_string(),
                format!("{}:{}:{}", filter.field, filter.op.as_token(), filter.value),
            ));
        }

        if let Some((field, direction)) = &self.order_by {
            pairs.push(("order_by".to_string(), field.clone()));
            pairs.push(("direction".to_string(), direction.as_token().to_string()));
        }

        pairs.push(("limit".to_string(), self.limit.to_string()));
        pairs
    }
}

// =============================================================================
// Response Envelope
// =============================================================================

#[derive(Debug, serde::Deserialize)]
struct DocumentList<T> {
    documents: Vec<T>,
}

// =============================================================================
// Document Client
// =============================================================================

/// Typed HTTP client for the document API.
#[derive(Debug, Clone)]
pub struct DocumentClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl DocumentClient {
    /// Builds a client from configuration.
    pub fn new(config: &RemoteConfig) -> RemoteResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| RemoteError::InvalidConfig(e.to_string()))?;

        Ok(DocumentClient {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    /// Turns a non-success response into a `RemoteError::Server`.
    async fn check_status(response: reqwest::Response) -> RemoteResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(RemoteError::Server {
            status: status.as_u16(),
            message,
        })
    }

    /// Lists documents in a collection.
    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> RemoteResult<Vec<T>> {
        debug!(path = %path, limit = query.limit, "Listing documents");

        let response = self
            .authorize(self.http.get(self.url(path)))
            .query(&query.query_pairs())
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let list: DocumentList<T> = response.json().await?;
        Ok(list.documents)
    }

    /// Fetches one document by id. 404 maps to `None`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, id: &str) -> RemoteResult<Option<T>> {
        let response = self
            .authorize(self.http.get(self.url(&format!("{}/{}", path, id))))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::check_status(response).await?;
        Ok(Some(response.json().await?))
    }

    /// Creates a document; the backend assigns the id and returns the full
    /// document (including server-side timestamps).
    pub async fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> RemoteResult<T> {
        debug!(path = %path, "Creating document");

        let response = self
            .authorize(self.http.post(self.url(path)))
            .json(body)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Creates or replaces a document at a client-chosen id.
    pub async fn put<B: Serialize>(&self, path: &str, id: &str, body: &B) -> RemoteResult<()> {
        debug!(path = %path, id = %id, "Putting document");

        let response = self
            .authorize(self.http.put(self.url(&format!("{}/{}", path, id))))
            .json(body)
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// Applies a partial field update to a document.
    pub async fn patch(&self, path: &str, id: &str, fields: &serde_json::Value) -> RemoteResult<()> {
        debug!(path = %path, id = %id, "Patching document");

        let response = self
            .authorize(self.http.patch(self.url(&format!("{}/{}", path, id))))
            .json(fields)
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// Deletes a document. Deleting an absent document is not an error.
    pub async fn delete(&self, path: &str, id: &str) -> RemoteResult<()> {
        debug!(path = %path, id = %id, "Deleting document");

        let response = self
            .authorize(self.http.delete(self.url(&format!("{}/{}", path, id))))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }

        Self::check_status(response).await?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_render_filters_and_sort() {
        let query = ListQuery::new(20)
            .filter_eq("category_id", "beauty")
            .filter_contains("participant_ids", "user-1")
            .order_by("rating", SortDirection::Descending);

        let pairs = query.query_pairs();
        assert!(pairs.contains(&("filter".into(), "category_id:eq:beauty".into())));
        assert!(pairs.contains(&("filter".into(), "participant_ids:contains:user-1".into())));
        assert!(pairs.contains(&("order_by".into(), "rating".into())));
        assert!(pairs.contains(&("direction".into(), "desc".into())));
        assert!(pairs.contains(&("limit".into(), "20".into())));
    }

    #[test]
    fn test_url_building() {
        let config = RemoteConfig::new("https://api.example.com");
        let client = DocumentClient::new(&config).unwrap();
        assert_eq!(
            client.url("businesses/biz-1/reviews"),
            "https://api.example.com/v1/businesses/biz-1/reviews"
        );
    }
}
