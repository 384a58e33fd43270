//! # Async Seams
//!
//! Consumer-defined traits for everything the repositories touch. Production
//! impls live in [`crate::adapters`]; tests swap in in-memory fakes to drive
//! the fallback policy through every branch.
//!
//! All methods run on the caller's task; none of them spawn.

// Repositories are consumed in-process on a single runtime; Send bounds on
// the returned futures are not required.
#![allow(async_fn_in_trait)]

use std::collections::HashSet;

use serde_json::Value;

use vitrina_cache::CacheResult;
use vitrina_core::record::{
    BusinessDetailRecord, ConversationRecord, MessageRecord, ReviewRecord,
};
use vitrina_core::{BusinessRecord, BusinessSelector};
use vitrina_remote::RemoteResult;

/// Remote reads and writes against the businesses collection.
pub trait BusinessSource {
    /// Fetches the list a selector describes, at most `limit` records.
    async fn fetch(
        &self,
        selector: &BusinessSelector,
        limit: u32,
    ) -> RemoteResult<Vec<BusinessRecord>>;

    /// Fetches the full detail document, `None` when absent.
    async fn detail(&self, business_id: &str) -> RemoteResult<Option<BusinessDetailRecord>>;

    /// Registers a new listing at its client-generated id.
    async fn register(&self, record: &BusinessRecord) -> RemoteResult<()>;

    /// Applies a partial field update.
    async fn update(&self, business_id: &str, fields: &Value) -> RemoteResult<()>;
}

/// The local snapshot cache, keyed by selector-derived cache keys.
pub trait BusinessCache {
    /// Overwrites the snapshot under `key`.
    async fn put(&self, key: &str, records: &[BusinessRecord]) -> CacheResult<()>;

    /// Reads the snapshot under `key`, `None` on a miss.
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<BusinessRecord>>>;
}

/// The upfront connectivity probe.
pub trait Connectivity {
    /// Best-effort reachability check; never errors.
    async fn is_online(&self) -> bool;
}

/// The favorites join collection.
pub trait FavoriteStore {
    /// The set of business ids the user has favorited.
    async fn ids_for_user(&self, user_id: &str) -> RemoteResult<HashSet<String>>;

    /// Whether the join record exists.
    async fn exists(&self, user_id: &str, business_id: &str) -> RemoteResult<bool>;

    /// Creates the join record.
    async fn add(&self, user_id: &str, business_id: &str) -> RemoteResult<()>;

    /// Removes the join record.
    async fn remove(&self, user_id: &str, business_id: &str) -> RemoteResult<()>;
}

/// The per-business review subcollection.
pub trait ReviewSource {
    /// Lists reviews for a business, newest first.
    async fn for_business(&self, business_id: &str, limit: u32) -> RemoteResult<Vec<ReviewRecord>>;

    /// Submits a review at its client-generated id.
    async fn submit(&self, review: &ReviewRecord) -> RemoteResult<()>;
}

/// The conversations collection and its message subcollections.
pub trait ChatTransport {
    /// Lists the conversations a user participates in, most recent first.
    async fn conversations_for_user(
        &self,
        user_id: &str,
        limit: u32,
    ) -> RemoteResult<Vec<ConversationRecord>>;

    /// Lists a conversation's messages, oldest first.
    async fn messages(
        &self,
        conversation_id: &str,
        limit: u32,
    ) -> RemoteResult<Vec<MessageRecord>>;

    /// Sends a message; resolves to the server-confirmed record.
    async fn send(
        &self,
        conversation_id: &str,
        sender_id: &str,
        text: &str,
    ) -> RemoteResult<MessageRecord>;
}
