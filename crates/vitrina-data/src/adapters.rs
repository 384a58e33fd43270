//! # Production Seam Impls
//!
//! Implements the [`crate::traits`] seams for the concrete remote gateways,
//! the SQLite snapshot cache, and the HTTP connectivity probe. These are
//! pure delegation; all behavior lives in the wrapped crates.

use std::collections::HashSet;

use serde_json::Value;

use crate::traits::{
    BusinessCache, BusinessSource, ChatTransport, Connectivity, FavoriteStore, ReviewSource,
};
use vitrina_cache::CacheResult;
use vitrina_core::record::{
    BusinessDetailRecord, ConversationRecord, MessageRecord, ReviewRecord,
};
use vitrina_core::{BusinessRecord, BusinessSelector};
use vitrina_remote::{
    BusinessGateway, ChatGateway, FavoriteGateway, HttpConnectivity, RemoteResult, ReviewGateway,
};

impl BusinessSource for BusinessGateway {
    async fn fetch(
        &self,
        selector: &BusinessSelector,
        limit: u32,
    ) -> RemoteResult<Vec<BusinessRecord>> {
        match selector {
            BusinessSelector::Featured => self.featured(limit).await,
            BusinessSelector::Category(id) => self.by_category(id, limit).await,
        }
    }

    async fn detail(&self, business_id: &str) -> RemoteResult<Option<BusinessDetailRecord>> {
        BusinessGateway::detail(self, business_id).await
    }

    async fn register(&self, record: &BusinessRecord) -> RemoteResult<()> {
        BusinessGateway::register(self, record).await
    }

    async fn update(&self, business_id: &str, fields: &Value) -> RemoteResult<()> {
        BusinessGateway::update(self, business_id, fields).await
    }
}

impl BusinessCache for vitrina_cache::BusinessCache {
    async fn put(&self, key: &str, records: &[BusinessRecord]) -> CacheResult<()> {
        self.cache_businesses(key, records).await
    }

    async fn get(&self, key: &str) -> CacheResult<Option<Vec<BusinessRecord>>> {
        self.get_cached_businesses(key).await
    }
}

impl Connectivity for HttpConnectivity {
    async fn is_online(&self) -> bool {
        HttpConnectivity::is_online(self).await
    }
}

impl FavoriteStore for FavoriteGateway {
    async fn ids_for_user(&self, user_id: &str) -> RemoteResult<HashSet<String>> {
        FavoriteGateway::ids_for_user(self, user_id).await
    }

    async fn exists(&self, user_id: &str, business_id: &str) -> RemoteResult<bool> {
        FavoriteGateway::exists(self, user_id, business_id).await
    }

    async fn add(&self, user_id: &str, business_id: &str) -> RemoteResult<()> {
        FavoriteGateway::add(self, user_id, business_id).await
    }

    async fn remove(&self, user_id: &str, business_id: &str) -> RemoteResult<()> {
        FavoriteGateway::remove(self, user_id, business_id).await
    }
}

impl ReviewSource for ReviewGateway {
    async fn for_business(&self, business_id: &str, limit: u32) -> RemoteResult<Vec<ReviewRecord>> {
        ReviewGateway::for_business(self, business_id, limit).await
    }

    async fn submit(&self, review: &ReviewRecord) -> RemoteResult<()> {
        ReviewGateway::submit(self, review).await
    }
}

impl ChatTransport for ChatGateway {
    async fn conversations_for_user(
        &self,
        user_id: &str,
        limit: u32,
    ) -> RemoteResult<Vec<ConversationRecord>> {
        ChatGateway::conversations_for_user(self, user_id, limit).await
    }

    async fn messages(
        &self,
        conversation_id: &str,
        limit: u32,
    ) -> RemoteResult<Vec<MessageRecord>> {
        ChatGateway::messages(self, conversation_id, limit).await
    }

    async fn send(
        &self,
        conversation_id: &str,
        sender_id: &str,
        text: &str,
    ) -> RemoteResult<MessageRecord> {
        ChatGateway::send(self, conversation_id, sender_id, text).await
    }
}
