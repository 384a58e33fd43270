//! # vitrina-cache: Local Cache Store
//!
//! Namespaced key-value persistence of serialized business record lists,
//! used as the offline fallback for the business repository.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vitrina Cache Flow                               │
//! │                                                                         │
//! │  BusinessRepository (vitrina-data)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  vitrina-cache (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌─────────────┐  │   │
//! │  │   │  CacheStore   │    │ BusinessCache  │    │   Schema    │  │   │
//! │  │   │  (store.rs)   │    │ (business.rs)  │    │ (schema.rs) │  │   │
//! │  │   │               │    │                │    │             │  │   │
//! │  │   │ SqlitePool    │◄───│ cache / get /  │    │ inline DDL  │  │   │
//! │  │   │ WAL mode      │    │ clear          │    │ idempotent  │  │   │
//! │  │   └───────────────┘    └────────────────┘    └─────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file: one row per cache key, JSON array payload                │
//! │    vitrina_cache:featured        → [CachedBusinessRecord, ...]         │
//! │    vitrina_cache:category_beauty → [CachedBusinessRecord, ...]         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Connection pool creation and configuration
//! - [`schema`] - Inline idempotent schema
//! - [`business`] - The business snapshot cache
//! - [`error`] - Cache error types
//!
//! No eviction policy, no size bound, no TTL - entries live until explicitly
//! overwritten or cleared.

pub mod business;
pub mod error;
pub mod schema;
pub mod store;

pub use business::BusinessCache;
pub use error::{CacheError, CacheResult};
pub use store::{CacheConfig, CacheStore};
