//! # vitrina-remote: Remote Document-Store Gateway
//!
//! Typed access to the managed backend's document collections.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Vitrina Remote Layer                                │
//! │                                                                         │
//! │  BusinessRepository (vitrina-data)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 vitrina-remote (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────────┐  ┌───────────────────┐  ┌─────────────────┐  │   │
//! │  │  │DocumentClient│  │ Gateways          │  │ Connectivity    │  │   │
//! │  │  │ (client.rs)  │  │ (gateway/*.rs)    │  │ (probe)         │  │   │
//! │  │  │              │  │                   │  │                 │  │   │
//! │  │  │ list/get/    │◄─│ businesses        │  │ GET /health     │  │   │
//! │  │  │ create/put/  │  │ favorites         │  │ short timeout   │  │   │
//! │  │  │ patch/delete │  │ reviews, chat     │  │ bool, no error  │  │   │
//! │  │  └──────────────┘  └───────────────────┘  └─────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Managed backend collections:                                          │
//! │    businesses (+ reviews subcollection), favorites,                    │
//! │    categories (+ subcategories), conversations (+ messages)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`client`] - The HTTP document client (filters, sort, limits)
//! - [`gateway`] - Per-collection typed gateways
//! - [`connectivity`] - The upfront online/offline probe
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Remote error types with network classification
//!
//! No retry, no backoff: a failed call is reported once and the screen binds
//! a manual retry action.

pub mod client;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod gateway;

pub use client::{DocumentClient, Filter, FilterOp, ListQuery, SortDirection};
pub use config::RemoteConfig;
pub use connectivity::HttpConnectivity;
pub use error::{RemoteError, RemoteResult};
pub use gateway::business::BusinessGateway;
pub use gateway::chat::ChatGateway;
pub use gateway::favorite::FavoriteGateway;
pub use gateway::review::ReviewGateway;
