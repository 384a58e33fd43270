//! # Collection Gateways
//!
//! Typed, per-collection views over the [`DocumentClient`](crate::client::DocumentClient).
//!
//! ## Gateway Organization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Gateway              Collection(s)                                     │
//! │  ─────────────        ──────────────────────────────────────────        │
//! │  BusinessGateway      businesses                                        │
//! │  ReviewGateway        businesses/{id}/reviews                           │
//! │  FavoriteGateway      favorites (composite userId_businessId ids)       │
//! │  ChatGateway          conversations, conversations/{id}/messages        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every list read uses the fixed page size from vitrina-core; there is no
//! cursor-based pagination on the backend.

pub mod business;
pub mod chat;
pub mod favorite;
pub mod review;
