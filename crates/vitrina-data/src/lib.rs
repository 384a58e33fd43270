//! # vitrina-data: Fallback Repository Layer
//!
//! The policy layer between screens and I/O. Every read or write a screen
//! issues goes through a repository or service in this crate, which decides
//! between the remote document store and the local snapshot cache and maps
//! every outcome into the [`Failure`](vitrina_core::Failure) taxonomy.
//!
//! ## The Fallback Read
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Business List Read, Decision By Decision                │
//! │                                                                         │
//! │  connectivity probe ──── offline ────────────────┐                      │
//! │        │ online                                  │                      │
//! │        ▼                                         ▼                      │
//! │  remote fetch ───── network error ────►  cache read                    │
//! │        │ ok                │                │    │                      │
//! │        │           other error              │    └── miss → Network     │
//! │        ▼                   ▼                │        error → Cache      │
//! │  favorite-id set        Server           hit: flags all false          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  best-effort cache write (failure logged, swallowed)                   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  mapped view models, flags = set membership                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`traits`] - The async seams (source, cache, connectivity, stores)
//! - [`adapters`] - Production trait impls over the remote/cache crates
//! - [`business`] - The fallback business repository
//! - [`favorites`] - Favorite toggle service
//! - [`reviews`] - Review list/submit service
//! - [`chat`] - Conversation and message reads

pub mod adapters;
pub mod business;
pub mod chat;
pub mod favorites;
pub mod reviews;
pub mod traits;

pub use business::BusinessRepository;
pub use chat::ChatService;
pub use favorites::FavoriteService;
pub use reviews::{NewReview, ReviewService};

use vitrina_core::Failure;
use vitrina_remote::RemoteError;

/// Maps a remote error into the screen-facing failure taxonomy.
///
/// Connectivity problems become `Failure::Network`; everything else
/// (rejections, malformed payloads) becomes `Failure::Server`.
pub(crate) fn remote_failure(err: RemoteError) -> Failure {
    if err.is_network() {
        Failure::network(err.to_string())
    } else {
        Failure::server(err.to_string())
    }
}
