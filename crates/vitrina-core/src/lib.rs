//! # vitrina-core: Pure Domain Logic for Vitrina
//!
//! This crate is the **heart** of the Vitrina data layer. It contains the
//! domain types and pure transformations with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vitrina Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Screens (out of scope)                       │   │
//! │  │    Browse ──► Detail ──► Reviews ──► Chat ──► Profile          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               vitrina-app (state containers)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               vitrina-data (fallback repository)                │   │
//! │  └──────────────┬─────────────────────────────┬────────────────────┘   │
//! │                 │                             │                         │
//! │  ┌──────────────▼──────────┐   ┌──────────────▼────────────────────┐   │
//! │  │  vitrina-cache (SQLite) │   │  vitrina-remote (document store)  │   │
//! │  └─────────────────────────┘   └───────────────────────────────────┘   │
//! │                                                                         │
//! │  ★ vitrina-core (THIS CRATE) is shared by every layer above ★          │
//! │    NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`record`] - Wire/storage records as the document store persists them
//! - [`types`] - Presentation view models consumed by screens
//! - [`mapper`] - Pure record → view-model transformations
//! - [`taxonomy`] - Static category/subcategory/rating-criteria lookup
//! - [`icon`] - Explicit icon identifier enum
//! - [`error`] - The repository failure taxonomy
//! - [`query`] - Business query selectors and cache-key derivation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Failures**: Repository outcomes are typed, never strings or panics
//! 4. **Two Shapes Per Entity**: snake_case records on the wire, camelCase
//!    view models for screens, with mappers in between

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod icon;
pub mod mapper;
pub mod query;
pub mod record;
pub mod taxonomy;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vitrina_core::Business` instead of
// `use vitrina_core::types::Business`

pub use error::{Failure, FailureResult};
pub use icon::IconId;
pub use query::BusinessSelector;
pub use record::{BusinessRecord, Timestamp};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Fixed page size for remote list queries.
///
/// ## Why a constant?
/// The backend exposes no cursor-based pagination; every list read is a
/// single page of at most this many documents.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Namespace prefix for local cache keys.
///
/// ## Why a prefix?
/// `clear_cache` removes every entry under this namespace in one batch
/// without touching unrelated rows in the same database file.
pub const CACHE_NAMESPACE: &str = "vitrina_cache";
