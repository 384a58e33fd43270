//! # vitrina-app: Screen State Containers
//!
//! The in-memory state each screen binds to, one container per screen
//! concern. Containers are plain structs with reducer-style mutation
//! methods, wrapped in `Arc<Mutex<_>>` state handles because UI callbacks
//! and async completions touch them concurrently.
//!
//! ## Container Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        State Container Pattern                          │
//! │                                                                         │
//! │  UI event ──► XxxState::with_xxx_mut(|s| s.reduce(...)) ──► rebind     │
//! │                                                                         │
//! │  Every mutation goes through a named method on the inner struct; the   │
//! │  Mutex wrapper only adds locking. Reads clone small snapshots out      │
//! │  rather than holding the lock across a render.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`] - Current user
//! - [`loadable`] - The Idle/Loading/Ready/Failed screen-state primitive
//! - [`business_list`] - Browse screen state
//! - [`chat`] - Conversation state with the optimistic send lifecycle
//! - [`wishlist`] - Saved-place snapshots

pub mod business_list;
pub mod chat;
pub mod loadable;
pub mod session;
pub mod wishlist;

pub use business_list::{BusinessList, BusinessListState};
pub use chat::{ChatController, ChatStore, ChatThread};
pub use loadable::Loadable;
pub use session::{Session, SessionState};
pub use wishlist::{Wishlist, WishlistState};
