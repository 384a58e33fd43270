//! # Business List State
//!
//! Browse-screen state: the current selector's businesses behind a
//! [`Loadable`], updated through reducer methods as the repository call
//! progresses.

use std::sync::{Arc, Mutex};

use crate::loadable::Loadable;
use vitrina_core::{Business, BusinessSelector};

/// State for one business list region.
#[derive(Debug, Clone, Default)]
pub struct BusinessList {
    selector: Option<BusinessSelector>,
    state: Loadable<Vec<Business>>,
}

impl BusinessList {
    /// Marks a load as started for a selector, discarding any prior error.
    pub fn begin_load(&mut self, selector: BusinessSelector) {
        self.selector = Some(selector);
        self.state = Loadable::Loading;
    }

    /// Stores a successful result.
    pub fn finish_load(&mut self, businesses: Vec<Business>) {
        self.state = Loadable::Ready(businesses);
    }

    /// Stores a failure message.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.state = Loadable::Failed(message.into());
    }

    /// Flips one item's favorite flag in place (after a toggle succeeds).
    pub fn set_favorite(&mut self, business_id: &str, favorited: bool) {
        if let Loadable::Ready(businesses) = &mut self.state {
            if let Some(business) = businesses.iter_mut().find(|b| b.id == business_id) {
                business.is_favorite = favorited;
            }
        }
    }

    /// The selector the current state belongs to.
    pub fn selector(&self) -> Option<&BusinessSelector> {
        self.selector.as_ref()
    }

    /// The loaded businesses; empty until ready.
    pub fn businesses(&self) -> &[Business] {
        self.state.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }
}

/// Shared browse-screen state.
#[derive(Debug, Clone, Default)]
pub struct BusinessListState {
    list: Arc<Mutex<BusinessList>>,
}

impl BusinessListState {
    /// Creates an empty list state.
    pub fn new() -> Self {
        BusinessListState::default()
    }

    /// Executes a function with read access to the list.
    pub fn with_list<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BusinessList) -> R,
    {
        let list = self.list.lock().expect("Business list mutex poisoned");
        f(&list)
    }

    /// Executes a function with write access to the list.
    pub fn with_list_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BusinessList) -> R,
    {
        let mut list = self.list.lock().expect("Business list mutex poisoned");
        f(&mut list)
    }
}
