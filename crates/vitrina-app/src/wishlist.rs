//! # Wishlist State
//!
//! Saved-place snapshots. A wishlist entry freezes the place's display data
//! at save time (name, cover image, rating), so the list renders without
//! refetching and survives the place being edited or delisted.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use vitrina_core::{Business, WishlistItem};

/// The saved-place list.
#[derive(Debug, Clone, Default)]
pub struct Wishlist {
    items: Vec<WishlistItem>,
}

impl Wishlist {
    /// Saves a snapshot of a business. Saving an already-saved business
    /// refreshes its snapshot in place.
    pub fn add(&mut self, business: &Business) {
        let item = WishlistItem {
            business_id: business.id.clone(),
            name: business.name.clone(),
            image_url: business.image_urls.first().cloned(),
            rating: business.rating,
            saved_at: Utc::now(),
        };

        match self
            .items
            .iter_mut()
            .find(|i| i.business_id == business.id)
        {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    /// Removes a saved place; removing an absent id is a no-op.
    pub fn remove(&mut self, business_id: &str) {
        self.items.retain(|i| i.business_id != business_id);
    }

    pub fn contains(&self, business_id: &str) -> bool {
        self.items.iter().any(|i| i.business_id == business_id)
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }
}

/// Shared wishlist state.
#[derive(Debug, Clone, Default)]
pub struct WishlistState {
    wishlist: Arc<Mutex<Wishlist>>,
}

impl WishlistState {
    /// Creates an empty wishlist state.
    pub fn new() -> Self {
        WishlistState::default()
    }

    /// Executes a function with read access to the wishlist.
    pub fn with_wishlist<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Wishlist) -> R,
    {
        let wishlist = self.wishlist.lock().expect("Wishlist mutex poisoned");
        f(&wishlist)
    }

    /// Executes a function with write access to the wishlist.
    pub fn with_wishlist_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Wishlist) -> R,
    {
        let mut wishlist = self.wishlist.lock().expect("Wishlist mutex poisoned");
        f(&mut wishlist)
    }
}
