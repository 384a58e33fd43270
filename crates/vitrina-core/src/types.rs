//! # View Models
//!
//! The camelCase presentation shapes screens render. Produced exclusively by
//! [`crate::mapper`] from wire records; never parsed back off the wire.
//!
//! ## Record vs View Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BusinessRecord (wire)              Business (view model)               │
//! │  ───────────────────────            ─────────────────────               │
//! │  category_id: "restaurants"    ──►  categoryId + categoryName           │
//! │  created_at: Timestamp{..}     ──►  createdAt: DateTime<Utc>            │
//! │  (no favorite field)           ──►  isFavorite (computed per viewer)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `is_favorite` is never persisted on the business document - it is the
//! intersection of the record id with the viewing user's favorite-id set,
//! computed at map time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::icon::IconId;
use crate::record::RatingDistribution;

// =============================================================================
// Business
// =============================================================================

/// Geographic coordinates of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A directory listing as the browse screen renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category_id: String,
    /// Resolved from the static taxonomy; `None` when the id dangles.
    pub category_name: Option<String>,
    pub subcategory_id: String,
    pub subcategory_name: Option<String>,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub image_urls: Vec<String>,
    pub rating: f64,
    pub review_count: i64,
    pub is_featured: bool,
    pub is_open: bool,
    pub owner_id: String,
    /// Computed per viewer; always `false` for offline (cached) reads.
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Business Detail
// =============================================================================

/// Contact block on the detail page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
}

/// A named sub-rating row on the detail page ("Service ★ 4.3").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRating {
    pub key: String,
    /// Display label resolved from the category's rating criteria; falls
    /// back to the raw key when the criterion is unknown.
    pub label: String,
    pub icon: IconId,
    pub score: f64,
}

/// A priced menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
}

/// An ordered menu section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// An external delivery-service link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryService {
    pub name: String,
    pub abbreviation: String,
    pub is_active: bool,
    pub url: String,
}

/// Everything the detail page renders: the listing plus contact info,
/// rating breakdowns, menu sections and delivery links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetail {
    pub business: Business,
    pub contact: Contact,
    pub category_ratings: Vec<CategoryRating>,
    pub rating_distribution: RatingDistribution,
    pub menu_categories: Vec<MenuCategory>,
    pub delivery_services: Vec<DeliveryService>,
}

// =============================================================================
// Review
// =============================================================================

/// A review as the detail page renders it. Read-only in the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar_url: Option<String>,
    pub rating: f64,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Conversation / Message
// =============================================================================

/// Delivery state of an outgoing message.
///
/// Pending exists only in memory for optimistic UI - it is never written to
/// the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageStatus {
    /// Locally appended, awaiting server confirmation.
    Pending,
    /// Confirmed by the server (carries the server-assigned id).
    Confirmed,
}

/// A chat message as the conversation screen renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub text: String,
    pub sent_at: DateTime<Utc>,
    pub status: MessageStatus,
}

/// A conversation row on the inbox screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub participant_ids: Vec<String>,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
    pub unread_count: i64,
}

// =============================================================================
// Wishlist
// =============================================================================

/// A saved-place snapshot. Distinct from favorites: the wishlist freezes the
/// place's name/image/rating at save time rather than referencing the live
/// document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub business_id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub rating: f64,
    pub saved_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_serializes_camel_case() {
        let business = Business {
            id: "b1".into(),
            name: "Casa Verde".into(),
            description: String::new(),
            category_id: "restaurants".into(),
            category_name: Some("Restaurants".into()),
            subcategory_id: "cafe".into(),
            subcategory_name: Some("Café".into()),
            location: "Harbor St".into(),
            coordinates: None,
            image_urls: vec![],
            rating: 4.5,
            review_count: 10,
            is_featured: false,
            is_open: true,
            owner_id: "u1".into(),
            is_favorite: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&business).unwrap();
        assert!(json.get("categoryId").is_some());
        assert!(json.get("isFavorite").is_some());
        assert!(json.get("category_id").is_none());
    }

    #[test]
    fn test_message_status_serialization() {
        assert_eq!(
            serde_json::to_string(&MessageStatus::Pending).unwrap(),
            "\"pending\""
        );
    }
}
