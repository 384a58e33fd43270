//! # Wire & Storage Records
//!
//! The shapes the remote document store returns and the local cache persists.
//!
//! ## Two Timestamp Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Why Two Business Record Shapes?                      │
//! │                                                                         │
//! │  Remote document store returns:                                        │
//! │    BusinessRecord { created_at: Timestamp { seconds, nanos }, ... }    │
//! │                                                                         │
//! │  The cache stores JSON strings and cannot persist rich timestamp       │
//! │  objects, so it flattens them to numeric milliseconds:                 │
//! │    CachedBusinessRecord { created_at_ms: i64, ... }                    │
//! │                                                                         │
//! │  On read the cache reconstructs Timestamp from the milliseconds, so    │
//! │  mapper code treats cached and live records uniformly.                 │
//! │                                                                         │
//! │  INVARIANT: the round trip through CachedBusinessRecord preserves      │
//! │  instants to millisecond precision.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names are snake_case on the wire; view models in [`crate::types`]
//! rename to camelCase.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Timestamp
// =============================================================================

/// Document-store timestamp: whole seconds since the Unix epoch plus a
/// nanosecond remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: u32,
}

impl Timestamp {
    /// Creates a timestamp for the current instant.
    pub fn now() -> Self {
        Timestamp::from_datetime(Utc::now())
    }

    /// Creates a timestamp from a chrono datetime.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Timestamp {
            seconds: dt.timestamp(),
            nanos: dt.timestamp_subsec_nanos(),
        }
    }

    /// Converts to a chrono datetime.
    pub fn to_datetime(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.seconds, self.nanos)
            .single()
            .unwrap_or_else(|| Utc.timestamp_opt(0, 0).single().unwrap_or_default())
    }

    /// Creates a timestamp from epoch milliseconds (cache read path).
    pub fn from_millis(ms: i64) -> Self {
        Timestamp {
            seconds: ms.div_euclid(1000),
            nanos: (ms.rem_euclid(1000) as u32) * 1_000_000,
        }
    }

    /// Returns epoch milliseconds (cache write path).
    ///
    /// Sub-millisecond precision is dropped here; the cache round trip
    /// keeps instants exact at millisecond granularity only.
    pub fn as_millis(&self) -> i64 {
        self.seconds * 1000 + i64::from(self.nanos / 1_000_000)
    }

    /// Truncates to millisecond precision.
    pub fn truncate_to_millis(&self) -> Self {
        Timestamp::from_millis(self.as_millis())
    }
}

// =============================================================================
// Business
// =============================================================================

/// A business document as the remote store returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    /// Document id (UUID v4 as string).
    pub id: String,

    /// Display name of the listing.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Taxonomy category id (must exist in the static taxonomy to resolve
    /// a display name; a dangling id simply resolves to none).
    pub category_id: String,

    /// Taxonomy subcategory id.
    pub subcategory_id: String,

    /// Human-readable location string.
    pub location: String,

    /// Optional coordinates.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Gallery image URLs (first entry is the cover image).
    pub image_urls: Vec<String>,

    /// Aggregate rating across all reviews.
    pub rating: f64,

    /// Number of reviews contributing to the aggregate rating.
    pub review_count: i64,

    /// Whether this listing appears in the featured carousel.
    pub is_featured: bool,

    /// Whether the business is currently open.
    pub is_open: bool,

    /// Owner user id.
    pub owner_id: String,

    /// When the listing was registered.
    pub created_at: Timestamp,

    /// When the listing was last updated.
    pub updated_at: Timestamp,
}

/// The cache-file shape of a business record: timestamps flattened to
/// numeric milliseconds because the storage layer persists plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedBusinessRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub subcategory_id: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_urls: Vec<String>,
    pub rating: f64,
    pub review_count: i64,
    pub is_featured: bool,
    pub is_open: bool,
    pub owner_id: String,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl From<&BusinessRecord> for CachedBusinessRecord {
    fn from(record: &BusinessRecord) -> Self {
        CachedBusinessRecord {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            category_id: record.category_id.clone(),
            subcategory_id: record.subcategory_id.clone(),
            location: record.location.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            image_urls: record.image_urls.clone(),
            rating: record.rating,
            review_count: record.review_count,
            is_featured: record.is_featured,
            is_open: record.is_open,
            owner_id: record.owner_id.clone(),
            created_at_ms: record.created_at.as_millis(),
            updated_at_ms: record.updated_at.as_millis(),
        }
    }
}

impl From<CachedBusinessRecord> for BusinessRecord {
    fn from(cached: CachedBusinessRecord) -> Self {
        BusinessRecord {
            id: cached.id,
            name: cached.name,
            description: cached.description,
            category_id: cached.category_id,
            subcategory_id: cached.subcategory_id,
            location: cached.location,
            latitude: cached.latitude,
            longitude: cached.longitude,
            image_urls: cached.image_urls,
            rating: cached.rating,
            review_count: cached.review_count,
            is_featured: cached.is_featured,
            is_open: cached.is_open,
            owner_id: cached.owner_id,
            created_at: Timestamp::from_millis(cached.created_at_ms),
            updated_at: Timestamp::from_millis(cached.updated_at_ms),
        }
    }
}

// =============================================================================
// Business Detail
// =============================================================================

/// Contact sub-object on a business detail document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
}

/// Per-criterion aggregate score on a detail document (e.g. "service": 4.3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRatingRecord {
    /// Criterion key from the category's rating criteria.
    pub criterion: String,
    pub score: f64,
}

/// Percentage of reviews per star bucket, index 0 = one star.
///
/// Producer-supplied; expected to sum to ~100 but not validated here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingDistribution {
    pub percentages: [f64; 5],
}

impl RatingDistribution {
    /// Returns the percentage for a star bucket (1-5), or 0.0 out of range.
    pub fn percent_for(&self, stars: u8) -> f64 {
        match stars {
            1..=5 => self.percentages[usize::from(stars) - 1],
            _ => 0.0,
        }
    }
}

/// A priced menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemRecord {
    pub name: String,
    pub description: Option<String>,
    /// Price in cents (smallest currency unit) - never floats for money.
    pub price_cents: i64,
}

/// An ordered group of menu items ("Starters", "Mains", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategoryRecord {
    pub name: String,
    pub sort_order: i64,
    pub items: Vec<MenuItemRecord>,
}

/// A delivery-service link on a business detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryServiceRecord {
    pub name: String,
    pub abbreviation: String,
    pub is_active: bool,
    pub url: String,
}

/// The full business detail document: the base record plus contact info,
/// rating breakdowns, menu and delivery links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessDetailRecord {
    #[serde(flatten)]
    pub business: BusinessRecord,
    #[serde(default)]
    pub contact: ContactRecord,
    #[serde(default)]
    pub category_ratings: Vec<CategoryRatingRecord>,
    #[serde(default)]
    pub rating_distribution: RatingDistribution,
    #[serde(default)]
    pub menu_categories: Vec<MenuCategoryRecord>,
    #[serde(default)]
    pub delivery_services: Vec<DeliveryServiceRecord>,
}

// =============================================================================
// Review
// =============================================================================

/// Score for one of the category's rating criteria within a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScoreRecord {
    pub criterion: String,
    pub score: f64,
}

/// A review document (lives in the `reviews` subcollection of a business).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: String,
    pub business_id: String,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar_url: Option<String>,
    pub rating: f64,
    pub body: String,
    /// Category-specific sub-ratings captured by the review form.
    #[serde(default)]
    pub criteria_scores: Vec<CriterionScoreRecord>,
    pub created_at: Timestamp,
}

// =============================================================================
// Favorite
// =============================================================================

/// A favorite join record. Existence = favorited; there are no other
/// meaningful fields and no ordering is relied upon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    /// Composite document id: `{user_id}_{business_id}`.
    pub id: String,
    pub user_id: String,
    pub business_id: String,
}

impl FavoriteRecord {
    /// Builds the composite document id for a (user, business) pair.
    pub fn doc_id(user_id: &str, business_id: &str) -> String {
        format!("{}_{}", user_id, business_id)
    }

    /// Creates the join record for a (user, business) pair.
    pub fn new(user_id: &str, business_id: &str) -> Self {
        FavoriteRecord {
            id: FavoriteRecord::doc_id(user_id, business_id),
            user_id: user_id.to_string(),
            business_id: business_id.to_string(),
        }
    }
}

// =============================================================================
// Conversation / Message
// =============================================================================

/// A conversation document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub id: String,
    pub participant_ids: Vec<String>,
    /// Preview of the most recent message.
    pub last_message: String,
    pub last_message_at: Timestamp,
    pub unread_count: i64,
}

/// A message document. Note there is no pending flag on the wire - pending
/// is a transient view-model state only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub text: String,
    pub created_at: Timestamp,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_millis_round_trip() {
        let ts = Timestamp {
            seconds: 1_700_000_123,
            nanos: 456_000_000,
        };
        let back = Timestamp::from_millis(ts.as_millis());
        assert_eq!(back, ts);
    }

    #[test]
    fn test_timestamp_sub_millisecond_precision_is_dropped() {
        // 456_789_123ns = 456ms + change; the round trip keeps exactly 456ms
        let ts = Timestamp {
            seconds: 1_700_000_123,
            nanos: 456_789_123,
        };
        let back = Timestamp::from_millis(ts.as_millis());
        assert_eq!(back.seconds, ts.seconds);
        assert_eq!(back.nanos, 456_000_000);
    }

    #[test]
    fn test_timestamp_before_epoch() {
        let ts = Timestamp::from_millis(-1_500);
        assert_eq!(ts.seconds, -2);
        assert_eq!(ts.nanos, 500_000_000);
        assert_eq!(ts.as_millis(), -1_500);
    }

    #[test]
    fn test_timestamp_datetime_conversion() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 45).unwrap();
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(ts.to_datetime(), dt);
    }

    fn sample_record() -> BusinessRecord {
        BusinessRecord {
            id: "biz-1".into(),
            name: "Casa Verde".into(),
            description: "Seasonal plates".into(),
            category_id: "restaurants".into(),
            subcategory_id: "fine_dining".into(),
            location: "12 Harbor St".into(),
            latitude: Some(40.71),
            longitude: Some(-74.0),
            image_urls: vec!["https://img.example/1.jpg".into()],
            rating: 4.6,
            review_count: 128,
            is_featured: true,
            is_open: true,
            owner_id: "user-9".into(),
            created_at: Timestamp::from_millis(1_700_000_000_123),
            updated_at: Timestamp::from_millis(1_700_000_500_456),
        }
    }

    #[test]
    fn test_cached_record_round_trip_preserves_instants() {
        let record = sample_record();
        let cached = CachedBusinessRecord::from(&record);
        let restored = BusinessRecord::from(cached);

        assert_eq!(restored, record);
        assert_eq!(
            restored.created_at.as_millis(),
            record.created_at.as_millis()
        );
        assert_eq!(
            restored.updated_at.as_millis(),
            record.updated_at.as_millis()
        );
    }

    #[test]
    fn test_favorite_doc_id_is_composite() {
        let fav = FavoriteRecord::new("user-1", "biz-2");
        assert_eq!(fav.id, "user-1_biz-2");
        assert_eq!(FavoriteRecord::doc_id("user-1", "biz-2"), fav.id);
    }

    #[test]
    fn test_rating_distribution_buckets() {
        let dist = RatingDistribution {
            percentages: [5.0, 5.0, 10.0, 30.0, 50.0],
        };
        assert_eq!(dist.percent_for(1), 5.0);
        assert_eq!(dist.percent_for(5), 50.0);
        assert_eq!(dist.percent_for(0), 0.0);
        assert_eq!(dist.percent_for(6), 0.0);
    }

    #[test]
    fn test_detail_record_optional_sections_default() {
        // A detail document missing menu/delivery sections still parses
        let json = serde_json::json!({
            "id": "biz-1",
            "name": "Casa Verde",
            "description": "Seasonal plates",
            "category_id": "restaurants",
            "subcategory_id": "fine_dining",
            "location": "12 Harbor St",
            "latitude": null,
            "longitude": null,
            "image_urls": [],
            "rating": 4.6,
            "review_count": 128,
            "is_featured": true,
            "is_open": true,
            "owner_id": "user-9",
            "created_at": {"seconds": 1, "nanos": 0},
            "updated_at": {"seconds": 2, "nanos": 0}
        });

        let detail: BusinessDetailRecord = serde_json::from_value(json).unwrap();
        assert!(detail.menu_categories.is_empty());
        assert!(detail.delivery_services.is_empty());
        assert_eq!(detail.contact, ContactRecord::default());
    }
}
