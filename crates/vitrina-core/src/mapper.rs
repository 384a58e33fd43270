//! # Record → View-Model Mappers
//!
//! Pure transformations from wire/storage records to presentation shapes.
//!
//! ## Responsibilities
//! - snake_case persisted fields → camelCase view fields (via the target
//!   struct's serde attributes)
//! - `Timestamp` objects → native `DateTime<Utc>` values
//! - Category/subcategory id → display name through the static taxonomy
//!   (dangling ids resolve to `None`, never an error)
//! - Favorite flag = membership of the record id in the viewer's
//!   favorite-id set (always `false` for cached/offline reads, which map
//!   with an empty set)

use std::collections::HashSet;

use crate::record::{
    BusinessDetailRecord, BusinessRecord, ConversationRecord, MessageRecord, ReviewRecord,
};
use crate::taxonomy;
use crate::types::{
    Business, BusinessDetail, CategoryRating, Contact, Conversation, Coordinates, DeliveryService,
    MenuCategory, MenuItem, Message, MessageStatus, Review,
};

/// Maps a business record to its view model.
///
/// `favorite_ids` is the viewing user's favorite business-id set; pass an
/// empty set for anonymous viewers and for offline reads.
pub fn map_business(record: &BusinessRecord, favorite_ids: &HashSet<String>) -> Business {
    let coordinates = match (record.latitude, record.longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinates {
            latitude,
            longitude,
        }),
        _ => None,
    };

    Business {
        id: record.id.clone(),
        name: record.name.clone(),
        description: record.description.clone(),
        category_id: record.category_id.clone(),
        category_name: taxonomy::category_by_id(&record.category_id).map(|c| c.name.clone()),
        subcategory_id: record.subcategory_id.clone(),
        subcategory_name: taxonomy::subcategory_name(&record.category_id, &record.subcategory_id)
            .map(str::to_string),
        location: record.location.clone(),
        coordinates,
        image_urls: record.image_urls.clone(),
        rating: record.rating,
        review_count: record.review_count,
        is_featured: record.is_featured,
        is_open: record.is_open,
        owner_id: record.owner_id.clone(),
        is_favorite: favorite_ids.contains(&record.id),
        created_at: record.created_at.to_datetime(),
        updated_at: record.updated_at.to_datetime(),
    }
}

/// Maps a full detail record. `is_favorite` is resolved separately by the
/// repository (existence check against the favorites collection).
pub fn map_business_detail(record: &BusinessDetailRecord, is_favorite: bool) -> BusinessDetail {
    let mut favorite_ids = HashSet::new();
    if is_favorite {
        favorite_ids.insert(record.business.id.clone());
    }

    let criteria = taxonomy::criteria_for_category(&record.business.category_id);

    let category_ratings = record
        .category_ratings
        .iter()
        .map(|r| {
            let criterion = criteria.iter().find(|c| c.key == r.criterion);
            CategoryRating {
                key: r.criterion.clone(),
                label: criterion
                    .map(|c| c.label.clone())
                    .unwrap_or_else(|| r.criterion.clone()),
                icon: criterion.map(|c| c.icon).unwrap_or(crate::IconId::Star),
                score: r.score,
            }
        })
        .collect();

    let mut menu: Vec<_> = record.menu_categories.clone();
    menu.sort_by_key(|c| c.sort_order);
    let menu_categories = menu
        .into_iter()
        .map(|c| MenuCategory {
            name: c.name,
            items: c
                .items
                .into_iter()
                .map(|i| MenuItem {
                    name: i.name,
                    description: i.description,
                    price_cents: i.price_cents,
                })
                .collect(),
        })
        .collect();

    let delivery_services = record
        .delivery_services
        .iter()
        .map(|d| DeliveryService {
            name: d.name.clone(),
            abbreviation: d.abbreviation.clone(),
            is_active: d.is_active,
            url: d.url.clone(),
        })
        .collect();

    BusinessDetail {
        business: map_business(&record.business, &favorite_ids),
        contact: Contact {
            phone: record.contact.phone.clone(),
            email: record.contact.email.clone(),
            website: record.contact.website.clone(),
            instagram: record.contact.instagram.clone(),
            facebook: record.contact.facebook.clone(),
        },
        category_ratings,
        rating_distribution: record.rating_distribution.clone(),
        menu_categories,
        delivery_services,
    }
}

/// Maps a review record.
pub fn map_review(record: &ReviewRecord) -> Review {
    Review {
        id: record.id.clone(),
        author_id: record.author_id.clone(),
        author_name: record.author_name.clone(),
        author_avatar_url: record.author_avatar_url.clone(),
        rating: record.rating,
        body: record.body.clone(),
        created_at: record.created_at.to_datetime(),
    }
}

/// Maps a conversation record.
pub fn map_conversation(record: &ConversationRecord) -> Conversation {
    Conversation {
        id: record.id.clone(),
        participant_ids: record.participant_ids.clone(),
        last_message: record.last_message.clone(),
        last_message_at: record.last_message_at.to_datetime(),
        unread_count: record.unread_count,
    }
}

/// Maps a server-confirmed message record. Messages mapped from the wire are
/// always Confirmed - Pending exists only for optimistic local entries.
pub fn map_message(record: &MessageRecord) -> Message {
    Message {
        id: record.id.clone(),
        conversation_id: record.conversation_id.clone(),
        sender_id: record.sender_id.clone(),
        text: record.text.clone(),
        sent_at: record.created_at.to_datetime(),
        status: MessageStatus::Confirmed,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{CategoryRatingRecord, Timestamp};

    fn record(id: &str, category_id: &str, subcategory_id: &str) -> BusinessRecord {
        BusinessRecord {
            id: id.to_string(),
            name: "Casa Verde".into(),
            description: "Seasonal plates".into(),
            category_id: category_id.to_string(),
            subcategory_id: subcategory_id.to_string(),
            location: "12 Harbor St".into(),
            latitude: Some(40.7),
            longitude: Some(-74.0),
            image_urls: vec![],
            rating: 4.6,
            review_count: 12,
            is_featured: true,
            is_open: true,
            owner_id: "user-9".into(),
            created_at: Timestamp::from_millis(1_700_000_000_000),
            updated_at: Timestamp::from_millis(1_700_000_000_000),
        }
    }

    #[test]
    fn test_favorite_flag_is_set_membership() {
        let r = record("biz-1", "restaurants", "cafe");
        let favorites: HashSet<String> = ["biz-1".to_string()].into();

        assert!(map_business(&r, &favorites).is_favorite);
        assert!(!map_business(&r, &HashSet::new()).is_favorite);
    }

    #[test]
    fn test_display_names_resolve_through_taxonomy() {
        let b = map_business(&record("b", "restaurants", "cafe"), &HashSet::new());
        assert_eq!(b.category_name.as_deref(), Some("Restaurants"));
        assert_eq!(b.subcategory_name.as_deref(), Some("Café"));
    }

    #[test]
    fn test_dangling_category_maps_to_none() {
        let b = map_business(&record("b", "time_travel", "delorean"), &HashSet::new());
        assert!(b.category_name.is_none());
        assert!(b.subcategory_name.is_none());
    }

    #[test]
    fn test_coordinates_require_both_axes() {
        let mut r = record("b", "restaurants", "cafe");
        r.longitude = None;
        let b = map_business(&r, &HashSet::new());
        assert!(b.coordinates.is_none());
    }

    #[test]
    fn test_timestamps_become_datetimes() {
        let b = map_business(&record("b", "restaurants", "cafe"), &HashSet::new());
        assert_eq!(b.created_at.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_detail_rating_labels_resolve_from_criteria() {
        let detail = BusinessDetailRecord {
            business: record("b", "restaurants", "cafe"),
            contact: Default::default(),
            category_ratings: vec![
                CategoryRatingRecord {
                    criterion: "service".into(),
                    score: 4.2,
                },
                CategoryRatingRecord {
                    criterion: "mystery".into(),
                    score: 3.0,
                },
            ],
            rating_distribution: Default::default(),
            menu_categories: vec![],
            delivery_services: vec![],
        };

        let mapped = map_business_detail(&detail, true);
        assert!(mapped.business.is_favorite);

        let service = &mapped.category_ratings[0];
        assert_eq!(service.label, "Service");

        // Unknown criterion falls back to the raw key and a star icon
        let mystery = &mapped.category_ratings[1];
        assert_eq!(mystery.label, "mystery");
        assert_eq!(mystery.icon, crate::IconId::Star);
    }

    #[test]
    fn test_wire_messages_map_as_confirmed() {
        let record = MessageRecord {
            id: "m1".into(),
            conversation_id: "c1".into(),
            sender_id: "u1".into(),
            text: "hello".into(),
            created_at: Timestamp::from_millis(1_700_000_000_000),
        };
        assert_eq!(map_message(&record).status, MessageStatus::Confirmed);
    }
}
