//! # Static Category Taxonomy
//!
//! The two-level category/subcategory tree plus per-category rating criteria.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Category Taxonomy                                  │
//! │                                                                         │
//! │  Category "restaurants" (icon: restaurant, sort: 0)                    │
//! │    ├── Subcategories: fine_dining, fast_food, cafe, bakery             │
//! │    └── Rating criteria: food, service, ambience, price                 │
//! │                                                                         │
//! │  Category "beauty" (icon: scissors, sort: 1)                           │
//! │    ├── Subcategories: hair_salon, barber, nails, spa                   │
//! │    └── Rating criteria: service, cleanliness, price                    │
//! │  ...                                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is compile-time seed data: no runtime mutation, no I/O. Businesses
//! reference categories by id; a dangling reference is not an error, the
//! display name simply fails to resolve (see [`crate::mapper`]).
//!
//! The rating criteria parameterize the review form per category - a
//! restaurant review asks about food and ambience, a repair shop review asks
//! about punctuality and workmanship.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::icon::IconId;

// =============================================================================
// Types
// =============================================================================

/// A second-level taxonomy node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
}

/// A named review sub-dimension (e.g. "Service") with an icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingCriterion {
    /// Stable key stored on review documents.
    pub key: String,
    /// Display label for the review form.
    pub label: String,
    pub icon: IconId,
}

/// A top-level taxonomy node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: IconId,
    /// Position in the browse screen's category rail.
    pub sort_order: i64,
    pub subcategories: Vec<Subcategory>,
    pub rating_criteria: Vec<RatingCriterion>,
}

// =============================================================================
// Seed Data
// =============================================================================

fn subcategory(id: &str, name: &str) -> Subcategory {
    Subcategory {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn criterion(key: &str, label: &str, icon: IconId) -> RatingCriterion {
    RatingCriterion {
        key: key.to_string(),
        label: label.to_string(),
        icon,
    }
}

fn build_categories() -> Vec<Category> {
    vec![
        Category {
            id: "restaurants".into(),
            name: "Restaurants".into(),
            icon: IconId::Restaurant,
            sort_order: 0,
            subcategories: vec![
                subcategory("fine_dining", "Fine Dining"),
                subcategory("fast_food", "Fast Food"),
                subcategory("cafe", "Café"),
                subcategory("bakery", "Bakery"),
            ],
            rating_criteria: vec![
                criterion("food", "Food", IconId::Restaurant),
                criterion("service", "Service", IconId::RoomService),
                criterion("ambience", "Ambience", IconId::Sparkles),
                criterion("price", "Price", IconId::Coin),
            ],
        },
        Category {
            id: "beauty".into(),
            name: "Beauty & Care".into(),
            icon: IconId::Scissors,
            sort_order: 1,
            subcategories: vec![
                subcategory("hair_salon", "Hair Salon"),
                subcategory("barber", "Barber"),
                subcategory("nails", "Nail Studio"),
                subcategory("spa", "Spa"),
            ],
            rating_criteria: vec![
                criterion("service", "Service", IconId::RoomService),
                criterion("cleanliness", "Cleanliness", IconId::Sparkles),
                criterion("price", "Price", IconId::Coin),
            ],
        },
        Category {
            id: "health".into(),
            name: "Health".into(),
            icon: IconId::HeartPulse,
            sort_order: 2,
            subcategories: vec![
                subcategory("dentist", "Dentist"),
                subcategory("physician", "Physician"),
                subcategory("physiotherapy", "Physiotherapy"),
                subcategory("optician", "Optician"),
            ],
            rating_criteria: vec![
                criterion("care", "Quality of Care", IconId::HeartPulse),
                criterion("wait_time", "Waiting Time", IconId::Clock),
                criterion("facilities", "Facilities", IconId::Sparkles),
            ],
        },
        Category {
            id: "home_services".into(),
            name: "Home Services".into(),
            icon: IconId::Wrench,
            sort_order: 3,
            subcategories: vec![
                subcategory("plumbing", "Plumbing"),
                subcategory("electrical", "Electrical"),
                subcategory("cleaning", "Cleaning"),
                subcategory("gardening", "Gardening"),
            ],
            rating_criteria: vec![
                criterion("punctuality", "Punctuality", IconId::Clock),
                criterion("workmanship", "Workmanship", IconId::Wrench),
                criterion("price", "Price", IconId::Coin),
            ],
        },
        Category {
            id: "auto".into(),
            name: "Automotive".into(),
            icon: IconId::Car,
            sort_order: 4,
            subcategories: vec![
                subcategory("repair_shop", "Repair Shop"),
                subcategory("car_wash", "Car Wash"),
                subcategory("tires", "Tires"),
                subcategory("detailing", "Detailing"),
            ],
            rating_criteria: vec![
                criterion("quality", "Quality", IconId::Star),
                criterion("honesty", "Honesty", IconId::Handshake),
                criterion("speed", "Turnaround", IconId::Clock),
            ],
        },
        Category {
            id: "shopping".into(),
            name: "Shopping".into(),
            icon: IconId::ShoppingBag,
            sort_order: 5,
            subcategories: vec![
                subcategory("clothing", "Clothing"),
                subcategory("electronics", "Electronics"),
                subcategory("groceries", "Groceries"),
                subcategory("organic", "Organic Market"),
            ],
            rating_criteria: vec![
                criterion("selection", "Selection", IconId::ShoppingBag),
                criterion("service", "Service", IconId::RoomService),
                criterion("price", "Price", IconId::Coin),
            ],
        },
    ]
}

// =============================================================================
// Lookups
// =============================================================================

/// Returns the full category list, ordered by `sort_order`.
pub fn categories() -> &'static [Category] {
    static CATEGORIES: OnceLock<Vec<Category>> = OnceLock::new();
    CATEGORIES
        .get_or_init(|| {
            let mut cats = build_categories();
            cats.sort_by_key(|c| c.sort_order);
            cats
        })
        .as_slice()
}

/// Looks up a category by id.
pub fn category_by_id(id: &str) -> Option<&'static Category> {
    categories().iter().find(|c| c.id == id)
}

/// Resolves a subcategory's display name within a category.
///
/// Returns `None` when either id dangles.
pub fn subcategory_name(category_id: &str, subcategory_id: &str) -> Option<&'static str> {
    category_by_id(category_id)?
        .subcategories
        .iter()
        .find(|s| s.id == subcategory_id)
        .map(|s| s.name.as_str())
}

/// Returns the rating criteria for a category's review form.
///
/// Unknown categories get an empty slice - the review form falls back to a
/// single overall rating.
pub fn criteria_for_category(category_id: &str) -> &'static [RatingCriterion] {
    category_by_id(category_id)
        .map(|c| c.rating_criteria.as_slice())
        .unwrap_or(&[])
}

// =============================================================================
// Unit Tests
// =============================================================================
