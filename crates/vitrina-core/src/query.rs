//! # Business Query Selectors
//!
//! The logical query shapes the browse screen issues, and the deterministic
//! cache keys derived from them.
//!
//! ## Selector → Cache Key
//! ```text
//! BusinessSelector::Featured            →  "featured"
//! BusinessSelector::Category("beauty")  →  "category_beauty"
//! ```
//!
//! The repository uses the same key for the best-effort cache write after an
//! online read and for the cache fallback read while offline, so the two
//! paths always agree.

use serde::{Deserialize, Serialize};

/// A logical business list query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BusinessSelector {
    /// The featured carousel (no category filter).
    Featured,
    /// All businesses in one category.
    Category(String),
}

impl BusinessSelector {
    /// Derives the cache key for this selector.
    pub fn cache_key(&self) -> String {
        match self {
            BusinessSelector::Featured => "featured".to_string(),
            BusinessSelector::Category(id) => format!("category_{}", id),
        }
    }
}

impl std::fmt::Display for BusinessSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BusinessSelector::Featured => write!(f, "featured"),
            BusinessSelector::Category(id) => write!(f, "category:{}", id),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_cache_key() {
        assert_eq!(BusinessSelector::Featured.cache_key(), "featured");
    }

    #[test]
    fn test_category_cache_key_includes_id() {
        let selector = BusinessSelector::Category("beauty".into());
        assert_eq!(selector.cache_key(), "category_beauty");
    }

    #[test]
    fn test_distinct_categories_get_distinct_keys() {
        let a = BusinessSelector::Category("beauty".into());
        let b = BusinessSelector::Category("auto".into());
        assert_ne!(a.cache_key(), b.cache_key());
    }
}
