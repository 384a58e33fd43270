//! # Favorite Service
//!
//! The favorite toggle over the join collection.
//!
//! ## Toggle Semantics
//! Read-then-write: check whether the join record exists, then add or
//! remove it, and report the state after the write. The two steps are not
//! atomic; a rapid double toggle can interleave, and the last write wins.
//! That race is accepted - the record either exists or it does not, and a
//! subsequent read converges.

use tracing::debug;

use crate::remote_failure;
use crate::traits::FavoriteStore;
use vitrina_core::error::FailureResult;

/// Service wrapping the favorites join collection.
#[derive(Debug, Clone)]
pub struct FavoriteService<F> {
    store: F,
}

impl<F: FavoriteStore> FavoriteService<F> {
    /// Creates a new FavoriteService.
    pub fn new(store: F) -> Self {
        FavoriteService { store }
    }

    /// Flips the favorite state for a (user, business) pair.
    ///
    /// ## Returns
    /// The state after the toggle: `true` when the business is now
    /// favorited, `false` when it is not.
    pub async fn toggle(&self, user_id: &str, business_id: &str) -> FailureResult<bool> {
        let currently = self
            .store
            .exists(user_id, business_id)
            .await
            .map_err(remote_failure)?;

        if currently {
            self.store
                .remove(user_id, business_id)
                .await
                .map_err(remote_failure)?;
        } else {
            self.store
                .add(user_id, business_id)
                .await
                .map_err(remote_failure)?;
        }

        debug!(
            user_id = %user_id,
            business_id = %business_id,
            favorited = !currently,
            "Toggled favorite"
        );
        Ok(!currently)
    }

    /// Reads the current favorite state without changing it.
    pub async fn is_favorite(&self, user_id: &str, business_id: &str) -> FailureResult<bool> {
        self.store
            .exists(user_id, business_id)
            .await
            .map_err(remote_failure)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    use vitrina_core::Failure;
    use vitrina_remote::{RemoteError, RemoteResult};

    #[derive(Default)]
    struct FakeFavorites {
        ids: Mutex<HashSet<String>>,
        network_down: bool,
    }

    impl FavoriteStore for &FakeFavorites {
        async fn ids_for_user(&self, _user_id: &str) -> RemoteResult<HashSet<String>> {
            Ok(self.ids.lock().unwrap().clone())
        }

        async fn exists(&self, _user_id: &str, business_id: &str) -> RemoteResult<bool> {
            if self.network_down {
                return Err(RemoteError::Network("offline".into()));
            }
            Ok(self.ids.lock().unwrap().contains(business_id))
        }

        async fn add(&self, _user_id: &str, business_id: &str) -> RemoteResult<()> {
            self.ids.lock().unwrap().insert(business_id.to_string());
            Ok(())
        }

        async fn remove(&self, _user_id: &str, business_id: &str) -> RemoteResult<()> {
            self.ids.lock().unwrap().remove(business_id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_toggle_reports_the_new_state() {
        let store = FakeFavorites::default();
        let service = FavoriteService::new(&store);

        assert!(service.toggle("user-1", "biz-1").await.unwrap());
        assert!(service.is_favorite("user-1", "biz-1").await.unwrap());

        assert!(!service.toggle("user-1", "biz-1").await.unwrap());
        assert!(!service.is_favorite("user-1", "biz-1").await.unwrap());
    }

    #[tokio::test]
    async fn test_double_toggle_restores_the_original_state() {
        let store = FakeFavorites::default();
        let service = FavoriteService::new(&store);

        let before = service.is_favorite("user-1", "biz-1").await.unwrap();
        service.toggle("user-1", "biz-1").await.unwrap();
        service.toggle("user-1", "biz-1").await.unwrap();
        let after = service.is_favorite("user-1", "biz-1").await.unwrap();

        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_offline_toggle_is_a_network_failure() {
        let store = FakeFavorites {
            network_down: true,
            ..Default::default()
        };
        let service = FavoriteService::new(&store);

        let err = service.toggle("user-1", "biz-1").await.unwrap_err();
        assert!(matches!(err, Failure::Network { .. }));
    }
}
