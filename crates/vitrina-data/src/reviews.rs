//! # Review Service
//!
//! List and submit reviews for a business. The review form is parameterized
//! by the category's rating criteria (see [`vitrina_core::taxonomy`]); the
//! submitted record carries one score per criterion the form displayed.

use tracing::debug;
use uuid::Uuid;

use crate::remote_failure;
use crate::traits::ReviewSource;
use vitrina_core::error::FailureResult;
use vitrina_core::mapper;
use vitrina_core::record::{CriterionScoreRecord, ReviewRecord, Timestamp};
use vitrina_core::{Review, DEFAULT_PAGE_SIZE};

/// A review as captured by the review form, before an id or timestamp is
/// assigned.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub business_id: String,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar_url: Option<String>,
    /// Overall rating, 1.0 to 5.0.
    pub rating: f64,
    pub body: String,
    /// One (criterion key, score) pair per category criterion on the form.
    pub criteria_scores: Vec<(String, f64)>,
}

impl NewReview {
    fn into_record(self) -> ReviewRecord {
        ReviewRecord {
            id: Uuid::new_v4().to_string(),
            business_id: self.business_id,
            author_id: self.author_id,
            author_name: self.author_name,
            author_avatar_url: self.author_avatar_url,
            rating: self.rating,
            body: self.body,
            criteria_scores: self
                .criteria_scores
                .into_iter()
                .map(|(criterion, score)| CriterionScoreRecord { criterion, score })
                .collect(),
            created_at: Timestamp::now(),
        }
    }
}

/// Service for per-business reviews.
#[derive(Debug, Clone)]
pub struct ReviewService<R> {
    source: R,
}

impl<R: ReviewSource> ReviewService<R> {
    /// Creates a new ReviewService.
    pub fn new(source: R) -> Self {
        ReviewService { source }
    }

    /// Lists a business's reviews, newest first, mapped for display.
    pub async fn reviews(&self, business_id: &str) -> FailureResult<Vec<Review>> {
        let records = self
            .source
            .for_business(business_id, DEFAULT_PAGE_SIZE)
            .await
            .map_err(remote_failure)?;

        Ok(records.iter().map(mapper::map_review).collect())
    }

    /// Submits a new review and returns its mapped view model.
    ///
    /// The id and creation instant are assigned client-side so the caller
    /// can render the review immediately after submission.
    pub async fn submit(&self, review: NewReview) -> FailureResult<Review> {
        let record = review.into_record();
        debug!(business_id = %record.business_id, id = %record.id, "Submitting review");

        self.source.submit(&record).await.map_err(remote_failure)?;
        Ok(mapper::map_review(&record))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use vitrina_core::Failure;
    use vitrina_remote::{RemoteError, RemoteResult};

    #[derive(Default)]
    struct FakeReviews {
        submitted: Mutex<Vec<ReviewRecord>>,
        reject: bool,
    }

    impl ReviewSource for &FakeReviews {
        async fn for_business(
            &self,
            business_id: &str,
            _limit: u32,
        ) -> RemoteResult<Vec<ReviewRecord>> {
            Ok(self
                .submitted
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.business_id == business_id)
                .cloned()
                .collect())
        }

        async fn submit(&self, review: &ReviewRecord) -> RemoteResult<()> {
            if self.reject {
                return Err(RemoteError::Server {
                    status: 403,
                    message: "forbidden".into(),
                });
            }
            self.submitted.lock().unwrap().push(review.clone());
            Ok(())
        }
    }

    fn new_review(business_id: &str) -> NewReview {
        NewReview {
            business_id: business_id.to_string(),
            author_id: "user-1".into(),
            author_name: "Dana".into(),
            author_avatar_url: None,
            rating: 4.0,
            body: "Great spot.".into(),
            criteria_scores: vec![("food".into(), 4.5), ("service".into(), 3.5)],
        }
    }

    #[tokio::test]
    async fn test_submit_assigns_id_and_persists_criteria_scores() {
        let source = FakeReviews::default();
        let service = ReviewService::new(&source);

        let review = service.submit(new_review("biz-1")).await.unwrap();
        assert!(!review.id.is_empty());

        let stored = source.submitted.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, review.id);
        assert_eq!(stored[0].criteria_scores.len(), 2);
        assert_eq!(stored[0].criteria_scores[0].criterion, "food");
    }

    #[tokio::test]
    async fn test_submitted_reviews_show_up_in_the_list() {
        let source = FakeReviews::default();
        let service = ReviewService::new(&source);

        service.submit(new_review("biz-1")).await.unwrap();
        service.submit(new_review("biz-2")).await.unwrap();

        let listed = service.reviews("biz-1").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].author_name, "Dana");
    }

    #[tokio::test]
    async fn test_rejected_submission_is_a_server_failure() {
        let source = FakeReviews {
            reject: true,
            ..Default::default()
        };
        let service = ReviewService::new(&source);

        let err = service.submit(new_review("biz-1")).await.unwrap_err();
        assert!(matches!(err, Failure::Server { .. }));
        assert!(source.submitted.lock().unwrap().is_empty());
    }
}
