//! In-memory review repository over [`MemoryStore`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{NewReview, Review, ReviewStatus};
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;
use crate::infrastructure::memory::store::MemoryStore;
use crate::infrastructure::memory::{decode, encode, review_key, review_prefix};

/// Memory-backed implementation of [`ReviewRepository`].
pub struct MemoryReviewRepository {
    store: Arc<MemoryStore>,
}

impl MemoryReviewRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReviewRepository for MemoryReviewRepository {
    async fn add(&self, new: NewReview) -> Result<Review, AppError> {
        let review = Review {
            id: self.store.next_id(),
            minisite_id: new.minisite_id,
            author_name: new.author_name,
            rating: new.rating,
            body: new.body,
            status: ReviewStatus::Approved,
            created_by: new.created_by,
            created_at: Utc::now(),
        };

        self.store
            .put(review_key(&review.minisite_id, review.id), encode(&review)?);

        Ok(review)
    }

    async fn list_approved(
        &self,
        minisite_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, AppError> {
        let mut reviews: Vec<Review> = self
            .store
            .scan_prefix(&review_prefix(minisite_id))
            .into_iter()
            .map(|(_, v)| decode(v))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|r: &Review| r.status == ReviewStatus::Approved)
            .collect();

        reviews.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(reviews
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}
