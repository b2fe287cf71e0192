//! Repository trait for minisite reviews.

use crate::domain::entities::{NewReview, Review};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for visitor reviews.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgReviewRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryReviewRepository`] - in-memory implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Stores a new review.
    async fn add(&self, new: NewReview) -> Result<Review, AppError>;

    /// Lists approved reviews for a minisite, newest first.
    async fn list_approved(
        &self,
        minisite_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, AppError>;
}
