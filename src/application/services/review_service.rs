//! Visitor review submission and listing.

use std::sync::Arc;

use serde_json::json;

use crate::application::commands::AddReviewCommand;
use crate::domain::entities::{NewReview, Review};
use crate::domain::repositories::{MinisiteRepository, ReviewRepository};
use crate::error::AppError;

/// Service for reviews attached to a minisite.
///
/// Reviews are a public surface: submission and listing only require that
/// the minisite exists, not that the caller owns it.
pub struct ReviewService {
    minisite_repository: Arc<dyn MinisiteRepository>,
    review_repository: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    pub fn new(
        minisite_repository: Arc<dyn MinisiteRepository>,
        review_repository: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            minisite_repository,
            review_repository,
        }
    }

    /// Adds a review to an existing minisite.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the minisite does not exist or is
    /// deleted.
    pub async fn add_review(&self, command: AddReviewCommand) -> Result<Review, AppError> {
        self.require_minisite(command.site_id()).await?;

        self.review_repository
            .add(NewReview {
                minisite_id: command.site_id().to_string(),
                author_name: command.author_name().to_string(),
                rating: command.rating(),
                body: command.body().to_string(),
                created_by: command.created_by(),
            })
            .await
    }

    /// Lists approved reviews for a minisite, newest first.
    pub async fn list_reviews(
        &self,
        site_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, AppError> {
        self.require_minisite(site_id).await?;

        self.review_repository
            .list_approved(site_id, limit, offset)
            .await
    }

    async fn require_minisite(&self, site_id: &str) -> Result<(), AppError> {
        self.minisite_repository
            .find_by_id(site_id)
            .await?
            .ok_or_else(|| AppError::not_found("Minisite not found", json!({ "id": site_id })))?;

        Ok(())
    }
}
