//! DTOs for review endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Review;

/// Request to add a review to a minisite.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, max = 160))]
    pub author_name: String,

    /// Star rating, 1.0 to 5.0.
    #[validate(range(min = 1.0, max = 5.0))]
    pub rating: f64,

    #[validate(length(min = 1, max = 4000))]
    pub body: String,
}

/// JSON representation of a review.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub author_name: String,
    pub rating: f64,
    pub body: String,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            author_name: r.author_name,
            rating: r.rating,
            body: r.body,
            status: r.status.as_str(),
            created_at: r.created_at,
        }
    }
}

/// Review listing response.
#[derive(Debug, Serialize)]
pub struct ListReviewsResponse {
    pub items: Vec<ReviewResponse>,
}
