//! Review entity: a visitor-submitted rating for a minisite.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One review attached to a minisite.
///
/// Reviews are submitted by visitors, so the author is free text rather
/// than a user reference; `created_by` is set only when the submitter was
/// signed in. Only `Approved` reviews appear in public listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub minisite_id: String,
    pub author_name: String,
    /// Star rating, 1.0 to 5.0 in half-star steps allowed by validation.
    pub rating: f64,
    pub body: String,
    pub status: ReviewStatus,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Moderation state of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }

    /// Parses the database representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ReviewStatus::Pending),
            "approved" => Some(ReviewStatus::Approved),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }
}

/// Parameters for adding a review. The id is assigned by the repository;
/// new reviews start out `Approved`, matching manual submissions.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub minisite_id: String,
    pub author_name: String,
    pub rating: f64,
    pub body: String,
    pub created_by: Option<i64>,
}
