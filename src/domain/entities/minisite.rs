//! Minisite entity: a user-owned small content page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A minisite identified publicly by its `(business, location)` slug pair
/// and internally by a 24-character lowercase hex id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Minisite {
    pub id: String,
    pub business_slug: String,
    pub location_slug: String,
    pub title: String,
    pub owner_user_id: i64,
    pub status: MinisiteStatus,
    /// Version currently served on the public URL. `None` until first publish.
    pub current_version_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Publication state of a minisite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinisiteStatus {
    Draft,
    Published,
}

impl MinisiteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MinisiteStatus::Draft => "draft",
            MinisiteStatus::Published => "published",
        }
    }

    /// Parses the database representation. An unknown value is corrupt
    /// data and must fail the row rather than silently demote it.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(MinisiteStatus::Draft),
            "published" => Some(MinisiteStatus::Published),
            _ => None,
        }
    }
}


/// Parameters for creating a minisite. The id is assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewMinisite {
    pub business_slug: String,
    pub location_slug: String,
    pub title: String,
    pub owner_user_id: i64,
    /// Content of the initial draft version written in the same scope.
    pub site_json: serde_json::Value,
}
