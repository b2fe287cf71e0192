//! DTOs for version management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::entities::Version;

/// Request to create a draft version.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDraftRequest {
    #[validate(length(max = 100))]
    pub label: Option<String>,

    #[validate(length(max = 500))]
    pub comment: Option<String>,

    pub site_json: Value,
}

/// JSON representation of a version history entry.
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub id: i64,
    pub version_number: i64,
    pub status: &'static str,
    pub label: Option<String>,
    pub comment: Option<String>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Version> for VersionResponse {
    fn from(v: Version) -> Self {
        Self {
            id: v.id,
            version_number: v.version_number,
            status: v.status.as_str(),
            label: v.label,
            comment: v.comment,
            created_by: v.created_by,
            created_at: v.created_at,
            published_at: v.published_at,
        }
    }
}

/// Version listing response.
#[derive(Debug, Serialize)]
pub struct ListVersionsResponse {
    pub items: Vec<VersionResponse>,
}
