//! DTOs for minisite management endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::Minisite;

/// Compiled regex for slug validation: the characters the rewrite rule and
/// route key accept.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Request to create a minisite with its initial draft content.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMinisiteRequest {
    /// Business slug: first segment of the public URL.
    #[validate(length(min = 1, max = 100))]
    #[validate(regex(path = "*SLUG_REGEX"))]
    pub business_slug: String,

    /// Location slug: second segment of the public URL.
    #[validate(length(min = 1, max = 100))]
    #[validate(regex(path = "*SLUG_REGEX"))]
    pub location_slug: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Content of the initial draft version.
    pub site_json: Value,
}

/// JSON representation of a minisite returned by management endpoints.
#[derive(Debug, Serialize)]
pub struct MinisiteResponse {
    pub id: String,
    pub business_slug: String,
    pub location_slug: String,
    pub title: String,
    pub status: &'static str,
    pub route: String,
    pub current_version_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Minisite> for MinisiteResponse {
    fn from(m: Minisite) -> Self {
        let route = format!("/b/{}/{}", m.business_slug, m.location_slug);
        Self {
            id: m.id,
            business_slug: m.business_slug,
            location_slug: m.location_slug,
            title: m.title,
            status: m.status.as_str(),
            route,
            current_version_id: m.current_version_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Paginated listing response.
#[derive(Debug, Serialize)]
pub struct ListMinisitesResponse {
    pub items: Vec<MinisiteResponse>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// Public view of a minisite served on its friendly URL.
#[derive(Debug, Serialize)]
pub struct MinisiteViewResponse {
    pub business: String,
    pub location: String,
    pub title: String,
    pub content: Value,
}
