//! Version entity: an immutable content snapshot of a minisite.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in a minisite's version history.
///
/// Version numbers are monotonic per minisite. At most one version per
/// minisite is `Published` at a time; publishing a draft archives the
/// previously published version in the same transaction scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    pub id: i64,
    pub minisite_id: String,
    pub version_number: i64,
    pub status: VersionStatus,
    pub label: Option<String>,
    pub comment: Option<String>,
    pub site_json: serde_json::Value,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionStatus {
    Draft,
    Published,
    Archived,
}

impl VersionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionStatus::Draft => "draft",
            VersionStatus::Published => "published",
            VersionStatus::Archived => "archived",
        }
    }

    /// Parses the database representation. An unknown value is corrupt
    /// data and must fail the row rather than silently demote it.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(VersionStatus::Draft),
            "published" => Some(VersionStatus::Published),
            "archived" => Some(VersionStatus::Archived),
            _ => None,
        }
    }
}


/// Parameters for creating a draft version. The id and version number are
/// assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewVersion {
    pub minisite_id: String,
    pub label: Option<String>,
    pub comment: Option<String>,
    pub site_json: serde_json::Value,
    pub created_by: i64,
}
