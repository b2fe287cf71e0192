//! DTOs for configuration endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ConfigEntry;

/// Request to set a configuration entry.
#[derive(Debug, Deserialize, Validate)]
pub struct SetConfigRequest {
    #[validate(length(max = 4096))]
    pub value: String,
}

/// JSON representation of a configuration entry.
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl From<ConfigEntry> for ConfigResponse {
    fn from(e: ConfigEntry) -> Self {
        Self {
            key: e.key,
            value: e.value,
            updated_at: e.updated_at,
        }
    }
}
