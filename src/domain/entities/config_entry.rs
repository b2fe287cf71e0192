//! Configuration entry entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single key/value configuration record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}
