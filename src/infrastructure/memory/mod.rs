//! In-memory backend: the reference implementation of the persistence
//! boundary.
//!
//! Entities are stored as JSON values in a [`MemoryStore`] under prefixed
//! keys. Used by tests and as the executable specification of the
//! transaction scope contract; the PostgreSQL backend in
//! [`crate::infrastructure::persistence`] is the production counterpart.

pub mod config_repository;
pub mod minisite_repository;
pub mod review_repository;
pub mod store;
pub mod version_repository;

pub use config_repository::MemoryConfigRepository;
pub use minisite_repository::MemoryMinisiteRepository;
pub use review_repository::MemoryReviewRepository;
pub use store::{MemoryStore, MemoryTransactionManager};
pub use version_repository::MemoryVersionRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::error::AppError;

pub(crate) fn minisite_key(id: &str) -> String {
    format!("minisite:{id}")
}

/// Route index key. Slugs cannot contain `/`, so the separator is
/// unambiguous.
pub(crate) fn route_key_index(business: &str, location: &str) -> String {
    format!("route:{business}/{location}")
}

/// Versions are keyed by zero-padded id so key order is stable.
pub(crate) fn version_key(minisite_id: &str, version_id: i64) -> String {
    format!("version:{minisite_id}:{version_id:020}")
}

pub(crate) fn version_prefix(minisite_id: &str) -> String {
    format!("version:{minisite_id}:")
}

pub(crate) fn config_key(key: &str) -> String {
    format!("config:{key}")
}

/// Reviews are keyed by zero-padded id so key order is stable.
pub(crate) fn review_key(minisite_id: &str, review_id: i64) -> String {
    format!("review:{minisite_id}:{review_id:020}")
}

pub(crate) fn review_prefix(minisite_id: &str) -> String {
    format!("review:{minisite_id}:")
}

pub(crate) fn encode<T: Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value)
        .map_err(|e| AppError::internal("Failed to encode record", json!({ "reason": e.to_string() })))
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value)
        .map_err(|e| AppError::internal("Failed to decode record", json!({ "reason": e.to_string() })))
}
