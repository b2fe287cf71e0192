//! Repository trait for configuration entries.

use crate::domain::entities::ConfigEntry;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for key/value configuration storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Fetches a configuration entry by key.
    async fn get(&self, key: &str) -> Result<Option<ConfigEntry>, AppError>;

    /// Creates or replaces a configuration entry.
    async fn set(&self, key: &str, value: &str) -> Result<ConfigEntry, AppError>;

    /// Deletes a configuration entry.
    ///
    /// Returns `Ok(true)` if the key existed, `Ok(false)` otherwise.
    async fn delete(&self, key: &str) -> Result<bool, AppError>;
}
