//! Repository trait for minisite version history.

use crate::domain::entities::{NewVersion, Version};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the per-minisite version history.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVersionRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryVersionRepository`] - in-memory implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VersionRepository: Send + Sync {
    /// Creates a draft version with the next version number for the minisite.
    async fn create_draft(&self, new: NewVersion) -> Result<Version, AppError>;

    /// Finds a version by id, scoped to a minisite.
    async fn find(&self, minisite_id: &str, version_id: i64) -> Result<Option<Version>, AppError>;

    /// Lists versions for a minisite, newest first.
    async fn list_for_minisite(
        &self,
        minisite_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Version>, AppError>;

    /// Publishes a draft version atomically: the previously published version
    /// (if any) is archived, the draft becomes published, and the minisite's
    /// `current_version_id` is repointed, all in one transaction scope.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the version does not exist for the
    /// minisite. Returns [`AppError::Conflict`] if the version is not a
    /// draft, or the backend rejects the commit.
    async fn publish(&self, minisite_id: &str, version_id: i64) -> Result<Version, AppError>;
}
