//! Repository trait for minisite data access.

use crate::domain::entities::{Minisite, NewMinisite};
use crate::domain::route_key::MinisiteRouteKey;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing minisites.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMinisiteRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryMinisiteRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MinisiteRepository: Send + Sync {
    /// Creates a minisite together with its initial draft version (version 1)
    /// as a single atomic unit of work.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the `(business, location)` slug pair
    /// is already taken. Returns [`AppError::Internal`] on backend errors.
    async fn create_with_initial_version(&self, new: NewMinisite) -> Result<Minisite, AppError>;

    /// Finds a minisite by its internal id. Soft-deleted minisites are not
    /// returned.
    async fn find_by_id(&self, id: &str) -> Result<Option<Minisite>, AppError>;

    /// Finds a minisite by its public route key.
    async fn find_by_route(&self, key: &MinisiteRouteKey) -> Result<Option<Minisite>, AppError>;

    /// Lists minisites owned by a user, most recently updated first.
    async fn list_by_owner(
        &self,
        owner_user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Minisite>, AppError>;

    /// Counts minisites owned by a user.
    async fn count_by_owner(&self, owner_user_id: i64) -> Result<i64, AppError>;

    /// Soft-deletes a minisite owned by the given user.
    ///
    /// Returns `Ok(true)` if the minisite was found and deleted, `Ok(false)`
    /// if not found, not owned by the user, or already deleted.
    async fn soft_delete(&self, id: &str, owner_user_id: i64) -> Result<bool, AppError>;
}
