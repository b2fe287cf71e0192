//! Minisite listing, creation, lookup, and deletion.

use std::sync::Arc;

use serde_json::json;

use crate::application::commands::ListMinisitesCommand;
use crate::domain::entities::{Minisite, MinisiteStatus, NewMinisite};
use crate::domain::repositories::MinisiteRepository;
use crate::domain::route_key::MinisiteRouteKey;
use crate::error::AppError;

/// Service for managing minisites on behalf of their owners and serving
/// public lookups by route key.
pub struct MinisiteService {
    minisite_repository: Arc<dyn MinisiteRepository>,
}

impl MinisiteService {
    pub fn new(minisite_repository: Arc<dyn MinisiteRepository>) -> Self {
        Self {
            minisite_repository,
        }
    }

    /// Lists minisites owned by the command's user, with the total count
    /// for pagination.
    pub async fn list_minisites(
        &self,
        command: ListMinisitesCommand,
    ) -> Result<(Vec<Minisite>, i64), AppError> {
        let items = self
            .minisite_repository
            .list_by_owner(command.user_id(), command.limit(), command.offset())
            .await?;
        let total = self
            .minisite_repository
            .count_by_owner(command.user_id())
            .await?;

        Ok((items, total))
    }

    /// Creates a minisite together with its initial draft version.
    ///
    /// The two writes happen in one transaction scope inside the repository;
    /// either both land or neither does.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the slug pair does not form a
    /// valid route key, [`AppError::Conflict`] if the pair is taken.
    pub async fn create_minisite(&self, new: NewMinisite) -> Result<Minisite, AppError> {
        // The route key constructor enforces the slug rules shared with the
        // rewrite rule, so an unroutable minisite can never be created.
        MinisiteRouteKey::new(new.business_slug.clone(), new.location_slug.clone())?;

        self.minisite_repository
            .create_with_initial_version(new)
            .await
    }

    /// Looks up the minisite served at a public route key.
    ///
    /// Only published minisites are visible on their public URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no published minisite matches.
    pub async fn get_by_route(&self, key: &MinisiteRouteKey) -> Result<Minisite, AppError> {
        let minisite = self
            .minisite_repository
            .find_by_route(key)
            .await?
            .filter(|m| m.status == MinisiteStatus::Published)
            .ok_or_else(|| {
                AppError::not_found(
                    "Minisite not found",
                    json!({ "business": key.business(), "location": key.location() }),
                )
            })?;

        Ok(minisite)
    }

    /// Fetches a minisite by id, verifying ownership.
    ///
    /// Minisites owned by other users are reported as not found rather than
    /// acknowledged.
    pub async fn get_owned(&self, id: &str, user_id: i64) -> Result<Minisite, AppError> {
        self.minisite_repository
            .find_by_id(id)
            .await?
            .filter(|m| m.owner_user_id == user_id)
            .ok_or_else(|| AppError::not_found("Minisite not found", json!({ "id": id })))
    }

    /// Soft-deletes a minisite owned by the given user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the minisite does not exist, is not
    /// owned by the user, or is already deleted.
    pub async fn delete_minisite(&self, id: &str, user_id: i64) -> Result<(), AppError> {
        let deleted = self.minisite_repository.soft_delete(id, user_id).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Minisite not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockMinisiteRepository;
    use chrono::Utc;

    fn test_minisite(id: &str, owner: i64, status: MinisiteStatus) -> Minisite {
        Minisite {
            id: id.to_string(),
            business_slug: "acme".to_string(),
            location_slug: "main".to_string(),
            title: "Acme Main".to_string(),
            owner_user_id: owner,
            status,
            current_version_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn test_list_returns_items_and_total() {
        let mut repo = MockMinisiteRepository::new();
        repo.expect_list_by_owner()
            .times(1)
            .returning(|_, _, _| Ok(vec![test_minisite("a", 7, MinisiteStatus::Draft)]));
        repo.expect_count_by_owner().times(1).returning(|_| Ok(1));

        let service = MinisiteService::new(Arc::new(repo));
        let command = ListMinisitesCommand::new(7, None, None).unwrap();
        let (items, total) = service.list_minisites(command).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn test_get_by_route_hides_drafts() {
        let mut repo = MockMinisiteRepository::new();
        repo.expect_find_by_route()
            .returning(|_| Ok(Some(test_minisite("a", 7, MinisiteStatus::Draft))));

        let service = MinisiteService::new(Arc::new(repo));
        let key = MinisiteRouteKey::new("acme", "main").unwrap();
        let err = service.get_by_route(&key).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_by_route_serves_published() {
        let mut repo = MockMinisiteRepository::new();
        repo.expect_find_by_route()
            .returning(|_| Ok(Some(test_minisite("a", 7, MinisiteStatus::Published))));

        let service = MinisiteService::new(Arc::new(repo));
        let key = MinisiteRouteKey::new("acme", "main").unwrap();
        let minisite = service.get_by_route(&key).await.unwrap();

        assert_eq!(minisite.id, "a");
    }

    #[tokio::test]
    async fn test_get_owned_hides_foreign_minisites() {
        let mut repo = MockMinisiteRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(test_minisite("a", 7, MinisiteStatus::Draft))));

        let service = MinisiteService::new(Arc::new(repo));
        let err = service.get_owned("a", 8).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_slugs() {
        let repo = MockMinisiteRepository::new();
        let service = MinisiteService::new(Arc::new(repo));

        let err = service
            .create_minisite(NewMinisite {
                business_slug: "ac&me".to_string(),
                location_slug: "main".to_string(),
                title: "Acme".to_string(),
                owner_user_id: 7,
                site_json: serde_json::json!({}),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_maps_missing_to_not_found() {
        let mut repo = MockMinisiteRepository::new();
        repo.expect_soft_delete().returning(|_, _| Ok(false));

        let service = MinisiteService::new(Arc::new(repo));
        let err = service.delete_minisite("nope", 7).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
