//! Version history management: drafts and publishing.

use std::sync::Arc;

use serde_json::json;

use crate::application::commands::{CreateDraftCommand, PublishVersionCommand};
use crate::domain::entities::{NewVersion, Version};
use crate::domain::repositories::{MinisiteRepository, VersionRepository};
use crate::error::AppError;

/// Service for a minisite's version history.
///
/// Every operation first verifies that the minisite exists and belongs to
/// the acting user; foreign minisites are reported as not found.
pub struct VersionService {
    minisite_repository: Arc<dyn MinisiteRepository>,
    version_repository: Arc<dyn VersionRepository>,
}

impl VersionService {
    pub fn new(
        minisite_repository: Arc<dyn MinisiteRepository>,
        version_repository: Arc<dyn VersionRepository>,
    ) -> Self {
        Self {
            minisite_repository,
            version_repository,
        }
    }

    /// Lists versions of a minisite, newest first.
    pub async fn list_versions(
        &self,
        site_id: &str,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Version>, AppError> {
        self.authorize(site_id, user_id).await?;

        self.version_repository
            .list_for_minisite(site_id, limit, offset)
            .await
    }

    /// Creates a new draft version with the next version number.
    pub async fn create_draft(&self, command: CreateDraftCommand) -> Result<Version, AppError> {
        self.authorize(command.site_id(), command.user_id()).await?;

        self.version_repository
            .create_draft(NewVersion {
                minisite_id: command.site_id().to_string(),
                label: command.label().map(str::to_string),
                comment: command.comment().map(str::to_string),
                site_json: command.site_json().clone(),
                created_by: command.user_id(),
            })
            .await
    }

    /// Publishes a draft version.
    ///
    /// The repository performs the archive-old/publish-new/repoint-minisite
    /// steps in one transaction scope.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the minisite or version is missing,
    /// [`AppError::Conflict`] if the version is not a draft.
    pub async fn publish_version(
        &self,
        command: PublishVersionCommand,
    ) -> Result<Version, AppError> {
        self.authorize(command.site_id(), command.user_id()).await?;

        self.version_repository
            .publish(command.site_id(), command.version_id())
            .await
    }

    /// Fetches a version for the public view path. No ownership check:
    /// callers must only pass version ids taken from a published minisite's
    /// `current_version_id`.
    pub async fn find_public(
        &self,
        site_id: &str,
        version_id: i64,
    ) -> Result<Version, AppError> {
        self.version_repository
            .find(site_id, version_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Version not found",
                    json!({ "minisite_id": site_id, "version_id": version_id }),
                )
            })
    }

    /// Verifies the minisite exists and is owned by `user_id`.
    async fn authorize(&self, site_id: &str, user_id: i64) -> Result<(), AppError> {
        self.minisite_repository
            .find_by_id(site_id)
            .await?
            .filter(|m| m.owner_user_id == user_id)
            .ok_or_else(|| AppError::not_found("Minisite not found", json!({ "id": site_id })))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Minisite, MinisiteStatus, VersionStatus};
    use crate::domain::repositories::{MockMinisiteRepository, MockVersionRepository};
    use chrono::Utc;

    fn owned_minisite(owner: i64) -> Minisite {
        Minisite {
            id: "abc123".to_string(),
            business_slug: "acme".to_string(),
            location_slug: "main".to_string(),
            title: "Acme".to_string(),
            owner_user_id: owner,
            status: MinisiteStatus::Draft,
            current_version_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    fn draft_version(n: i64) -> Version {
        Version {
            id: n,
            minisite_id: "abc123".to_string(),
            version_number: n,
            status: VersionStatus::Draft,
            label: None,
            comment: None,
            site_json: serde_json::json!({}),
            created_by: 7,
            created_at: Utc::now(),
            published_at: None,
        }
    }

    #[tokio::test]
    async fn test_list_requires_ownership() {
        let mut minisites = MockMinisiteRepository::new();
        minisites
            .expect_find_by_id()
            .returning(|_| Ok(Some(owned_minisite(7))));
        let versions = MockVersionRepository::new();

        let service = VersionService::new(Arc::new(minisites), Arc::new(versions));
        let err = service
            .list_versions("abc123", 8, 50, 0)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_draft_delegates_after_authorization() {
        let mut minisites = MockMinisiteRepository::new();
        minisites
            .expect_find_by_id()
            .returning(|_| Ok(Some(owned_minisite(7))));
        let mut versions = MockVersionRepository::new();
        versions
            .expect_create_draft()
            .times(1)
            .returning(|_| Ok(draft_version(2)));

        let service = VersionService::new(Arc::new(minisites), Arc::new(versions));
        let command =
            CreateDraftCommand::new("abc123", 7, None, None, serde_json::json!({"t": 1})).unwrap();
        let version = service.create_draft(command).await.unwrap();

        assert_eq!(version.version_number, 2);
    }

    #[tokio::test]
    async fn test_publish_propagates_repository_conflict() {
        let mut minisites = MockMinisiteRepository::new();
        minisites
            .expect_find_by_id()
            .returning(|_| Ok(Some(owned_minisite(7))));
        let mut versions = MockVersionRepository::new();
        versions.expect_publish().returning(|_, _| {
            Err(AppError::conflict(
                "Only draft versions can be published",
                serde_json::json!({}),
            ))
        });

        let service = VersionService::new(Arc::new(minisites), Arc::new(versions));
        let command = PublishVersionCommand::new("abc123", 3, 7).unwrap();
        let err = service.publish_version(command).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }
}
