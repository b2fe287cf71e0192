//! In-memory version repository over [`MemoryStore`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{Minisite, MinisiteStatus, NewVersion, Version, VersionStatus};
use crate::domain::repositories::VersionRepository;
use crate::domain::transaction::TransactionManager;
use crate::error::AppError;
use crate::infrastructure::memory::store::{MemoryStore, MemoryTransactionManager};
use crate::infrastructure::memory::{decode, encode, minisite_key, version_key, version_prefix};

/// Memory-backed implementation of [`VersionRepository`].
pub struct MemoryVersionRepository {
    store: Arc<MemoryStore>,
}

impl MemoryVersionRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    fn versions_of(&self, minisite_id: &str) -> Result<Vec<Version>, AppError> {
        self.store
            .scan_prefix(&version_prefix(minisite_id))
            .into_iter()
            .map(|(_, v)| decode(v))
            .collect()
    }
}

#[async_trait]
impl VersionRepository for MemoryVersionRepository {
    async fn create_draft(&self, new: NewVersion) -> Result<Version, AppError> {
        let next_number = self
            .versions_of(&new.minisite_id)?
            .iter()
            .map(|v| v.version_number)
            .max()
            .unwrap_or(0)
            + 1;

        let version = Version {
            id: self.store.next_id(),
            minisite_id: new.minisite_id.clone(),
            version_number: next_number,
            status: VersionStatus::Draft,
            label: new.label,
            comment: new.comment,
            site_json: new.site_json,
            created_by: new.created_by,
            created_at: Utc::now(),
            published_at: None,
        };

        self.store
            .put(version_key(&version.minisite_id, version.id), encode(&version)?);

        Ok(version)
    }

    async fn find(&self, minisite_id: &str, version_id: i64) -> Result<Option<Version>, AppError> {
        self.store
            .get(&version_key(minisite_id, version_id))
            .map(decode)
            .transpose()
    }

    async fn list_for_minisite(
        &self,
        minisite_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Version>, AppError> {
        let mut versions = self.versions_of(minisite_id)?;
        versions.sort_by(|a, b| b.version_number.cmp(&a.version_number));

        Ok(versions
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn publish(&self, minisite_id: &str, version_id: i64) -> Result<Version, AppError> {
        let mut tx = MemoryTransactionManager::new(self.store.clone());
        tx.start_transaction().await?;

        let result = (|| {
            let key = version_key(minisite_id, version_id);
            let mut version: Version = self
                .store
                .get(&key)
                .map(decode)
                .transpose()?
                .ok_or_else(|| {
                    AppError::not_found(
                        "Version not found",
                        json!({ "minisite_id": minisite_id, "version_id": version_id }),
                    )
                })?;

            if version.status != VersionStatus::Draft {
                return Err(AppError::conflict(
                    "Only draft versions can be published",
                    json!({ "version_id": version_id, "status": version.status.as_str() }),
                ));
            }

            // Archive the currently published version, if any.
            for mut other in self.versions_of(minisite_id)? {
                if other.status == VersionStatus::Published {
                    other.status = VersionStatus::Archived;
                    self.store
                        .put(version_key(minisite_id, other.id), encode(&other)?);
                }
            }

            let now = Utc::now();
            version.status = VersionStatus::Published;
            version.published_at = Some(now);
            self.store.put(key, encode(&version)?);

            let mut minisite: Minisite = self
                .store
                .get(&minisite_key(minisite_id))
                .map(decode)
                .transpose()?
                .ok_or_else(|| {
                    AppError::not_found("Minisite not found", json!({ "id": minisite_id }))
                })?;
            minisite.current_version_id = Some(version.id);
            minisite.status = MinisiteStatus::Published;
            minisite.updated_at = now;
            self.store.put(minisite_key(minisite_id), encode(&minisite)?);

            Ok(version)
        })();

        match result {
            Ok(version) => {
                tx.commit_transaction().await?;
                Ok(version)
            }
            Err(e) => {
                let _ = tx.rollback_transaction().await;
                Err(e)
            }
        }
    }
}
