//! In-memory minisite repository over [`MemoryStore`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{Minisite, MinisiteStatus, NewMinisite, Version, VersionStatus};
use crate::domain::repositories::MinisiteRepository;
use crate::domain::route_key::MinisiteRouteKey;
use crate::domain::transaction::TransactionManager;
use crate::error::AppError;
use crate::infrastructure::memory::store::{MemoryStore, MemoryTransactionManager};
use crate::infrastructure::memory::{
    decode, encode, minisite_key, route_key_index, version_key,
};
use crate::utils::id_generator::generate_minisite_id;

/// Memory-backed implementation of [`MinisiteRepository`].
pub struct MemoryMinisiteRepository {
    store: Arc<MemoryStore>,
}

impl MemoryMinisiteRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    fn load(&self, id: &str) -> Result<Option<Minisite>, AppError> {
        self.store.get(&minisite_key(id)).map(decode).transpose()
    }
}

#[async_trait]
impl MinisiteRepository for MemoryMinisiteRepository {
    async fn create_with_initial_version(&self, new: NewMinisite) -> Result<Minisite, AppError> {
        let mut tx = MemoryTransactionManager::new(self.store.clone());
        tx.start_transaction().await?;

        let result = (|| {
            let route_index = route_key_index(&new.business_slug, &new.location_slug);
            if self.store.get(&route_index).is_some() {
                return Err(AppError::conflict(
                    "A minisite already exists at this route",
                    json!({ "business": new.business_slug, "location": new.location_slug }),
                ));
            }

            let now = Utc::now();
            let minisite = Minisite {
                id: generate_minisite_id(),
                business_slug: new.business_slug.clone(),
                location_slug: new.location_slug.clone(),
                title: new.title.clone(),
                owner_user_id: new.owner_user_id,
                status: MinisiteStatus::Draft,
                current_version_id: None,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            };

            let version = Version {
                id: self.store.next_id(),
                minisite_id: minisite.id.clone(),
                version_number: 1,
                status: VersionStatus::Draft,
                label: None,
                comment: None,
                site_json: new.site_json.clone(),
                created_by: new.owner_user_id,
                created_at: now,
                published_at: None,
            };

            self.store.put(minisite_key(&minisite.id), encode(&minisite)?);
            self.store.put(route_index, json!(minisite.id));
            self.store
                .put(version_key(&minisite.id, version.id), encode(&version)?);

            Ok(minisite)
        })();

        match result {
            Ok(minisite) => {
                tx.commit_transaction().await?;
                Ok(minisite)
            }
            Err(e) => {
                // Rollback is idempotent and infallible here; the original
                // error is the one worth surfacing.
                let _ = tx.rollback_transaction().await;
                Err(e)
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Minisite>, AppError> {
        Ok(self.load(id)?.filter(|m| m.deleted_at.is_none()))
    }

    async fn find_by_route(&self, key: &MinisiteRouteKey) -> Result<Option<Minisite>, AppError> {
        let index = route_key_index(key.business(), key.location());
        let Some(id) = self.store.get(&index) else {
            return Ok(None);
        };
        let id: String = decode(id)?;

        Ok(self.load(&id)?.filter(|m| m.deleted_at.is_none()))
    }

    async fn list_by_owner(
        &self,
        owner_user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Minisite>, AppError> {
        let mut items: Vec<Minisite> = self
            .store
            .scan_prefix("minisite:")
            .into_iter()
            .map(|(_, v)| decode(v))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|m: &Minisite| m.owner_user_id == owner_user_id && m.deleted_at.is_none())
            .collect();

        items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        Ok(items
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count_by_owner(&self, owner_user_id: i64) -> Result<i64, AppError> {
        let count = self
            .store
            .scan_prefix("minisite:")
            .into_iter()
            .map(|(_, v)| decode::<Minisite>(v))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|m| m.owner_user_id == owner_user_id && m.deleted_at.is_none())
            .count();

        Ok(count as i64)
    }

    async fn soft_delete(&self, id: &str, owner_user_id: i64) -> Result<bool, AppError> {
        let Some(mut minisite) = self.load(id)? else {
            return Ok(false);
        };

        if minisite.owner_user_id != owner_user_id || minisite.deleted_at.is_some() {
            return Ok(false);
        }

        minisite.deleted_at = Some(Utc::now());
        minisite.updated_at = Utc::now();
        self.store.put(minisite_key(id), encode(&minisite)?);

        Ok(true)
    }
}
