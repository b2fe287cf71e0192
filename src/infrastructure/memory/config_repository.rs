//! In-memory configuration repository over [`MemoryStore`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::ConfigEntry;
use crate::domain::repositories::ConfigRepository;
use crate::error::AppError;
use crate::infrastructure::memory::store::MemoryStore;
use crate::infrastructure::memory::{config_key, decode, encode};

/// Memory-backed implementation of [`ConfigRepository`].
pub struct MemoryConfigRepository {
    store: Arc<MemoryStore>,
}

impl MemoryConfigRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ConfigRepository for MemoryConfigRepository {
    async fn get(&self, key: &str) -> Result<Option<ConfigEntry>, AppError> {
        self.store.get(&config_key(key)).map(decode).transpose()
    }

    async fn set(&self, key: &str, value: &str) -> Result<ConfigEntry, AppError> {
        let entry = ConfigEntry {
            key: key.to_string(),
            value: value.to_string(),
            updated_at: Utc::now(),
        };

        self.store.put(config_key(key), encode(&entry)?);
        Ok(entry)
    }

    async fn delete(&self, key: &str) -> Result<bool, AppError> {
        Ok(self.store.remove(&config_key(key)))
    }
}
