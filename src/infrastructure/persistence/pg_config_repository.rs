//! PostgreSQL implementation of the configuration repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::entities::ConfigEntry;
use crate::domain::repositories::ConfigRepository;
use crate::error::AppError;

/// PostgreSQL repository for key/value configuration storage.
pub struct PgConfigRepository {
    pool: Arc<PgPool>,
}

impl PgConfigRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn entry_from_row(row: &PgRow) -> Result<ConfigEntry, sqlx::Error> {
    Ok(ConfigEntry {
        key: row.try_get("key")?,
        value: row.try_get("value")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl ConfigRepository for PgConfigRepository {
    async fn get(&self, key: &str) -> Result<Option<ConfigEntry>, AppError> {
        let row = sqlx::query("SELECT key, value, updated_at FROM config WHERE key = $1")
            .bind(key)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| entry_from_row(&r)).transpose().map_err(Into::into)
    }

    async fn set(&self, key: &str, value: &str) -> Result<ConfigEntry, AppError> {
        let row = sqlx::query(
            "INSERT INTO config (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now() \
             RETURNING key, value, updated_at",
        )
        .bind(key)
        .bind(value)
        .fetch_one(self.pool.as_ref())
        .await?;

        entry_from_row(&row).map_err(Into::into)
    }

    async fn delete(&self, key: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM config WHERE key = $1")
            .bind(key)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
