//! PostgreSQL implementation of the minisite repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, PgPool, Row};

use crate::domain::entities::{Minisite, MinisiteStatus, NewMinisite};
use crate::domain::repositories::MinisiteRepository;
use crate::domain::route_key::MinisiteRouteKey;
use crate::domain::transaction::TransactionManager;
use crate::error::AppError;
use crate::infrastructure::persistence::PgUnitOfWork;
use crate::utils::id_generator::generate_minisite_id;

const MINISITE_COLUMNS: &str = "id, business_slug, location_slug, title, owner_user_id, \
     status, current_version_id, created_at, updated_at, deleted_at";

/// PostgreSQL repository for minisite storage and retrieval.
pub struct PgMinisiteRepository {
    pool: Arc<PgPool>,
}

impl PgMinisiteRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

pub(crate) fn minisite_from_row(row: &PgRow) -> Result<Minisite, sqlx::Error> {
    let status_raw: String = row.try_get("status")?;
    let status = MinisiteStatus::parse(&status_raw).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: "status".into(),
        source: format!("unknown minisite status '{status_raw}'").into(),
    })?;

    Ok(Minisite {
        id: row.try_get("id")?,
        business_slug: row.try_get("business_slug")?,
        location_slug: row.try_get("location_slug")?,
        title: row.try_get("title")?,
        owner_user_id: row.try_get("owner_user_id")?,
        status,
        current_version_id: row.try_get("current_version_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        deleted_at: row.try_get("deleted_at")?,
    })
}

/// Inserts the minisite row and its version 1 on the scope's connection.
async fn insert_with_version(
    conn: &mut PgConnection,
    id: &str,
    new: &NewMinisite,
) -> Result<Minisite, AppError> {
    let row = sqlx::query(&format!(
        "INSERT INTO minisites \
             (id, business_slug, location_slug, title, owner_user_id, status) \
         VALUES ($1, $2, $3, $4, $5, 'draft') \
         RETURNING {MINISITE_COLUMNS}"
    ))
    .bind(id)
    .bind(&new.business_slug)
    .bind(&new.location_slug)
    .bind(&new.title)
    .bind(new.owner_user_id)
    .fetch_one(&mut *conn)
    .await?;

    let minisite = minisite_from_row(&row)?;

    sqlx::query(
        "INSERT INTO minisite_versions \
             (minisite_id, version_number, status, site_json, created_by) \
         VALUES ($1, 1, 'draft', $2, $3)",
    )
    .bind(id)
    .bind(&new.site_json)
    .bind(new.owner_user_id)
    .execute(&mut *conn)
    .await?;

    Ok(minisite)
}

#[async_trait]
impl MinisiteRepository for PgMinisiteRepository {
    async fn create_with_initial_version(&self, new: NewMinisite) -> Result<Minisite, AppError> {
        let id = generate_minisite_id();

        let mut uow = PgUnitOfWork::acquire(&self.pool).await?;
        uow.start_transaction().await?;

        match insert_with_version(uow.executor(), &id, &new).await {
            Ok(minisite) => {
                uow.commit_transaction().await?;
                Ok(minisite)
            }
            Err(e) => {
                if let Err(rb) = uow.rollback_transaction().await {
                    tracing::warn!(error = %rb, "rollback failed after create error");
                }
                Err(e)
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Minisite>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {MINISITE_COLUMNS} FROM minisites \
             WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(|r| minisite_from_row(&r)).transpose().map_err(Into::into)
    }

    async fn find_by_route(&self, key: &MinisiteRouteKey) -> Result<Option<Minisite>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {MINISITE_COLUMNS} FROM minisites \
             WHERE business_slug = $1 AND location_slug = $2 AND deleted_at IS NULL"
        ))
        .bind(key.business())
        .bind(key.location())
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(|r| minisite_from_row(&r)).transpose().map_err(Into::into)
    }

    async fn list_by_owner(
        &self,
        owner_user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Minisite>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {MINISITE_COLUMNS} FROM minisites \
             WHERE owner_user_id = $1 AND deleted_at IS NULL \
             ORDER BY updated_at DESC \
             LIMIT $2 OFFSET $3"
        ))
        .bind(owner_user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter()
            .map(|r| minisite_from_row(r).map_err(Into::into))
            .collect()
    }

    async fn count_by_owner(&self, owner_user_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM minisites \
             WHERE owner_user_id = $1 AND deleted_at IS NULL",
        )
        .bind(owner_user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn soft_delete(&self, id: &str, owner_user_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE minisites SET deleted_at = now(), updated_at = now() \
             WHERE id = $1 AND owner_user_id = $2 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(owner_user_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
