//! PostgreSQL implementation of the version repository.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, PgPool, Row};

use crate::domain::entities::{NewVersion, Version, VersionStatus};
use crate::domain::repositories::VersionRepository;
use crate::domain::transaction::TransactionManager;
use crate::error::AppError;
use crate::infrastructure::persistence::PgUnitOfWork;

const VERSION_COLUMNS: &str = "id, minisite_id, version_number, status, label, comment, \
     site_json, created_by, created_at, published_at";

/// PostgreSQL repository for minisite version history.
pub struct PgVersionRepository {
    pool: Arc<PgPool>,
}

impl PgVersionRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn version_from_row(row: &PgRow) -> Result<Version, sqlx::Error> {
    let status_raw: String = row.try_get("status")?;
    let status = VersionStatus::parse(&status_raw).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: "status".into(),
        source: format!("unknown version status '{status_raw}'").into(),
    })?;

    Ok(Version {
        id: row.try_get("id")?,
        minisite_id: row.try_get("minisite_id")?,
        version_number: row.try_get("version_number")?,
        status,
        label: row.try_get("label")?,
        comment: row.try_get("comment")?,
        site_json: row.try_get("site_json")?,
        created_by: row.try_get("created_by")?,
        created_at: row.try_get("created_at")?,
        published_at: row.try_get("published_at")?,
    })
}

/// Runs the publish steps on the scope's connection: archive the current
/// published version, publish the draft, repoint the minisite.
async fn publish_in_scope(
    conn: &mut PgConnection,
    minisite_id: &str,
    version_id: i64,
) -> Result<Version, AppError> {
    let row = sqlx::query(&format!(
        "SELECT {VERSION_COLUMNS} FROM minisite_versions \
         WHERE minisite_id = $1 AND id = $2 \
         FOR UPDATE"
    ))
    .bind(minisite_id)
    .bind(version_id)
    .fetch_optional(&mut *conn)
    .await?;

    let version = match row {
        Some(row) => version_from_row(&row)?,
        None => {
            return Err(AppError::not_found(
                "Version not found",
                json!({ "minisite_id": minisite_id, "version_id": version_id }),
            ));
        }
    };

    if version.status != VersionStatus::Draft {
        return Err(AppError::conflict(
            "Only draft versions can be published",
            json!({ "version_id": version_id, "status": version.status.as_str() }),
        ));
    }

    sqlx::query(
        "UPDATE minisite_versions SET status = 'archived' \
         WHERE minisite_id = $1 AND status = 'published'",
    )
    .bind(minisite_id)
    .execute(&mut *conn)
    .await?;

    let row = sqlx::query(&format!(
        "UPDATE minisite_versions SET status = 'published', published_at = now() \
         WHERE id = $1 \
         RETURNING {VERSION_COLUMNS}"
    ))
    .bind(version_id)
    .fetch_one(&mut *conn)
    .await?;
    let published = version_from_row(&row)?;

    sqlx::query(
        "UPDATE minisites \
         SET current_version_id = $2, status = 'published', updated_at = now() \
         WHERE id = $1",
    )
    .bind(minisite_id)
    .bind(version_id)
    .execute(&mut *conn)
    .await?;

    Ok(published)
}

#[async_trait]
impl VersionRepository for PgVersionRepository {
    async fn create_draft(&self, new: NewVersion) -> Result<Version, AppError> {
        let row = sqlx::query(&format!(
            "INSERT INTO minisite_versions \
                 (minisite_id, version_number, status, label, comment, site_json, created_by) \
             SELECT $1, COALESCE(MAX(version_number), 0) + 1, 'draft', $2, $3, $4, $5 \
             FROM minisite_versions WHERE minisite_id = $1 \
             RETURNING {VERSION_COLUMNS}"
        ))
        .bind(&new.minisite_id)
        .bind(&new.label)
        .bind(&new.comment)
        .bind(&new.site_json)
        .bind(new.created_by)
        .fetch_one(self.pool.as_ref())
        .await?;

        version_from_row(&row).map_err(Into::into)
    }

    async fn find(&self, minisite_id: &str, version_id: i64) -> Result<Option<Version>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {VERSION_COLUMNS} FROM minisite_versions \
             WHERE minisite_id = $1 AND id = $2"
        ))
        .bind(minisite_id)
        .bind(version_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(|r| version_from_row(&r)).transpose().map_err(Into::into)
    }

    async fn list_for_minisite(
        &self,
        minisite_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Version>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {VERSION_COLUMNS} FROM minisite_versions \
             WHERE minisite_id = $1 \
             ORDER BY version_number DESC \
             LIMIT $2 OFFSET $3"
        ))
        .bind(minisite_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter()
            .map(|r| version_from_row(r).map_err(Into::into))
            .collect()
    }

    async fn publish(&self, minisite_id: &str, version_id: i64) -> Result<Version, AppError> {
        let mut uow = PgUnitOfWork::acquire(&self.pool).await?;
        uow.start_transaction().await?;

        match publish_in_scope(uow.executor(), minisite_id, version_id).await {
            Ok(version) => {
                uow.commit_transaction().await?;
                Ok(version)
            }
            Err(e) => {
                if let Err(rb) = uow.rollback_transaction().await {
                    tracing::warn!(error = %rb, "rollback failed after publish error");
                }
                Err(e)
            }
        }
    }
}
