//! PostgreSQL implementation of the review repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::entities::{NewReview, Review, ReviewStatus};
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;

const REVIEW_COLUMNS: &str =
    "id, minisite_id, author_name, rating, body, status, created_by, created_at";

/// PostgreSQL repository for visitor reviews.
pub struct PgReviewRepository {
    pool: Arc<PgPool>,
}

impl PgReviewRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn review_from_row(row: &PgRow) -> Result<Review, sqlx::Error> {
    let status_raw: String = row.try_get("status")?;
    let status = ReviewStatus::parse(&status_raw).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: "status".into(),
        source: format!("unknown review status '{status_raw}'").into(),
    })?;

    Ok(Review {
        id: row.try_get("id")?,
        minisite_id: row.try_get("minisite_id")?,
        author_name: row.try_get("author_name")?,
        rating: row.try_get("rating")?,
        body: row.try_get("body")?,
        status,
        created_by: row.try_get("created_by")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn add(&self, new: NewReview) -> Result<Review, AppError> {
        let row = sqlx::query(&format!(
            "INSERT INTO minisite_reviews \
                 (minisite_id, author_name, rating, body, status, created_by) \
             VALUES ($1, $2, $3, $4, 'approved', $5) \
             RETURNING {REVIEW_COLUMNS}"
        ))
        .bind(&new.minisite_id)
        .bind(&new.author_name)
        .bind(new.rating)
        .bind(&new.body)
        .bind(new.created_by)
        .fetch_one(self.pool.as_ref())
        .await?;

        review_from_row(&row).map_err(Into::into)
    }

    async fn list_approved(
        &self,
        minisite_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {REVIEW_COLUMNS} FROM minisite_reviews \
             WHERE minisite_id = $1 AND status = 'approved' \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        ))
        .bind(minisite_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter()
            .map(|r| review_from_row(r).map_err(Into::into))
            .collect()
    }
}
