//! Pagination query parameters.

use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use crate::error::AppError;

/// Paging bounds shared by the listing endpoints.
pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 200;

/// `limit`/`offset` query parameters.
///
/// Uses `serde_with` to parse the values from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Validates paging parameters, applying defaults for omitted values.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `limit` is outside `1..=200` or
    /// `offset` is negative. Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(i64, i64), AppError> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if limit <= 0 || limit > MAX_LIMIT {
            return Err(AppError::bad_request(
                format!("limit must be between 1 and {MAX_LIMIT}"),
                json!({ "limit": limit }),
            ));
        }

        let offset = self.offset.unwrap_or(0);
        if offset < 0 {
            return Err(AppError::bad_request(
                "offset must not be negative",
                json!({ "offset": offset }),
            ));
        }

        Ok((limit, offset))
    }
}
