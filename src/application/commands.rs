//! Command objects: immutable, validated parameter bundles.
//!
//! Each command is a narrow parameter set for one handler invocation,
//! constructed by the presentation layer and consumed once by a service.
//! Commands perform no I/O; every field is validated at construction and
//! rejected with [`AppError::Validation`] before any persistence call is
//! made, never silently defaulted to something valid.

use serde_json::{Value, json};

use crate::error::AppError;

/// Parameters for listing a user's minisites.
#[derive(Debug, Clone)]
pub struct ListMinisitesCommand {
    user_id: i64,
    limit: i64,
    offset: i64,
}

impl ListMinisitesCommand {
    pub const DEFAULT_LIMIT: i64 = 50;
    /// Upper bound on page size to prevent unbounded result sets.
    pub const MAX_LIMIT: i64 = 200;

    /// Builds the command, applying defaults for omitted paging parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `user_id <= 0`, `limit <= 0`,
    /// `limit > 200`, or `offset < 0`.
    pub fn new(user_id: i64, limit: Option<i64>, offset: Option<i64>) -> Result<Self, AppError> {
        if user_id <= 0 {
            return Err(AppError::bad_request(
                "user_id must be a positive integer",
                json!({ "user_id": user_id }),
            ));
        }

        let limit = limit.unwrap_or(Self::DEFAULT_LIMIT);
        if limit <= 0 || limit > Self::MAX_LIMIT {
            return Err(AppError::bad_request(
                format!("limit must be between 1 and {}", Self::MAX_LIMIT),
                json!({ "limit": limit }),
            ));
        }

        let offset = offset.unwrap_or(0);
        if offset < 0 {
            return Err(AppError::bad_request(
                "offset must not be negative",
                json!({ "offset": offset }),
            ));
        }

        Ok(Self {
            user_id,
            limit,
            offset,
        })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

/// Parameters for deleting a configuration entry.
#[derive(Debug, Clone)]
pub struct DeleteConfigCommand {
    key: String,
}

impl DeleteConfigCommand {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `key` is empty or whitespace-only.
    pub fn new(key: impl Into<String>) -> Result<Self, AppError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(AppError::bad_request(
                "config key must not be empty",
                json!({}),
            ));
        }
        Ok(Self { key })
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Parameters for creating a draft version of a minisite.
#[derive(Debug, Clone)]
pub struct CreateDraftCommand {
    site_id: String,
    user_id: i64,
    label: Option<String>,
    comment: Option<String>,
    site_json: Value,
}

impl CreateDraftCommand {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `site_id` is empty or
    /// `user_id <= 0`.
    pub fn new(
        site_id: impl Into<String>,
        user_id: i64,
        label: Option<String>,
        comment: Option<String>,
        site_json: Value,
    ) -> Result<Self, AppError> {
        let site_id = site_id.into();
        if site_id.is_empty() {
            return Err(AppError::bad_request(
                "site_id must not be empty",
                json!({}),
            ));
        }
        if user_id <= 0 {
            return Err(AppError::bad_request(
                "user_id must be a positive integer",
                json!({ "user_id": user_id }),
            ));
        }

        Ok(Self {
            site_id,
            user_id,
            label,
            comment,
            site_json,
        })
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn site_json(&self) -> &Value {
        &self.site_json
    }
}

/// Parameters for publishing a draft version.
#[derive(Debug, Clone)]
pub struct PublishVersionCommand {
    site_id: String,
    version_id: i64,
    user_id: i64,
}

impl PublishVersionCommand {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `site_id` is empty,
    /// `version_id <= 0`, or `user_id <= 0`.
    pub fn new(
        site_id: impl Into<String>,
        version_id: i64,
        user_id: i64,
    ) -> Result<Self, AppError> {
        let site_id = site_id.into();
        if site_id.is_empty() {
            return Err(AppError::bad_request(
                "site_id must not be empty",
                json!({}),
            ));
        }
        if version_id <= 0 {
            return Err(AppError::bad_request(
                "version_id must be a positive integer",
                json!({ "version_id": version_id }),
            ));
        }
        if user_id <= 0 {
            return Err(AppError::bad_request(
                "user_id must be a positive integer",
                json!({ "user_id": user_id }),
            ));
        }

        Ok(Self {
            site_id,
            version_id,
            user_id,
        })
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub fn version_id(&self) -> i64 {
        self.version_id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }
}

/// Parameters for adding a review to a minisite.
#[derive(Debug, Clone)]
pub struct AddReviewCommand {
    site_id: String,
    author_name: String,
    rating: f64,
    body: String,
    created_by: Option<i64>,
}

impl AddReviewCommand {
    pub const MIN_RATING: f64 = 1.0;
    pub const MAX_RATING: f64 = 5.0;

    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `site_id`, `author_name`, or
    /// `body` is empty, the rating is outside `1.0..=5.0`, or `created_by`
    /// is present but not positive.
    pub fn new(
        site_id: impl Into<String>,
        author_name: impl Into<String>,
        rating: f64,
        body: impl Into<String>,
        created_by: Option<i64>,
    ) -> Result<Self, AppError> {
        let site_id = site_id.into();
        if site_id.is_empty() {
            return Err(AppError::bad_request(
                "site_id must not be empty",
                json!({}),
            ));
        }

        let author_name = author_name.into();
        if author_name.trim().is_empty() {
            return Err(AppError::bad_request(
                "author_name must not be empty",
                json!({}),
            ));
        }

        if !(Self::MIN_RATING..=Self::MAX_RATING).contains(&rating) {
            return Err(AppError::bad_request(
                format!(
                    "rating must be between {} and {}",
                    Self::MIN_RATING,
                    Self::MAX_RATING
                ),
                json!({ "rating": rating }),
            ));
        }

        let body = body.into();
        if body.trim().is_empty() {
            return Err(AppError::bad_request("body must not be empty", json!({})));
        }

        if let Some(user_id) = created_by {
            if user_id <= 0 {
                return Err(AppError::bad_request(
                    "user_id must be a positive integer",
                    json!({ "user_id": user_id }),
                ));
            }
        }

        Ok(Self {
            site_id,
            author_name,
            rating,
            body,
            created_by,
        })
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created_by(&self) -> Option<i64> {
        self.created_by
    }
}
