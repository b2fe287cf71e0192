//! Acting-user extraction from request headers.

use axum::http::HeaderMap;
use serde_json::json;

use crate::error::AppError;

/// Header carrying the acting user's id.
///
/// Authentication itself is out of scope here; the upstream layer that
/// terminates the session is expected to set this header. Handlers only
/// need a validated positive integer to build their commands.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Reads and validates the acting user id.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the header is missing, not ASCII,
/// or not a positive integer.
pub fn user_id_from_headers(headers: &HeaderMap) -> Result<i64, AppError> {
    let raw = headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::bad_request(
                "Missing X-User-Id header",
                json!({ "header": USER_ID_HEADER }),
            )
        })?;

    let user_id: i64 = raw.parse().map_err(|_| {
        AppError::bad_request(
            "X-User-Id must be a positive integer",
            json!({ "value": raw }),
        )
    })?;

    if user_id <= 0 {
        return Err(AppError::bad_request(
            "X-User-Id must be a positive integer",
            json!({ "value": raw }),
        ));
    }

    Ok(user_id)
}

/// Reads the acting user id when present.
///
/// For endpoints open to anonymous callers: an absent header is `None`,
/// but a present header must still be a valid positive integer.
pub fn optional_user_id_from_headers(headers: &HeaderMap) -> Result<Option<i64>, AppError> {
    if headers.get(USER_ID_HEADER).is_none() {
        return Ok(None);
    }

    user_id_from_headers(headers).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_valid_user_id() {
        assert_eq!(user_id_from_headers(&headers_with("42")).unwrap(), 42);
    }

    #[test]
    fn test_missing_header() {
        assert!(user_id_from_headers(&HeaderMap::new()).is_err());
    }

    #[test]
    fn test_non_numeric_value() {
        assert!(user_id_from_headers(&headers_with("abc")).is_err());
    }

    #[test]
    fn test_non_positive_value() {
        assert!(user_id_from_headers(&headers_with("0")).is_err());
        assert!(user_id_from_headers(&headers_with("-3")).is_err());
    }

    #[test]
    fn test_optional_absent_header_is_none() {
        assert_eq!(
            optional_user_id_from_headers(&HeaderMap::new()).unwrap(),
            None
        );
    }

    #[test]
    fn test_optional_present_header_is_validated() {
        assert_eq!(
            optional_user_id_from_headers(&headers_with("42")).unwrap(),
            Some(42)
        );
        assert!(optional_user_id_from_headers(&headers_with("abc")).is_err());
    }
}
