//! Composite route key identifying a minisite's public URL.

use serde_json::json;

use crate::error::AppError;

/// Identifies a minisite by the `(business, location)` slug pair captured
/// from its public URL path. Immutable once parsed.
///
/// Both segments are case-preserving, must be non-empty, and must contain
/// neither `/` (a slash would have split the path segment) nor `&` (the
/// query-variable capture rule `[^&]+`, which guards against query-string
/// injection when the captures are promoted to query variables).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MinisiteRouteKey {
    business: String,
    location: String,
}

impl MinisiteRouteKey {
    /// Builds a route key from raw path captures.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either slug is empty or contains
    /// `/` or `&`.
    pub fn new(business: impl Into<String>, location: impl Into<String>) -> Result<Self, AppError> {
        let business = business.into();
        let location = location.into();

        validate_slug("business", &business)?;
        validate_slug("location", &location)?;

        Ok(Self { business, location })
    }

    pub fn business(&self) -> &str {
        &self.business
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

fn validate_slug(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::bad_request(
            format!("{field} slug must not be empty"),
            json!({ "field": field }),
        ));
    }

    if value.contains('/') || value.contains('&') {
        return Err(AppError::bad_request(
            format!("{field} slug must not contain '/' or '&'"),
            json!({ "field": field, "value": value }),
        ));
    }

    Ok(())
}

impl std::fmt::Display for MinisiteRouteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "b/{}/{}", self.business, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pair() {
        let key = MinisiteRouteKey::new("acme", "main-office").unwrap();
        assert_eq!(key.business(), "acme");
        assert_eq!(key.location(), "main-office");
    }

    #[test]
    fn test_case_preserved() {
        let key = MinisiteRouteKey::new("Acme", "HQ").unwrap();
        assert_eq!(key.business(), "Acme");
        assert_eq!(key.location(), "HQ");
    }

    #[test]
    fn test_empty_segment_rejected() {
        assert!(MinisiteRouteKey::new("", "main").is_err());
        assert!(MinisiteRouteKey::new("acme", "").is_err());
    }

    #[test]
    fn test_ampersand_rejected() {
        assert!(MinisiteRouteKey::new("acme&minisite_loc=x", "main").is_err());
        assert!(MinisiteRouteKey::new("acme", "main&x=1").is_err());
    }

    #[test]
    fn test_slash_rejected() {
        assert!(MinisiteRouteKey::new("ac/me", "main").is_err());
    }

    #[test]
    fn test_display() {
        let key = MinisiteRouteKey::new("acme", "main").unwrap();
        assert_eq!(key.to_string(), "b/acme/main");
    }
}
