//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::rewrite::RouteRegistrar;
use crate::application::services::{ConfigService, MinisiteService, ReviewService, VersionService};

/// Process-wide state: the services and the rewrite-rule table.
///
/// Services hold their repositories as trait objects, so the same state
/// shape works over the PostgreSQL backend in production and the in-memory
/// backend in tests.
#[derive(Clone)]
pub struct AppState {
    pub minisite_service: Arc<MinisiteService>,
    pub version_service: Arc<VersionService>,
    pub review_service: Arc<ReviewService>,
    pub config_service: Arc<ConfigService>,
    pub registrar: Arc<RouteRegistrar>,
}
