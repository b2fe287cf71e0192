//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod config;
pub mod health;
pub mod minisites;
pub mod reviews;
pub mod versions;
pub mod view;

pub use config::{delete_config_handler, get_config_handler, set_config_handler};
pub use health::health_handler;
pub use minisites::{create_minisite_handler, delete_minisite_handler, list_minisites_handler};
pub use reviews::{create_review_handler, list_reviews_handler};
pub use versions::{create_draft_handler, list_versions_handler, publish_version_handler};
pub use view::minisite_view_handler;
