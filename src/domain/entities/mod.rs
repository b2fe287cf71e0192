//! Core business entities.

pub mod config_entry;
pub mod minisite;
pub mod review;
pub mod version;

pub use config_entry::ConfigEntry;
pub use minisite::{Minisite, MinisiteStatus, NewMinisite};
pub use review::{NewReview, Review, ReviewStatus};
pub use version::{NewVersion, Version, VersionStatus};
