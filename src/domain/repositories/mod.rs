//! Repository traits defining the persistence boundary.
//!
//! Implementations live in [`crate::infrastructure`]; services depend only
//! on these traits, which is what allows the Postgres and in-memory
//! backends to be swapped.

pub mod config_repository;
pub mod minisite_repository;
pub mod review_repository;
pub mod version_repository;

pub use config_repository::ConfigRepository;
pub use minisite_repository::MinisiteRepository;
pub use review_repository::ReviewRepository;
pub use version_repository::VersionRepository;

#[cfg(test)]
pub use config_repository::MockConfigRepository;
#[cfg(test)]
pub use minisite_repository::MockMinisiteRepository;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
#[cfg(test)]
pub use version_repository::MockVersionRepository;
