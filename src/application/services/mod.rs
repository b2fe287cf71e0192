//! Application services orchestrating business logic over the repository
//! traits.

pub mod config_service;
pub mod minisite_service;
pub mod review_service;
pub mod version_service;

pub use config_service::ConfigService;
pub use minisite_service::MinisiteService;
pub use review_service::ReviewService;
pub use version_service::VersionService;
