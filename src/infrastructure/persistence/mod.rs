//! PostgreSQL backend: repositories and the transaction scope.

pub mod pg_config_repository;
pub mod pg_minisite_repository;
pub mod pg_review_repository;
pub mod pg_unit_of_work;
pub mod pg_version_repository;

pub use pg_config_repository::PgConfigRepository;
pub use pg_minisite_repository::PgMinisiteRepository;
pub use pg_review_repository::PgReviewRepository;
pub use pg_unit_of_work::PgUnitOfWork;
pub use pg_version_repository::PgVersionRepository;
