//! Request/response DTOs for the API.

pub mod config;
pub mod health;
pub mod minisite;
pub mod pagination;
pub mod review;
pub mod version;
