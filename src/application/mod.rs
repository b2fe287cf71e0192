//! Application layer: command objects, rewrite rules, and services.

pub mod commands;
pub mod rewrite;
pub mod services;
