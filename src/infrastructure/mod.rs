//! Infrastructure layer: persistence backends.

pub mod memory;
pub mod persistence;
