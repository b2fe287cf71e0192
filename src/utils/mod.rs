//! Utility functions.
//!
//! - [`id_generator`] - minisite id generation

pub mod id_generator;
