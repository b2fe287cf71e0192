//! Domain layer: entities, route key, repository traits, and the
//! transaction scope contract.

pub mod entities;
pub mod repositories;
pub mod route_key;
pub mod transaction;
