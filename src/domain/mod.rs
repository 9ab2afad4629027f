//! Domain layer: entities, errors, and the fixed table set.

pub mod entities;
pub mod errors;
pub mod tables;
