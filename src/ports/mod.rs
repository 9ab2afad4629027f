//! Ports: the traits that decouple the export job from its infrastructure.

pub mod artifact_store;
pub mod table_source;
