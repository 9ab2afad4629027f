//! Application layer: the export job itself.

pub mod export_job;
