//! Infrastructure adapters: Postgres, S3, and CSV artifact writing.

pub mod artifacts;
pub mod postgres;
pub mod s3;
