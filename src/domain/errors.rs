//! Core error definitions for the export job.
//!
//! This module provides a centralized `ExportError` enum and a `Result` type
//! used throughout the application to handle configuration, database, I/O,
//! and object-storage errors.

use thiserror::Error;

/// Error types encountered during the export process.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Export failed for {table}: {reason}")]
    TableError { table: String, reason: String },

    #[error("Artifact generation failed: {0}")]
    ArtifactError(String),

    #[error("Upload failed: {0}")]
    StorageError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<sqlx::Error> for ExportError {
    fn from(e: sqlx::Error) -> Self {
        ExportError::DatabaseError(e.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::ArtifactError(e.to_string())
    }
}

/// A specialized Result type for the export job.
pub type Result<T> = std::result::Result<T, ExportError>;
