//! # Artifact Store Port
//!
//! This Port defines the contract for the "Uploader": put one local file
//! into object storage at a fully qualified target. All-or-nothing, no
//! multipart or resume logic.

use crate::domain::entities::UploadTarget;
use crate::domain::errors::Result;
use async_trait::async_trait;
use std::path::Path;

/// `ArtifactStore` delivers finished artifacts to durable storage.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Uploads the file at `path` to `target.bucket` / `target.key`.
    async fn put_file(&self, path: &Path, target: &UploadTarget) -> Result<()>;
}
