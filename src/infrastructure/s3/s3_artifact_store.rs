//! Infrastructure adapter that uploads artifacts to Amazon S3.

use crate::domain::entities::UploadTarget;
use crate::domain::errors::{ExportError, Result};
use crate::ports::artifact_store::ArtifactStore;
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;

/// Concrete implementation of `ArtifactStore` backed by the AWS SDK.
///
/// Credentials and region come from the ambient AWS configuration chain;
/// the job itself manages none of them.
pub struct S3ArtifactStore {
    client: aws_sdk_s3::Client,
}

impl S3ArtifactStore {
    /// Builds the store from the default AWS configuration.
    pub async fn from_env() -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: aws_sdk_s3::Client::new(&aws_config),
        }
    }
}

#[async_trait]
impl ArtifactStore for S3ArtifactStore {
    async fn put_file(&self, path: &Path, target: &UploadTarget) -> Result<()> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| ExportError::StorageError(e.to_string()))?;

        self.client
            .put_object()
            .bucket(&target.bucket)
            .key(&target.key)
            .body(body)
            .send()
            .await
            .map_err(|e| ExportError::StorageError(e.to_string()))?;

        Ok(())
    }
}
