//! The core application logic that walks the fixed table list.
//!
//! Each table is processed inside its own error boundary: a failing table is
//! logged and skipped, and the loop moves on. Table results never change the
//! invocation's status code; callers learn about per-table failures from the
//! logs, not the response.

use crate::config::AppConfig;
use crate::domain::entities::{ExportArtifact, RunStamp, TableOutcome, UploadTarget};
use crate::domain::errors::{ExportError, Result};
use crate::domain::tables::{TableDescriptor, SCHEMA_NAME, TABLES};
use crate::infrastructure::artifacts::csv_writer;
use crate::ports::artifact_store::ArtifactStore;
use crate::ports::table_source::TableSource;
use log::{error, info};
use std::sync::Arc;

/// Exports every descriptor in `TABLES` sequentially over one connection.
pub struct ExportJob {
    source: Box<dyn TableSource>,
    store: Arc<dyn ArtifactStore>,
    config: AppConfig,
}

impl ExportJob {
    /// Creates a new job with the provided components.
    pub fn new(
        source: Box<dyn TableSource>,
        store: Arc<dyn ArtifactStore>,
        config: AppConfig,
    ) -> Self {
        Self {
            source,
            store,
            config,
        }
    }

    /// Runs the per-table loop, then closes the connection.
    ///
    /// The connection close is attempted exactly once in every case,
    /// including when all five tables failed.
    pub async fn run(mut self, stamp: &RunStamp) -> Vec<TableOutcome> {
        let mut outcomes = Vec::with_capacity(TABLES.len());

        for descriptor in &TABLES {
            match self.process_table(descriptor, stamp).await {
                Ok(rows) => {
                    outcomes.push(TableOutcome::success(descriptor.name.to_string(), rows));
                }
                Err(e) => {
                    error!("Error processing table {}: {}", descriptor.name, e);
                    outcomes.push(TableOutcome::failure(
                        descriptor.name.to_string(),
                        e.to_string(),
                    ));
                }
            }
        }

        if let Err(e) = self.source.close().await {
            error!("Failed to close database connection: {}", e);
        }

        let success = outcomes.iter().filter(|o| o.status == "SUCCESS").count();
        let total_rows: u64 = outcomes.iter().map(|o| o.rows).sum();
        info!(
            "Export run finished: {} succeeded, {} failed, {} rows total",
            success,
            outcomes.len() - success,
            total_rows
        );

        outcomes
    }

    /// Exports a single table, attributing any failure to it by name.
    async fn process_table(&mut self, descriptor: &TableDescriptor, stamp: &RunStamp) -> Result<u64> {
        self.export_table(descriptor, stamp)
            .await
            .map_err(|e| ExportError::TableError {
                table: descriptor.name.to_string(),
                reason: e.to_string(),
            })
    }

    /// Query, write the CSV artifact, upload it.
    async fn export_table(&mut self, descriptor: &TableDescriptor, stamp: &RunStamp) -> Result<u64> {
        let artifact = ExportArtifact::for_table(SCHEMA_NAME, descriptor.name, stamp);

        let data = self.source.fetch_table(descriptor).await?;
        let rows = csv_writer::write_artifact(&artifact.path, &data)?;
        info!(
            "File {} successfully created at {}",
            artifact.file_name,
            artifact.path.display()
        );

        let target = UploadTarget::for_artifact(
            &self.config.s3_bucket,
            &self.config.s3_key_prefix,
            stamp,
            &artifact.file_name,
        );
        self.store.put_file(&artifact.path, &target).await?;
        info!("File uploaded to S3: {}/{}", target.bucket, target.key);

        Ok(rows)
    }
}
