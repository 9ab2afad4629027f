//! The invocation boundary: an opaque trigger payload in, a
//! `{statusCode, body}` response out.
//!
//! Job-level failures (configuration, connection) abort the run with a 500.
//! Once the per-table loop starts, the invocation reports 200 on loop
//! completion regardless of individual table results; those are visible in
//! the logs only.

use crate::application::export_job::ExportJob;
use crate::config::AppConfig;
use crate::domain::entities::RunStamp;
use crate::domain::errors::Result as ExportResult;
use crate::infrastructure::postgres::pg_table_source::PgTableSource;
use crate::infrastructure::s3::s3_artifact_store::S3ArtifactStore;
use crate::ports::artifact_store::ArtifactStore;
use crate::ports::table_source::TableSource;
use lambda_runtime::{Error, LambdaEvent};
use log::error;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// The response shape the hosting scheduler expects.
#[derive(Debug, Serialize)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }

    fn internal_error(e: impl std::fmt::Display) -> Self {
        Self {
            status_code: 500,
            body: format!("Error: {}", e),
        }
    }
}

/// Lambda entry point. The trigger payload and context are accepted and
/// ignored; the run is driven entirely by configuration.
pub async fn handle(_event: LambdaEvent<Value>) -> Result<InvocationResponse, Error> {
    Ok(run_export().await)
}

/// Runs one full export and maps its outcome onto the response contract.
pub async fn run_export() -> InvocationResponse {
    let stamp = RunStamp::now();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Error: {}", e);
            return InvocationResponse::internal_error(e);
        }
    };

    let source = PgTableSource::connect(&config)
        .await
        .map(|s| Box::new(s) as Box<dyn TableSource>);
    let store = Arc::new(S3ArtifactStore::from_env().await);

    complete_export(source, store, config, &stamp).await
}

/// Drives the job once the wiring is resolved.
///
/// A failed connection is a job-level error: 500, nothing exported. The job
/// itself always completes with 200.
async fn complete_export(
    source: ExportResult<Box<dyn TableSource>>,
    store: Arc<dyn ArtifactStore>,
    config: AppConfig,
    stamp: &RunStamp,
) -> InvocationResponse {
    let source = match source {
        Ok(s) => s,
        Err(e) => {
            error!("Error: {}", e);
            return InvocationResponse::internal_error(e);
        }
    };

    let prefix = config.s3_key_prefix.clone();
    let job = ExportJob::new(source, store, config);
    job.run(stamp).await;

    InvocationResponse::ok(format!(
        "All reports successfully uploaded to S3 under {}/{}/",
        prefix, stamp.date_label
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{TableData, UploadTarget};
    use crate::domain::errors::ExportError;
    use crate::domain::tables::TableDescriptor;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Mutex;

    struct HealthyTableSource;

    #[async_trait]
    impl TableSource for HealthyTableSource {
        async fn fetch_table(&mut self, _descriptor: &TableDescriptor) -> ExportResult<TableData> {
            Ok(TableData {
                columns: vec!["id".into()],
                rows: vec![vec![Some("1".into())]],
            })
        }

        async fn close(self: Box<Self>) -> ExportResult<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        uploads: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ArtifactStore for RecordingStore {
        async fn put_file(&self, _path: &Path, target: &UploadTarget) -> ExportResult<()> {
            self.uploads.lock().unwrap().push(target.key.clone());
            Ok(())
        }
    }

    fn test_config() -> AppConfig {
        AppConfig {
            db_host: "db.internal".into(),
            db_port: 5432,
            db_name: "vic_db".into(),
            db_user: "reporter".into(),
            db_password: "secret".into(),
            s3_bucket: "reports-bucket".into(),
            s3_key_prefix: "exports/daily".into(),
        }
    }

    fn test_stamp() -> RunStamp {
        RunStamp {
            date_label: "20260829".into(),
            datetime_label: "20260829120000".into(),
        }
    }

    #[test]
    fn test_response_serializes_with_lambda_field_names() {
        let response = InvocationResponse::ok("done".into());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["body"], "done");
    }

    #[tokio::test]
    async fn test_missing_configuration_returns_500() {
        // Guarantee at least one required variable is absent.
        std::env::remove_var("DB_HOST");

        let response = run_export().await;
        assert_eq!(response.status_code, 500);
        assert!(response.body.starts_with("Error:"));
    }

    #[tokio::test]
    async fn test_connection_failure_returns_500_with_zero_uploads() {
        let store = Arc::new(RecordingStore::default());
        let source: ExportResult<Box<dyn TableSource>> = Err(ExportError::DatabaseError(
            "connection refused (db.internal:5432)".to_string(),
        ));

        let response = complete_export(source, store.clone(), test_config(), &test_stamp()).await;

        assert_eq!(response.status_code, 500);
        assert!(response.body.contains("connection refused"));
        assert_eq!(store.uploads.lock().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_successful_run_returns_200_with_prefix_body() {
        let store = Arc::new(RecordingStore::default());
        let source: ExportResult<Box<dyn TableSource>> = Ok(Box::new(HealthyTableSource));

        let response = complete_export(source, store.clone(), test_config(), &test_stamp()).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body,
            "All reports successfully uploaded to S3 under exports/daily/20260829/"
        );
        assert_eq!(store.uploads.lock().unwrap().len(), 5);
    }
}
