//! # Domain Entities
//!
//! Entities are the "Nouns" of the export job: the run-wide timestamp
//! labels, the scratch-file artifact, the destination in object storage,
//! and the per-table report card.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Timestamp labels captured once per invocation.
///
/// Every table exported during one run shares the same pair, so all of the
/// run's artifacts land under the same date partition with identical
/// filename suffixes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStamp {
    /// Coarse, day-level label (`YYYYMMDD`). Used for the key prefix.
    pub date_label: String,
    /// Fine, second-level label (`YYYYMMDDHHMMSS`). Used in filenames.
    pub datetime_label: String,
}

impl RunStamp {
    /// Captures both labels from the current local wall clock, from a single
    /// instant.
    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self {
            date_label: now.format("%Y%m%d").to_string(),
            datetime_label: now.format("%Y%m%d%H%M%S").to_string(),
        }
    }
}

/// A generated CSV file for one table, living in the scratch directory.
///
/// The file is never explicitly deleted; the scratch space is ephemeral and
/// reclaimed by the host runtime.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// `{schema}.{table}_{datetime_label}.csv`
    pub file_name: String,
    /// Full path inside the platform scratch directory.
    pub path: PathBuf,
}

impl ExportArtifact {
    /// Derives the artifact name and scratch path for one table.
    pub fn for_table(schema: &str, table: &str, stamp: &RunStamp) -> Self {
        let file_name = format!("{}.{}_{}.csv", schema, table, stamp.datetime_label);
        let path = std::env::temp_dir().join(&file_name);
        Self { file_name, path }
    }
}

/// The fully qualified destination of one artifact in object storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadTarget {
    pub bucket: String,
    /// `{prefix}/{date_label}/{file_name}`
    pub key: String,
}

impl UploadTarget {
    /// Derives the destination key for an artifact under the configured
    /// bucket and prefix.
    pub fn for_artifact(bucket: &str, prefix: &str, stamp: &RunStamp, file_name: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            key: format!("{}/{}/{}", prefix, stamp.date_label, file_name),
        }
    }
}

/// The rows and ordered column names produced by one table's query.
///
/// Column names come from the result metadata, never from a hardcoded list,
/// so the CSV header follows the live schema.
#[derive(Debug, Clone, Default)]
pub struct TableData {
    pub columns: Vec<String>,
    /// One entry per row; `None` cells are SQL NULLs and render as empty
    /// CSV fields.
    pub rows: Vec<Vec<Option<String>>>,
}

/// `TableOutcome` is the "Report Card" for one table's export.
///
/// Outcomes feed the end-of-run summary log only; per-table failures are
/// never surfaced in the invocation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableOutcome {
    pub table: String,
    pub rows: u64,
    /// Either "SUCCESS" or "FAILED".
    pub status: String,
    /// If it failed, this contains the reason why.
    pub error: Option<String>,
}

impl TableOutcome {
    /// Helper to create a successful outcome.
    pub fn success(table: String, rows: u64) -> Self {
        Self {
            table,
            rows,
            status: "SUCCESS".to_string(),
            error: None,
        }
    }

    /// Helper to create a failure outcome.
    pub fn failure(table: String, error: String) -> Self {
        Self {
            table,
            rows: 0,
            status: "FAILED".to_string(),
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_naming() {
        let stamp = RunStamp {
            date_label: "20260829".into(),
            datetime_label: "20260829143000".into(),
        };
        let artifact = ExportArtifact::for_table("vic_db", "orders", &stamp);
        assert_eq!(artifact.file_name, "vic_db.orders_20260829143000.csv");
        assert!(artifact.path.ends_with("vic_db.orders_20260829143000.csv"));
    }

    #[test]
    fn test_upload_target_key() {
        let stamp = RunStamp {
            date_label: "20260829".into(),
            datetime_label: "20260829143000".into(),
        };
        let target = UploadTarget::for_artifact(
            "reports-bucket",
            "exports/daily",
            &stamp,
            "vic_db.orders_20260829143000.csv",
        );
        assert_eq!(target.bucket, "reports-bucket");
        assert_eq!(
            target.key,
            "exports/daily/20260829/vic_db.orders_20260829143000.csv"
        );
    }

    #[test]
    fn test_run_stamp_labels_agree() {
        let stamp = RunStamp::now();
        assert_eq!(stamp.date_label.len(), 8);
        assert_eq!(stamp.datetime_label.len(), 14);
        assert!(stamp.datetime_label.starts_with(&stamp.date_label));
    }
}
