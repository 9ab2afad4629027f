//! Process configuration, read once at startup from the environment.
//!
//! Every value is required; a missing or malformed variable is a job-level
//! failure before any table is touched and before a connection is opened.

use crate::domain::errors::{ExportError, Result};

/// Immutable configuration for one invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub s3_bucket: String,
    pub s3_key_prefix: String,
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary lookup. Split out from
    /// `from_env` so tests can supply values without mutating process state.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            get(key).ok_or_else(|| {
                ExportError::ConfigError(format!("missing required environment variable {}", key))
            })
        };

        let port_raw = required("DB_PORT")?;
        let db_port: u16 = port_raw.parse().map_err(|_| {
            ExportError::ConfigError(format!("DB_PORT is not a valid port number: {}", port_raw))
        })?;

        Ok(Self {
            db_host: required("DB_HOST")?,
            db_port,
            db_name: required("DB_NAME")?,
            db_user: required("DB_USER")?,
            db_password: required("DB_PASSWORD")?,
            s3_bucket: required("S3_BUCKET")?,
            s3_key_prefix: required("S3_KEY_PREFIX")?,
        })
    }
}
