//! # Postgres → CSV → S3 Export Job
//!
//! A small scheduled job that exports a fixed set of five database tables to
//! CSV files and uploads them to S3 under a date-partitioned key prefix.
//!
//! The application follows a ports-and-adapters layout to keep the per-table
//! export loop separate from the Postgres and S3 infrastructure.

pub mod application;
pub mod config;
pub mod domain;
pub mod handler;
pub mod infrastructure;
pub mod ports;

use lambda_runtime::service_fn;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    env_logger::init();

    // Inside Lambda the control-plane endpoint is always present; without it
    // (local runs) perform a single invocation and print the response.
    if std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        lambda_runtime::run(service_fn(handler::handle)).await
    } else {
        let response = handler::run_export().await;
        println!("{}", serde_json::to_string(&response)?);
        Ok(())
    }
}
