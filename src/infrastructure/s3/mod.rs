pub mod s3_artifact_store;
