//! Infrastructure adapter that runs table queries against PostgreSQL.
//!
//! Implements `TableSource` on a single `sqlx` connection. The statement is
//! prepared first so the ordered column names come from the database's own
//! result metadata, which stays correct even when a table is empty.

use crate::config::AppConfig;
use crate::domain::entities::TableData;
use crate::domain::errors::{ExportError, Result};
use crate::domain::tables::TableDescriptor;
use crate::ports::table_source::TableSource;
use async_trait::async_trait;
use log::debug;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgRow};
use sqlx::{Column, Connection, Executor, Row, Statement, TypeInfo};

/// Concrete implementation of `TableSource` for PostgreSQL.
///
/// Owns the invocation's single database connection; the caller closes it
/// through the port once the run is over.
pub struct PgTableSource {
    conn: PgConnection,
}

impl PgTableSource {
    /// Opens the connection described by the configuration.
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let options = PgConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .database(&config.db_name)
            .username(&config.db_user)
            .password(&config.db_password);

        let conn = PgConnection::connect_with(&options).await?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl TableSource for PgTableSource {
    async fn fetch_table(&mut self, descriptor: &TableDescriptor) -> Result<TableData> {
        let sql = descriptor.select_sql();
        debug!("Executing: {}", sql);

        let stmt = self.conn.prepare(&sql).await?;
        let columns: Vec<String> = stmt.columns().iter().map(|c| c.name().to_string()).collect();
        let type_names: Vec<String> = stmt
            .columns()
            .iter()
            .map(|c| c.type_info().name().to_string())
            .collect();

        let pg_rows: Vec<PgRow> = stmt.query().fetch_all(&mut self.conn).await?;

        let mut rows = Vec::with_capacity(pg_rows.len());
        for pg_row in &pg_rows {
            let mut record = Vec::with_capacity(columns.len());
            for (i, type_name) in type_names.iter().enumerate() {
                record.push(format_cell(pg_row, i, type_name)?);
            }
            rows.push(record);
        }

        Ok(TableData { columns, rows })
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.conn.close().await.map_err(Into::into)
    }
}

/// Renders one cell to its CSV text by the column's Postgres type.
///
/// Returns `None` for SQL NULL. Types without a dedicated arm get one last
/// chance as text before the column is reported as unsupported.
fn format_cell(row: &PgRow, idx: usize, type_name: &str) -> Result<Option<String>> {
    let value = match type_name {
        "BOOL" => row.try_get::<Option<bool>, _>(idx)?.map(|v| v.to_string()),
        "INT2" => row.try_get::<Option<i16>, _>(idx)?.map(|v| v.to_string()),
        "INT4" => row.try_get::<Option<i32>, _>(idx)?.map(|v| v.to_string()),
        "INT8" => row.try_get::<Option<i64>, _>(idx)?.map(|v| v.to_string()),
        "FLOAT4" => row.try_get::<Option<f32>, _>(idx)?.map(|v| v.to_string()),
        "FLOAT8" => row.try_get::<Option<f64>, _>(idx)?.map(|v| v.to_string()),
        "NUMERIC" => row
            .try_get::<Option<sqlx::types::Decimal>, _>(idx)?
            .map(|v| v.to_string()),
        "TEXT" | "VARCHAR" | "BPCHAR" | "CHAR" | "NAME" => row.try_get::<Option<String>, _>(idx)?,
        "TIMESTAMP" => row
            .try_get::<Option<chrono::NaiveDateTime>, _>(idx)?
            .map(|v| v.to_string()),
        "TIMESTAMPTZ" => row
            .try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(idx)?
            .map(|v| v.to_string()),
        "DATE" => row
            .try_get::<Option<chrono::NaiveDate>, _>(idx)?
            .map(|v| v.to_string()),
        "TIME" => row
            .try_get::<Option<chrono::NaiveTime>, _>(idx)?
            .map(|v| v.to_string()),
        "UUID" => row
            .try_get::<Option<sqlx::types::Uuid>, _>(idx)?
            .map(|v| v.to_string()),
        "JSON" | "JSONB" => row
            .try_get::<Option<sqlx::types::JsonValue>, _>(idx)?
            .map(|v| v.to_string()),
        other => row.try_get::<Option<String>, _>(idx).map_err(|_| {
            ExportError::DatabaseError(format!(
                "unsupported column type {} at index {}",
                other, idx
            ))
        })?,
    };

    Ok(value)
}
