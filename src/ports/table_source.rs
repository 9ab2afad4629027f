//! # Table Source Port
//!
//! This Port defines the contract for the "Data Reader".
//!
//! Anything that implements `TableSource` must be able to take a
//! `TableDescriptor`, run its query, and hand back the ordered column names
//! reported by the database along with the stringified rows.

use crate::domain::entities::TableData;
use crate::domain::errors::Result;
use crate::domain::tables::TableDescriptor;
use async_trait::async_trait;

/// `TableSource` runs one table's query on the shared connection.
#[async_trait]
pub trait TableSource: Send {
    /// Executes the descriptor's query and returns its columns and rows.
    ///
    /// The header must come from the result's own metadata so that
    /// `SELECT *` exports track the live schema.
    async fn fetch_table(&mut self, descriptor: &TableDescriptor) -> Result<TableData>;

    /// Closes the underlying connection. Called exactly once per run.
    async fn close(self: Box<Self>) -> Result<()>;
}
