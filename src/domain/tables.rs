//! The fixed set of tables this job exports, and how each one is queried.
//!
//! The list is known at build time and is not runtime-configurable. Order is
//! preserved so successive runs produce reproducible logs.

/// Schema label used in artifact names. Queries themselves are not
/// schema-qualified; the connected database's search path resolves them.
pub const SCHEMA_NAME: &str = "vic_db";

/// How a table's columns are selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnSelection {
    /// `SELECT *` — the header follows whatever columns the database reports.
    All,
    /// An explicit, ordered column list.
    Columns(&'static [&'static str]),
}

/// One table to export: its name plus its column-selection policy.
#[derive(Debug, Clone, Copy)]
pub struct TableDescriptor {
    pub name: &'static str,
    pub selection: ColumnSelection,
}

impl TableDescriptor {
    /// Builds the SELECT statement for this table.
    pub fn select_sql(&self) -> String {
        match self.selection {
            ColumnSelection::All => format!("SELECT * FROM {}", self.name),
            ColumnSelection::Columns(cols) => {
                format!("SELECT {} FROM {}", cols.join(", "), self.name)
            }
        }
    }
}

/// The five exported tables, in their fixed processing order.
pub const TABLES: [TableDescriptor; 5] = [
    TableDescriptor {
        name: "customers",
        selection: ColumnSelection::All,
    },
    TableDescriptor {
        name: "orders",
        selection: ColumnSelection::All,
    },
    TableDescriptor {
        name: "order_details",
        selection: ColumnSelection::All,
    },
    TableDescriptor {
        name: "products",
        selection: ColumnSelection::All,
    },
    TableDescriptor {
        name: "order_confirmations",
        selection: ColumnSelection::Columns(&[
            "id",
            "order_id",
            "created_at",
            "created_by_id",
            "updated_at",
            "updated_by_id",
            "status",
        ]),
    },
];
