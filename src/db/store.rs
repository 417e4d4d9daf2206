//! Generic data access: fetch every row of a table, append one row.
//!
//! `Store` owns only the file path. Each operation opens its own
//! connection and drops it when done; nothing spans two statements.

use std::path::{Path, PathBuf};

use rusqlite::{params_from_iter, Connection};

use super::sqlite::{connect, init_schema};
use super::{Cell, DatabaseError, Frame, Table};

/// Fetch every row of `table` with no filtering, in the store's row order.
pub fn fetch_all(conn: &Connection, table: Table) -> Result<Frame, DatabaseError> {
    let mut stmt = conn.prepare(&format!("SELECT * FROM {}", table.as_str()))?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = columns.len();

    let rows = stmt.query_map([], |row| {
        (0..width).map(|i| row.get::<_, Cell>(i)).collect::<rusqlite::Result<Vec<_>>>()
    })?;

    let mut frame = Frame::new(columns);
    for row in rows {
        frame.rows.push(row?);
    }

    tracing::debug!(table = %table, rows = frame.len(), "Fetched table");
    Ok(frame)
}

/// Append one row, binding `values` positionally. Returns the new row id.
///
/// Column names are checked against the table; the value count is not,
/// SQLite rejects a mismatch. No columns and no values appends a row of
/// column defaults.
pub fn insert_row(
    conn: &Connection,
    table: Table,
    columns: &[&str],
    values: &[Cell],
) -> Result<i64, DatabaseError> {
    if let Some(unknown) = columns.iter().find(|c| !table.has_column(c)) {
        return Err(DatabaseError::UnknownColumn {
            table: table.as_str().to_string(),
            column: unknown.to_string(),
        });
    }

    let placeholders = (1..=values.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = match (columns.is_empty(), values.is_empty()) {
        (true, true) => format!("INSERT INTO {} DEFAULT VALUES", table.as_str()),
        (true, false) => format!("INSERT INTO {} VALUES ({})", table.as_str(), placeholders),
        _ => format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table.as_str(),
            columns.join(", "),
            placeholders
        ),
    };

    conn.execute(&sql, params_from_iter(values.iter()))?;
    let id = conn.last_insert_rowid();

    tracing::debug!(table = %table, id, "Inserted row");
    Ok(id)
}

/// Handle to the clinic store file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Ensure the schema exists at `path` and return a handle to it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DatabaseError> {
        let store = Self { path: path.into() };
        let conn = store.connect()?;
        init_schema(&conn)?;
        tracing::info!(path = %store.path.display(), "Clinic store ready");
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fresh connection for a single operation.
    pub fn connect(&self) -> Result<Connection, DatabaseError> {
        connect(&self.path)
    }

    pub fn fetch_all(&self, table: Table) -> Result<Frame, DatabaseError> {
        let conn = self.connect()?;
        fetch_all(&conn, table)
    }

    pub fn insert(
        &self,
        table: Table,
        columns: &[&str],
        values: &[Cell],
    ) -> Result<i64, DatabaseError> {
        let conn = self.connect()?;
        insert_row(&conn, table, columns, values)
    }
}
