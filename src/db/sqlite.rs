use std::path::Path;

use rusqlite::{Connection, ErrorCode};
use serde::Serialize;
use tracing;

use super::DatabaseError;

const SCHEMA: &str = include_str!("../../resources/schema.sql");

/// Open a SQLite connection to the given path and ensure the schema exists
pub fn open_database(path: &Path) -> Result<Connection, DatabaseError> {
    let conn = connect(path)?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (for testing)
pub fn open_memory_database() -> Result<Connection, DatabaseError> {
    let conn = Connection::open_in_memory()?;
    configure_pragmas(&conn)?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Open a connection without touching the schema.
///
/// SQLite opens files lazily, so the pragma below is the first read of the
/// file header. A file that cannot be read or is not a database fails here.
pub(crate) fn connect(path: &Path) -> Result<Connection, DatabaseError> {
    let unavailable = |source| DatabaseError::StorageUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let conn = Connection::open(path).map_err(unavailable)?;
    match configure_pragmas(&conn) {
        Ok(()) => Ok(conn),
        Err(DatabaseError::Sqlite(source)) if is_unreadable(&source) => Err(unavailable(source)),
        Err(e) => Err(e),
    }
}

fn is_unreadable(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if matches!(
                e.code,
                ErrorCode::NotADatabase
                    | ErrorCode::CannotOpen
                    | ErrorCode::PermissionDenied
                    | ErrorCode::DatabaseCorrupt
            )
    )
}

fn configure_pragmas(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch("PRAGMA journal_mode=DELETE;")?;
    Ok(())
}

/// Create the five clinic tables if absent. Safe to run on every startup.
pub fn init_schema(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(SCHEMA)?;
    tracing::debug!("Schema ensured");
    Ok(())
}

/// Names of user tables, sorted.
pub fn list_tables(conn: &Connection) -> Result<Vec<String>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type='table' AND name NOT LIKE 'sqlite_%'
         ORDER BY name",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

/// Column definition as reported by `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub decl_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    pub primary_key: bool,
}

pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<ColumnInfo>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT name, type, \"notnull\", dflt_value, pk FROM pragma_table_info(?1)")?;
    let rows = stmt.query_map([table], |row| {
        Ok(ColumnInfo {
            name: row.get(0)?,
            decl_type: row.get(1)?,
            not_null: row.get::<_, i64>(2)? != 0,
            default_value: row.get(3)?,
            primary_key: row.get::<_, i64>(4)? != 0,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}
