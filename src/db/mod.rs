pub mod frame;
pub mod repository;
pub mod sqlite;
pub mod store;
pub mod table;

pub use frame::*;
pub use repository::*;
pub use sqlite::*;
pub use store::*;
pub use table::*;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Store unavailable at {}: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Unknown column {column} for table {table}")]
    UnknownColumn { table: String, column: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
