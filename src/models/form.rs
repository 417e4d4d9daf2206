use crate::db::{Cell, DatabaseError, Table};

/// A form submission that becomes one row of `TABLE`.
///
/// `fields` lists every column the form carries. Absent optional values are
/// `Cell::Null` and get dropped before the insert, so column defaults apply.
pub trait FormRecord {
    const TABLE: Table;

    fn fields(&self) -> Vec<(&'static str, Cell)>;

    /// Presence checks only.
    fn validate(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

pub(crate) fn require(value: &str, field: &'static str) -> Result<(), DatabaseError> {
    if value.trim().is_empty() {
        return Err(DatabaseError::MissingField(field));
    }
    Ok(())
}
