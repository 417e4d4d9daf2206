//! Repository layer — typed, entity-scoped operations over the generic
//! fetch/insert in `db::store`.

mod appointment;
mod billing;
mod doctor;
mod medical_record;
mod patient;
mod references;

use chrono::{NaiveDate, NaiveTime};
use rusqlite::Connection;

use super::{insert_row, Cell, DatabaseError};
use crate::models::{parse_day, parse_time, FormRecord};

pub use appointment::*;
pub use billing::*;
pub use doctor::*;
pub use medical_record::*;
pub use patient::*;
pub use references::*;

/// Validate a form and append it as one row. Returns the new row id.
pub fn insert_form<F: FormRecord>(conn: &Connection, form: &F) -> Result<i64, DatabaseError> {
    form.validate()?;

    let (columns, values): (Vec<&str>, Vec<_>) = form
        .fields()
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .unzip();

    insert_row(conn, F::TABLE, &columns, &values)
}

// Read-model column readers. Column affinity does not stop other writers
// from storing text in an INTEGER column or a real in `age`, so values are
// read as `Cell` and converted here. Whatever does not convert reads as None.

fn text(cell: Cell) -> Option<String> {
    match cell {
        Cell::Null => None,
        Cell::Text(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn integer(cell: &Cell) -> Option<i64> {
    match cell {
        Cell::Real(r) if r.fract() == 0.0 => Some(*r as i64),
        Cell::Text(s) => s.trim().parse().ok(),
        other => other.as_i64(),
    }
}

fn real(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Text(s) => s.trim().parse().ok(),
        other => other.as_f64(),
    }
}

fn date(cell: &Cell) -> Option<NaiveDate> {
    cell.as_str().and_then(parse_day)
}

fn time(cell: &Cell) -> Option<NaiveTime> {
    cell.as_str().and_then(parse_time)
}
