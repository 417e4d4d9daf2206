use rusqlite::Connection;

use super::{date, insert_form, integer, real, text};
use crate::db::{Cell, DatabaseError};
use crate::models::{Billing, NewBilling};

pub fn insert_billing(conn: &Connection, bill: &NewBilling) -> Result<i64, DatabaseError> {
    insert_form(conn, bill)
}

pub fn list_billings(conn: &Connection) -> Result<Vec<Billing>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT bill_id, pat_id, amount, details, payment_status, bill_date
         FROM Billings",
    )?;

    let rows = stmt.query_map([], |row| {
        let cell = |i: usize| row.get::<_, Cell>(i);
        Ok(Billing {
            id: row.get(0)?,
            patient_id: integer(&cell(1)?),
            amount: real(&cell(2)?),
            details: text(cell(3)?),
            payment_status: text(cell(4)?),
            bill_date: date(&cell(5)?),
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
