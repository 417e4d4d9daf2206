use rusqlite::Connection;

use super::{insert_form, integer, text};
use crate::db::{Cell, DatabaseError};
use crate::models::{Doctor, NewDoctor};

pub fn insert_doctor(conn: &Connection, doctor: &NewDoctor) -> Result<i64, DatabaseError> {
    insert_form(conn, doctor)
}

pub fn list_doctors(conn: &Connection) -> Result<Vec<Doctor>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT doc_id, name, specialty, dept_id, phone, email
         FROM Doctors",
    )?;

    let rows = stmt.query_map([], |row| {
        let cell = |i: usize| row.get::<_, Cell>(i);
        Ok(Doctor {
            id: row.get(0)?,
            name: text(cell(1)?).unwrap_or_default(),
            specialty: text(cell(2)?),
            department_id: integer(&cell(3)?),
            phone: text(cell(4)?),
            email: text(cell(5)?),
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
