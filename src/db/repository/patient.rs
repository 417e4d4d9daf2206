use rusqlite::Connection;

use super::{date, insert_form, real, text};
use crate::db::{Cell, DatabaseError};
use crate::models::{NewPatient, Patient};

pub fn insert_patient(conn: &Connection, patient: &NewPatient) -> Result<i64, DatabaseError> {
    insert_form(conn, patient)
}

pub fn list_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT pat_id, name, age, gender, phone, address, email, registration_date
         FROM Patients",
    )?;

    let rows = stmt.query_map([], |row| {
        let cell = |i: usize| row.get::<_, Cell>(i);
        Ok(Patient {
            id: row.get(0)?,
            name: text(cell(1)?).unwrap_or_default(),
            age: real(&cell(2)?),
            gender: text(cell(3)?),
            phone: text(cell(4)?),
            address: text(cell(5)?),
            email: text(cell(6)?),
            registration_date: date(&cell(7)?),
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
