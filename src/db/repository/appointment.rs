use rusqlite::Connection;

use super::{date, insert_form, integer, text, time};
use crate::db::{Cell, DatabaseError};
use crate::models::{Appointment, NewAppointment};

pub fn insert_appointment(
    conn: &Connection,
    appointment: &NewAppointment,
) -> Result<i64, DatabaseError> {
    insert_form(conn, appointment)
}

pub fn list_appointments(conn: &Connection) -> Result<Vec<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT app_id, pat_id, doc_id, app_date, app_time, status
         FROM Appointments",
    )?;

    let rows = stmt.query_map([], |row| {
        let cell = |i: usize| row.get::<_, Cell>(i);
        Ok(Appointment {
            id: row.get(0)?,
            patient_id: integer(&cell(1)?),
            doctor_id: integer(&cell(2)?),
            date: date(&cell(3)?),
            time: time(&cell(4)?),
            status: text(cell(5)?),
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
