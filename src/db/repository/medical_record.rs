use rusqlite::Connection;

use super::{date, insert_form, integer, text};
use crate::db::{Cell, DatabaseError};
use crate::models::{MedicalRecord, NewMedicalRecord};

pub fn insert_medical_record(
    conn: &Connection,
    record: &NewMedicalRecord,
) -> Result<i64, DatabaseError> {
    insert_form(conn, record)
}

pub fn list_medical_records(conn: &Connection) -> Result<Vec<MedicalRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT record_id, pat_id, doc_id, diagnosis, treatment, prescription, record_date
         FROM MedicalRecords",
    )?;

    let rows = stmt.query_map([], |row| {
        let cell = |i: usize| row.get::<_, Cell>(i);
        Ok(MedicalRecord {
            id: row.get(0)?,
            patient_id: integer(&cell(1)?),
            doctor_id: integer(&cell(2)?),
            diagnosis: text(cell(3)?),
            treatment: text(cell(4)?),
            prescription: text(cell(5)?),
            record_date: date(&cell(6)?),
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
