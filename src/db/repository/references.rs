use rusqlite::Connection;
use serde::Serialize;

use crate::db::{Cell, DatabaseError, Table};

/// A row whose patient or doctor reference points at nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrphanedReference {
    pub table: String,
    pub row_id: i64,
    pub column: String,
    /// The stored reference as found; not necessarily an integer.
    pub missing_id: Cell,
}

/// Result of a cross-table reference scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReferenceReport {
    pub orphans: Vec<OrphanedReference>,
    pub rows_checked: i64,
}

impl ReferenceReport {
    pub fn is_clean(&self) -> bool {
        self.orphans.is_empty()
    }
}

/// (referencing table, reference column, referenced table)
const REFERENCES: &[(Table, &str, Table)] = &[
    (Table::Appointments, "pat_id", Table::Patients),
    (Table::Appointments, "doc_id", Table::Doctors),
    (Table::MedicalRecords, "pat_id", Table::Patients),
    (Table::MedicalRecords, "doc_id", Table::Doctors),
    (Table::Billings, "pat_id", Table::Patients),
];

/// Scan appointments, medical records and billings for references to
/// patients or doctors that do not exist.
///
/// Report only: the store never rejects a write for an orphaned reference.
/// NULL references are not orphans. A reference of any other type that
/// matches no id (text, a fractional number) is one.
pub fn check_references(conn: &Connection) -> Result<ReferenceReport, DatabaseError> {
    let mut report = ReferenceReport::default();

    for table in [Table::Appointments, Table::MedicalRecords, Table::Billings] {
        let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        report.rows_checked += count;
    }

    for &(table, ref_col, target) in REFERENCES {
        let id_col = table.id_column();
        let target_id = target.id_column();
        let mut stmt = conn.prepare(&format!(
            "SELECT t.{id_col}, t.{ref_col} FROM {table} t
             WHERE t.{ref_col} IS NOT NULL
             AND NOT EXISTS (SELECT 1 FROM {target} r WHERE r.{target_id} = t.{ref_col})
             ORDER BY t.{id_col}"
        ))?;
        let rows = stmt.query_map([], |row| {
            Ok(OrphanedReference {
                table: table.to_string(),
                row_id: row.get(0)?,
                column: ref_col.to_string(),
                missing_id: row.get::<_, Cell>(1)?,
            })
        })?;
        for orphan in rows {
            report.orphans.push(orphan?);
        }
    }

    if !report.is_clean() {
        tracing::warn!(
            orphans = report.orphans.len(),
            rows_checked = report.rows_checked,
            "Orphaned references found"
        );
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::*;
    use crate::db::sqlite::open_memory_database;
    use crate::db::insert_row;
    use crate::models::*;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn empty_store_is_clean() {
        let conn = open_memory_database().unwrap();
        let report = check_references(&conn).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.rows_checked, 0);
    }

    #[test]
    fn valid_references_are_clean() {
        let conn = open_memory_database().unwrap();
        let pat = insert_patient(&conn, &NewPatient { name: "Ann".into(), ..Default::default() }).unwrap();
        let doc = insert_doctor(&conn, &NewDoctor { name: "Dr. Bo".into(), ..Default::default() }).unwrap();
        insert_appointment(&conn, &NewAppointment {
            patient_id: pat,
            doctor_id: doc,
            date: day(),
            time: None,
            status: None,
        }).unwrap();
        insert_billing(&conn, &NewBilling {
            patient_id: pat,
            amount: 10.0,
            details: None,
            payment_status: None,
            bill_date: None,
        }).unwrap();

        let report = check_references(&conn).unwrap();
        assert!(report.is_clean(), "unexpected orphans: {:?}", report.orphans);
        assert_eq!(report.rows_checked, 2);
    }

    #[test]
    fn missing_patient_and_doctor_reported() {
        let conn = open_memory_database().unwrap();
        let pat = insert_patient(&conn, &NewPatient { name: "Ann".into(), ..Default::default() }).unwrap();
        insert_appointment(&conn, &NewAppointment {
            patient_id: pat,
            doctor_id: 7,
            date: day(),
            time: None,
            status: None,
        }).unwrap();
        insert_medical_record(&conn, &NewMedicalRecord {
            patient_id: 99,
            doctor_id: 7,
            diagnosis: None,
            treatment: None,
            prescription: None,
            record_date: None,
        }).unwrap();

        let report = check_references(&conn).unwrap();
        assert_eq!(report.orphans.len(), 3);
        assert_eq!(
            report.orphans[0],
            OrphanedReference {
                table: "Appointments".into(),
                row_id: 1,
                column: "doc_id".into(),
                missing_id: Cell::Integer(7),
            }
        );
        assert!(report
            .orphans
            .iter()
            .any(|o| o.table == "MedicalRecords" && o.column == "pat_id" && o.missing_id == Cell::Integer(99)));
    }

    #[test]
    fn off_type_references_reported_as_orphans() {
        let conn = open_memory_database().unwrap();
        let pat = insert_patient(&conn, &NewPatient { name: "Ann".into(), ..Default::default() }).unwrap();
        insert_row(&conn, Table::Billings, &["pat_id", "amount"], &["abc".into(), 1.0f64.into()]).unwrap();
        insert_row(&conn, Table::Billings, &["pat_id", "amount"], &[1.5f64.into(), 2.0f64.into()]).unwrap();
        insert_row(&conn, Table::Billings, &["pat_id", "amount"], &[pat.into(), 3.0f64.into()]).unwrap();

        let report = check_references(&conn).unwrap();
        assert_eq!(report.rows_checked, 3);
        assert_eq!(
            report
                .orphans
                .iter()
                .map(|o| (o.row_id, o.missing_id.clone()))
                .collect::<Vec<_>>(),
            vec![(1, Cell::from("abc")), (2, Cell::Real(1.5))]
        );
    }
}
