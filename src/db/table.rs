//! The closed set of tables in the clinic store.
//!
//! Table and column names are interpolated into SQL text, so every name
//! that reaches a statement must come from here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DatabaseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Table {
    Patients,
    Doctors,
    Appointments,
    MedicalRecords,
    Billings,
}

impl Table {
    pub const ALL: [Table; 5] = [
        Table::Patients,
        Table::Doctors,
        Table::Appointments,
        Table::MedicalRecords,
        Table::Billings,
    ];

    /// Physical table name in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patients => "Patients",
            Self::Doctors => "Doctors",
            Self::Appointments => "Appointments",
            Self::MedicalRecords => "MedicalRecords",
            Self::Billings => "Billings",
        }
    }

    fn alias(&self) -> &'static str {
        match self {
            Self::Patients => "patients",
            Self::Doctors => "doctors",
            Self::Appointments => "appointments",
            Self::MedicalRecords => "medical_records",
            Self::Billings => "billings",
        }
    }

    /// Auto-assigned primary key column.
    pub fn id_column(&self) -> &'static str {
        self.columns()[0]
    }

    /// Columns in declaration order, primary key first.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Patients => &[
                "pat_id",
                "name",
                "age",
                "gender",
                "phone",
                "address",
                "email",
                "registration_date",
            ],
            Self::Doctors => &["doc_id", "name", "specialty", "dept_id", "phone", "email"],
            Self::Appointments => &["app_id", "pat_id", "doc_id", "app_date", "app_time", "status"],
            Self::MedicalRecords => &[
                "record_id",
                "pat_id",
                "doc_id",
                "diagnosis",
                "treatment",
                "prescription",
                "record_date",
            ],
            Self::Billings => &[
                "bill_id",
                "pat_id",
                "amount",
                "details",
                "payment_status",
                "bill_date",
            ],
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns().contains(&column)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Table {
    type Err = DatabaseError;

    /// Accepts the physical name in any case, or the snake-case alias
    /// (`medical_records`, `medical-records`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        Table::ALL
            .into_iter()
            .find(|t| {
                t.as_str().eq_ignore_ascii_case(&normalized)
                    || t.alias().eq_ignore_ascii_case(&normalized)
            })
            .ok_or_else(|| DatabaseError::UnknownTable(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_physical_names_and_aliases() {
        assert_eq!("Patients".parse::<Table>().unwrap(), Table::Patients);
        assert_eq!("doctors".parse::<Table>().unwrap(), Table::Doctors);
        assert_eq!("medical_records".parse::<Table>().unwrap(), Table::MedicalRecords);
        assert_eq!("medical-records".parse::<Table>().unwrap(), Table::MedicalRecords);
        assert_eq!("MEDICALRECORDS".parse::<Table>().unwrap(), Table::MedicalRecords);
    }

    #[test]
    fn rejects_unknown_table() {
        let err = "Patients; DROP TABLE Doctors".parse::<Table>().unwrap_err();
        assert!(matches!(err, DatabaseError::UnknownTable(_)));
    }

    #[test]
    fn id_column_is_first() {
        assert_eq!(Table::Patients.id_column(), "pat_id");
        assert_eq!(Table::Billings.id_column(), "bill_id");
        assert!(Table::Appointments.has_column("app_date"));
        assert!(!Table::Appointments.has_column("amount"));
    }
}
