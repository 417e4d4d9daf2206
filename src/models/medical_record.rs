use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::form::FormRecord;
use super::DATE_FORMAT;
use crate::db::{Cell, Table};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: i64,
    pub patient_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub prescription: Option<String>,
    pub record_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMedicalRecord {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub prescription: Option<String>,
    pub record_date: Option<NaiveDate>,
}

impl FormRecord for NewMedicalRecord {
    const TABLE: Table = Table::MedicalRecords;

    fn fields(&self) -> Vec<(&'static str, Cell)> {
        vec![
            ("pat_id", self.patient_id.into()),
            ("doc_id", self.doctor_id.into()),
            ("diagnosis", self.diagnosis.clone().into()),
            ("treatment", self.treatment.clone().into()),
            ("prescription", self.prescription.clone().into()),
            (
                "record_date",
                self.record_date
                    .map(|d| d.format(DATE_FORMAT).to_string())
                    .into(),
            ),
        ]
    }
}
