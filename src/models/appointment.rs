use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::form::FormRecord;
use super::{DATE_FORMAT, TIME_FORMAT};
use crate::db::{Cell, Table};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointment {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    /// Free text; the store fills in "Scheduled" when absent.
    pub status: Option<String>,
}

impl FormRecord for NewAppointment {
    const TABLE: Table = Table::Appointments;

    fn fields(&self) -> Vec<(&'static str, Cell)> {
        vec![
            ("pat_id", self.patient_id.into()),
            ("doc_id", self.doctor_id.into()),
            ("app_date", self.date.format(DATE_FORMAT).to_string().into()),
            (
                "app_time",
                self.time.map(|t| t.format(TIME_FORMAT).to_string()).into(),
            ),
            ("status", self.status.clone().into()),
        ]
    }
}
