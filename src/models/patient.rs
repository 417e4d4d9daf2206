use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::form::{require, FormRecord};
use super::DATE_FORMAT;
use crate::db::{Cell, DatabaseError, Table};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    /// Read as a number whatever its stored type; fractional ages survive.
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub registration_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    /// Defaults to the store's current date when absent.
    pub registration_date: Option<NaiveDate>,
}

impl FormRecord for NewPatient {
    const TABLE: Table = Table::Patients;

    fn fields(&self) -> Vec<(&'static str, Cell)> {
        vec![
            ("name", self.name.trim().into()),
            ("age", self.age.into()),
            ("gender", self.gender.clone().into()),
            ("phone", self.phone.clone().into()),
            ("address", self.address.clone().into()),
            ("email", self.email.clone().into()),
            (
                "registration_date",
                self.registration_date
                    .map(|d| d.format(DATE_FORMAT).to_string())
                    .into(),
            ),
        ]
    }

    fn validate(&self) -> Result<(), DatabaseError> {
        require(&self.name, "name")
    }
}
