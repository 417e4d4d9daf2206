use serde::{Deserialize, Serialize};

use super::form::{require, FormRecord};
use crate::db::{Cell, DatabaseError, Table};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialty: Option<String>,
    pub department_id: Option<i64>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDoctor {
    pub name: String,
    pub specialty: Option<String>,
    pub department_id: Option<i64>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl FormRecord for NewDoctor {
    const TABLE: Table = Table::Doctors;

    fn fields(&self) -> Vec<(&'static str, Cell)> {
        vec![
            ("name", self.name.trim().into()),
            ("specialty", self.specialty.clone().into()),
            ("dept_id", self.department_id.into()),
            ("phone", self.phone.clone().into()),
            ("email", self.email.clone().into()),
        ]
    }

    fn validate(&self) -> Result<(), DatabaseError> {
        require(&self.name, "name")
    }
}
