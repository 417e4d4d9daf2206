use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::form::FormRecord;
use super::DATE_FORMAT;
use crate::db::{Cell, Table};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Billing {
    pub id: i64,
    pub patient_id: Option<i64>,
    pub amount: Option<f64>,
    pub details: Option<String>,
    pub payment_status: Option<String>,
    pub bill_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBilling {
    pub patient_id: i64,
    pub amount: f64,
    pub details: Option<String>,
    /// Free text; the store fills in "Pending" when absent.
    pub payment_status: Option<String>,
    pub bill_date: Option<NaiveDate>,
}

impl FormRecord for NewBilling {
    const TABLE: Table = Table::Billings;

    fn fields(&self) -> Vec<(&'static str, Cell)> {
        vec![
            ("pat_id", self.patient_id.into()),
            ("amount", self.amount.into()),
            ("details", self.details.clone().into()),
            ("payment_status", self.payment_status.clone().into()),
            (
                "bill_date",
                self.bill_date.map(|d| d.format(DATE_FORMAT).to_string()).into(),
            ),
        ]
    }
}
