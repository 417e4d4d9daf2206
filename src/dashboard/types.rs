use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rows sharing one category value (pie-chart slice).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Rows falling on one calendar day (line-chart point).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// One histogram bin. `upper` is exclusive except for the last bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Summed numeric column for one key (bar-chart bar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Headline row counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub patients: usize,
    pub doctors: usize,
    pub appointments: usize,
    pub bills: usize,
}

/// Everything the dashboard page draws, in one payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardData {
    pub totals: Totals,
    pub gender_distribution: Vec<CategoryCount>,
    pub age_distribution: Vec<HistogramBin>,
    pub doctor_specialties: Vec<CategoryCount>,
    pub daily_appointments: Vec<DailyCount>,
    pub payment_status: Vec<CategoryCount>,
    pub billing_by_patient: Vec<CategoryTotal>,
}
