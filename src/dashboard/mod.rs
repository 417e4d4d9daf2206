//! Dashboard metrics — fetches the clinic tables and turns them into the
//! series each dashboard chart consumes.

pub mod aggregates;
pub mod types;

pub use aggregates::*;
pub use types::*;

use thiserror::Error;

use crate::db::{DatabaseError, Frame, Store, Table};

/// Bins in the patient age histogram.
pub const AGE_BINS: usize = 20;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Invalid date in {column}: {value:?}")]
    InvalidDate { column: String, value: String },

    #[error("Non-numeric value in {column}: {value:?}")]
    NotNumeric { column: String, value: String },

    #[error("Histogram needs at least one bin")]
    InvalidBins,
}

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

/// Frames the dashboard is computed from.
#[derive(Debug, Clone, Default)]
pub struct DashboardFrames {
    pub patients: Frame,
    pub doctors: Frame,
    pub appointments: Frame,
    pub billings: Frame,
}

impl DashboardFrames {
    pub fn fetch(store: &Store) -> Result<Self, DatabaseError> {
        Ok(Self {
            patients: store.fetch_all(Table::Patients)?,
            doctors: store.fetch_all(Table::Doctors)?,
            appointments: store.fetch_all(Table::Appointments)?,
            billings: store.fetch_all(Table::Billings)?,
        })
    }
}

/// Compute every dashboard metric from already-fetched frames.
/// Charts over an empty table come back as empty series.
pub fn compute_dashboard(frames: &DashboardFrames) -> Result<DashboardData, AggregateError> {
    let DashboardFrames { patients, doctors, appointments, billings } = frames;

    let totals = Totals {
        patients: patients.len(),
        doctors: doctors.len(),
        appointments: appointments.len(),
        bills: billings.len(),
    };

    let mut data = DashboardData { totals, ..Default::default() };

    if !patients.is_empty() {
        data.gender_distribution = count_by(patients, "gender")?;
        data.age_distribution = histogram(patients, "age", AGE_BINS)?;
    }
    if !doctors.is_empty() {
        data.doctor_specialties = count_by(doctors, "specialty")?;
    }
    if !appointments.is_empty() {
        data.daily_appointments = daily_counts(appointments, "app_date")?;
    }
    if !billings.is_empty() {
        data.payment_status = count_by(billings, "payment_status")?;
        data.billing_by_patient = sum_by(billings, "pat_id", "amount")?;
    }

    Ok(data)
}

/// Top-level assembly: fetch and compute all dashboard data in one call.
pub fn get_dashboard_data(store: &Store) -> Result<DashboardData, DashboardError> {
    let frames = DashboardFrames::fetch(store)?;
    let data = compute_dashboard(&frames)?;
    tracing::debug!(
        patients = data.totals.patients,
        appointments = data.totals.appointments,
        "Dashboard computed"
    );
    Ok(data)
}
