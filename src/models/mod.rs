mod appointment;
mod billing;
mod doctor;
mod form;
mod medical_record;
mod patient;

pub use appointment::*;
pub use billing::*;
pub use doctor::*;
pub use form::*;
pub use medical_record::*;
pub use patient::*;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Store format for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Store format for appointment times.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Date-time layouts accepted in date columns besides `DATE_FORMAT`.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a stored date. Date-times collapse to their calendar day.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok().or_else(|| {
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
            .map(|dt| dt.date())
    })
}

/// Parse a time of day, `HH:MM:SS` (with optional fraction) or `HH:MM`.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}
