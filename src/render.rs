//! Plain-text rendering of frames, dashboard metrics and reference reports.

use std::fmt::Write;

use crate::dashboard::{CategoryCount, DashboardData};
use crate::db::{Frame, ReferenceReport};

/// Aligned text table with a header rule. NULL renders as an empty cell.
pub fn render_frame(frame: &Frame) -> String {
    let cells: Vec<Vec<String>> = frame
        .rows
        .iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect();

    let widths: Vec<usize> = frame
        .columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain([name.chars().count()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_row(&mut out, frame.columns.iter().map(String::as_str), &widths);
    push_row(
        &mut out,
        widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().iter().map(String::as_str),
        &widths,
    );
    for row in &cells {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    let _ = write!(out, "({} rows)", frame.len());
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn push_counts(out: &mut String, title: &str, counts: &[CategoryCount]) {
    let _ = writeln!(out, "\n{title}");
    if counts.is_empty() {
        out.push_str("  (no data)\n");
    }
    for c in counts {
        let _ = writeln!(out, "  {:<20} {}", c.category, c.count);
    }
}

pub fn render_dashboard(data: &DashboardData) -> String {
    let mut out = String::new();
    let t = &data.totals;
    let _ = writeln!(
        out,
        "Patients: {}  Doctors: {}  Appointments: {}  Bills: {}",
        t.patients, t.doctors, t.appointments, t.bills
    );

    push_counts(&mut out, "Gender Distribution", &data.gender_distribution);

    let _ = writeln!(out, "\nAge Distribution");
    if data.age_distribution.is_empty() {
        out.push_str("  (no data)\n");
    }
    for bin in data.age_distribution.iter().filter(|b| b.count > 0) {
        let _ = writeln!(out, "  {:>6.1} - {:<6.1} {}", bin.lower, bin.upper, bin.count);
    }

    push_counts(&mut out, "Doctor Specialties", &data.doctor_specialties);

    let _ = writeln!(out, "\nDaily Appointments");
    if data.daily_appointments.is_empty() {
        out.push_str("  (no data)\n");
    }
    for day in &data.daily_appointments {
        let _ = writeln!(out, "  {}  {}", day.date, day.count);
    }

    push_counts(&mut out, "Payment Status", &data.payment_status);

    let _ = writeln!(out, "\nBilling Amounts by Patient");
    if data.billing_by_patient.is_empty() {
        out.push_str("  (no data)\n");
    }
    for total in &data.billing_by_patient {
        let _ = writeln!(out, "  patient {:<10} {:.2}", total.category, total.total);
    }

    out
}

pub fn render_references(report: &ReferenceReport) -> String {
    let mut out = String::new();
    if report.is_clean() {
        let _ = write!(out, "No orphaned references ({} rows checked)", report.rows_checked);
        return out;
    }
    let _ = writeln!(
        out,
        "{} orphaned references ({} rows checked)",
        report.orphans.len(),
        report.rows_checked
    );
    for o in &report.orphans {
        let _ = writeln!(out, "  {} #{}: {} = {} not found", o.table, o.row_id, o.column, o.missing_id);
    }
    out
}
