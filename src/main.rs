//! clinic CLI - records and dashboard metrics for a small clinic
//!
//! Every command opens the store (creating the schema if absent), performs
//! one operation and exits:
//! - `init`: create the store and its tables
//! - `list`: print every row of a table
//! - `add`: insert a patient, doctor, appointment, medical record or bill
//! - `dashboard`: totals and chart series
//! - `check`: report orphaned patient/doctor references

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use clinic_lib::config;
use clinic_lib::dashboard::get_dashboard_data;
use clinic_lib::db::{self, Store, Table};
use clinic_lib::models::*;
use clinic_lib::render;

#[derive(Parser, Debug)]
#[command(
    name = "clinic",
    author,
    version,
    about = "Clinic records store: patients, doctors, appointments, medical records and billing"
)]
struct Cli {
    /// Path to the store file (default: ./hospital.db)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the store and its tables if absent
    Init,
    /// Print every row of a table
    List(ListArgs),
    /// Add one row
    #[command(subcommand)]
    Add(AddCommand),
    /// Show dashboard totals and chart series
    Dashboard(FormatArgs),
    /// Report appointments, records and bills pointing at missing patients or doctors
    Check(FormatArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[value(alias = "table")]
    Text,
    Json,
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Table name (Patients, Doctors, Appointments, MedicalRecords, Billings)
    table: String,

    #[command(flatten)]
    output: FormatArgs,
}

#[derive(Subcommand, Debug)]
enum AddCommand {
    /// Register a patient
    Patient(PatientArgs),
    /// Register a doctor
    Doctor(DoctorArgs),
    /// Book an appointment
    Appointment(AppointmentArgs),
    /// Add a medical record
    Record(RecordArgs),
    /// Add a billing entry
    Bill(BillArgs),
}

#[derive(Args, Debug)]
struct PatientArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    age: Option<i64>,
    #[arg(long)]
    gender: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    email: Option<String>,
    /// YYYY-MM-DD (default: today)
    #[arg(long)]
    registration_date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct DoctorArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    specialty: Option<String>,
    #[arg(long)]
    dept_id: Option<i64>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    email: Option<String>,
}

#[derive(Args, Debug)]
struct AppointmentArgs {
    #[arg(long)]
    patient_id: i64,
    #[arg(long)]
    doctor_id: i64,
    /// YYYY-MM-DD
    #[arg(long)]
    date: NaiveDate,
    /// HH:MM or HH:MM:SS
    #[arg(long, value_parser = time_arg)]
    time: Option<NaiveTime>,
    /// Free text (default: Scheduled)
    #[arg(long)]
    status: Option<String>,
}

#[derive(Args, Debug)]
struct RecordArgs {
    #[arg(long)]
    patient_id: i64,
    #[arg(long)]
    doctor_id: i64,
    #[arg(long)]
    diagnosis: Option<String>,
    #[arg(long)]
    treatment: Option<String>,
    #[arg(long)]
    prescription: Option<String>,
    /// YYYY-MM-DD (default: today)
    #[arg(long)]
    record_date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct BillArgs {
    #[arg(long)]
    patient_id: i64,
    #[arg(long)]
    amount: f64,
    #[arg(long)]
    details: Option<String>,
    /// Free text (default: Pending)
    #[arg(long)]
    payment_status: Option<String>,
    /// YYYY-MM-DD (default: today)
    #[arg(long)]
    bill_date: Option<NaiveDate>,
}

fn time_arg(s: &str) -> Result<NaiveTime, String> {
    parse_time(s).ok_or_else(|| format!("invalid time '{s}', expected HH:MM or HH:MM:SS"))
}

fn main() {
    let cli = Cli::parse();
    clinic_lib::init_tracing(cli.debug);
    tracing::info!("{} v{} starting", config::APP_NAME, config::APP_VERSION);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Cannot determine working directory")?;
    let path = config::resolve_db_path(cli.db.as_deref(), &cwd);
    let store = Store::open(&path)
        .with_context(|| format!("Failed to open store {}", path.display()))?;

    match cli.command {
        Commands::Init => {
            println!("Store ready at {}", store.path().display());
        }
        Commands::List(args) => {
            let table: Table = args.table.parse()?;
            let frame = store.fetch_all(table)?;
            match args.output.format {
                OutputFormat::Text => println!("{}", render::render_frame(&frame)),
                OutputFormat::Json => print_json(&frame.to_records())?,
            }
        }
        Commands::Add(add) => {
            let (table, id) = add_row(&store, add)?;
            println!("Added {} #{id}", table.as_str());
        }
        Commands::Dashboard(args) => {
            let data = get_dashboard_data(&store).context("Failed to compute dashboard")?;
            match args.format {
                OutputFormat::Text => print!("{}", render::render_dashboard(&data)),
                OutputFormat::Json => print_json(&data)?,
            }
        }
        Commands::Check(args) => {
            let conn = store.connect()?;
            let report = db::check_references(&conn)?;
            match args.format {
                OutputFormat::Text => println!("{}", render::render_references(&report)),
                OutputFormat::Json => print_json(&report)?,
            }
        }
    }

    Ok(())
}

fn add_row(store: &Store, add: AddCommand) -> Result<(Table, i64)> {
    let conn = store.connect()?;
    let added = match add {
        AddCommand::Patient(a) => (
            Table::Patients,
            db::insert_patient(&conn, &NewPatient {
                name: a.name,
                age: a.age,
                gender: a.gender,
                phone: a.phone,
                address: a.address,
                email: a.email,
                registration_date: a.registration_date,
            })?,
        ),
        AddCommand::Doctor(a) => (
            Table::Doctors,
            db::insert_doctor(&conn, &NewDoctor {
                name: a.name,
                specialty: a.specialty,
                department_id: a.dept_id,
                phone: a.phone,
                email: a.email,
            })?,
        ),
        AddCommand::Appointment(a) => (
            Table::Appointments,
            db::insert_appointment(&conn, &NewAppointment {
                patient_id: a.patient_id,
                doctor_id: a.doctor_id,
                date: a.date,
                time: a.time,
                status: a.status,
            })?,
        ),
        AddCommand::Record(a) => (
            Table::MedicalRecords,
            db::insert_medical_record(&conn, &NewMedicalRecord {
                patient_id: a.patient_id,
                doctor_id: a.doctor_id,
                diagnosis: a.diagnosis,
                treatment: a.treatment,
                prescription: a.prescription,
                record_date: a.record_date,
            })?,
        ),
        AddCommand::Bill(a) => (
            Table::Billings,
            db::insert_billing(&conn, &NewBilling {
                patient_id: a.patient_id,
                amount: a.amount,
                details: a.details,
                payment_status: a.payment_status,
                bill_date: a.bill_date,
            })?,
        ),
    };
    Ok(added)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn time_accepts_minutes_or_seconds() {
        assert_eq!(time_arg("09:30"), Ok(NaiveTime::from_hms_opt(9, 30, 0).unwrap()));
        assert_eq!(time_arg("09:30:15"), Ok(NaiveTime::from_hms_opt(9, 30, 15).unwrap()));
        assert!(time_arg("half nine").is_err());
    }
}
