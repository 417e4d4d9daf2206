//! End-to-end checks of the clinic binary against a temporary store

use assert_cmd::Command;
use predicates::prelude::*;

fn clinic(db: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("clinic").unwrap();
    cmd.arg("--db").arg(db);
    cmd
}

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("clinic")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_init_creates_store() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("hospital.db");

    clinic(&db).arg("init").assert().success().stdout(predicate::str::contains("Store ready"));
    assert!(db.exists());

    // Second run leaves the store usable
    clinic(&db).arg("init").assert().success();
}

#[test]
fn test_list_empty_table_prints_headers() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("hospital.db");

    clinic(&db)
        .args(["list", "Billings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bill_id"))
        .stdout(predicate::str::contains("payment_status"))
        .stdout(predicate::str::contains("(0 rows)"));
}

#[test]
fn test_add_patient_then_list_json() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("hospital.db");

    clinic(&db)
        .args(["add", "patient", "--name", "Jane Doe", "--age", "34", "--gender", "F"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Patients #1"));

    let output = clinic(&db).args(["list", "patients", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["pat_id"], 1);
    assert_eq!(rows[0]["name"], "Jane Doe");
    assert_eq!(rows[0]["age"], 34);
    assert_eq!(rows[0]["gender"], "F");
}

#[test]
fn test_dashboard_json_gender_distribution() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("hospital.db");

    clinic(&db)
        .args(["add", "patient", "--name", "Jane Doe", "--age", "34", "--gender", "F"])
        .assert()
        .success();
    clinic(&db)
        .args(["add", "appointment", "--patient-id", "1", "--doctor-id", "1", "--date", "2024-05-02", "--time", "09:30"])
        .assert()
        .success();

    let output = clinic(&db).args(["dashboard", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let data: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(data["totals"]["patients"], 1);
    assert_eq!(data["gender_distribution"][0]["category"], "F");
    assert_eq!(data["gender_distribution"][0]["count"], 1);
    assert_eq!(data["daily_appointments"][0]["date"], "2024-05-02");
}

#[test]
fn test_check_reports_orphans() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("hospital.db");

    clinic(&db)
        .args(["add", "bill", "--patient-id", "9", "--amount", "12.5"])
        .assert()
        .success();

    clinic(&db)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Billings #1: pat_id = 9 not found"));
}

#[test]
fn test_unknown_table_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("hospital.db");

    clinic(&db)
        .args(["list", "Nurses"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown table"));
}

#[test]
fn test_blank_name_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("hospital.db");

    clinic(&db)
        .args(["add", "doctor", "--name", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field: name"));
}
