#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn custbook(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("custbook"));
    cmd.env("CUSTBOOK_DATA", data.path().as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_create_list_view_workflow() {
    let data = TempDir::new().unwrap();

    custbook(&data)
        .args(["create", "Acme", "Co", "--phone", "555-0100", "--email", "sales@acme.io"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer created (1): Acme Co"));

    custbook(&data).args(["create", "Globex"]).assert().success();

    custbook(&data)
        .args(["ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Acme Co"))
        .stdout(predicate::str::contains("2. Globex"));

    custbook(&data)
        .args([
            "entry", "add", "acme", "-t", "Deposit", "-c", "Paid half", "--currency", "EUR",
        ])
        .assert()
        .success();

    custbook(&data)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deposit (€)"))
        .stdout(predicate::str::contains("Paid half"))
        .stdout(predicate::str::contains("No entries"));

    assert!(data.path().join("customers.json").exists());
}

#[test]
fn test_invalid_email_fails_with_message() {
    let data = TempDir::new().unwrap();
    custbook(&data)
        .args(["create", "Acme", "--email", "nope"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Please enter a valid email address"));
}

#[test]
fn test_export_writes_named_pdf() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    custbook(&data).args(["create", "Acme Co"]).assert().success();
    custbook(&data)
        .args(["export", "1", "--out"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 page"));

    let pdf = fs::read(out.path().join("acme_co_details.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn test_search_ranks_name_before_entries() {
    let data = TempDir::new().unwrap();

    custbook(&data).args(["create", "Zed"]).assert().success();
    custbook(&data)
        .args(["entry", "add", "zed", "-s", "details", "-t", "Met at Initech"])
        .assert()
        .success();
    custbook(&data).args(["create", "Initech"]).assert().success();

    let output = custbook(&data).args(["search", "initech"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let initech = stdout.find("Initech").unwrap();
    let zed = stdout.find("Zed").unwrap();
    assert!(initech < zed);
}

#[test]
fn test_ambiguous_name_is_an_error() {
    let data = TempDir::new().unwrap();
    custbook(&data).args(["create", "Acme East"]).assert().success();
    custbook(&data).args(["create", "Acme West"]).assert().success();

    custbook(&data)
        .args(["delete", "acme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("matches 2 customers"));
}

#[test]
fn test_currency_toggle_and_config() {
    let data = TempDir::new().unwrap();

    custbook(&data)
        .args(["currency", "toggle", "USD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD disabled"))
        .stdout(predicate::str::contains("Default currency is now AFN"));

    custbook(&data)
        .args(["config", "default-currency"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AFN"));

    custbook(&data)
        .args(["config", "language", "fa"])
        .assert()
        .success();

    custbook(&data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("مشتری‌ای یافت نشد"));
}

#[test]
fn test_backup_and_clear() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("backup.tar.gz");

    custbook(&data).args(["create", "Acme"]).assert().success();
    custbook(&data)
        .args(["backup", "--out"])
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("Backed up 1 customer"));
    assert!(archive.exists());

    custbook(&data)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 customer"));

    custbook(&data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No customers found"));
}

#[test]
fn test_clear_without_confirmation_keeps_data() {
    let data = TempDir::new().unwrap();
    custbook(&data).args(["create", "Acme"]).assert().success();

    custbook(&data)
        .args(["clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing was cleared"));

    custbook(&data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme"));
}
