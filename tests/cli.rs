//! End-to-end CLI tests
//!
//! Drives the compiled binary against a temporary data directory via the
//! SITEKICK_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sitekick(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sitekick").unwrap();
    cmd.env("SITEKICK_DATA_DIR", dir.path());
    cmd
}

#[test]
fn init_creates_starter_catalog() {
    let dir = TempDir::new().unwrap();

    sitekick(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    sitekick(&dir)
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tile laying"));
}

#[test]
fn project_lifecycle() {
    let dir = TempDir::new().unwrap();

    sitekick(&dir)
        .args(["project", "create", "Kitchen remodel", "--address", "12 Oak St"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project: Kitchen remodel"));

    sitekick(&dir)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kitchen remodel"));

    sitekick(&dir)
        .args(["project", "complete", "Kitchen remodel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed project"));

    sitekick(&dir)
        .args(["project", "show", "Kitchen remodel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed"));
}

#[test]
fn duplicate_project_title_is_rejected() {
    let dir = TempDir::new().unwrap();

    sitekick(&dir)
        .args(["project", "create", "Kitchen"])
        .assert()
        .success();

    sitekick(&dir)
        .args(["project", "create", "Kitchen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn quote_totals_shown_in_report() {
    let dir = TempDir::new().unwrap();

    sitekick(&dir)
        .args(["project", "create", "Bathroom"])
        .assert()
        .success();

    let output = sitekick(&dir)
        .args(["quote", "create", "Bathroom", "Main estimate"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let share_code = stdout
        .lines()
        .find_map(|l| l.trim().strip_prefix("Share code: "))
        .expect("share code in create output")
        .to_string();

    sitekick(&dir)
        .args([
            "quote",
            "add-item",
            &share_code,
            "Demolition",
            "25",
            "600",
            "--kind",
            "work",
            "--unit",
            "m²",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$15000.00"));

    sitekick(&dir)
        .args([
            "quote",
            "add-item",
            &share_code,
            "Tile",
            "38",
            "1250",
            "--kind",
            "material",
        ])
        .assert()
        .success();

    sitekick(&dir)
        .args(["report", "quote", &share_code])
        .assert()
        .success()
        .stdout(predicate::str::contains("$62500.00"));
}

#[test]
fn expenses_and_payments_roll_into_summary() {
    let dir = TempDir::new().unwrap();

    sitekick(&dir)
        .args(["project", "create", "Deck build"])
        .assert()
        .success();

    sitekick(&dir)
        .args([
            "expense", "add", "Deck build", "5000", "--description", "Lumber",
            "--date", "2025-05-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded expense"));

    sitekick(&dir)
        .args([
            "payment", "add", "Deck build", "2000", "--description", "Advance",
            "--date", "2025-05-02",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded payment"));

    sitekick(&dir)
        .args(["report", "project", "Deck build"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total expenses:")
                .and(predicate::str::contains("$5000.00"))
                .and(predicate::str::contains("$2000.00")),
        );
}

#[test]
fn negative_expense_is_rejected() {
    let dir = TempDir::new().unwrap();

    sitekick(&dir)
        .args(["project", "create", "Fence"])
        .assert()
        .success();

    sitekick(&dir)
        .args(["expense", "add", "Fence", "--", "-100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn unknown_project_reports_not_found() {
    let dir = TempDir::new().unwrap();

    sitekick(&dir)
        .args(["project", "show", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project not found"));
}

#[test]
fn client_attach_and_detach() {
    let dir = TempDir::new().unwrap();

    sitekick(&dir)
        .args(["client", "add", "Smith Family", "--phone", "555-0101"])
        .assert()
        .success();

    sitekick(&dir)
        .args(["project", "create", "Garage", "--client", "Smith Family"])
        .assert()
        .success();

    sitekick(&dir)
        .args(["client", "delete", "Smith Family"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 project(s) kept"));

    sitekick(&dir)
        .args(["project", "show", "Garage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Garage"));
}
