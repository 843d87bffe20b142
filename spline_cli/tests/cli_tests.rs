//! End-to-end tests of the `splines` binary

use assert_cmd::cargo;
use assert_cmd::Command;
use predicates::prelude::*;

fn splines() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("splines"));
    cmd.env_remove("SPLINES_UNITS").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Drawing Data
// ============================================================================

#[test]
fn test_internal_drawing_data() {
    splines()
        .arg("INT 25z x 1,0m x 30P x 5H - ISO 4156")
        .assert()
        .success()
        .stdout(predicate::str::contains("INT 25z x 1,0m x 30P x 5H - ISO 4156"))
        .stdout(predicate::str::contains("Pitch diameter 25.0000 mm"))
        .stdout(predicate::str::contains("Major diameter 26.74 mm"))
        .stdout(predicate::str::contains("Form diameter 26.20 mm"))
        .stdout(predicate::str::contains("Minor diameter 24.09 mm"));
}

#[test]
fn test_external_drawing_data() {
    splines()
        .arg("EXT 25z 1.0m 30P 4h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Max effective tooth thickness 1.571 mm"))
        .stdout(predicate::str::contains("Pin diameter 1.900 mm"));
}

#[test]
fn test_designations_from_stdin() {
    splines()
        .write_stdin("# shaft and hub\nEXT 25z 1m 30P 5h\n\nINT 25z 1m 30P 5H\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("tooth thickness"))
        .stdout(predicate::str::contains("space width"));
}

#[test]
fn test_imperial_units_flag() {
    splines()
        .args(["--units", "imperial", "EXT 25z 1m 30P 5h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pitch diameter 0.984252 in"));
}

#[test]
fn test_units_from_environment() {
    splines()
        .env("SPLINES_UNITS", "metric")
        .arg("EXT FLAT SIDE 12/24 30T 30 class 5")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pitch diameter 63.5000 mm"));
}

#[test]
fn test_no_spec_line() {
    splines()
        .args(["--no-spec-line", "EXT 25z 1m 30P 5h"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Number of teeth 25"));
}

// ============================================================================
// JSON Output
// ============================================================================

#[test]
fn test_json_output() {
    let output = splines()
        .args(["--json", "EXT FLAT SIDE 12/24 30T 30 class 5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entry = &json[0];
    assert_eq!(entry["status"], "ok");
    assert_eq!(entry["report"]["dimensions"]["kind"], "External");
    let base = entry["report"]["dimensions"]["geometry"]["base_diameter"].as_f64().unwrap();
    assert!((base - 2.165_064).abs() < 1e-6);
}

#[test]
fn test_json_reports_errors_per_designation() {
    let output = splines()
        .args(["--json", "EXT 25z 1m 30P 5h", "EXT FLAT SIDE 16/32 24T 30 BS 3550"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["status"], "ok");
    assert_eq!(json[1]["status"], "error");
    assert_eq!(json[1]["code"], "NOT_IMPLEMENTED");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_malformed_designation_fails() {
    splines()
        .arg("EXT 25z 1m 30P")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed specification"));
}

#[test]
fn test_out_of_range_fails() {
    splines()
        .arg("EXT 41z 25m 30P 5h")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Out of range"));
}

#[test]
fn test_negative_length_fails() {
    splines()
        .args(["--length=-10", "EXT 25z 1m 30P 5h"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("NaN").not())
        .stderr(predicate::str::contains("Invalid input for 'reference_length'"));
}

#[test]
fn test_empty_input_fails() {
    splines()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no spline designation"));
}
