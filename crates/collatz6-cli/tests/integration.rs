#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn collatz6() -> Command {
    let mut cmd = Command::cargo_bin("collatz6").unwrap();
    cmd.env_remove("COLLATZ6_CONFIG")
        .env_remove("COLLATZ6_MAX_STEPS")
        .env_remove("COLLATZ6_MIN_RIM")
        .env_remove("COLLATZ6_MIN_STEPS")
        .env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// demo
// ---------------------------------------------------------------------------

#[test]
fn no_command_runs_demo() {
    collatz6()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Orbit: [20737, 24193, 28225,"))
        .stdout(predicate::str::contains("32, 16, 8, 4, 2, 1]"))
        .stdout(predicate::str::contains(
            "steps=19, max=38417, growth=1.85, rim=9",
        ));
}

#[test]
fn demo_json() {
    let out = collatz6().args(["demo", "--json"]).output().unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["n"], 20737);
    assert_eq!(value["orbit"].as_array().unwrap().len(), 20);
    assert_eq!(value["statistics"]["max"], "38417");
    assert_eq!(value["statistics"]["converged"], true);
}

// ---------------------------------------------------------------------------
// v6 / step
// ---------------------------------------------------------------------------

#[test]
fn v6_prints_valuation() {
    collatz6()
        .args(["v6", "216"])
        .assert()
        .success()
        .stdout("3\n");
    collatz6().args(["v6", "0"]).assert().success().stdout("0\n");
}

#[test]
fn step_prints_image() {
    collatz6()
        .args(["step", "11"])
        .assert()
        .success()
        .stdout("13\n");
}

#[test]
fn step_handles_values_past_u64() {
    collatz6()
        .args(["step", "12345678901234567891"])
        .assert()
        .success()
        .stdout("14403292051440329206\n");
}

#[test]
fn step_zero_fails() {
    collatz6()
        .args(["step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn non_numeric_argument_fails() {
    collatz6().args(["step", "abc"]).assert().failure();
}

// ---------------------------------------------------------------------------
// orbit / analyze
// ---------------------------------------------------------------------------

#[test]
fn orbit_prints_sequence() {
    collatz6()
        .args(["orbit", "7"])
        .assert()
        .success()
        .stdout("Orbit: [7, 8, 4, 2, 1]\n");
}

#[test]
fn orbit_reports_truncation() {
    collatz6()
        .args(["orbit", "20737", "--max-steps", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Orbit: [20737, 24193, 28225]"))
        .stdout(predicate::str::contains("did not reach 1 within 2 steps"));
}

#[test]
fn orbit_max_steps_from_env() {
    collatz6()
        .args(["orbit", "20737"])
        .env("COLLATZ6_MAX_STEPS", "0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Orbit: [20737]"));
}

#[test]
fn analyze_one() {
    collatz6()
        .args(["analyze", "1"])
        .assert()
        .success()
        .stdout("steps=0, max=1, growth=1.00, rim=0\n");
}

#[test]
fn analyze_json() {
    let out = collatz6()
        .args(["analyze", "20737", "-j"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["n"], "20737");
    assert_eq!(value["steps"], 19);
    assert_eq!(value["rim"], 9);
}

// ---------------------------------------------------------------------------
// scan
// ---------------------------------------------------------------------------

#[test]
fn scan_prints_matches() {
    collatz6()
        .args(["scan", "6690", "7320"])
        .assert()
        .success()
        .stdout(
            "n=6697, steps=31, rim=18, max=10634, growth=1.59\n\
             n=7117, steps=31, rim=21, max=9687, growth=1.36\n\
             n=7319, steps=30, rim=15, max=9962, growth=1.36\n",
        );
}

#[test]
fn scan_threshold_flags() {
    collatz6()
        .args(["scan", "1", "20", "--min-rim", "3", "--min-steps", "4"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("n=11, steps=4, rim=3,"));
}

#[test]
fn scan_empty_range_prints_nothing() {
    collatz6()
        .args(["scan", "10", "5"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn scan_json_includes_summary() {
    let out = collatz6()
        .args(["scan", "6690", "7320", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["matched"], 3);
    assert_eq!(value["scanned"], 631);
    assert_eq!(value["entries"][0]["n"], 6697);
}

#[test]
fn scan_rejects_unreachable_threshold() {
    collatz6()
        .args(["scan", "1", "10", "--min-steps", "50", "--max-steps", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds"));
}

// ---------------------------------------------------------------------------
// --config
// ---------------------------------------------------------------------------

#[test]
fn config_file_supplies_thresholds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("collatz6.yaml");
    std::fs::write(&path, "scan:\n  min_rim: 3\n  min_steps: 4\n").unwrap();

    collatz6()
        .args(["scan", "1", "20", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("n=11, steps=4, rim=3,"));
}

#[test]
fn flag_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("collatz6.yaml");
    std::fs::write(&path, "orbit:\n  max_steps: 1\n").unwrap();

    collatz6()
        .args(["orbit", "7", "--max-steps", "10", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Orbit: [7, 8, 4, 2, 1]\n");
}

#[test]
fn missing_config_file_fails() {
    collatz6()
        .args(["demo", "--config", "/nonexistent/collatz6.yaml"])
        .assert()
        .failure();
}
