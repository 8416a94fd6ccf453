//! End-to-end tests for the `mech` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn mech() -> Command {
    let mut cmd = Command::cargo_bin("mech").unwrap();
    cmd.env_remove("MECH_JSON");
    cmd
}

#[test]
fn stress_prints_steps_and_status() {
    mech()
        .args(["stress", "--force", "1000", "--area", "100", "--material", "Steel (A36)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("σ = 1000 N / 1.000e-4 m²"))
        .stdout(predicate::str::contains("Safety Factor = 25.00"))
        .stdout(predicate::str::contains("STATUS: SAFE"));
}

#[test]
fn stress_json_output() {
    mech()
        .args(["--json", "stress", "--force", "12500", "--area", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"stress_analysis\""))
        .stdout(predicate::str::contains("\"status\": \"danger\""));
}

#[test]
fn zero_area_fails_with_error_json() {
    mech()
        .args(["stress", "--force", "1000", "--area", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for 'area_mm2'"))
        .stderr(predicate::str::contains("\"type\": \"InvalidInput\""));
}

#[test]
fn beam_cantilever() {
    mech()
        .args([
            "beam", "--length", "1000", "--load", "1000", "--inertia", "1000000", "--support",
            "cantilever",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Beam Type: cantilever"))
        .stdout(predicate::str::contains("Max Deflection = 1.667 mm"));
}

#[test]
fn beam_unrecognized_support() {
    mech()
        .args(["beam", "--length", "1000", "--load", "1000", "--inertia", "1000000", "--support", "hinged"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Safety factor: unbounded"))
        .stdout(predicate::str::contains("STATUS: DANGER"));
}

#[test]
fn beam_negative_load_is_danger() {
    mech()
        .args(["beam", "--length", "1000", "--load=-1000", "--inertia", "1", "--support", "simply_supported"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Max Stress = -250.00 MPa"))
        .stdout(predicate::str::contains("STATUS: DANGER"));
}

#[test]
fn materials_json_output() {
    mech()
        .args(["--json", "materials"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Steel (A36)\""));
}

#[test]
fn materials_table() {
    mech()
        .arg("materials")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aluminum (6061-T6)"))
        .stdout(predicate::str::contains("Stainless Steel (304)"));
}
