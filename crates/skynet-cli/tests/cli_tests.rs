//! End-to-end tests for the `skynet-cli` binary.
//!
//! Every test runs against a temporary copy of the checked-in fixture files
//! so mutations never touch `docs/fixtures`.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

fn fixture_data_dir() -> TempDir {
    let temp = TempDir::new().expect("create temp dir");
    for name in ["airports.txt", "aircraft.txt", "routes.txt", "flights.txt"] {
        fs::copy(fixtures_dir().join(name), temp.path().join(name)).expect("copy fixture");
    }
    temp
}

fn cli(data_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("skynet-cli");
    cmd.env("RUST_LOG", "error")
        .env_remove("SKYNET_DATA_DIR")
        .arg("--data-dir")
        .arg(data_dir.path());
    cmd
}

#[test]
fn path_prints_the_shortest_route() {
    let data = fixture_data_dir();
    cli(&data)
        .args(["path", "--from", "JFK", "--to", "DXB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JFK -> LHR -> DXB"))
        .stdout(predicate::str::contains("11040.0 km"));
}

#[test]
fn path_json_is_machine_readable() {
    let data = fixture_data_dir();
    let output = cli(&data)
        .args(["--format", "json", "path", "--from", "jfk", "--to", "cdg"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["found"], true);
    assert_eq!(value["stops"], 1);
    assert_eq!(value["steps"][2]["code"], "CDG");
}

#[test]
fn path_with_too_few_stops_fails() {
    let data = fixture_data_dir();
    cli(&data)
        .args(["path", "--from", "ORD", "--to", "CDG", "--max-stops", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Exceeds maximum stops constraint"));
}

#[test]
fn unknown_airport_suggests_a_match() {
    let data = fixture_data_dir();
    cli(&data)
        .args(["path", "--from", "JFX", "--to", "LHR"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Did you mean 'JFK'"));
}

#[test]
fn frontier_lists_three_objectives() {
    let data = fixture_data_dir();
    cli(&data)
        .args(["frontier", "--from", "LAX", "--to", "CDG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[distance]"))
        .stdout(predicate::str::contains("[cost]"))
        .stdout(predicate::str::contains("[time]"));
}

#[test]
fn adding_an_airport_persists_it() {
    let data = fixture_data_dir();
    cli(&data)
        .args([
            "airports",
            "add",
            "--code",
            "sin",
            "--name",
            "Changi",
            "--city",
            "Singapore",
            "--country",
            "Singapore",
            "--latitude=1.3644",
            "--longitude=103.9915",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added airport SIN"));

    let saved = fs::read_to_string(data.path().join("airports.txt")).unwrap();
    assert!(saved.contains("SIN,Changi,Singapore,Singapore,1.3644,103.9915"));

    cli(&data)
        .args(["airports", "add", "--code", "SIN", "--name", "Again", "--latitude=0", "--longitude=0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("airport SIN already exists"));
}

#[test]
fn deleting_an_airport_cascades() {
    let data = fixture_data_dir();
    cli(&data)
        .args(["airports", "delete", "--code", "LHR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted airport LHR and 3 route(s)"));

    let routes = fs::read_to_string(data.path().join("routes.txt")).unwrap();
    assert!(!routes.contains("LHR"));

    cli(&data)
        .args(["path", "--from", "JFK", "--to", "DXB"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("No route available between airports"));
}

#[test]
fn routes_add_derives_distance() {
    let data = fixture_data_dir();
    cli(&data)
        .args(["routes", "add", "--from", "ORD", "--to", "LHR", "--base-cost", "700"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added route ORD-LHR"));

    cli(&data)
        .args([
            "routes",
            "add",
            "--from",
            "LAX",
            "--to",
            "CDG",
            "--base-cost",
            "900",
            "--distance",
            "9100",
            "--inactive",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("9100.0 km, inactive"));

    let routes = fs::read_to_string(data.path().join("routes.txt")).unwrap();
    assert!(routes.contains("LAX,CDG,9100,900,0"));
}

#[test]
fn booking_marks_the_aircraft_in_flight() {
    let data = fixture_data_dir();
    cli(&data)
        .args([
            "flights",
            "book",
            "--aircraft",
            "AC002",
            "--from",
            "JFK",
            "--to",
            "DXB",
            "--departure",
            "2025-03-05T07:30:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Booked FL1002 on AC002"));

    let aircraft = fs::read_to_string(data.path().join("aircraft.txt")).unwrap();
    assert!(aircraft.contains("AC002,Airbus A320,180,828,2.4,IN_FLIGHT"));

    cli(&data)
        .args(["flights", "book", "--aircraft", "AC003", "--from", "JFK", "--to", "LHR"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MAINTENANCE"));
}

#[test]
fn conflicts_and_stats() {
    let data = fixture_data_dir();
    cli(&data)
        .args(["conflicts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No scheduling conflicts."));

    cli(&data)
        .args(["--format", "json", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"graph_edges\": 12"));
}

#[test]
fn aircraft_status_is_validated() {
    let data = fixture_data_dir();
    cli(&data)
        .args(["aircraft", "status", "--id", "AC003", "--status", "available"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aircraft AC003 is now AVAILABLE"));

    cli(&data)
        .args(["aircraft", "status", "--id", "AC003", "--status", "grounded"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown aircraft status"));
}

#[test]
fn empty_data_dir_starts_empty() {
    let data = TempDir::new().unwrap();
    cli(&data)
        .args(["airports", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No airports."));
}
