//! Shared fixture helpers for the integration tests.

use std::fs;
use std::path::PathBuf;

use skynet_lib::{Aircraft, Airport, EntityStore, Route};
use tempfile::TempDir;

/// Checked-in data files (`airports.txt`, `routes.txt`, ...).
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Store loaded from a temporary copy of the fixture files.
///
/// The `TempDir` must be kept alive for as long as the store is used.
#[allow(dead_code)]
pub fn fixture_store() -> (TempDir, EntityStore) {
    let temp = TempDir::new().expect("create temp dir");
    for name in ["airports.txt", "aircraft.txt", "routes.txt", "flights.txt"] {
        fs::copy(fixtures_dir().join(name), temp.path().join(name)).expect("copy fixture file");
    }

    let mut store = EntityStore::new(temp.path());
    store.load_all().expect("fixture loads");
    (temp, store)
}

/// Empty store backed by a fresh temporary directory.
#[allow(dead_code)]
pub fn empty_store() -> (TempDir, EntityStore) {
    let temp = TempDir::new().expect("create temp dir");
    let store = EntityStore::new(temp.path());
    (temp, store)
}

#[allow(dead_code)]
pub fn airport(code: &str) -> Airport {
    let (name, city, country, lat, lon) = match code {
        "JFK" => ("John F Kennedy International", "New York", "USA", 40.6413, -73.7781),
        "LAX" => ("Los Angeles International", "Los Angeles", "USA", 33.9416, -118.4085),
        "LHR" => ("Heathrow", "London", "UK", 51.47, -0.4543),
        "CDG" => ("Charles de Gaulle", "Paris", "France", 49.0097, 2.5479),
        "DXB" => ("Dubai International", "Dubai", "UAE", 25.2532, 55.3657),
        other => (other, "Nowhere", "Nowhere", 0.0, 0.0),
    };
    Airport::new(code, name, city, country, lat, lon)
}

#[allow(dead_code)]
pub fn aircraft(id: &str) -> Aircraft {
    Aircraft::new(id, "Airbus A320", 180, 800.0, 2.5)
}

/// Store with JFK, LHR, CDG, DXB and routes JFK-LHR, LHR-CDG, LHR-DXB.
#[allow(dead_code)]
pub fn small_network() -> (TempDir, EntityStore) {
    let (temp, mut store) = empty_store();
    for code in ["JFK", "LHR", "CDG", "DXB"] {
        store.add_airport(airport(code)).expect("add airport");
    }
    store
        .add_route(Route::new("JFK", "LHR", 5540.0, 800.0))
        .expect("add route");
    store
        .add_route(Route::new("LHR", "CDG", 344.0, 90.0))
        .expect("add route");
    store
        .add_route(Route::new("LHR", "DXB", 5500.0, 700.0))
        .expect("add route");
    store.clear_undo_stack();
    (temp, store)
}
