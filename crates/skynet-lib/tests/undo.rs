mod common;

use std::fs;

use common::{aircraft, airport, empty_store, small_network};
use skynet_lib::{ActionKind, Error, Flight, Route, MAX_UNDO};

#[test]
fn log_keeps_only_the_most_recent_records() {
    let (_temp, mut store) = empty_store();
    for id in ["AC1", "AC2", "AC3", "AC4", "AC5", "AC6"] {
        store.add_aircraft(aircraft(id)).unwrap();
    }

    let history = store.undo_history();
    assert_eq!(history.len(), MAX_UNDO);
    let keys: Vec<String> = history.iter().map(|record| record.key()).collect();
    assert_eq!(keys, vec!["AC2", "AC3", "AC4", "AC5", "AC6"]);

    for _ in 0..MAX_UNDO {
        store.undo().unwrap();
    }
    assert!(!store.can_undo());
    // The first add fell off the log and stays.
    assert_eq!(store.get_all_aircraft().len(), 1);
    assert!(store.get_aircraft("AC1").is_some());
}

#[test]
fn undo_on_empty_log_fails() {
    let (_temp, mut store) = empty_store();
    assert!(!store.can_undo());
    assert!(matches!(store.undo(), Err(Error::NothingToUndo)));
}

#[test]
fn undoing_an_add_removes_the_entity() {
    let (_temp, mut store) = small_network();
    store.add_airport(airport("LAX")).unwrap();
    assert!(store.graph().has_node("LAX"));

    assert_eq!(store.undo().unwrap(), ActionKind::AddAirport);
    assert!(store.get_airport("LAX").is_none());
    assert!(!store.graph().has_node("LAX"));
}

#[test]
fn undoing_an_airport_add_keeps_routes_that_predate_it() {
    let (temp, mut store) = empty_store();
    fs::write(
        temp.path().join("airports.txt"),
        "Code,Name,City,Country,Latitude,Longitude\nJFK,John F Kennedy,New York,USA,40.6413,-73.7781\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("routes.txt"),
        "Origin,Destination,Distance,BaseCost,Operational\nJFK,LAX,3983,450,1\n",
    )
    .unwrap();
    store.load_all().unwrap();

    store.add_airport(airport("LAX")).unwrap();
    assert!(store.graph().has_edge("JFK", "LAX"));

    assert_eq!(store.undo().unwrap(), ActionKind::AddAirport);
    assert!(store.get_airport("LAX").is_none());
    assert_eq!(store.get_all_routes().len(), 1);
    assert!(store.get_route("JFK-LAX").is_some());
    assert!(!store.graph().has_node("LAX"));
    assert_eq!(store.graph().edge_count(), 0);
}

#[test]
fn undoing_an_airport_delete_restores_its_routes() {
    let (_temp, mut store) = small_network();
    store.delete_airport("LHR").unwrap();
    assert_eq!(store.graph().edge_count(), 0);

    assert_eq!(store.undo().unwrap(), ActionKind::DeleteAirport);
    assert!(store.get_airport("LHR").is_some());
    assert_eq!(store.get_all_routes().len(), 3);
    assert_eq!(store.graph().edge_count(), 6);
    assert!(store.graph().has_edge("DXB", "LHR"));
}

#[test]
fn undoing_route_changes_rebuilds_the_graph() {
    let (_temp, mut store) = small_network();
    store.delete_route("JFK-LHR").unwrap();
    assert!(!store.graph().has_edge("JFK", "LHR"));

    assert_eq!(store.undo().unwrap(), ActionKind::DeleteRoute);
    assert!(store.graph().has_edge("JFK", "LHR"));

    store
        .add_route(Route::new("CDG", "DXB", 5250.0, 650.0))
        .unwrap();
    assert_eq!(store.undo().unwrap(), ActionKind::AddRoute);
    assert!(!store.graph().has_edge("CDG", "DXB"));
}

#[test]
fn updates_are_not_recorded() {
    let (_temp, mut store) = small_network();
    store
        .update_route(Route::new("JFK", "LHR", 5600.0, 820.0))
        .unwrap();
    assert!(!store.can_undo());
}

#[test]
fn flight_undo_round_trip() {
    let (_temp, mut store) = empty_store();
    store
        .add_flight(Flight::new("FL1", "AC1", &["JFK", "LHR"]))
        .unwrap();
    store.delete_flight("FL1").unwrap();

    assert_eq!(store.undo().unwrap(), ActionKind::DeleteFlight);
    assert!(store.get_flight("FL1").is_some());
    assert_eq!(store.undo().unwrap(), ActionKind::AddFlight);
    assert!(store.get_flight("FL1").is_none());
}

#[test]
fn clear_and_history_display() {
    let (_temp, mut store) = empty_store();
    store.add_airport(airport("JFK")).unwrap();
    store.add_aircraft(aircraft("AC1")).unwrap();

    let lines: Vec<String> = store
        .undo_history()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        lines,
        vec![
            "ADD_AIRPORT JFK,John F Kennedy International,New York,USA",
            "ADD_AIRCRAFT AC1",
        ]
    );

    store.clear_undo_stack();
    assert!(!store.can_undo());
    assert!(store.undo_history().is_empty());
}
