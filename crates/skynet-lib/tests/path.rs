mod common;

use skynet_lib::{find_shortest_path, Graph, PathFailure};

fn diamond() -> Graph {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 10.0, 1.0);
    graph.add_edge("A", "C", 35.0, 2.0);
    graph.add_edge("B", "D", 20.0, 3.0);
    graph.add_edge("D", "C", 5.0, 4.0);
    graph
}

#[test]
fn finds_minimum_distance() {
    let result = find_shortest_path(&diamond(), "A", "C");
    assert!(result.found);
    assert_eq!(result.total_distance, 35.0);
    assert_eq!(result.origin(), Some("A"));
    assert_eq!(result.destination(), Some("C"));
    assert!(result.failure.is_none());
}

#[test]
fn cost_follows_the_chosen_path() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 1.0, 100.0);
    graph.add_edge("B", "C", 1.0, 100.0);
    graph.add_edge("A", "C", 5.0, 1.0);

    let result = find_shortest_path(&graph, "A", "C");
    assert_eq!(result.path, vec!["A", "B", "C"]);
    assert_eq!(result.total_distance, 2.0);
    assert_eq!(result.total_cost, 200.0);
    assert_eq!(result.stops(), 1);
}

#[test]
fn unknown_endpoints_are_distinct_failures() {
    let graph = diamond();

    let result = find_shortest_path(&graph, "A", "Q");
    assert!(!result.found);
    assert_eq!(result.failure, Some(PathFailure::DestinationNotFound));

    let result = find_shortest_path(&graph, "Q", "A");
    assert_eq!(result.failure, Some(PathFailure::OriginNotFound));
    assert_eq!(
        result.error_message().as_deref(),
        Some("Origin airport not found")
    );
}

#[test]
fn same_start_and_end_is_trivial() {
    let result = find_shortest_path(&diamond(), "A", "A");
    assert!(result.found);
    assert_eq!(result.path, vec!["A"]);
    assert_eq!(result.total_distance, 0.0);
    assert_eq!(result.total_cost, 0.0);
    assert!(!result.is_valid());
}

#[test]
fn edges_are_directed() {
    let result = find_shortest_path(&diamond(), "C", "A");
    assert!(!result.found);
    assert_eq!(result.failure, Some(PathFailure::NoRoute));
    assert!(result.path.is_empty());
    assert_eq!(result.total_distance, 0.0);
}

#[test]
fn store_graph_routes_through_hub() {
    let (_temp, store) = common::fixture_store();

    let result = find_shortest_path(store.graph(), "JFK", "DXB");
    assert!(result.found);
    assert_eq!(result.path, vec!["JFK", "LHR", "DXB"]);
    assert_eq!(result.total_distance, 11040.0);
    assert_eq!(result.total_cost, 1500.0);

    // Routes are stored one way but flown both ways.
    let back = find_shortest_path(store.graph(), "DXB", "JFK");
    assert_eq!(back.path, vec!["DXB", "LHR", "JFK"]);
}

#[test]
fn inactive_routes_are_not_flown() {
    let (_temp, store) = common::fixture_store();

    // CDG-DXB is stored but not operational.
    let result = find_shortest_path(store.graph(), "CDG", "DXB");
    assert_eq!(result.path, vec!["CDG", "LHR", "DXB"]);
    assert_eq!(result.total_distance, 5844.0);
}
