use skynet_lib::Graph;

fn triangle() -> Graph {
    let mut graph = Graph::new();
    graph.add_node("A");
    graph.add_node("B");
    graph.add_node("C");
    graph.add_edge("A", "B", 1.0, 10.0);
    graph.add_edge("B", "C", 2.0, 20.0);
    graph.add_edge("C", "B", 3.0, 30.0);
    graph
}

#[test]
fn counts_nodes_and_directed_edges() {
    let graph = triangle();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.nodes(), vec!["A", "B", "C"]);
}

#[test]
fn remove_node_drops_incoming_and_outgoing_edges() {
    let mut graph = triangle();
    graph.remove_node("B");

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.has_edge("A", "B"));
    assert!(!graph.has_edge("C", "B"));
    assert!(graph.neighbours("A").is_empty());
}

#[test]
fn add_edge_overwrites_instead_of_duplicating() {
    let mut graph = triangle();
    graph.add_edge("A", "B", 7.5, 99.0);

    assert_eq!(graph.edge_count(), 3);
    let edge = graph.edge("A", "B").expect("edge present");
    assert_eq!(edge.weight, 7.5);
    assert_eq!(edge.cost, 99.0);
}

#[test]
fn add_edge_creates_missing_nodes() {
    let mut graph = Graph::new();
    assert!(graph.is_empty());
    graph.add_edge("X", "Y", 1.0, 1.0);

    assert!(graph.has_node("X"));
    assert!(graph.has_node("Y"));
    assert!(graph.has_edge("X", "Y"));
    assert!(!graph.has_edge("Y", "X"));
}

#[test]
fn absent_nodes_and_edges_are_no_ops() {
    let mut graph = triangle();
    graph.remove_node("Z");
    graph.remove_edge("A", "C");
    graph.add_node("A");

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.neighbours("Z").is_empty());

    graph.remove_edge("A", "B");
    assert_eq!(graph.edge_count(), 2);

    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}
