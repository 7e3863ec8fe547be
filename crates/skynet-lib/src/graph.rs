use std::collections::HashMap;

/// Directed edge within the routing graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: String,
    /// Leg distance in kilometres; the quantity pathfinding minimises.
    pub weight: f64,
    pub cost: f64,
}

/// Weighted directed graph keyed by airport code.
///
/// Every node owns an outgoing-edge list, so the node set is exactly the key
/// set of the adjacency map. All operations are total: absent nodes and edges
/// behave as no-ops or empty results.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id` as a node. No-op if it is already present.
    pub fn add_node(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            self.adjacency.insert(id.to_string(), Vec::new());
        }
    }

    /// Remove `id`, its outgoing edges, and every edge pointing at it.
    pub fn remove_node(&mut self, id: &str) {
        if self.adjacency.remove(id).is_none() {
            return;
        }
        for edges in self.adjacency.values_mut() {
            edges.retain(|edge| edge.target != id);
        }
    }

    /// Insert or overwrite the directed edge `from -> to`.
    ///
    /// Missing endpoints are created as nodes. An existing edge keeps its
    /// position in the adjacency list and has its weight and cost replaced.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64, cost: f64) {
        self.add_node(to);
        let edges = self.adjacency.entry(from.to_string()).or_default();
        if let Some(existing) = edges.iter_mut().find(|edge| edge.target == to) {
            existing.weight = weight;
            existing.cost = cost;
            return;
        }
        edges.push(Edge {
            target: to.to_string(),
            weight,
            cost,
        });
    }

    pub fn remove_edge(&mut self, from: &str, to: &str) {
        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.retain(|edge| edge.target != to);
        }
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edge(from, to).is_some()
    }

    /// Look up the directed edge `from -> to`.
    pub fn edge(&self, from: &str, to: &str) -> Option<&Edge> {
        self.neighbours(from).iter().find(|edge| edge.target == to)
    }

    /// Return the outgoing edges for a node, or an empty slice if unknown.
    pub fn neighbours(&self, id: &str) -> &[Edge] {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Borrow the graph-owned key for `id`, if the node exists.
    pub(crate) fn node_key(&self, id: &str) -> Option<&str> {
        self.adjacency.get_key_value(id).map(|(key, _)| key.as_str())
    }

    /// Node identifiers in ascending order.
    pub fn nodes(&self) -> Vec<&str> {
        let mut nodes: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        nodes.sort_unstable();
        nodes
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of directed edges across all adjacency lists.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
