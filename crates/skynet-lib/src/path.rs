use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::graph::Graph;

/// Reason a path query did not produce a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum PathFailure {
    #[error("Origin airport not found")]
    OriginNotFound,
    #[error("Destination airport not found")]
    DestinationNotFound,
    #[error("No route available between airports")]
    NoRoute,
    #[error("Exceeds maximum stops constraint")]
    ExceedsMaxStops,
    /// Parent links did not lead back to the origin even though the
    /// destination was reached. Indicates an internal inconsistency.
    #[error("Path reconstruction failed")]
    BrokenPath,
}

/// Outcome of a path query.
///
/// When `found` is false the path is empty, the totals are zero, and
/// `failure` says why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub found: bool,
    pub path: Vec<String>,
    pub total_distance: f64,
    pub total_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<PathFailure>,
}

impl PathResult {
    pub fn found(path: Vec<String>, total_distance: f64, total_cost: f64) -> Self {
        Self {
            found: true,
            path,
            total_distance,
            total_cost,
            failure: None,
        }
    }

    pub fn not_found(failure: PathFailure) -> Self {
        Self {
            found: false,
            path: Vec::new(),
            total_distance: 0.0,
            total_cost: 0.0,
            failure: Some(failure),
        }
    }

    /// Human-readable reason for a failed query.
    pub fn error_message(&self) -> Option<String> {
        self.failure.map(|failure| failure.to_string())
    }

    /// A found path that actually travels somewhere.
    pub fn is_valid(&self) -> bool {
        self.found && self.path.len() >= 2
    }

    pub fn origin(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Intermediate airports between origin and destination.
    pub fn stops(&self) -> usize {
        self.path.len().saturating_sub(2)
    }
}

/// Run Dijkstra's algorithm from `start` to `end`, minimising total edge
/// weight and accumulating edge cost along the chosen path.
///
/// Weights must be non-negative. The search stops as soon as `end` is
/// extracted from the queue. Ties between equal-distance candidates are
/// broken by the queue order and callers must not rely on which of several
/// equally short paths is returned.
pub fn find_shortest_path(graph: &Graph, start: &str, end: &str) -> PathResult {
    let Some(start) = graph.node_key(start) else {
        return PathResult::not_found(PathFailure::OriginNotFound);
    };
    let Some(end) = graph.node_key(end) else {
        return PathResult::not_found(PathFailure::DestinationNotFound);
    };

    if start == end {
        return PathResult::found(vec![start.to_string()], 0.0, 0.0);
    }

    // Absent entries are treated as +inf.
    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut costs: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    costs.insert(start, 0.0);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let current = entry.node;
        if current == end {
            break;
        }
        // Stale duplicates from earlier relaxations.
        if !visited.insert(current) {
            continue;
        }

        let current_distance = distance_of(&distances, current);
        let current_cost = costs.get(current).copied().unwrap_or(0.0);

        for edge in graph.neighbours(current) {
            let next = edge.target.as_str();
            let candidate = current_distance + edge.weight;
            if candidate < distance_of(&distances, next) {
                distances.insert(next, candidate);
                costs.insert(next, current_cost + edge.cost);
                parents.insert(next, current);
                queue.push(QueueEntry::new(next, candidate));
            }
        }
    }

    let total_distance = distance_of(&distances, end);
    if !total_distance.is_finite() {
        return PathResult::not_found(PathFailure::NoRoute);
    }

    let path = reconstruct_path(&parents, start, end);
    if path.is_empty() {
        error!(start, end, "parent links broken while reconstructing a reached destination");
        return PathResult::not_found(PathFailure::BrokenPath);
    }

    let total_cost = costs.get(end).copied().unwrap_or(0.0);
    PathResult::found(path, total_distance, total_cost)
}

fn distance_of(distances: &HashMap<&str, f64>, node: &str) -> f64 {
    distances.get(node).copied().unwrap_or(f64::INFINITY)
}

/// Walk parent links back from `end`; an empty path signals a missing link.
fn reconstruct_path<'a>(
    parents: &HashMap<&'a str, &'a str>,
    start: &str,
    end: &'a str,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = end;
    while current != start {
        path.push(current.to_string());
        match parents.get(current) {
            Some(parent) => current = *parent,
            None => return Vec::new(),
        }
    }
    path.push(start.to_string());
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: FloatOrd,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a str, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_path_with_missing_link_is_empty() {
        let mut parents = HashMap::new();
        parents.insert("C", "B");
        assert!(reconstruct_path(&parents, "A", "C").is_empty());

        parents.insert("B", "A");
        assert_eq!(reconstruct_path(&parents, "A", "C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn queue_pops_smallest_cost_first() {
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new("far", 30.0));
        queue.push(QueueEntry::new("near", 5.0));
        queue.push(QueueEntry::new("mid", 12.5));

        let order: Vec<&str> = std::iter::from_fn(|| queue.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec!["near", "mid", "far"]);
    }

    #[test]
    fn not_found_result_carries_message() {
        let result = PathResult::not_found(PathFailure::NoRoute);
        assert!(!result.found);
        assert!(result.path.is_empty());
        assert_eq!(
            result.error_message().as_deref(),
            Some("No route available between airports")
        );
    }
}
