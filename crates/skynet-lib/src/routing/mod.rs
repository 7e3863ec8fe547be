//! Criteria-filtered routing on top of [`find_shortest_path`].
//!
//! This module provides:
//! - [`Criteria`] - Weights and a stop cap for a routing request
//! - [`Objective`] - The single axis a frontier candidate is labelled with
//! - [`optimize`] - Shortest path filtered by the stop cap
//! - [`pareto_frontier`] - One candidate per objective
//!
//! # Placeholder weights
//!
//! The distance, cost, and time weights are carried on [`Criteria`] and
//! reported back with every result, but the search itself always minimises
//! distance. Every candidate of [`pareto_frontier`] therefore runs the same
//! search and they differ only in their labels and weight annotations. The
//! frontier is not a non-dominated set.
//!
//! # Example
//!
//! ```
//! use skynet_lib::{optimize, Criteria, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_edge("JFK", "LHR", 5540.0, 800.0);
//! graph.add_edge("LHR", "DXB", 5500.0, 700.0);
//!
//! let direct_only = Criteria { max_stops: 0, ..Criteria::default() };
//! let result = optimize(&graph, "JFK", "DXB", &direct_only);
//! assert!(!result.found);
//! ```

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::graph::Graph;
use crate::path::{find_shortest_path, PathFailure, PathResult};

/// Stop cap applied by [`Criteria::default`].
pub const DEFAULT_MAX_STOPS: usize = 3;

/// Stop cap applied to every [`pareto_frontier`] candidate.
pub const FRONTIER_MAX_STOPS: usize = 5;

/// Routing request parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Criteria {
    pub distance_weight: f64,
    pub cost_weight: f64,
    pub time_weight: f64,
    /// Maximum intermediate airports between origin and destination.
    pub max_stops: usize,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            distance_weight: 0.4,
            cost_weight: 0.3,
            time_weight: 0.3,
            max_stops: DEFAULT_MAX_STOPS,
        }
    }
}

impl Criteria {
    /// Criteria weighting a single objective, with the given stop cap.
    pub fn single(objective: Objective, max_stops: usize) -> Self {
        let (distance_weight, cost_weight, time_weight) = match objective {
            Objective::Distance => (1.0, 0.0, 0.0),
            Objective::Cost => (0.0, 1.0, 0.0),
            Objective::Time => (0.0, 0.0, 1.0),
        };
        Self {
            distance_weight,
            cost_weight,
            time_weight,
            max_stops,
        }
    }
}

/// Axis a frontier candidate is optimised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    Distance,
    Cost,
    Time,
}

impl Objective {
    pub const ALL: [Objective; 3] = [Objective::Distance, Objective::Cost, Objective::Time];
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Objective::Distance => "distance",
            Objective::Cost => "cost",
            Objective::Time => "time",
        };
        f.write_str(value)
    }
}

/// One entry of [`pareto_frontier`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontierCandidate {
    pub objective: Objective,
    pub criteria: Criteria,
    pub result: PathResult,
}

/// Shortest path from `start` to `end`, rejected when it needs more than
/// `criteria.max_stops` intermediate airports.
///
/// A rejected result reports [`PathFailure::ExceedsMaxStops`] even though a
/// path exists. Failures from the underlying search pass through unchanged.
pub fn optimize(graph: &Graph, start: &str, end: &str, criteria: &Criteria) -> PathResult {
    let result = find_shortest_path(graph, start, end);
    if result.found && result.stops() > criteria.max_stops {
        debug!(
            start,
            end,
            stops = result.stops(),
            max_stops = criteria.max_stops,
            "path rejected by stop cap"
        );
        return PathResult::not_found(PathFailure::ExceedsMaxStops);
    }
    result
}

/// Run [`optimize`] once per [`Objective`], each capped at
/// [`FRONTIER_MAX_STOPS`], in the order distance, cost, time.
pub fn pareto_frontier(graph: &Graph, start: &str, end: &str) -> Vec<FrontierCandidate> {
    Objective::ALL
        .into_iter()
        .map(|objective| {
            let criteria = Criteria::single(objective, FRONTIER_MAX_STOPS);
            FrontierCandidate {
                objective,
                criteria,
                result: optimize(graph, start, end, &criteria),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_weights() {
        let criteria = Criteria::default();
        assert_eq!(criteria.max_stops, 3);
        let total = criteria.distance_weight + criteria.cost_weight + criteria.time_weight;
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn same_airport_has_zero_stops() {
        let mut graph = Graph::new();
        graph.add_node("JFK");
        let strict = Criteria {
            max_stops: 0,
            ..Criteria::default()
        };
        let result = optimize(&graph, "JFK", "JFK", &strict);
        assert!(result.found);
        assert_eq!(result.path, vec!["JFK"]);
    }

    #[test]
    fn single_objective_weights() {
        let cost = Criteria::single(Objective::Cost, 5);
        assert_eq!(cost.cost_weight, 1.0);
        assert_eq!(cost.distance_weight, 0.0);
        assert_eq!(cost.time_weight, 0.0);
        assert_eq!(cost.max_stops, 5);
    }
}
