use std::fmt::Write;

use serde::Serialize;

use crate::path::PathResult;
use crate::store::EntityStore;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Airport visited along a route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// One hop between consecutive airports.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    /// `None` when the graph no longer holds the edge.
    pub distance: Option<f64>,
    pub cost: Option<f64>,
}

/// Structured view of a [`PathResult`] with resolved airport names, ready
/// for text rendering or JSON serialisation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub found: bool,
    pub stops: usize,
    pub total_distance: f64,
    pub total_cost: f64,
    pub steps: Vec<RouteStep>,
    pub legs: Vec<RouteLeg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RouteSummary {
    /// Resolve names from the store's airports and leg figures from its
    /// current graph.
    pub fn from_result(store: &EntityStore, result: &PathResult) -> Self {
        let steps = result
            .path
            .iter()
            .enumerate()
            .map(|(index, code)| RouteStep {
                index,
                code: code.clone(),
                name: store.get_airport(code).map(|airport| airport.name.clone()),
            })
            .collect::<Vec<_>>();

        let legs = result
            .path
            .windows(2)
            .map(|pair| {
                let edge = store.graph().edge(&pair[0], &pair[1]);
                RouteLeg {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                    distance: edge.map(|edge| edge.weight),
                    cost: edge.map(|edge| edge.cost),
                }
            })
            .collect();

        Self {
            found: result.found,
            stops: result.stops(),
            total_distance: result.total_distance,
            total_cost: result.total_cost,
            steps,
            legs,
            message: result.error_message(),
        }
    }

    pub fn start(&self) -> Option<&RouteStep> {
        self.steps.first()
    }

    pub fn goal(&self) -> Option<&RouteStep> {
        self.steps.last()
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        if !self.found {
            let message = self.message.as_deref().unwrap_or("No route found");
            return match mode {
                RouteRenderMode::PlainText => format!("No route: {message}\n"),
                RouteRenderMode::RichText => format!("**No route** _{message}_\n"),
            };
        }
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn endpoints(&self) -> (&str, &str) {
        (
            self.start().map(RouteStep::display_name).unwrap_or("<unknown>"),
            self.goal().map(RouteStep::display_name).unwrap_or("<unknown>"),
        )
    }

    fn render_plain(&self) -> String {
        let (start, goal) = self.endpoints();
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} stops, {:.1} km, cost {:.2})",
            start, goal, self.stops, self.total_distance, self.total_cost
        );

        let joined = self
            .steps
            .iter()
            .map(|step| step.code.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        let _ = writeln!(buffer, "{joined}");

        for leg in &self.legs {
            let _ = writeln!(
                buffer,
                "  {} -> {}: {}",
                leg.from,
                leg.to,
                format_leg(leg)
            );
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let (start, goal) = self.endpoints();
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} stops, {:.1} km, cost {:.2})",
            start, goal, self.stops, self.total_distance, self.total_cost
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{}`)",
                step.index,
                step.display_name(),
                step.code
            );
        }
        buffer
    }
}

fn format_leg(leg: &RouteLeg) -> String {
    match (leg.distance, leg.cost) {
        (Some(distance), Some(cost)) => format!("{distance:.1} km, cost {cost:.2}"),
        _ => "no longer in the network".to_string(),
    }
}
