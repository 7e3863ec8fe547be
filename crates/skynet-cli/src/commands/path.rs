//! `path` and `frontier` commands.

use anyhow::{bail, Result};
use serde::Serialize;

use skynet_lib::{
    find_shortest_path, optimize, pareto_frontier, Criteria, EntityStore, Objective,
    RouteSummary,
};

use crate::output::{print_json, render_route, OutputFormat};

/// Print the shortest path, or the stop-capped path when `max_stops` is set.
/// Fails when no route is found.
pub fn handle_path(
    store: &EntityStore,
    format: OutputFormat,
    from: &str,
    to: &str,
    max_stops: Option<usize>,
) -> Result<()> {
    let origin = &store.resolve_airport(from)?.code;
    let destination = &store.resolve_airport(to)?.code;

    let result = match max_stops {
        Some(max_stops) => {
            let criteria = Criteria {
                max_stops,
                ..Criteria::default()
            };
            optimize(store.graph(), origin, destination, &criteria)
        }
        None => find_shortest_path(store.graph(), origin, destination),
    };

    let summary = RouteSummary::from_result(store, &result);
    render_route(&summary, format)?;
    if !result.found {
        bail!("no route from {origin} to {destination}");
    }
    Ok(())
}

#[derive(Serialize)]
struct FrontierEntry {
    objective: Objective,
    criteria: Criteria,
    route: RouteSummary,
}

/// Print one candidate per objective.
pub fn handle_frontier(
    store: &EntityStore,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let origin = &store.resolve_airport(from)?.code;
    let destination = &store.resolve_airport(to)?.code;

    let entries: Vec<FrontierEntry> = pareto_frontier(store.graph(), origin, destination)
        .into_iter()
        .map(|candidate| FrontierEntry {
            objective: candidate.objective,
            criteria: candidate.criteria,
            route: RouteSummary::from_result(store, &candidate.result),
        })
        .collect();

    if format == OutputFormat::Json {
        print_json(&entries)?;
        return Ok(());
    }

    for entry in &entries {
        println!("[{}]", entry.objective);
        print!("{}", entry.route.render(format.render_mode()));
    }
    Ok(())
}
