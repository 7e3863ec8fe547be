//! `flights` subcommands and the `conflicts` report.

use anyhow::{bail, Result};
use clap::Subcommand;

use skynet_lib::{
    default_departure_time, detect_conflicts, find_shortest_path, optimize, Criteria,
    EntityStore, RouteSummary,
};

use crate::commands::save;
use crate::output::{print_json, print_listing, render_route, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum FlightsCommand {
    /// List all flights ordered by flight number.
    List,
    /// Remove a flight.
    Delete {
        #[arg(long)]
        number: String,
    },
    /// Book an available aircraft along the shortest path between two airports.
    Book {
        #[arg(long)]
        aircraft: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Departure as YYYY-MM-DDTHH:MM:SS; defaults to two hours from now.
        #[arg(long)]
        departure: Option<String>,
        /// Reject paths with more intermediate airports than this.
        #[arg(long)]
        max_stops: Option<usize>,
    },
}

pub fn handle_flights(
    store: &mut EntityStore,
    format: OutputFormat,
    command: FlightsCommand,
) -> Result<()> {
    match command {
        FlightsCommand::List => list(store, format),
        FlightsCommand::Delete { number } => {
            store.delete_flight(&number)?;
            save(store)?;
            println!("Deleted flight {}", number.trim());
            Ok(())
        }
        FlightsCommand::Book {
            aircraft,
            from,
            to,
            departure,
            max_stops,
        } => {
            let origin = store.resolve_airport(&from)?.code.clone();
            let destination = store.resolve_airport(&to)?.code.clone();
            let path = match max_stops {
                Some(max_stops) => {
                    let criteria = Criteria {
                        max_stops,
                        ..Criteria::default()
                    };
                    optimize(store.graph(), &origin, &destination, &criteria)
                }
                None => find_shortest_path(store.graph(), &origin, &destination),
            };
            if !path.found {
                render_route(&RouteSummary::from_result(store, &path), format)?;
                bail!("no bookable route from {origin} to {destination}");
            }

            let departure = departure.unwrap_or_else(default_departure_time);
            let flight = store.book_flight(&aircraft, &path, &departure)?;
            save(store)?;

            if format == OutputFormat::Json {
                print_json(&flight)?;
            } else {
                println!(
                    "Booked {} on {}: {} ({:.1} km, cost {:.2}, {:.2} h, departs {})",
                    flight.flight_number,
                    flight.aircraft_id,
                    flight.route.join(" -> "),
                    flight.total_distance,
                    flight.total_cost,
                    flight.estimated_time,
                    flight.departure_time
                );
            }
            Ok(())
        }
    }
}

fn list(store: &EntityStore, format: OutputFormat) -> Result<()> {
    let flights = store.get_all_flights();
    let rows = flights
        .iter()
        .map(|f| {
            vec![
                f.flight_number.clone(),
                f.aircraft_id.clone(),
                f.route.join("-"),
                format!("{:.1}", f.total_distance),
                format!("{:.2}", f.total_cost),
                format!("{:.2}", f.estimated_time),
                f.departure_time.clone(),
                f.status.clone(),
            ]
        })
        .collect();
    print_listing(
        format,
        &flights,
        &[
            "Flight", "Aircraft", "Route", "Distance km", "Cost", "Hours", "Departure", "Status",
        ],
        rows,
        "No flights.",
    )?;
    Ok(())
}

/// Report scheduled flights that share an aircraft.
pub fn handle_conflicts(store: &EntityStore, format: OutputFormat) -> Result<()> {
    let conflicts = detect_conflicts(&store.get_all_flights());
    if format == OutputFormat::Json {
        print_json(&conflicts)?;
        return Ok(());
    }
    if conflicts.is_empty() {
        println!("No scheduling conflicts.");
        return Ok(());
    }
    for (first, second) in &conflicts {
        println!("{first} conflicts with {second}");
    }
    Ok(())
}
