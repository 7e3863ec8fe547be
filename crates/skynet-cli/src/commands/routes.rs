//! `routes` subcommands.

use anyhow::Result;
use clap::Subcommand;

use skynet_lib::model::route_id;
use skynet_lib::{EntityStore, Route};

use crate::commands::save;
use crate::output::{print_listing, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum RoutesCommand {
    /// List all route records ordered by id.
    List,
    /// Add a directional route record. It is flown in both directions.
    Add {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        base_cost: f64,
        /// Distance in km; derived from airport coordinates when omitted.
        #[arg(long)]
        distance: Option<f64>,
        /// Store the route as not operational.
        #[arg(long)]
        inactive: bool,
    },
    /// Delete the route record `FROM-TO`.
    Delete {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
}

pub fn handle_routes(
    store: &mut EntityStore,
    format: OutputFormat,
    command: RoutesCommand,
) -> Result<()> {
    match command {
        RoutesCommand::List => list(store, format),
        RoutesCommand::Add {
            from,
            to,
            base_cost,
            distance,
            inactive,
        } => {
            let route = match (distance, inactive) {
                (None, false) => store.connect_airports(&from, &to, base_cost)?,
                (distance, _) => {
                    let distance = match distance {
                        Some(distance) => distance,
                        None => store.great_circle_km(&from, &to)?,
                    };
                    let route =
                        Route::new(&from, &to, distance, base_cost).with_operational(!inactive);
                    store.add_route(route.clone())?;
                    route
                }
            };
            save(store)?;
            println!(
                "Added route {} ({:.1} km{})",
                route.id(),
                route.distance,
                if route.operational { "" } else { ", inactive" }
            );
            Ok(())
        }
        RoutesCommand::Delete { from, to } => {
            let id = route_id(&from, &to);
            store.delete_route(&id)?;
            save(store)?;
            println!("Deleted route {id}");
            Ok(())
        }
    }
}

fn list(store: &EntityStore, format: OutputFormat) -> Result<()> {
    let routes = store.get_all_routes();
    let rows = routes
        .iter()
        .map(|r| {
            vec![
                r.id(),
                format!("{:.1}", r.distance),
                format!("{:.2}", r.base_cost),
                if r.operational { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    print_listing(
        format,
        &routes,
        &["Route", "Distance km", "Base cost", "Operational"],
        rows,
        "No routes.",
    )?;
    Ok(())
}
