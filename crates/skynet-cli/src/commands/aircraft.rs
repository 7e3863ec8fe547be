//! `aircraft` subcommands.

use anyhow::Result;
use clap::Subcommand;

use skynet_lib::{Aircraft, AircraftStatus, EntityStore, Error as LibError};

use crate::commands::save;
use crate::output::{print_listing, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum AircraftCommand {
    /// List the fleet ordered by id.
    List,
    /// Register a new aircraft (status AVAILABLE).
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        model: String,
        #[arg(long)]
        capacity: u32,
        /// Cruise speed in km/h.
        #[arg(long)]
        cruise_speed: f64,
        /// Fuel burn in litres per km.
        #[arg(long)]
        fuel_consumption: f64,
    },
    /// Remove an aircraft.
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Set the status: AVAILABLE, IN_FLIGHT, MAINTENANCE or RETIRED.
    Status {
        #[arg(long)]
        id: String,
        #[arg(long)]
        status: String,
    },
}

pub fn handle_aircraft(
    store: &mut EntityStore,
    format: OutputFormat,
    command: AircraftCommand,
) -> Result<()> {
    match command {
        AircraftCommand::List => list(store, format),
        AircraftCommand::Add {
            id,
            model,
            capacity,
            cruise_speed,
            fuel_consumption,
        } => {
            let aircraft = Aircraft::new(&id, model, capacity, cruise_speed, fuel_consumption);
            let id = aircraft.id.clone();
            store.add_aircraft(aircraft)?;
            save(store)?;
            println!("Added aircraft {id}");
            Ok(())
        }
        AircraftCommand::Delete { id } => {
            store.delete_aircraft(&id)?;
            save(store)?;
            println!("Deleted aircraft {}", id.trim());
            Ok(())
        }
        AircraftCommand::Status { id, status } => {
            let status: AircraftStatus = status.parse()?;
            let mut aircraft = store
                .get_aircraft(&id)
                .cloned()
                .ok_or_else(|| LibError::AircraftNotFound {
                    id: id.trim().to_string(),
                })?;
            aircraft.status = status;
            let id = aircraft.id.clone();
            store.update_aircraft(aircraft)?;
            save(store)?;
            println!("Aircraft {id} is now {status}");
            Ok(())
        }
    }
}

fn list(store: &EntityStore, format: OutputFormat) -> Result<()> {
    let fleet = store.get_all_aircraft();
    let rows = fleet
        .iter()
        .map(|a| {
            vec![
                a.id.clone(),
                a.model.clone(),
                a.capacity.to_string(),
                format!("{:.0}", a.cruise_speed),
                format!("{:.2}", a.fuel_consumption),
                a.status.to_string(),
            ]
        })
        .collect();
    print_listing(
        format,
        &fleet,
        &["ID", "Model", "Capacity", "Cruise km/h", "Fuel L/km", "Status"],
        rows,
        "No aircraft.",
    )?;
    Ok(())
}
