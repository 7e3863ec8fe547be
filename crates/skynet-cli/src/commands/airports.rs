//! `airports` subcommands.

use anyhow::Result;
use clap::Subcommand;

use skynet_lib::{Airport, EntityStore};

use crate::commands::save;
use crate::output::{print_listing, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum AirportsCommand {
    /// List all airports ordered by code.
    List,
    /// Register a new airport.
    Add {
        /// Three-character IATA code.
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        city: String,
        #[arg(long, default_value = "")]
        country: String,
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
    },
    /// Change fields of an existing airport. Omitted fields keep their value.
    Update {
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        latitude: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        longitude: Option<f64>,
    },
    /// Delete an airport and every route touching it.
    Delete {
        #[arg(long)]
        code: String,
    },
}

pub fn handle_airports(
    store: &mut EntityStore,
    format: OutputFormat,
    command: AirportsCommand,
) -> Result<()> {
    match command {
        AirportsCommand::List => list(store, format),
        AirportsCommand::Add {
            code,
            name,
            city,
            country,
            latitude,
            longitude,
        } => {
            let airport = Airport::new(&code, name, city, country, latitude, longitude);
            let code = airport.code.clone();
            store.add_airport(airport)?;
            save(store)?;
            println!("Added airport {code}");
            Ok(())
        }
        AirportsCommand::Update {
            code,
            name,
            city,
            country,
            latitude,
            longitude,
        } => {
            let current = store.resolve_airport(&code)?.clone();
            let updated = Airport {
                name: name.unwrap_or(current.name),
                city: city.unwrap_or(current.city),
                country: country.unwrap_or(current.country),
                latitude: latitude.unwrap_or(current.latitude),
                longitude: longitude.unwrap_or(current.longitude),
                code: current.code,
            };
            let code = updated.code.clone();
            store.update_airport(updated)?;
            save(store)?;
            println!("Updated airport {code}");
            Ok(())
        }
        AirportsCommand::Delete { code } => {
            let code = store.resolve_airport(&code)?.code.clone();
            let routes_before = store.get_all_routes().len();
            store.delete_airport(&code)?;
            save(store)?;
            let cascaded = routes_before - store.get_all_routes().len();
            println!("Deleted airport {code} and {cascaded} route(s)");
            Ok(())
        }
    }
}

fn list(store: &EntityStore, format: OutputFormat) -> Result<()> {
    let airports = store.get_all_airports();
    let rows = airports
        .iter()
        .map(|a| {
            vec![
                a.code.clone(),
                a.name.clone(),
                a.city.clone(),
                a.country.clone(),
                format!("{:.4}", a.latitude),
                format!("{:.4}", a.longitude),
            ]
        })
        .collect();
    print_listing(
        format,
        &airports,
        &["Code", "Name", "City", "Country", "Latitude", "Longitude"],
        rows,
        "No airports.",
    )?;
    Ok(())
}
