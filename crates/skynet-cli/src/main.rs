use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skynet_cli::commands::aircraft::{handle_aircraft, AircraftCommand};
use skynet_cli::commands::airports::{handle_airports, AirportsCommand};
use skynet_cli::commands::flights::{handle_conflicts, handle_flights, FlightsCommand};
use skynet_cli::commands::path::{handle_frontier, handle_path};
use skynet_cli::commands::routes::{handle_routes, RoutesCommand};
use skynet_cli::commands::stats::handle_stats;
use skynet_cli::output::OutputFormat;
use skynet_lib::{resolve_data_dir, EntityStore};

#[derive(Parser, Debug)]
#[command(author, version, about = "Skynet airport network manager and route planner")]
struct Cli {
    /// Directory holding the data files. Falls back to SKYNET_DATA_DIR, then
    /// the platform data directory.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage airports.
    #[command(subcommand)]
    Airports(AirportsCommand),
    /// Manage the aircraft fleet.
    #[command(subcommand)]
    Aircraft(AircraftCommand),
    /// Manage route records.
    #[command(subcommand)]
    Routes(RoutesCommand),
    /// Manage and book flights.
    #[command(subcommand)]
    Flights(FlightsCommand),
    /// Find the shortest path between two airports.
    Path {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
        /// Reject paths with more intermediate airports than this.
        #[arg(long)]
        max_stops: Option<usize>,
    },
    /// Compare distance-, cost-, and time-labelled candidates.
    Frontier {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// List scheduled flights that share an aircraft.
    Conflicts,
    /// Show entity and graph counts.
    Stats,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let data_dir =
        resolve_data_dir(cli.data_dir.as_deref()).context("failed to resolve the data directory")?;
    let mut store = EntityStore::new(&data_dir);
    store
        .load_all()
        .with_context(|| format!("failed to load data from {}", data_dir.display()))?;

    let format = cli.format;
    match cli.command {
        Command::Airports(command) => handle_airports(&mut store, format, command),
        Command::Aircraft(command) => handle_aircraft(&mut store, format, command),
        Command::Routes(command) => handle_routes(&mut store, format, command),
        Command::Flights(command) => handle_flights(&mut store, format, command),
        Command::Path {
            from,
            to,
            max_stops,
        } => handle_path(&store, format, &from, &to, max_stops),
        Command::Frontier { from, to } => handle_frontier(&store, format, &from, &to),
        Command::Conflicts => handle_conflicts(&store, format),
        Command::Stats => handle_stats(&store, format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
