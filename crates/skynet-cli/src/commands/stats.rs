//! `stats` command.

use anyhow::Result;

use skynet_lib::EntityStore;

use crate::output::{format_table, print_json, OutputFormat};

pub fn handle_stats(store: &EntityStore, format: OutputFormat) -> Result<()> {
    let stats = store.stats();
    if format == OutputFormat::Json {
        print_json(&stats)?;
        return Ok(());
    }

    let rows = [
        ("Airports", stats.airports),
        ("Aircraft", stats.aircraft),
        ("Routes", stats.routes),
        ("Flights", stats.flights),
        ("Graph nodes", stats.graph_nodes),
        ("Graph edges", stats.graph_edges),
    ]
    .iter()
    .map(|(label, count)| vec![label.to_string(), count.to_string()])
    .collect::<Vec<_>>();

    print!("{}", format_table(format, &["Entity", "Count"], &rows));
    println!("Data directory: {}", store.data_files().dir.display());
    Ok(())
}
