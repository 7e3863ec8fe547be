//! Subcommand handlers.
//!
//! Each module owns one command group: its clap definitions and the handler
//! that runs it against the loaded store. main.rs only parses and dispatches.

pub mod aircraft;
pub mod airports;
pub mod flights;
pub mod path;
pub mod routes;
pub mod stats;

use anyhow::{Context, Result};
use skynet_lib::EntityStore;

/// Persist the store after a successful mutation.
pub(crate) fn save(store: &EntityStore) -> Result<()> {
    store.save_all().with_context(|| {
        format!(
            "failed to save data to {}",
            store.data_files().dir.display()
        )
    })
}
