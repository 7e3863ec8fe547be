//! Skynet CLI library.
//!
//! Subcommand handlers and output formatting for the `skynet-cli` binary.
//! The binary owns the single [`skynet_lib::EntityStore`] and passes it to
//! the handlers here.

pub mod commands;
pub mod output;
