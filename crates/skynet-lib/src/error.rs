use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Skynet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the data directory")]
    ProjectDirsUnavailable,

    /// Raised when adding an airport whose code is already registered.
    #[error("airport {code} already exists")]
    DuplicateAirport { code: String },

    /// Raised when updating or deleting an airport that is not registered.
    #[error("airport {code} not found")]
    AirportNotFound { code: String },

    /// Raised when a referenced airport code could not be resolved.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when airport fields fail validation.
    #[error("invalid airport: {message}")]
    InvalidAirport { message: String },

    /// Raised when adding an aircraft whose id is already registered.
    #[error("aircraft {id} already exists")]
    DuplicateAircraft { id: String },

    /// Raised when updating or deleting an aircraft that is not registered.
    #[error("aircraft {id} not found")]
    AircraftNotFound { id: String },

    /// Raised when aircraft fields fail validation.
    #[error("invalid aircraft: {message}")]
    InvalidAircraft { message: String },

    /// Raised when booking an aircraft that is not available.
    #[error("aircraft {id} is not available (status {status})")]
    AircraftUnavailable { id: String, status: String },

    /// Raised when adding a route whose directional id already exists.
    #[error("route {id} already exists")]
    DuplicateRoute { id: String },

    /// Raised when updating or deleting a route that is not registered.
    #[error("route {id} not found")]
    RouteNotFound { id: String },

    /// Raised when route fields fail validation.
    #[error("invalid route: {message}")]
    InvalidRoute { message: String },

    /// Raised when adding a flight whose number is already registered.
    #[error("flight {number} already exists")]
    DuplicateFlight { number: String },

    /// Raised when deleting a flight that is not registered.
    #[error("flight {number} not found")]
    FlightNotFound { number: String },

    /// Raised when flight fields fail validation.
    #[error("invalid flight: {message}")]
    InvalidFlight { message: String },

    /// Raised when booking would double-book an aircraft.
    #[error("aircraft {aircraft_id} already has scheduled flight {conflicting}")]
    ScheduleConflict {
        aircraft_id: String,
        conflicting: String,
    },

    /// Raised when a flight is booked from a path that was not found.
    #[error("cannot book a flight without a valid path: {reason}")]
    UnbookablePath { reason: String },

    /// Raised when `undo` is called with an empty undo log.
    #[error("nothing to undo")]
    NothingToUndo,

    /// Raised when a persisted row could not be parsed.
    #[error("malformed record in {file} at line {line}: {message}")]
    MalformedRecord {
        file: PathBuf,
        line: u64,
        message: String,
    },

    /// Wrapper for CSV reader/writer errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
