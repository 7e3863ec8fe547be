//! Bounded undo log.
//!
//! Each record keeps a full snapshot of the entity it describes so the store
//! can apply the inverse mutation. Only creative and destructive operations
//! are recorded; plain updates are not.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::model::{Aircraft, Airport, Flight, Route};

/// Maximum number of records retained. Pushing beyond this evicts the oldest.
pub const MAX_UNDO: usize = 5;

/// Entity and operation an undo record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    AddAirport,
    DeleteAirport,
    AddAircraft,
    DeleteAircraft,
    AddRoute,
    DeleteRoute,
    AddFlight,
    DeleteFlight,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::AddAirport => "ADD_AIRPORT",
            ActionKind::DeleteAirport => "DELETE_AIRPORT",
            ActionKind::AddAircraft => "ADD_AIRCRAFT",
            ActionKind::DeleteAircraft => "DELETE_AIRCRAFT",
            ActionKind::AddRoute => "ADD_ROUTE",
            ActionKind::DeleteRoute => "DELETE_ROUTE",
            ActionKind::AddFlight => "ADD_FLIGHT",
            ActionKind::DeleteFlight => "DELETE_FLIGHT",
        }
    }

    /// Whether undoing this action changes the airport or route set.
    pub fn affects_graph(self) -> bool {
        matches!(
            self,
            ActionKind::AddAirport
                | ActionKind::DeleteAirport
                | ActionKind::AddRoute
                | ActionKind::DeleteRoute
        )
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a recorded mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum UndoRecord {
    /// `prior_routes` lists the ids of routes that already touched the code
    /// when the airport was added; undo leaves those in place.
    AddAirport {
        airport: Airport,
        prior_routes: Vec<String>,
    },
    /// Deleting an airport cascades to its routes; they are kept so the
    /// inverse can restore them too.
    DeleteAirport {
        airport: Airport,
        routes: Vec<Route>,
    },
    AddAircraft(Aircraft),
    DeleteAircraft(Aircraft),
    AddRoute(Route),
    DeleteRoute(Route),
    AddFlight(Flight),
    DeleteFlight(Flight),
}

impl UndoRecord {
    pub fn kind(&self) -> ActionKind {
        match self {
            UndoRecord::AddAirport { .. } => ActionKind::AddAirport,
            UndoRecord::DeleteAirport { .. } => ActionKind::DeleteAirport,
            UndoRecord::AddAircraft(_) => ActionKind::AddAircraft,
            UndoRecord::DeleteAircraft(_) => ActionKind::DeleteAircraft,
            UndoRecord::AddRoute(_) => ActionKind::AddRoute,
            UndoRecord::DeleteRoute(_) => ActionKind::DeleteRoute,
            UndoRecord::AddFlight(_) => ActionKind::AddFlight,
            UndoRecord::DeleteFlight(_) => ActionKind::DeleteFlight,
        }
    }

    /// Identity key of the affected entity.
    pub fn key(&self) -> String {
        match self {
            UndoRecord::AddAirport { airport, .. }
            | UndoRecord::DeleteAirport { airport, .. } => airport.code.clone(),
            UndoRecord::AddAircraft(aircraft) | UndoRecord::DeleteAircraft(aircraft) => {
                aircraft.id.clone()
            }
            UndoRecord::AddRoute(route) | UndoRecord::DeleteRoute(route) => route.id(),
            UndoRecord::AddFlight(flight) | UndoRecord::DeleteFlight(flight) => {
                flight.flight_number.clone()
            }
        }
    }
}

impl fmt::Display for UndoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoRecord::AddAirport { airport: a, .. }
            | UndoRecord::DeleteAirport { airport: a, .. } => write!(
                f,
                "{} {},{},{},{}",
                self.kind(),
                a.code,
                a.name,
                a.city,
                a.country
            ),
            _ => write!(f, "{} {}", self.kind(), self.key()),
        }
    }
}

/// Capped last-in-first-out log of [`UndoRecord`]s.
#[derive(Debug, Clone, Default)]
pub(crate) struct UndoLog {
    records: VecDeque<UndoRecord>,
}

impl UndoLog {
    pub(crate) fn push(&mut self, record: UndoRecord) {
        self.records.push_back(record);
        while self.records.len() > MAX_UNDO {
            self.records.pop_front();
        }
    }

    pub(crate) fn pop(&mut self) -> Option<UndoRecord> {
        self.records.pop_back()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }

    /// Records from oldest to newest.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &UndoRecord> {
        self.records.iter()
    }
}
