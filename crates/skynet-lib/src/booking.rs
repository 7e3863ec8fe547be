//! Turning a found path into a scheduled flight.

use chrono::{Duration, Local};
use serde::Serialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::model::{Aircraft, AircraftStatus, Flight};
use crate::path::PathResult;
use crate::scheduling::can_schedule;
use crate::store::EntityStore;

/// Price charged per litre of fuel burned.
pub const FUEL_COST_PER_LITRE: f64 = 0.8;

/// Numeric part of the first generated flight number (`FL1000`).
pub const FIRST_FLIGHT_NUMBER: u32 = 1000;

/// Hours between now and the default departure time.
pub const DEPARTURE_LEAD_HOURS: i64 = 2;

/// Timestamp format used for departure times.
pub const DEPARTURE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const FLIGHT_NUMBER_PREFIX: &str = "FL";

/// Distance, fuel cost, and duration of flying a path with one aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightQuote {
    pub total_distance: f64,
    pub total_cost: f64,
    /// Hours.
    pub estimated_time: f64,
}

impl FlightQuote {
    pub fn for_path(path: &PathResult, aircraft: &Aircraft) -> Self {
        let distance = path.total_distance;
        Self {
            total_distance: distance,
            total_cost: distance * aircraft.fuel_consumption * FUEL_COST_PER_LITRE,
            estimated_time: distance / aircraft.cruise_speed,
        }
    }
}

/// Local time [`DEPARTURE_LEAD_HOURS`] from now, formatted with
/// [`DEPARTURE_FORMAT`].
pub fn default_departure_time() -> String {
    (Local::now() + Duration::hours(DEPARTURE_LEAD_HOURS))
        .format(DEPARTURE_FORMAT)
        .to_string()
}

impl EntityStore {
    /// Book `aircraft_id` along a found path.
    ///
    /// The new flight is `SCHEDULED` and recorded in the undo log; the
    /// aircraft is marked `IN_FLIGHT`. Nothing changes if any check fails.
    pub fn book_flight(
        &mut self,
        aircraft_id: &str,
        path: &PathResult,
        departure_time: &str,
    ) -> Result<Flight> {
        if !path.is_valid() {
            let reason = path
                .error_message()
                .unwrap_or_else(|| "path must visit at least two airports".to_string());
            return Err(Error::UnbookablePath { reason });
        }

        let aircraft = self
            .get_aircraft(aircraft_id)
            .ok_or_else(|| Error::AircraftNotFound {
                id: aircraft_id.trim().to_string(),
            })?
            .clone();
        if !aircraft.is_available() {
            return Err(Error::AircraftUnavailable {
                id: aircraft.id,
                status: aircraft.status.to_string(),
            });
        }

        let codes: Vec<&str> = path.path.iter().map(String::as_str).collect();
        let quote = FlightQuote::for_path(path, &aircraft);
        let mut flight = Flight::new(&self.next_flight_number(), &aircraft.id, &codes);
        flight.total_distance = quote.total_distance;
        flight.total_cost = quote.total_cost;
        flight.estimated_time = quote.estimated_time;
        flight.departure_time = departure_time.trim().to_string();

        let existing = self.get_all_flights();
        if !can_schedule(&flight, &existing) {
            let conflicting = existing
                .iter()
                .find(|other| other.aircraft_id == flight.aircraft_id && other.is_scheduled())
                .map(|other| other.flight_number.clone())
                .unwrap_or_default();
            return Err(Error::ScheduleConflict {
                aircraft_id: aircraft.id,
                conflicting,
            });
        }

        self.add_flight(flight.clone())?;
        self.update_aircraft(Aircraft {
            status: AircraftStatus::InFlight,
            ..aircraft
        })?;

        info!(
            flight = %flight.flight_number,
            aircraft = %flight.aircraft_id,
            route = %flight.route.join("-"),
            "booked flight"
        );
        Ok(flight)
    }

    /// Lowest `FL<n>` with `n >= FIRST_FLIGHT_NUMBER` not already in use.
    pub fn next_flight_number(&self) -> String {
        (FIRST_FLIGHT_NUMBER..)
            .map(|n| format!("{FLIGHT_NUMBER_PREFIX}{n}"))
            .find(|number| self.get_flight(number).is_none())
            .unwrap_or_default()
    }
}
