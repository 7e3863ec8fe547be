//! Aircraft double-booking checks and per-flight time slots.
//!
//! Only flights whose status is `SCHEDULED` take part in conflict checks.
//! Conflicts are decided by aircraft alone; departure times are not compared.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::booking::DEPARTURE_FORMAT;
use crate::model::Flight;

/// Occupancy of one aircraft by one flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub flight_number: String,
    pub aircraft_id: String,
    pub start: String,
    pub end: String,
    /// `ORIGIN → DESTINATION`.
    pub location: String,
}

/// Whether `flight` can be scheduled alongside `existing` without reusing
/// an aircraft that already has a scheduled flight.
pub fn can_schedule(flight: &Flight, existing: &[Flight]) -> bool {
    !existing.iter().any(|other| {
        other.flight_number != flight.flight_number
            && other.aircraft_id == flight.aircraft_id
            && other.is_scheduled()
    })
}

/// Every pair of scheduled flights sharing an aircraft, as flight numbers in
/// input order.
pub fn detect_conflicts(flights: &[Flight]) -> Vec<(String, String)> {
    let scheduled: Vec<&Flight> = flights.iter().filter(|f| f.is_scheduled()).collect();

    let mut conflicts = Vec::new();
    for (i, first) in scheduled.iter().enumerate() {
        for second in &scheduled[i + 1..] {
            if first.aircraft_id == second.aircraft_id {
                conflicts.push((first.flight_number.clone(), second.flight_number.clone()));
            }
        }
    }
    conflicts
}

/// One slot per flight. The end is departure plus estimated time when the
/// departure parses, otherwise the departure string unchanged.
pub fn time_slots(flights: &[Flight]) -> Vec<TimeSlot> {
    flights
        .iter()
        .map(|flight| TimeSlot {
            flight_number: flight.flight_number.clone(),
            aircraft_id: flight.aircraft_id.clone(),
            start: flight.departure_time.clone(),
            end: slot_end(&flight.departure_time, flight.estimated_time),
            location: format!(
                "{} → {}",
                flight.origin().unwrap_or_default(),
                flight.destination().unwrap_or_default()
            ),
        })
        .collect()
}

fn slot_end(departure: &str, hours: f64) -> String {
    let Ok(start) = NaiveDateTime::parse_from_str(departure, DEPARTURE_FORMAT) else {
        return departure.to_string();
    };
    if !hours.is_finite() {
        return departure.to_string();
    }
    let seconds = (hours * 3600.0).round() as i64;
    (start + Duration::seconds(seconds))
        .format(DEPARTURE_FORMAT)
        .to_string()
}
