//! Domain entities owned by the [`EntityStore`](crate::store::EntityStore).
//!
//! Constructors normalise identifiers (airport codes are trimmed and
//! upper-cased) and each entity exposes a `validate` method that the store
//! runs on every add, update, and loaded row.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Length of an IATA airport code.
pub const AIRPORT_CODE_LEN: usize = 3;

/// Trim and upper-case an airport code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Directional route identifier: `ORIGIN-DESTINATION`.
pub fn route_id(origin: &str, destination: &str) -> String {
    format!("{}-{}", normalize_code(origin), normalize_code(destination))
}

fn validate_code(code: &str) -> std::result::Result<(), String> {
    if code.len() != AIRPORT_CODE_LEN || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!(
            "airport code '{code}' must be exactly {AIRPORT_CODE_LEN} alphanumeric characters"
        ));
    }
    Ok(())
}

fn require_positive(value: f64, field: &str) -> std::result::Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{field} must be a finite positive number"));
    }
    Ok(())
}

fn require_non_negative(value: f64, field: &str) -> std::result::Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{field} must be a finite non-negative number"));
    }
    Ok(())
}

/// An airport, identified by its IATA code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    pub fn new(
        code: &str,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            code: normalize_code(code),
            name: name.into(),
            city: city.into(),
            country: country.into(),
            latitude,
            longitude,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Error::InvalidAirport { message };

        validate_code(&self.code).map_err(invalid)?;
        if self.name.trim().is_empty() {
            return Err(invalid(format!("airport {} must have a name", self.code)));
        }
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(invalid(format!(
                "latitude {} for {} must be within [-90, 90]",
                self.latitude, self.code
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(invalid(format!(
                "longitude {} for {} must be within [-180, 180]",
                self.longitude, self.code
            )));
        }
        Ok(())
    }
}

/// Operational state of an aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AircraftStatus {
    #[default]
    Available,
    InFlight,
    Maintenance,
    Retired,
}

impl AircraftStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AircraftStatus::Available => "AVAILABLE",
            AircraftStatus::InFlight => "IN_FLIGHT",
            AircraftStatus::Maintenance => "MAINTENANCE",
            AircraftStatus::Retired => "RETIRED",
        }
    }

    /// Lenient parse used for persisted rows: unknown names map to
    /// [`AircraftStatus::Available`].
    pub fn from_persisted(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for AircraftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AircraftStatus {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "AVAILABLE" => Ok(AircraftStatus::Available),
            "IN_FLIGHT" => Ok(AircraftStatus::InFlight),
            "MAINTENANCE" => Ok(AircraftStatus::Maintenance),
            "RETIRED" => Ok(AircraftStatus::Retired),
            other => Err(Error::InvalidAircraft {
                message: format!("unknown aircraft status '{other}'"),
            }),
        }
    }
}

/// An aircraft in the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: String,
    pub model: String,
    pub capacity: u32,
    /// Cruise speed in km/h.
    pub cruise_speed: f64,
    /// Fuel burn in litres per kilometre.
    pub fuel_consumption: f64,
    pub status: AircraftStatus,
}

impl Aircraft {
    pub fn new(
        id: &str,
        model: impl Into<String>,
        capacity: u32,
        cruise_speed: f64,
        fuel_consumption: f64,
    ) -> Self {
        Self {
            id: id.trim().to_string(),
            model: model.into(),
            capacity,
            cruise_speed,
            fuel_consumption,
            status: AircraftStatus::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == AircraftStatus::Available
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Error::InvalidAircraft { message };

        if self.id.trim().is_empty() {
            return Err(invalid("aircraft id must not be empty".to_string()));
        }
        if self.capacity == 0 {
            return Err(invalid(format!("capacity of {} must be positive", self.id)));
        }
        require_positive(self.cruise_speed, "cruise_speed").map_err(invalid)?;
        require_positive(self.fuel_consumption, "fuel_consumption").map_err(invalid)?;
        Ok(())
    }
}

/// A directional route leg between two airports.
///
/// A connection flown both ways may be stored as one record or as two
/// independent records; either way the routing graph links both directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    /// Leg length in kilometres.
    pub distance: f64,
    pub base_cost: f64,
    pub operational: bool,
}

impl Route {
    pub fn new(origin: &str, destination: &str, distance: f64, base_cost: f64) -> Self {
        Self {
            origin: normalize_code(origin),
            destination: normalize_code(destination),
            distance,
            base_cost,
            operational: true,
        }
    }

    pub fn with_operational(mut self, operational: bool) -> Self {
        self.operational = operational;
        self
    }

    pub fn id(&self) -> String {
        route_id(&self.origin, &self.destination)
    }

    /// The same leg flown in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
            ..self.clone()
        }
    }

    pub fn touches(&self, code: &str) -> bool {
        self.origin == code || self.destination == code
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Error::InvalidRoute { message };

        validate_code(&self.origin).map_err(invalid)?;
        validate_code(&self.destination).map_err(invalid)?;
        if self.origin == self.destination {
            return Err(invalid(format!(
                "origin and destination must differ ({})",
                self.origin
            )));
        }
        require_non_negative(self.distance, "distance").map_err(invalid)?;
        require_non_negative(self.base_cost, "base_cost").map_err(invalid)?;
        Ok(())
    }
}

/// Default status of a newly booked flight.
pub const STATUS_SCHEDULED: &str = "SCHEDULED";

/// A booked flight along an ordered sequence of airports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_number: String,
    pub aircraft_id: String,
    pub route: Vec<String>,
    pub total_distance: f64,
    pub total_cost: f64,
    /// Hours.
    pub estimated_time: f64,
    pub departure_time: String,
    /// Free text, e.g. `SCHEDULED`, `COMPLETED`, `CANCELLED`.
    pub status: String,
}

impl Flight {
    pub fn new(flight_number: &str, aircraft_id: &str, route: &[&str]) -> Self {
        Self {
            flight_number: flight_number.trim().to_string(),
            aircraft_id: aircraft_id.trim().to_string(),
            route: route.iter().map(|code| normalize_code(code)).collect(),
            total_distance: 0.0,
            total_cost: 0.0,
            estimated_time: 0.0,
            departure_time: String::new(),
            status: STATUS_SCHEDULED.to_string(),
        }
    }

    pub fn origin(&self) -> Option<&str> {
        self.route.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.route.last().map(String::as_str)
    }

    pub fn stops(&self) -> usize {
        self.route.len().saturating_sub(2)
    }

    pub fn is_scheduled(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_SCHEDULED)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Error::InvalidFlight { message };

        if self.flight_number.trim().is_empty() {
            return Err(invalid("flight number must not be empty".to_string()));
        }
        if self.route.len() < 2 {
            return Err(invalid(format!(
                "flight {} must visit at least two airports",
                self.flight_number
            )));
        }
        for code in &self.route {
            validate_code(code).map_err(invalid)?;
        }
        Ok(())
    }
}
