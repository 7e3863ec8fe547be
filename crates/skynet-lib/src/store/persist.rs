//! Flat-file persistence for the entity store.
//!
//! Each entity type lives in its own comma-delimited file with a header row.
//! Loading tolerates damage: a row that fails to parse or validate is logged
//! and skipped, as is a row repeating an earlier row's key. A missing file
//! loads as empty. Saving rewrites the file in full.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim, Writer};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::error::{Error, Result};
use crate::model::{Aircraft, AircraftStatus, Airport, Flight, Route};

use super::EntityStore;

const AIRPORT_HEADER: [&str; 6] = ["Code", "Name", "City", "Country", "Latitude", "Longitude"];
const AIRCRAFT_HEADER: [&str; 6] = [
    "ID",
    "Model",
    "Capacity",
    "CruiseSpeed",
    "FuelConsumption",
    "Status",
];
const ROUTE_HEADER: [&str; 5] = ["Origin", "Destination", "Distance", "BaseCost", "Operational"];
const FLIGHT_HEADER: [&str; 8] = [
    "FlightNumber",
    "AircraftID",
    "Route",
    "TotalDistance",
    "TotalCost",
    "EstimatedTime",
    "DepartureTime",
    "Status",
];

/// Separator between airport codes inside a flight's `Route` field.
const ROUTE_CODE_SEPARATOR: char = '-';

/// Outcome of [`EntityStore::load_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub airports: usize,
    pub aircraft: usize,
    pub routes: usize,
    pub flights: usize,
    /// Rows dropped because they failed to parse or validate.
    pub skipped: usize,
}

impl EntityStore {
    /// Replace every collection with the contents of the data files.
    ///
    /// Missing files load as empty. When several rows share a key the first
    /// one is kept and the rest count as skipped. The undo log is cleared and
    /// the graph is rebuilt. Only failures to open or read a present file are
    /// errors.
    pub fn load_all(&mut self) -> Result<LoadReport> {
        self.files.ensure_dir()?;
        let mut report = LoadReport::default();

        let airports = load_rows(&self.files.airports, &mut report.skipped, parse_airport)?;
        let aircraft = load_rows(&self.files.aircraft, &mut report.skipped, parse_aircraft)?;
        let routes = load_rows(&self.files.routes, &mut report.skipped, parse_route)?;
        let flights = load_rows(&self.files.flights, &mut report.skipped, parse_flight)?;

        let skipped = &mut report.skipped;
        self.airports = index_rows(&self.files.airports, airports, skipped, |a: &Airport| {
            a.code.clone()
        });
        self.aircraft = index_rows(&self.files.aircraft, aircraft, skipped, |a: &Aircraft| {
            a.id.clone()
        });
        self.routes = index_rows(&self.files.routes, routes, skipped, Route::id);
        self.flights = index_rows(&self.files.flights, flights, skipped, |f: &Flight| {
            f.flight_number.clone()
        });

        report.airports = self.airports.len();
        report.aircraft = self.aircraft.len();
        report.routes = self.routes.len();
        report.flights = self.flights.len();

        self.undo.clear();
        self.rebuild_graph();

        info!(
            airports = report.airports,
            aircraft = report.aircraft,
            routes = report.routes,
            flights = report.flights,
            skipped = report.skipped,
            dir = %self.files.dir.display(),
            "loaded entity store"
        );
        Ok(report)
    }

    /// Persist every collection, overwriting the data files.
    ///
    /// All four files are attempted even if one fails; the first failure is
    /// returned.
    pub fn save_all(&self) -> Result<()> {
        self.files.ensure_dir()?;

        let outcomes = [
            ("airports", self.save_airports()),
            ("aircraft", self.save_aircraft()),
            ("routes", self.save_routes()),
            ("flights", self.save_flights()),
        ];

        let mut first_error = None;
        for (entity, outcome) in outcomes {
            if let Err(err) = outcome {
                error!(entity, error = %err, "failed to save");
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => {
                info!(dir = %self.files.dir.display(), "saved entity store");
                Ok(())
            }
        }
    }

    pub fn save_airports(&self) -> Result<()> {
        let rows = self.airports.values().map(|airport| {
            vec![
                airport.code.clone(),
                airport.name.clone(),
                airport.city.clone(),
                airport.country.clone(),
                airport.latitude.to_string(),
                airport.longitude.to_string(),
            ]
        });
        save_rows(&self.files.airports, &AIRPORT_HEADER, rows)
    }

    pub fn save_aircraft(&self) -> Result<()> {
        let rows = self.aircraft.values().map(|aircraft| {
            vec![
                aircraft.id.clone(),
                aircraft.model.clone(),
                aircraft.capacity.to_string(),
                aircraft.cruise_speed.to_string(),
                aircraft.fuel_consumption.to_string(),
                aircraft.status.to_string(),
            ]
        });
        save_rows(&self.files.aircraft, &AIRCRAFT_HEADER, rows)
    }

    pub fn save_routes(&self) -> Result<()> {
        let rows = self.routes.values().map(|route| {
            vec![
                route.origin.clone(),
                route.destination.clone(),
                route.distance.to_string(),
                route.base_cost.to_string(),
                if route.operational { "1" } else { "0" }.to_string(),
            ]
        });
        save_rows(&self.files.routes, &ROUTE_HEADER, rows)
    }

    pub fn save_flights(&self) -> Result<()> {
        let separator = ROUTE_CODE_SEPARATOR.to_string();
        let rows = self.flights.values().map(|flight| {
            vec![
                flight.flight_number.clone(),
                flight.aircraft_id.clone(),
                flight.route.join(&separator),
                flight.total_distance.to_string(),
                flight.total_cost.to_string(),
                flight.estimated_time.to_string(),
                flight.departure_time.clone(),
                flight.status.clone(),
            ]
        });
        save_rows(&self.files.flights, &FLIGHT_HEADER, rows)
    }
}

/// Read every data row of `path`, skipping rows `parse` rejects.
fn load_rows<T>(
    path: &Path,
    skipped: &mut usize,
    parse: impl Fn(&StringRecord) -> std::result::Result<T, String>,
) -> Result<Vec<T>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "data file not found; nothing to load");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let outcome = result
            .map_err(|err| {
                let line = err.position().map(|p| p.line()).unwrap_or_default();
                (line, err.to_string())
            })
            .and_then(|record| {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                parse(&record).map_err(|message| (line, message))
            });

        match outcome {
            Ok(row) => rows.push(row),
            Err((line, message)) => {
                let err = Error::MalformedRecord {
                    file: path.to_path_buf(),
                    line,
                    message,
                };
                warn!(error = %err, "skipping row");
                *skipped += 1;
            }
        }
    }

    Ok(rows)
}

/// Key parsed rows, keeping the first row for each key and skipping later
/// duplicates.
fn index_rows<T>(
    path: &Path,
    rows: Vec<T>,
    skipped: &mut usize,
    key: impl Fn(&T) -> String,
) -> BTreeMap<String, T> {
    let mut indexed = BTreeMap::new();
    for row in rows {
        match indexed.entry(key(&row)) {
            Entry::Vacant(slot) => {
                slot.insert(row);
            }
            Entry::Occupied(slot) => {
                warn!(path = %path.display(), key = %slot.key(), "skipping duplicate row");
                *skipped += 1;
            }
        }
    }
    indexed
}

fn save_rows<I>(path: &Path, header: &[&str], rows: I) -> Result<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = Writer::from_path(path)?;
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

fn field<'r>(
    record: &'r StringRecord,
    index: usize,
    name: &str,
) -> std::result::Result<&'r str, String> {
    record
        .get(index)
        .ok_or_else(|| format!("missing {name} column"))
}

fn number<T>(record: &StringRecord, index: usize, name: &str) -> std::result::Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = field(record, index, name)?;
    raw.parse::<T>()
        .map_err(|err| format!("invalid {name} '{raw}': {err}"))
}

fn parse_airport(record: &StringRecord) -> std::result::Result<Airport, String> {
    let airport = Airport::new(
        field(record, 0, "code")?,
        field(record, 1, "name")?,
        field(record, 2, "city")?,
        field(record, 3, "country")?,
        number(record, 4, "latitude")?,
        number(record, 5, "longitude")?,
    );
    airport.validate().map_err(|err| err.to_string())?;
    Ok(airport)
}

fn parse_aircraft(record: &StringRecord) -> std::result::Result<Aircraft, String> {
    let mut aircraft = Aircraft::new(
        field(record, 0, "id")?,
        field(record, 1, "model")?,
        number(record, 2, "capacity")?,
        number(record, 3, "cruise speed")?,
        number(record, 4, "fuel consumption")?,
    );
    aircraft.status = AircraftStatus::from_persisted(field(record, 5, "status")?);
    aircraft.validate().map_err(|err| err.to_string())?;
    Ok(aircraft)
}

fn parse_route(record: &StringRecord) -> std::result::Result<Route, String> {
    let operational = field(record, 4, "operational")?;
    let route = Route::new(
        field(record, 0, "origin")?,
        field(record, 1, "destination")?,
        number(record, 2, "distance")?,
        number(record, 3, "base cost")?,
    )
    .with_operational(operational == "1" || operational.eq_ignore_ascii_case("true"));
    route.validate().map_err(|err| err.to_string())?;
    Ok(route)
}

fn parse_flight(record: &StringRecord) -> std::result::Result<Flight, String> {
    let codes: Vec<&str> = field(record, 2, "route")?
        .split(ROUTE_CODE_SEPARATOR)
        .map(str::trim)
        .collect();

    let mut flight = Flight::new(
        field(record, 0, "flight number")?,
        field(record, 1, "aircraft id")?,
        &codes,
    );
    flight.total_distance = number(record, 3, "total distance")?;
    flight.total_cost = number(record, 4, "total cost")?;
    flight.estimated_time = number(record, 5, "estimated time")?;
    flight.departure_time = field(record, 6, "departure time")?.to_string();
    flight.status = field(record, 7, "status")?.to_string();
    flight.validate().map_err(|err| err.to_string())?;
    Ok(flight)
}
