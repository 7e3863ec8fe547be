//! Entity store for the airport network.
//!
//! [`EntityStore`] owns every airport, aircraft, route, and flight, the
//! routing [`Graph`] derived from them, and a bounded undo log. It is
//! constructed once by the caller and passed by reference to every consumer;
//! there is no global instance.
//!
//! Any mutation that can change routing (adding, updating, or deleting an
//! airport or route) is followed by a full [`EntityStore::rebuild_graph`]
//! before the call returns, so the graph always mirrors the current
//! operational routes. The store performs no internal locking; a caller that
//! shares it across threads must serialise access to the whole store.
//!
//! # Example
//!
//! ```no_run
//! use skynet_lib::{find_shortest_path, Airport, EntityStore};
//!
//! let mut store = EntityStore::new("data_files");
//! store.load_all()?;
//! store.add_airport(Airport::new("JFK", "John F Kennedy", "New York", "USA", 40.6413, -73.7781))?;
//! let result = find_shortest_path(store.graph(), "JFK", "LHR");
//! println!("found: {}", result.found);
//! # Ok::<(), skynet_lib::Error>(())
//! ```

mod persist;
mod undo;

pub use persist::LoadReport;
pub use undo::{ActionKind, UndoRecord, MAX_UNDO};

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, warn};

use crate::data_dir::DataFiles;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::haversine::haversine_km;
use crate::model::{normalize_code, Aircraft, Airport, Flight, Route};

use undo::UndoLog;

/// Minimum Jaro-Winkler similarity for an airport to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Entity and graph counts, for status displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub airports: usize,
    pub aircraft: usize,
    pub routes: usize,
    pub flights: usize,
    pub graph_nodes: usize,
    pub graph_edges: usize,
}

/// Owner of all domain entities, the derived routing graph, and the undo log.
#[derive(Debug, Clone)]
pub struct EntityStore {
    files: DataFiles,
    airports: BTreeMap<String, Airport>,
    aircraft: BTreeMap<String, Aircraft>,
    routes: BTreeMap<String, Route>,
    flights: BTreeMap<String, Flight>,
    graph: Graph,
    undo: UndoLog,
}

impl EntityStore {
    /// Create an empty store persisting to `data_dir`. Nothing is read until
    /// [`EntityStore::load_all`] is called.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            files: DataFiles::in_dir(data_dir),
            airports: BTreeMap::new(),
            aircraft: BTreeMap::new(),
            routes: BTreeMap::new(),
            flights: BTreeMap::new(),
            graph: Graph::new(),
            undo: UndoLog::default(),
        }
    }

    pub fn data_files(&self) -> &DataFiles {
        &self.files
    }

    // =========================================================================
    // Airports
    // =========================================================================

    pub fn add_airport(&mut self, airport: Airport) -> Result<()> {
        let airport = Airport {
            code: normalize_code(&airport.code),
            ..airport
        };
        airport.validate()?;
        if self.airports.contains_key(&airport.code) {
            return Err(Error::DuplicateAirport { code: airport.code });
        }

        let prior_routes = self.route_ids_touching(&airport.code);
        self.undo.push(UndoRecord::AddAirport {
            airport: airport.clone(),
            prior_routes,
        });
        self.airports.insert(airport.code.clone(), airport);
        self.rebuild_graph();
        Ok(())
    }

    pub fn update_airport(&mut self, airport: Airport) -> Result<()> {
        let airport = Airport {
            code: normalize_code(&airport.code),
            ..airport
        };
        if !self.airports.contains_key(&airport.code) {
            return Err(Error::AirportNotFound { code: airport.code });
        }
        airport.validate()?;

        self.airports.insert(airport.code.clone(), airport);
        self.rebuild_graph();
        Ok(())
    }

    /// Delete an airport and every route that starts or ends there.
    pub fn delete_airport(&mut self, code: &str) -> Result<()> {
        let code = normalize_code(code);
        let Some(airport) = self.airports.remove(&code) else {
            return Err(Error::AirportNotFound { code });
        };

        let routes = self.remove_routes_touching(&code, &[]);
        debug!(code = %code, cascaded = routes.len(), "deleted airport");
        self.undo.push(UndoRecord::DeleteAirport { airport, routes });
        self.rebuild_graph();
        Ok(())
    }

    pub fn get_airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(&normalize_code(code))
    }

    /// All airports ordered by code.
    pub fn get_all_airports(&self) -> Vec<Airport> {
        self.airports.values().cloned().collect()
    }

    /// Look up an airport, suggesting close matches when it is unknown.
    pub fn resolve_airport(&self, code: &str) -> Result<&Airport> {
        self.get_airport(code).ok_or_else(|| Error::UnknownAirport {
            code: normalize_code(code),
            suggestions: self.suggest_airports(code, 3),
        })
    }

    /// Airport codes whose code or name resemble `query`, best match first.
    pub fn suggest_airports(&self, query: &str, limit: usize) -> Vec<String> {
        let code_query = normalize_code(query);
        let name_query = query.trim().to_lowercase();

        let mut scored: Vec<(f64, &str)> = self
            .airports
            .values()
            .filter_map(|airport| {
                let by_code = strsim::jaro_winkler(&code_query, &airport.code);
                let by_name = strsim::jaro_winkler(&name_query, &airport.name.to_lowercase());
                let score = by_code.max(by_name);
                (score >= SUGGESTION_THRESHOLD).then_some((score, airport.code.as_str()))
            })
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, code)| code.to_string())
            .collect()
    }

    fn route_ids_touching(&self, code: &str) -> Vec<String> {
        self.routes
            .iter()
            .filter(|(_, route)| route.touches(code))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Remove every route touching `code` whose id is not in `keep`.
    fn remove_routes_touching(&mut self, code: &str, keep: &[String]) -> Vec<Route> {
        self.route_ids_touching(code)
            .into_iter()
            .filter(|id| !keep.contains(id))
            .filter_map(|id| self.routes.remove(&id))
            .collect()
    }

    // =========================================================================
    // Aircraft
    // =========================================================================

    pub fn add_aircraft(&mut self, aircraft: Aircraft) -> Result<()> {
        aircraft.validate()?;
        if self.aircraft.contains_key(&aircraft.id) {
            return Err(Error::DuplicateAircraft { id: aircraft.id });
        }

        self.undo.push(UndoRecord::AddAircraft(aircraft.clone()));
        self.aircraft.insert(aircraft.id.clone(), aircraft);
        Ok(())
    }

    pub fn update_aircraft(&mut self, aircraft: Aircraft) -> Result<()> {
        if !self.aircraft.contains_key(&aircraft.id) {
            return Err(Error::AircraftNotFound { id: aircraft.id });
        }
        aircraft.validate()?;

        self.aircraft.insert(aircraft.id.clone(), aircraft);
        Ok(())
    }

    pub fn delete_aircraft(&mut self, id: &str) -> Result<()> {
        let Some(aircraft) = self.aircraft.remove(id.trim()) else {
            return Err(Error::AircraftNotFound {
                id: id.trim().to_string(),
            });
        };

        self.undo.push(UndoRecord::DeleteAircraft(aircraft));
        Ok(())
    }

    pub fn get_aircraft(&self, id: &str) -> Option<&Aircraft> {
        self.aircraft.get(id.trim())
    }

    /// All aircraft ordered by id.
    pub fn get_all_aircraft(&self) -> Vec<Aircraft> {
        self.aircraft.values().cloned().collect()
    }

    // =========================================================================
    // Routes
    // =========================================================================

    /// Add a directional route. Both endpoints must be known airports.
    pub fn add_route(&mut self, route: Route) -> Result<()> {
        let route = Route::new(
            &route.origin,
            &route.destination,
            route.distance,
            route.base_cost,
        )
        .with_operational(route.operational);
        route.validate()?;
        self.resolve_airport(&route.origin)?;
        self.resolve_airport(&route.destination)?;

        let id = route.id();
        if self.routes.contains_key(&id) {
            return Err(Error::DuplicateRoute { id });
        }

        self.undo.push(UndoRecord::AddRoute(route.clone()));
        self.routes.insert(id, route);
        self.rebuild_graph();
        Ok(())
    }

    /// Create an operational route whose distance is the great-circle
    /// distance between the two airports.
    pub fn connect_airports(
        &mut self,
        origin: &str,
        destination: &str,
        base_cost: f64,
    ) -> Result<Route> {
        let distance = self.great_circle_km(origin, destination)?;
        let route = Route::new(origin, destination, distance, base_cost);
        self.add_route(route.clone())?;
        Ok(route)
    }

    /// Haversine distance between two known airports.
    pub fn great_circle_km(&self, origin: &str, destination: &str) -> Result<f64> {
        let from = self.resolve_airport(origin)?;
        let to = self.resolve_airport(destination)?;
        Ok(haversine_km(
            from.latitude,
            from.longitude,
            to.latitude,
            to.longitude,
        ))
    }

    pub fn update_route(&mut self, route: Route) -> Result<()> {
        let route = Route::new(
            &route.origin,
            &route.destination,
            route.distance,
            route.base_cost,
        )
        .with_operational(route.operational);
        let id = route.id();
        if !self.routes.contains_key(&id) {
            return Err(Error::RouteNotFound { id });
        }
        route.validate()?;
        self.resolve_airport(&route.origin)?;
        self.resolve_airport(&route.destination)?;

        self.routes.insert(id, route);
        self.rebuild_graph();
        Ok(())
    }

    /// Delete a route by its directional id (`ORIGIN-DESTINATION`).
    pub fn delete_route(&mut self, route_id: &str) -> Result<()> {
        let id = route_id.trim().to_ascii_uppercase();
        let Some(route) = self.routes.remove(&id) else {
            return Err(Error::RouteNotFound { id });
        };

        self.undo.push(UndoRecord::DeleteRoute(route));
        self.rebuild_graph();
        Ok(())
    }

    pub fn get_route(&self, route_id: &str) -> Option<&Route> {
        self.routes.get(&route_id.trim().to_ascii_uppercase())
    }

    /// All routes ordered by id.
    pub fn get_all_routes(&self) -> Vec<Route> {
        self.routes.values().cloned().collect()
    }

    // =========================================================================
    // Flights
    // =========================================================================

    pub fn add_flight(&mut self, flight: Flight) -> Result<()> {
        flight.validate()?;
        if self.flights.contains_key(&flight.flight_number) {
            return Err(Error::DuplicateFlight {
                number: flight.flight_number,
            });
        }

        self.undo.push(UndoRecord::AddFlight(flight.clone()));
        self.flights.insert(flight.flight_number.clone(), flight);
        Ok(())
    }

    pub fn update_flight(&mut self, flight: Flight) -> Result<()> {
        if !self.flights.contains_key(&flight.flight_number) {
            return Err(Error::FlightNotFound {
                number: flight.flight_number,
            });
        }
        flight.validate()?;

        self.flights.insert(flight.flight_number.clone(), flight);
        Ok(())
    }

    pub fn delete_flight(&mut self, flight_number: &str) -> Result<()> {
        let Some(flight) = self.flights.remove(flight_number.trim()) else {
            return Err(Error::FlightNotFound {
                number: flight_number.trim().to_string(),
            });
        };

        self.undo.push(UndoRecord::DeleteFlight(flight));
        Ok(())
    }

    pub fn get_flight(&self, flight_number: &str) -> Option<&Flight> {
        self.flights.get(flight_number.trim())
    }

    /// All flights ordered by flight number.
    pub fn get_all_flights(&self) -> Vec<Flight> {
        self.flights.values().cloned().collect()
    }

    // =========================================================================
    // Graph
    // =========================================================================

    /// The routing graph as of the last completed mutation.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Rebuild the graph from scratch: one node per airport, and for every
    /// operational route an edge in each direction weighted by distance.
    ///
    /// Routes are visited in id order, so when two records describe the same
    /// pair of airports the later id's distance and cost win.
    pub fn rebuild_graph(&mut self) {
        self.graph.clear();
        for code in self.airports.keys() {
            self.graph.add_node(code);
        }

        let mut skipped = 0usize;
        for (id, route) in self.routes.iter().filter(|(_, route)| route.operational) {
            if !self.airports.contains_key(&route.origin)
                || !self.airports.contains_key(&route.destination)
            {
                warn!(route = %id, "skipping route with unknown endpoint");
                skipped += 1;
                continue;
            }
            for leg in [route.clone(), route.reversed()] {
                self.graph
                    .add_edge(&leg.origin, &leg.destination, leg.distance, leg.base_cost);
            }
        }

        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            skipped,
            "graph rebuilt"
        );
    }

    // =========================================================================
    // Undo
    // =========================================================================

    /// Revert the most recent recorded mutation and return what was undone.
    ///
    /// Additions are removed again and deletions are restored from their
    /// snapshot (a deleted airport comes back with its cascaded routes).
    /// Undoing an airport add drops only the routes added to it since; route
    /// records that already named the code stay.
    pub fn undo(&mut self) -> Result<ActionKind> {
        let record = self.undo.pop().ok_or(Error::NothingToUndo)?;
        let kind = record.kind();
        let key = record.key();

        let applied = match record {
            UndoRecord::AddAirport {
                airport,
                prior_routes,
            } => {
                let removed = self.airports.remove(&airport.code).is_some();
                if removed {
                    let cascaded = self.remove_routes_touching(&airport.code, &prior_routes);
                    if !cascaded.is_empty() {
                        warn!(
                            code = %airport.code,
                            count = cascaded.len(),
                            "undo removed routes added after the airport"
                        );
                    }
                }
                removed
            }
            UndoRecord::DeleteAirport { airport, routes } => {
                let restored = restore(&mut self.airports, airport.code.clone(), airport);
                for route in routes {
                    restore(&mut self.routes, route.id(), route);
                }
                restored
            }
            UndoRecord::AddAircraft(aircraft) => self.aircraft.remove(&aircraft.id).is_some(),
            UndoRecord::DeleteAircraft(aircraft) => {
                restore(&mut self.aircraft, aircraft.id.clone(), aircraft)
            }
            UndoRecord::AddRoute(route) => self.routes.remove(&route.id()).is_some(),
            UndoRecord::DeleteRoute(route) => restore(&mut self.routes, route.id(), route),
            UndoRecord::AddFlight(flight) => self.flights.remove(&flight.flight_number).is_some(),
            UndoRecord::DeleteFlight(flight) => {
                restore(&mut self.flights, flight.flight_number.clone(), flight)
            }
        };

        if !applied {
            warn!(action = %kind, key = %key, "undo target changed since it was recorded");
        }
        if kind.affects_graph() {
            self.rebuild_graph();
        }
        debug!(action = %kind, key = %key, "undid action");
        Ok(kind)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn clear_undo_stack(&mut self) {
        self.undo.clear();
    }

    /// Recorded actions from oldest to newest.
    pub fn undo_history(&self) -> Vec<UndoRecord> {
        self.undo.iter().cloned().collect()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            airports: self.airports.len(),
            aircraft: self.aircraft.len(),
            routes: self.routes.len(),
            flights: self.flights.len(),
            graph_nodes: self.graph.node_count(),
            graph_edges: self.graph.edge_count(),
        }
    }
}

/// Insert `value` unless `key` is already taken; report whether it went in.
fn restore<T>(map: &mut BTreeMap<String, T>, key: String, value: T) -> bool {
    if map.contains_key(&key) {
        return false;
    }
    map.insert(key, value);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(code: &str, lat: f64, lon: f64) -> Airport {
        Airport::new(code, code, "", "", lat, lon)
    }

    #[test]
    fn undoing_an_airport_add_removes_only_later_routes() {
        let mut store = EntityStore::new("unused");
        store.add_airport(airport("JFK", 40.6413, -73.7781)).unwrap();
        let prior = Route::new("JFK", "LAX", 3983.0, 450.0);
        store.routes.insert(prior.id(), prior);

        store.add_airport(airport("LAX", 33.9416, -118.4085)).unwrap();
        store
            .add_route(Route::new("LAX", "JFK", 3990.0, 460.0))
            .unwrap();
        // Leave the airport record on top while its later route is still live.
        store.undo.pop();

        assert_eq!(store.undo().unwrap(), ActionKind::AddAirport);
        assert!(store.get_route("JFK-LAX").is_some());
        assert!(store.get_route("LAX-JFK").is_none());
        assert_eq!(store.graph().edge_count(), 0);
    }
}
