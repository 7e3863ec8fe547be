//! Skynet library entry points.
//!
//! This crate owns the airport network: the entity store (airports, aircraft,
//! routes, flights) with flat-file persistence and a bounded undo log, the
//! routing graph derived from operational routes, and the pathfinding engine
//! that runs over it. Higher-level consumers (the CLI, any UI) should only
//! depend on the items exported here instead of reimplementing behavior.
//!

pub mod booking;
pub mod data_dir;
pub mod error;
pub mod graph;
pub mod haversine;
pub mod model;
pub mod output;
pub mod path;
pub mod routing;
pub mod scheduling;
pub mod store;
pub mod weather;

pub use booking::{default_departure_time, FlightQuote, FUEL_COST_PER_LITRE};
pub use data_dir::{default_data_dir, resolve_data_dir, DataFiles};
pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use model::{Aircraft, AircraftStatus, Airport, Flight, Route};
pub use output::{RouteLeg, RouteRenderMode, RouteStep, RouteSummary};
pub use path::{find_shortest_path, PathFailure, PathResult};
pub use routing::{
    optimize, pareto_frontier, Criteria, FrontierCandidate, Objective, DEFAULT_MAX_STOPS,
    FRONTIER_MAX_STOPS,
};
pub use scheduling::{can_schedule, detect_conflicts, time_slots, TimeSlot};
pub use store::{ActionKind, EntityStore, LoadReport, StoreStats, UndoRecord, MAX_UNDO};
pub use weather::{WeatherCondition, WeatherImpact};
