//! depot-route-planner
//!
//! Splits delivery destinations across the trucks of each depot and estimates
//! the length and duration of every truck's round trip.

pub mod assignment;
pub mod context;
pub mod error;
pub mod fleet;
pub mod haversine;
pub mod model;
pub mod planner;
pub mod repository;
pub mod traits;

pub use assignment::{AssignmentOptions, DestinationScope, assign_routes};
pub use context::{PlanningContext, RoutesDocument};
pub use error::{PlannerError, Result};
pub use model::{Coordinate, Depot, Destination, Route, RouteDraft, RoutePatch, TimeWindow, Vehicle};
pub use planner::RoutePlanner;
pub use repository::RouteRepository;
