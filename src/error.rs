//! Error types for the route planner.

use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, PlannerError>;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// Latitude or longitude outside the valid range.
    #[error("{entity} '{id}' has invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate {
        entity: &'static str,
        id: String,
        lat: f64,
        lng: f64,
    },

    /// Vehicle speed is zero, negative or not a number.
    #[error("vehicle '{vehicle_id}' has non-positive speed {speed} km/h")]
    NonPositiveSpeed { vehicle_id: String, speed: f64 },

    #[error("destination '{destination_id}' has non-positive demand {demand}")]
    NonPositiveDemand { destination_id: String, demand: f64 },

    #[error("destination '{destination_id}' has invalid time window: {reason}")]
    InvalidTimeWindow {
        destination_id: String,
        reason: String,
    },

    #[error("duplicate {entity} id '{id}'")]
    DuplicateId { entity: &'static str, id: String },

    /// Vehicle references a depot that is not part of the dataset.
    #[error("vehicle '{vehicle_id}' references unknown depot '{depot_id}'")]
    UnknownDepot { vehicle_id: String, depot_id: String },

    #[error("route {0} not found")]
    RouteNotFound(Uuid),

    #[error("route {field} must be a finite non-negative number, got {value}")]
    InvalidRouteMetric { field: &'static str, value: f64 },

    #[error("malformed planning document: {0}")]
    Json(#[from] serde_json::Error),
}
