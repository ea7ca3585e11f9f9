//! Planning entities: depots, destinations, vehicles and the routes built
//! from them.
//!
//! Field names serialize to the warehouse/store/truck vocabulary used by the
//! planning documents (`warehouseId`, `stores`, `estimatedTime`, ...).

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PlannerError, Result};

/// Wall-clock format accepted for delivery windows.
const TIME_WINDOW_FORMAT: &str = "%H:%M";

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A warehouse. Routes start and end here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Depot {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub location: Coordinate,
    /// Storage capacity. Informational only.
    #[serde(default)]
    pub capacity: f64,
    #[serde(default)]
    pub address: String,
}

impl Depot {
    pub fn validate(&self) -> Result<()> {
        check_coordinate("depot", &self.id, self.location)
    }
}

/// Delivery window as `HH:MM` wall-clock strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

impl TimeWindow {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parses both bounds. Fails when either bound is malformed or the window
    /// ends before it starts.
    pub fn parse(&self) -> std::result::Result<(NaiveTime, NaiveTime), String> {
        let start = NaiveTime::parse_from_str(&self.start, TIME_WINDOW_FORMAT)
            .map_err(|err| format!("start '{}': {err}", self.start))?;
        let end = NaiveTime::parse_from_str(&self.end, TIME_WINDOW_FORMAT)
            .map_err(|err| format!("end '{}': {err}", self.end))?;

        if end < start {
            return Err(format!("end {} is before start {}", self.end, self.start));
        }

        Ok((start, end))
    }
}

/// A store that needs a delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub location: Coordinate,
    pub demand: f64,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window: Option<TimeWindow>,
}

impl Destination {
    pub fn validate(&self) -> Result<()> {
        check_coordinate("destination", &self.id, self.location)?;

        if self.demand.is_nan() || self.demand <= 0.0 {
            return Err(PlannerError::NonPositiveDemand {
                destination_id: self.id.clone(),
                demand: self.demand,
            });
        }

        if let Some(window) = &self.time_window {
            window
                .parse()
                .map_err(|reason| PlannerError::InvalidTimeWindow {
                    destination_id: self.id.clone(),
                    reason,
                })?;
        }

        Ok(())
    }
}

/// A truck owned by exactly one depot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub capacity: f64,
    /// Average speed in km/h.
    pub speed: f64,
    #[serde(rename = "warehouseId")]
    pub depot_id: String,
}

impl Vehicle {
    /// Checks the speed precondition of duration estimates.
    pub fn check_speed(&self) -> Result<()> {
        if self.speed > 0.0 && self.speed.is_finite() {
            Ok(())
        } else {
            Err(PlannerError::NonPositiveSpeed {
                vehicle_id: self.id.clone(),
                speed: self.speed,
            })
        }
    }
}

/// One vehicle's visiting sequence from its depot and back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    #[serde(rename = "warehouseId")]
    pub depot_id: String,
    #[serde(rename = "truckId")]
    pub vehicle_id: String,
    #[serde(rename = "stores")]
    pub destination_ids: Vec<String>,
    /// Total path length in km.
    #[serde(rename = "distance")]
    pub distance_km: f64,
    #[serde(rename = "estimatedTime")]
    pub estimated_hours: f64,
    #[serde(rename = "created")]
    pub created_at: DateTime<Utc>,
}

/// Fields of a manually created route. The repository assigns the id and
/// creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDraft {
    #[serde(rename = "warehouseId")]
    pub depot_id: String,
    #[serde(rename = "truckId")]
    pub vehicle_id: String,
    #[serde(rename = "stores")]
    pub destination_ids: Vec<String>,
    #[serde(rename = "distance")]
    pub distance_km: f64,
    #[serde(rename = "estimatedTime")]
    pub estimated_hours: f64,
}

impl RouteDraft {
    pub(crate) fn into_route(self) -> Result<Route> {
        check_metric("distance", self.distance_km)?;
        check_metric("estimatedTime", self.estimated_hours)?;

        Ok(Route {
            id: Uuid::new_v4(),
            depot_id: self.depot_id,
            vehicle_id: self.vehicle_id,
            destination_ids: self.destination_ids,
            distance_km: self.distance_km,
            estimated_hours: self.estimated_hours,
            created_at: Utc::now(),
        })
    }
}

/// Partial route update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePatch {
    #[serde(default, rename = "warehouseId")]
    pub depot_id: Option<String>,
    #[serde(default, rename = "truckId")]
    pub vehicle_id: Option<String>,
    #[serde(default, rename = "stores")]
    pub destination_ids: Option<Vec<String>>,
    #[serde(default, rename = "distance")]
    pub distance_km: Option<f64>,
    #[serde(default, rename = "estimatedTime")]
    pub estimated_hours: Option<f64>,
}

impl RoutePatch {
    /// Applies the patch to `route`. Nothing is written if a metric is invalid.
    pub(crate) fn apply(self, route: &mut Route) -> Result<()> {
        if let Some(distance) = self.distance_km {
            check_metric("distance", distance)?;
        }
        if let Some(hours) = self.estimated_hours {
            check_metric("estimatedTime", hours)?;
        }

        if let Some(depot_id) = self.depot_id {
            route.depot_id = depot_id;
        }
        if let Some(vehicle_id) = self.vehicle_id {
            route.vehicle_id = vehicle_id;
        }
        if let Some(destination_ids) = self.destination_ids {
            route.destination_ids = destination_ids;
        }
        if let Some(distance) = self.distance_km {
            route.distance_km = distance;
        }
        if let Some(hours) = self.estimated_hours {
            route.estimated_hours = hours;
        }

        Ok(())
    }
}

fn check_coordinate(entity: &'static str, id: &str, location: Coordinate) -> Result<()> {
    if location.is_valid() {
        Ok(())
    } else {
        Err(PlannerError::InvalidCoordinate {
            entity,
            id: id.to_string(),
            lat: location.lat,
            lng: location.lng,
        })
    }
}

fn check_metric(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PlannerError::InvalidRouteMetric { field, value })
    }
}
