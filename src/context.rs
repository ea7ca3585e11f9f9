//! Owned planning input and the JSON documents exchanged with the host
//! application.
//!
//! Input documents use the warehouse/store/truck vocabulary:
//!
//! ```json
//! {
//!   "warehouses": [{ "id": "w1", "name": "North", "location": { "lat": 0.0, "lng": 0.0 } }],
//!   "stores": [{ "id": "s1", "location": { "lat": 0.0, "lng": 1.0 }, "demand": 10 }],
//!   "trucks": [{ "id": "t1", "speed": 60, "warehouseId": "w1" }]
//! }
//! ```

use std::collections::HashSet;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::model::{Depot, Destination, Route, Vehicle};

/// Snapshot of the entities a generation cycle plans over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanningContext {
    #[serde(default, rename = "warehouses")]
    pub depots: Vec<Depot>,
    #[serde(default, rename = "stores")]
    pub destinations: Vec<Destination>,
    #[serde(default, rename = "trucks")]
    pub vehicles: Vec<Vehicle>,
}

impl PlanningContext {
    pub fn new(depots: Vec<Depot>, destinations: Vec<Destination>, vehicles: Vec<Vehicle>) -> Self {
        Self {
            depots,
            destinations,
            vehicles,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Boundary validation for data coming from the management side.
    ///
    /// Route generation assumes a context that passes this check.
    pub fn validate(&self) -> Result<()> {
        let mut depot_ids = HashSet::with_capacity(self.depots.len());
        for depot in &self.depots {
            if !depot_ids.insert(depot.id.as_str()) {
                return Err(duplicate("depot", &depot.id));
            }
            depot.validate()?;
        }

        let mut destination_ids = HashSet::with_capacity(self.destinations.len());
        for destination in &self.destinations {
            if !destination_ids.insert(destination.id.as_str()) {
                return Err(duplicate("destination", &destination.id));
            }
            destination.validate()?;
        }

        let mut vehicle_ids = HashSet::with_capacity(self.vehicles.len());
        for vehicle in &self.vehicles {
            if !vehicle_ids.insert(vehicle.id.as_str()) {
                return Err(duplicate("vehicle", &vehicle.id));
            }
            vehicle.check_speed()?;
            if !depot_ids.contains(vehicle.depot_id.as_str()) {
                return Err(PlannerError::UnknownDepot {
                    vehicle_id: vehicle.id.clone(),
                    depot_id: vehicle.depot_id.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn depot(&self, id: &str) -> Option<&Depot> {
        self.depots.iter().find(|depot| depot.id == id)
    }

    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|destination| destination.id == id)
    }

    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }
}

fn duplicate(entity: &'static str, id: &str) -> PlannerError {
    PlannerError::DuplicateId {
        entity,
        id: id.to_string(),
    }
}

/// Output document: `{ "routes": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutesDocument {
    pub routes: Vec<Route>,
}

impl RoutesDocument {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
