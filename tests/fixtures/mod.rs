//! Test fixtures for depot-route-planner.
//!
//! Provides:
//! - Real Las Vegas / Henderson locations (from OpenStreetMap)
//! - Builders for depots, stores and trucks with sensible defaults

#![allow(dead_code)]

pub mod las_vegas_locations;

pub use las_vegas_locations::*;

use depot_route_planner::{Coordinate, Depot, Destination, PlanningContext, Vehicle};

pub fn depot(id: &str, lat: f64, lng: f64) -> Depot {
    Depot {
        id: id.to_string(),
        name: format!("Warehouse {id}"),
        location: Coordinate::new(lat, lng),
        capacity: 1000.0,
        address: String::new(),
    }
}

pub fn depot_at(id: &str, location: &Location) -> Depot {
    Depot {
        name: location.name.to_string(),
        ..depot(id, location.lat, location.lng)
    }
}

pub fn store(id: &str, lat: f64, lng: f64) -> Destination {
    Destination {
        id: id.to_string(),
        name: format!("Store {id}"),
        location: Coordinate::new(lat, lng),
        demand: 10.0,
        address: String::new(),
        time_window: None,
    }
}

pub fn store_at(id: &str, location: &Location) -> Destination {
    Destination {
        name: location.name.to_string(),
        ..store(id, location.lat, location.lng)
    }
}

pub fn truck(id: &str, depot_id: &str, speed: f64) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        name: format!("Truck {id}"),
        capacity: 100.0,
        speed,
        depot_id: depot_id.to_string(),
    }
}

/// One depot at (0, 0) with two 60 km/h trucks and three stores along the
/// equator at 1, 2 and 3 degrees east.
pub fn equator_context() -> PlanningContext {
    PlanningContext::new(
        vec![depot("w1", 0.0, 0.0)],
        vec![
            store("d3", 0.0, 3.0),
            store("d1", 0.0, 1.0),
            store("d2", 0.0, 2.0),
        ],
        vec![truck("v1", "w1", 60.0), truck("v2", "w1", 60.0)],
    )
}

/// Three Las Vegas area warehouses, each with its own trucks, and stores
/// spread across all three areas.
pub fn las_vegas_context() -> PlanningContext {
    let depots = WAREHOUSES
        .iter()
        .enumerate()
        .map(|(i, location)| depot_at(&format!("w{}", i + 1), location))
        .collect();

    let destinations = STRIP_STORES
        .iter()
        .chain(HENDERSON_STORES)
        .chain(NORTH_STORES)
        .enumerate()
        .map(|(i, location)| store_at(&format!("s{}", i + 1), location))
        .collect();

    let vehicles = vec![
        truck("strip-1", "w1", 35.0),
        truck("strip-2", "w1", 35.0),
        truck("strip-3", "w1", 35.0),
        truck("hend-1", "w2", 50.0),
        truck("hend-2", "w2", 50.0),
        truck("north-1", "w3", 45.0),
    ];

    PlanningContext::new(depots, destinations, vehicles)
}
