//! Core traits for the route planner.
//!
//! The assignment engine only needs point-to-point distances and the location
//! of the things it routes between. Alternative distance sources (road
//! networks, precomputed tables) can implement [`DistanceProvider`].

use crate::model::{Coordinate, Depot, Destination};

/// Provides the distance between two coordinates.
pub trait DistanceProvider: Sync {
    /// Distance in kilometers. Must be non-negative.
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64;
}

/// Something with a fixed position.
pub trait Located {
    fn location(&self) -> Coordinate;
}

impl Located for Depot {
    fn location(&self) -> Coordinate {
        self.location
    }
}

impl Located for Destination {
    fn location(&self) -> Coordinate {
        self.location
    }
}
