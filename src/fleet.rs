//! Depot to vehicle lookup.

use std::collections::HashMap;

use crate::model::Vehicle;

/// Read-only index of the vehicles owned by each depot.
///
/// Vehicles keep the order they had in the input collection.
#[derive(Debug, Default)]
pub struct FleetIndex<'a> {
    by_depot: HashMap<&'a str, Vec<&'a Vehicle>>,
}

impl<'a> FleetIndex<'a> {
    pub fn new(vehicles: &'a [Vehicle]) -> Self {
        let mut by_depot: HashMap<&'a str, Vec<&'a Vehicle>> = HashMap::new();
        for vehicle in vehicles {
            by_depot
                .entry(vehicle.depot_id.as_str())
                .or_default()
                .push(vehicle);
        }
        Self { by_depot }
    }

    /// Vehicles anchored at `depot_id`. Empty for unknown depots.
    pub fn vehicles_of(&self, depot_id: &str) -> &[&'a Vehicle] {
        self.by_depot
            .get(depot_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of depots with at least one vehicle.
    pub fn depot_count(&self) -> usize {
        self.by_depot.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truck(id: &str, depot_id: &str) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            name: id.to_uppercase(),
            capacity: 10.0,
            speed: 50.0,
            depot_id: depot_id.to_string(),
        }
    }

    #[test]
    fn test_vehicles_keep_input_order() {
        let vehicles = vec![
            truck("t3", "w1"),
            truck("t1", "w2"),
            truck("t2", "w1"),
            truck("t0", "w1"),
        ];
        let index = FleetIndex::new(&vehicles);

        let ids: Vec<&str> = index.vehicles_of("w1").iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["t3", "t2", "t0"]);
        assert_eq!(index.vehicles_of("w2").len(), 1);
        assert_eq!(index.depot_count(), 2);
    }

    #[test]
    fn test_unknown_depot_is_empty() {
        let vehicles = vec![truck("t1", "w1")];
        let index = FleetIndex::new(&vehicles);
        assert!(index.vehicles_of("missing").is_empty());
    }

    #[test]
    fn test_empty_fleet() {
        let index = FleetIndex::new(&[]);
        assert_eq!(index.depot_count(), 0);
        assert!(index.vehicles_of("w1").is_empty());
    }
}
