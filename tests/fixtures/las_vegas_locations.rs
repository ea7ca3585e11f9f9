//! Real Las Vegas / Henderson locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap.

use depot_route_planner::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

// ============================================================================
// Warehouse sites (one per area, far enough apart to own distinct stores)
// ============================================================================

pub const WAREHOUSES: &[Location] = &[
    Location::new("Strip Distribution Center", 36.1126, -115.1767),
    Location::new("Henderson Depot", 36.0308, -115.0825),
    Location::new("North Yard", 36.1450055, -115.0482587),
];

// ============================================================================
// Stores near the Strip
// ============================================================================

pub const STRIP_STORES: &[Location] = &[
    Location::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Location::new("Sinatra", 36.1300035, -115.1654850),
    Location::new("Public House", 36.1219193, -115.1689317),
    Location::new("Brooklyn Bowl", 36.1175388, -115.1695094),
    Location::new("Gordon Ramsay BurGR", 36.1107195, -115.1720818),
    Location::new("Spago by Wolfgang Puck", 36.1139368, -115.1741462),
    Location::new("Otto Pizzeria", 36.1231219, -115.1684514),
    Location::new("Rao's", 36.1163982, -115.1763053),
];

// ============================================================================
// Stores in Henderson
// ============================================================================

pub const HENDERSON_STORES: &[Location] = &[
    Location::new("I Love Sushi Henderson", 35.9916660, -115.1028343),
    Location::new("Islander's Grill", 36.0335058, -114.9856162),
    Location::new("Naga", 36.0137634, -114.9928676),
    Location::new("RibCage", 35.9949754, -115.0999810),
    Location::new("Sunset Station Area", 36.0614, -115.0631),
];

// ============================================================================
// Stores in North Las Vegas
// ============================================================================

pub const NORTH_STORES: &[Location] = &[
    Location::new("Roberto's Taco Shop", 36.1452953, -115.0478347),
    Location::new("Monarca Mexican Restaurant", 36.1440711, -115.0634197),
    Location::new("Pizza Hut North", 36.1443292, -115.0624966),
    Location::new("La Costa del Sol", 36.1470458, -115.0644345),
];
