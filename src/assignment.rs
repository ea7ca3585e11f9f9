//! Route assignment: distance-sorted round-robin partitioning of
//! destinations across each depot's fleet.

use chrono::Utc;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::context::PlanningContext;
use crate::error::Result;
use crate::fleet::FleetIndex;
use crate::model::{Depot, Destination, Route, Vehicle};
use crate::traits::{DistanceProvider, Located};

/// Which destinations a depot's fleet is asked to serve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationScope {
    /// Every depot ranks and serves the whole destination set, so with several
    /// depots each destination lands on one route per depot.
    #[default]
    AllDestinations,
    /// Each destination is first given to its nearest depot (ties go to the
    /// depot listed first) and only that depot's fleet serves it.
    NearestDepot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentOptions {
    pub destination_scope: DestinationScope,
    /// Plan depots on the rayon pool. Output order is the same either way.
    pub parallel: bool,
}

impl Default for AssignmentOptions {
    fn default() -> Self {
        Self {
            destination_scope: DestinationScope::AllDestinations,
            parallel: true,
        }
    }
}

/// Builds the full route collection for `context`.
///
/// Routes come out grouped by depot in input order, and within a depot in
/// fleet roster order. Fails only if a vehicle with routed stops has a speed
/// that is not strictly positive.
pub fn assign_routes<M>(
    context: &PlanningContext,
    distances: &M,
    options: &AssignmentOptions,
) -> Result<Vec<Route>>
where
    M: DistanceProvider,
{
    let fleet = FleetIndex::new(&context.vehicles);
    let candidates = candidates_per_depot(context, distances, options.destination_scope);

    debug!(
        depots = context.depots.len(),
        depots_with_fleet = fleet.depot_count(),
        destinations = context.destinations.len(),
        vehicles = context.vehicles.len(),
        scope = ?options.destination_scope,
        "assigning routes"
    );

    let plan = |(depot, destinations): (&Depot, &Vec<&Destination>)| {
        plan_depot(depot, destinations, fleet.vehicles_of(&depot.id), distances)
    };

    let per_depot: Vec<Vec<Route>> = if options.parallel {
        context
            .depots
            .par_iter()
            .zip(candidates.par_iter())
            .map(plan)
            .collect::<Result<_>>()?
    } else {
        context
            .depots
            .iter()
            .zip(candidates.iter())
            .map(plan)
            .collect::<Result<_>>()?
    };

    let routes: Vec<Route> = per_depot.into_iter().flatten().collect();
    info!(routes = routes.len(), "route assignment finished");

    Ok(routes)
}

/// Destinations each depot considers, indexed like `context.depots`.
fn candidates_per_depot<'a, M>(
    context: &'a PlanningContext,
    distances: &M,
    scope: DestinationScope,
) -> Vec<Vec<&'a Destination>>
where
    M: DistanceProvider,
{
    match scope {
        DestinationScope::AllDestinations => {
            let all: Vec<&Destination> = context.destinations.iter().collect();
            vec![all; context.depots.len()]
        }
        DestinationScope::NearestDepot => {
            let mut buckets = vec![Vec::new(); context.depots.len()];
            for destination in &context.destinations {
                if let Some(index) = nearest_depot(&context.depots, destination, distances) {
                    buckets[index].push(destination);
                }
            }
            buckets
        }
    }
}

fn nearest_depot<M>(depots: &[Depot], destination: &Destination, distances: &M) -> Option<usize>
where
    M: DistanceProvider,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, depot) in depots.iter().enumerate() {
        let distance = distances.distance_km(depot.location(), destination.location());
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

fn plan_depot<M>(
    depot: &Depot,
    destinations: &[&Destination],
    fleet: &[&Vehicle],
    distances: &M,
) -> Result<Vec<Route>>
where
    M: DistanceProvider,
{
    if fleet.is_empty() {
        if destinations.is_empty() {
            debug!(depot = %depot.id, "depot has no vehicles, skipping");
        } else {
            warn!(
                depot = %depot.id,
                unrouted = destinations.len(),
                "depot has destinations but no vehicles, skipping"
            );
        }
        return Ok(Vec::new());
    }

    let ranked = rank_by_distance(depot, destinations, distances);
    let assignments = round_robin(&ranked, fleet.len());

    let mut routes = Vec::new();
    for (vehicle, stops) in fleet.iter().zip(assignments) {
        if stops.is_empty() {
            continue;
        }

        let distance = path_distance(depot, &stops, distances);
        vehicle.check_speed()?;
        let hours = distance / vehicle.speed;

        debug!(
            depot = %depot.id,
            vehicle = %vehicle.id,
            stops = stops.len(),
            distance_km = distance,
            "route built"
        );

        routes.push(Route {
            id: Uuid::new_v4(),
            depot_id: depot.id.clone(),
            vehicle_id: vehicle.id.clone(),
            destination_ids: stops.iter().map(|stop| stop.id.clone()).collect(),
            distance_km: round2(distance),
            estimated_hours: round2(hours),
            created_at: Utc::now(),
        });
    }

    Ok(routes)
}

/// Sorts destinations by distance from the depot, nearest first.
/// `sort_by` is stable, so equal distances keep their input order.
fn rank_by_distance<'a, M>(
    depot: &Depot,
    destinations: &[&'a Destination],
    distances: &M,
) -> Vec<&'a Destination>
where
    M: DistanceProvider,
{
    let mut ranked: Vec<(&'a Destination, f64)> = destinations
        .iter()
        .map(|destination| {
            let distance = distances.distance_km(depot.location(), destination.location());
            (*destination, distance)
        })
        .collect();

    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.into_iter().map(|(destination, _)| destination).collect()
}

/// Item `i` goes to bucket `i % buckets`.
fn round_robin<T: Copy>(items: &[T], buckets: usize) -> Vec<Vec<T>> {
    let mut assignments = vec![Vec::new(); buckets];
    for (i, item) in items.iter().enumerate() {
        assignments[i % buckets].push(*item);
    }
    assignments
}

/// Depot, then every stop in order, then back to the depot.
fn path_distance<M>(depot: &Depot, stops: &[&Destination], distances: &M) -> f64
where
    M: DistanceProvider,
{
    let mut total = 0.0;
    let mut previous = depot.location();
    for stop in stops {
        total += distances.distance_km(previous, stop.location());
        previous = stop.location();
    }
    total + distances.distance_km(previous, depot.location())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
