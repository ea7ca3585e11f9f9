//! Generation cycle: runs route assignment and publishes the result.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::assignment::{AssignmentOptions, assign_routes};
use crate::context::PlanningContext;
use crate::error::Result;
use crate::haversine::Haversine;
use crate::model::Route;
use crate::repository::RouteRepository;
use crate::traits::DistanceProvider;

/// Owns the route repository and regenerates it on demand.
///
/// Only one generation runs at a time. The new collection is computed before
/// the repository is touched and then published in a single swap; if
/// generation fails the previous routes stay in place.
#[derive(Debug)]
pub struct RoutePlanner<M = Haversine> {
    distances: M,
    options: AssignmentOptions,
    repository: RouteRepository,
    generation: Mutex<()>,
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self::new(AssignmentOptions::default())
    }
}

impl RoutePlanner {
    pub fn new(options: AssignmentOptions) -> Self {
        Self::with_distances(Haversine, options)
    }
}

impl<M: DistanceProvider> RoutePlanner<M> {
    pub fn with_distances(distances: M, options: AssignmentOptions) -> Self {
        Self {
            distances,
            options,
            repository: RouteRepository::new(),
            generation: Mutex::new(()),
        }
    }

    pub fn options(&self) -> &AssignmentOptions {
        &self.options
    }

    /// Route store for reads and manual corrections.
    pub fn repository(&self) -> &RouteRepository {
        &self.repository
    }

    /// Rebuilds every route from `context` and replaces the stored collection.
    pub fn generate(&self, context: &PlanningContext) -> Result<Arc<Vec<Route>>> {
        let _generation = self.generation.lock();

        let routes = assign_routes(context, &self.distances, &self.options).inspect_err(|err| {
            warn!(error = %err, "route generation failed, keeping previous routes");
        })?;

        let snapshot = self.repository.replace_all(routes);
        info!(routes = snapshot.len(), "route generation published");
        Ok(snapshot)
    }
}
