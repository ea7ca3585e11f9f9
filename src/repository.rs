//! In-memory route store.
//!
//! The collection is published as an immutable `Arc` snapshot. Writers build
//! the next snapshot under the write lock and swap it in, so a reader holding
//! a snapshot never sees a half-applied change.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{PlannerError, Result};
use crate::model::{Route, RouteDraft, RoutePatch};

#[derive(Debug, Default)]
pub struct RouteRepository {
    routes: RwLock<Arc<Vec<Route>>>,
}

impl RouteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current route collection.
    pub fn all(&self) -> Arc<Vec<Route>> {
        Arc::clone(&self.routes.read())
    }

    pub fn get(&self, id: Uuid) -> Option<Route> {
        self.routes.read().iter().find(|route| route.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.routes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.read().is_empty()
    }

    /// Discards every route and publishes `routes` in their place.
    ///
    /// Reserved for generation cycles; manual edits go through
    /// [`add`](Self::add), [`update`](Self::update) and [`delete`](Self::delete).
    pub fn replace_all(&self, routes: Vec<Route>) -> Arc<Vec<Route>> {
        let snapshot = Arc::new(routes);
        let previous = std::mem::replace(&mut *self.routes.write(), Arc::clone(&snapshot));
        info!(
            replaced = previous.len(),
            published = snapshot.len(),
            "route collection replaced"
        );
        snapshot
    }

    /// Stores a manually created route under a fresh id.
    pub fn add(&self, draft: RouteDraft) -> Result<Uuid> {
        let route = draft.into_route()?;
        let id = route.id;

        let mut routes = self.routes.write();
        Arc::make_mut(&mut routes).push(route);

        debug!(route = %id, "route added");
        Ok(id)
    }

    /// Applies `patch` to one route and returns the updated route.
    pub fn update(&self, id: Uuid, patch: RoutePatch) -> Result<Route> {
        let mut routes = self.routes.write();
        let index = position(&routes, id)?;

        let mut updated = routes[index].clone();
        patch.apply(&mut updated)?;
        Arc::make_mut(&mut routes)[index] = updated.clone();

        debug!(route = %id, "route updated");
        Ok(updated)
    }

    /// Removes one route and returns it.
    pub fn delete(&self, id: Uuid) -> Result<Route> {
        let mut routes = self.routes.write();
        let index = position(&routes, id)?;

        let removed = Arc::make_mut(&mut routes).remove(index);

        debug!(route = %id, "route deleted");
        Ok(removed)
    }
}

fn position(routes: &[Route], id: Uuid) -> Result<usize> {
    routes
        .iter()
        .position(|route| route.id == id)
        .ok_or(PlannerError::RouteNotFound(id))
}
