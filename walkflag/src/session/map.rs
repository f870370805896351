//! Map session state and user actions.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::types::{Marker, Placement, RouteOverlay, SessionError};
use crate::coord::Coordinate;
use crate::discovery::{Discovery, Flag, RadialDiscoveryEngine};
use crate::geocode::Geocoder;
use crate::routing::WalkingRouter;

#[derive(Debug, Default)]
struct SessionState {
    markers: Vec<Marker>,
    flags: Vec<Flag>,
    routes: Vec<RouteOverlay>,
}

/// Holds the markers, flags and routes of one interactive session and
/// drives discovery for newly placed markers.
///
/// Only one discovery runs at a time; a second placement while one is in
/// flight fails with [`SessionError::Busy`]. Flags and routes are appended
/// as each direction completes, so readers see progress before the whole
/// discovery ends.
pub struct MapSession<R: WalkingRouter, G: Geocoder> {
    engine: Arc<RadialDiscoveryEngine<R, G>>,
    state: RwLock<SessionState>,
    discovery_slot: tokio::sync::Mutex<()>,
    current: RwLock<Option<CancellationToken>>,
    next_marker: AtomicU64,
}

impl<R: WalkingRouter, G: Geocoder> MapSession<R, G> {
    pub fn new(engine: Arc<RadialDiscoveryEngine<R, G>>) -> Self {
        Self {
            engine,
            state: RwLock::new(SessionState::default()),
            discovery_slot: tokio::sync::Mutex::new(()),
            current: RwLock::new(None),
            next_marker: AtomicU64::new(1),
        }
    }

    pub fn engine(&self) -> &RadialDiscoveryEngine<R, G> {
        &self.engine
    }

    /// Places a marker at `position` and discovers flags around it.
    ///
    /// The marker is named after its coordinates unless `name` is given.
    pub async fn add_marker(
        &self,
        position: Coordinate,
        name: Option<String>,
    ) -> Result<Placement, SessionError> {
        self.add_marker_with(position, name, |_| {}).await
    }

    /// Like [`add_marker`](Self::add_marker), calling `on_discovery` as soon
    /// as each flag has been recorded.
    pub async fn add_marker_with<F>(
        &self,
        position: Coordinate,
        name: Option<String>,
        mut on_discovery: F,
    ) -> Result<Placement, SessionError>
    where
        F: FnMut(&Discovery) + Send,
    {
        let _slot = self
            .discovery_slot
            .try_lock()
            .map_err(|_| SessionError::Busy)?;

        let marker = Marker {
            id: format!("marker-{}", self.next_marker.fetch_add(1, Ordering::Relaxed)),
            position,
            name: name.unwrap_or_else(|| Marker::default_name(position)),
        };
        info!(id = %marker.id, position = %position, name = %marker.name, "Marker placed");
        self.write().markers.push(marker.clone());

        let cancel = CancellationToken::new();
        *self.current_write() = Some(cancel.clone());

        let mut discoveries = Vec::new();
        let result = self
            .engine
            .discover_with(position, &cancel, |discovery: Discovery| {
                let mut state = self.write();
                state.flags.push(discovery.flag.clone());
                state.routes.push(RouteOverlay::from_discovery(&discovery));
                drop(state);
                on_discovery(&discovery);
                discoveries.push(discovery);
            })
            .await;

        *self.current_write() = None;
        result?;

        Ok(Placement {
            marker,
            discoveries,
        })
    }

    /// Looks up `query` and places a marker at the best match.
    pub async fn search_and_add(&self, query: &str) -> Result<Placement, SessionError> {
        self.search_and_add_with(query, |_| {}).await
    }

    /// Like [`search_and_add`](Self::search_and_add), reporting each flag as
    /// it is recorded.
    pub async fn search_and_add_with<F>(
        &self,
        query: &str,
        on_discovery: F,
    ) -> Result<Placement, SessionError>
    where
        F: FnMut(&Discovery) + Send,
    {
        let query = query.trim();
        if query.is_empty() {
            return Err(SessionError::EmptyQuery);
        }
        if self.is_busy() {
            return Err(SessionError::Busy);
        }

        let place = self
            .engine
            .place_resolver()
            .geocoder()
            .search(query)
            .await?
            .ok_or_else(|| SessionError::NoSearchResult(query.to_string()))?;

        debug!(query, position = %place.position, "Search matched");
        self.add_marker_with(place.position, Some(place.display_name), on_discovery)
            .await
    }

    /// Cancels the running discovery, if any.
    ///
    /// Returns true when there was one to cancel.
    pub fn cancel_discovery(&self) -> bool {
        match self.current.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Returns true while a discovery is running.
    pub fn is_busy(&self) -> bool {
        self.discovery_slot.try_lock().is_err()
    }

    /// Removes a marker. Flags found for it stay on the map.
    ///
    /// Returns false when no marker has that id.
    pub fn delete_marker(&self, id: &str) -> bool {
        let mut state = self.write();
        let before = state.markers.len();
        state.markers.retain(|m| m.id != id);
        before != state.markers.len()
    }

    /// Removes every marker, flag and route.
    pub fn clear_all(&self) {
        let mut state = self.write();
        state.markers.clear();
        state.flags.clear();
        state.routes.clear();
        info!("Session cleared");
    }

    pub fn markers(&self) -> Vec<Marker> {
        self.read().markers.clone()
    }

    pub fn flags(&self) -> Vec<Flag> {
        self.read().flags.clone()
    }

    pub fn routes(&self) -> Vec<RouteOverlay> {
        self.read().routes.clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn current_write(&self) -> RwLockWriteGuard<'_, Option<CancellationToken>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}
