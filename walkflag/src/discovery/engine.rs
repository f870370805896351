//! Radial walking-distance discovery engine.
//!
//! For one origin the engine visits North, South, East and West in that
//! order. Each direction gets a straight-line seed target, a walking route
//! from the router, a distance check, and (if accepted) a place name for the
//! route's endpoint.
//!
//! # Pacing
//!
//! Directions are processed strictly one after another, and every direction
//! is followed by a fixed pause whatever its outcome. Routing and geocoding
//! run against shared public endpoints, so this caps the outbound request
//! rate of a single call. Overlapping calls are the caller's business; see
//! [`crate::session::MapSession`] for a caller that refuses them.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::config::DiscoveryConfig;
use super::types::{round_km, Discovery, DiscoveryError, DiscoverySummary, Flag};
use crate::coord::{offset_target, Coordinate, Direction};
use crate::geocode::{Geocoder, PlaceResolver};
use crate::routing::{RouteResolver, WalkingRouter};

/// What happened in a single direction.
enum DirectionOutcome {
    Accepted(Discovery),
    Rejected,
    Unrouted,
}

/// Orchestrates routing and geocoding across the four cardinal directions.
///
/// Holds no state between calls.
pub struct RadialDiscoveryEngine<R: WalkingRouter, G: Geocoder> {
    routes: RouteResolver<R>,
    places: PlaceResolver<G>,
    config: DiscoveryConfig,
}

impl<R: WalkingRouter, G: Geocoder> RadialDiscoveryEngine<R, G> {
    /// Creates an engine, rejecting an invalid configuration.
    pub fn new(router: R, geocoder: G, config: DiscoveryConfig) -> Result<Self, DiscoveryError> {
        config.validate()?;

        Ok(Self {
            routes: RouteResolver::new(router),
            places: PlaceResolver::new(geocoder),
            config,
        })
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    pub fn route_resolver(&self) -> &RouteResolver<R> {
        &self.routes
    }

    pub fn place_resolver(&self) -> &PlaceResolver<G> {
        &self.places
    }

    /// Runs a full discovery and returns the accepted directions in
    /// North, South, East, West order.
    ///
    /// Directions without an acceptable route are simply missing. Takes
    /// several seconds because of pacing; drop the future to abandon it.
    pub async fn discover(&self, origin: Coordinate) -> Vec<Discovery> {
        let mut results = Vec::with_capacity(Direction::ALL.len());
        let never = CancellationToken::new();

        // Only cancellation can fail, and `never` is never cancelled.
        let _ = self
            .discover_with(origin, &never, |discovery| results.push(discovery))
            .await;

        results
    }

    /// Runs a discovery, handing each accepted direction to `on_discovery`
    /// as soon as it completes.
    ///
    /// Results arrive in North, South, East, West order. When `cancel`
    /// fires, the call stops at its next external request or pause and
    /// returns [`DiscoveryError::Cancelled`]; results already handed over
    /// stay with the caller.
    pub async fn discover_with<F>(
        &self,
        origin: Coordinate,
        cancel: &CancellationToken,
        mut on_discovery: F,
    ) -> Result<DiscoverySummary, DiscoveryError>
    where
        F: FnMut(Discovery) + Send,
    {
        let stamp = chrono::Utc::now().timestamp_micros();
        let mut summary = DiscoverySummary::default();

        info!(
            origin = %origin,
            target_km = self.config.target_km,
            min_km = self.config.min_km,
            max_km = self.config.max_km,
            "Starting radial discovery"
        );

        for direction in Direction::ALL {
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(self.cancelled(&summary)),
                outcome = self.resolve_direction(origin, direction, stamp) => outcome,
            };

            match outcome {
                DirectionOutcome::Accepted(discovery) => {
                    summary.accepted += 1;
                    on_discovery(discovery);
                }
                DirectionOutcome::Rejected => summary.rejected += 1,
                DirectionOutcome::Unrouted => summary.unrouted += 1,
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(self.cancelled(&summary)),
                _ = tokio::time::sleep(self.config.pace_interval) => {}
            }
        }

        info!(
            origin = %origin,
            accepted = summary.accepted,
            rejected = summary.rejected,
            unrouted = summary.unrouted,
            "Radial discovery complete"
        );

        Ok(summary)
    }

    /// Seeds, routes, filters and names one direction.
    async fn resolve_direction(
        &self,
        origin: Coordinate,
        direction: Direction,
        stamp: i64,
    ) -> DirectionOutcome {
        let target = offset_target(origin, direction, self.config.target_km);

        let Some(route) = self.routes.find_walking_route(origin, target).await else {
            debug!(%direction, "No walking route, skipping direction");
            return DirectionOutcome::Unrouted;
        };

        if !self.config.accepts(route.distance_km()) {
            debug!(
                %direction,
                distance_km = route.distance_km(),
                "Walking distance outside accepted band"
            );
            return DirectionOutcome::Rejected;
        }

        let endpoint = route.endpoint();
        let place_name = self.places.resolve_place_name(endpoint).await;

        debug!(
            %direction,
            distance_km = route.distance_km(),
            place = %place_name,
            "Direction accepted"
        );

        DirectionOutcome::Accepted(Discovery {
            flag: Flag {
                id: format!("flag-{}-{}", stamp, direction),
                position: endpoint,
                place_name,
                direction,
                distance_km: round_km(route.distance_km()),
            },
            route,
        })
    }

    fn cancelled(&self, summary: &DiscoverySummary) -> DiscoveryError {
        info!(
            accepted = summary.accepted,
            "Radial discovery cancelled"
        );
        DiscoveryError::Cancelled
    }
}

impl<R, G> RadialDiscoveryEngine<R, G>
where
    R: WalkingRouter + 'static,
    G: Geocoder + 'static,
{
    /// Runs a discovery on a background task.
    ///
    /// Accepted directions are sent on the returned channel in order; the
    /// channel closes when the task ends. The join handle yields the summary
    /// or [`DiscoveryError::Cancelled`].
    pub fn spawn_discovery(
        self: &Arc<Self>,
        origin: Coordinate,
        cancel: CancellationToken,
    ) -> (
        mpsc::Receiver<Discovery>,
        JoinHandle<Result<DiscoverySummary, DiscoveryError>>,
    ) {
        // One slot per direction, so sends never wait on a slow consumer.
        let (tx, rx) = mpsc::channel(Direction::ALL.len());
        let engine = Arc::clone(self);

        let handle = tokio::spawn(async move {
            engine
                .discover_with(origin, &cancel, |discovery| {
                    if tx.try_send(discovery).is_err() {
                        debug!("Discovery receiver dropped");
                    }
                })
                .await
        });

        (rx, handle)
    }
}
