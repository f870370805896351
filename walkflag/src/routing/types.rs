//! Routing types and traits

use std::future::Future;

use serde::Serialize;
use thiserror::Error;

use crate::coord::Coordinate;
use crate::http::HttpError;

/// Errors that can occur while resolving a walking route.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// Transport failure or non-success HTTP status
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    /// Body could not be parsed or violates the route invariants
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// The service answered with an error code
    #[error("Routing service returned {code}: {message}")]
    Service { code: String, message: String },
    /// The service answered successfully but found no route
    #[error("No route found")]
    NoRoute,
}

/// A resolved walking route.
///
/// The polyline runs from origin to destination and always holds at least
/// two points; the distance is the service's reported walking distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    polyline: Vec<Coordinate>,
    distance_km: f64,
}

impl RouteResult {
    /// Creates a route, checking the polyline length and distance.
    pub fn new(polyline: Vec<Coordinate>, distance_km: f64) -> Result<Self, RoutingError> {
        if polyline.len() < 2 {
            return Err(RoutingError::InvalidResponse(format!(
                "route geometry has {} point(s), need at least 2",
                polyline.len()
            )));
        }
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(RoutingError::InvalidResponse(format!(
                "route distance {} km is not positive",
                distance_km
            )));
        }

        Ok(Self {
            polyline,
            distance_km,
        })
    }

    /// Route geometry in origin-to-destination order.
    pub fn polyline(&self) -> &[Coordinate] {
        &self.polyline
    }

    /// Walking distance in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// First point of the route.
    pub fn start(&self) -> Coordinate {
        self.polyline[0]
    }

    /// Last point of the route, where the walker actually arrives.
    pub fn endpoint(&self) -> Coordinate {
        self.polyline[self.polyline.len() - 1]
    }
}

/// Trait for walking-directions services.
pub trait WalkingRouter: Send + Sync {
    /// Requests a walking route from `start` to `end`.
    ///
    /// Implementations make a single attempt; retry policy belongs to the
    /// caller.
    fn route(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> impl Future<Output = Result<RouteResult, RoutingError>> + Send;

    /// Returns the service name for logging.
    fn name(&self) -> &str;
}
