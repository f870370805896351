//! Discovery result types

use serde::Serialize;
use thiserror::Error;

use crate::coord::{Coordinate, Direction};
use crate::routing::RouteResult;

/// Errors that can end a discovery call.
///
/// Service failures never appear here: they only remove a direction from
/// the results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiscoveryError {
    /// The caller cancelled the discovery before it finished
    #[error("Discovery cancelled")]
    Cancelled,
    /// The engine configuration is unusable
    #[error("Invalid discovery configuration: {0}")]
    InvalidConfig(String),
}

/// A destination marker for one accepted direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flag {
    /// Unique identifier, `flag-{micros}-{direction}`
    pub id: String,
    /// Where the walking route ends
    pub position: Coordinate,
    /// Reverse-geocoded name, or a coordinate label
    pub place_name: String,
    pub direction: Direction,
    /// Walking distance rounded to two decimals
    pub distance_km: f64,
}

/// An accepted direction: its flag plus the route leading to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discovery {
    pub flag: Flag,
    pub route: RouteResult,
}

/// Per-call outcome counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoverySummary {
    /// Directions that produced a flag
    pub accepted: usize,
    /// Directions whose route fell outside the distance band
    pub rejected: usize,
    /// Directions where no route could be resolved
    pub unrouted: usize,
}

/// Rounds a distance to two decimal places.
#[inline]
pub(crate) fn round_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}
