//! Session-owned display types

use serde::Serialize;
use thiserror::Error;

use crate::coord::{Coordinate, Direction};
use crate::discovery::{Discovery, DiscoveryError, Flag};
use crate::geocode::GeocodeError;
use crate::routing::RouteResult;

/// Errors returned by [`super::MapSession`] operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Another discovery is still running
    #[error("A discovery is already in progress")]
    Busy,
    /// Search was asked for an empty query
    #[error("Search query is empty")]
    EmptyQuery,
    /// The geocoder had no match for the query
    #[error("No results found for '{0}'")]
    NoSearchResult(String),
    /// The forward search request failed
    #[error("Search failed: {0}")]
    Search(#[from] GeocodeError),
    /// The discovery ended early
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}

/// A user-placed origin point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: String,
    pub position: Coordinate,
    pub name: String,
}

impl Marker {
    /// Default name for a marker placed by coordinate.
    pub fn default_name(position: Coordinate) -> String {
        format!("Marker {:.4}, {:.4}", position.lat(), position.lon())
    }
}

/// A walking route kept for display alongside its flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOverlay {
    /// `route-{micros}-{direction}`, sharing the flag's suffix
    pub id: String,
    pub flag_id: String,
    pub direction: Direction,
    pub route: RouteResult,
}

impl RouteOverlay {
    pub(super) fn from_discovery(discovery: &Discovery) -> Self {
        Self {
            id: route_id(&discovery.flag),
            flag_id: discovery.flag.id.clone(),
            direction: discovery.flag.direction,
            route: discovery.route.clone(),
        }
    }
}

fn route_id(flag: &Flag) -> String {
    match flag.id.strip_prefix("flag-") {
        Some(suffix) => format!("route-{}", suffix),
        None => format!("route-{}", flag.id),
    }
}

/// Result of placing a marker: the marker and what discovery found for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub marker: Marker,
    pub discoveries: Vec<Discovery>,
}
