//! Geocoding types and traits

use std::future::Future;

use serde::Serialize;
use thiserror::Error;

use crate::coord::Coordinate;
use crate::http::HttpError;

/// Errors that can occur during geocoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodeError {
    /// Transport failure or non-success HTTP status
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    /// The request URL could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// Body could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// The service has no name for this position
    #[error("No place found: {0}")]
    NotFound(String),
}

/// A forward-search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub position: Coordinate,
    pub display_name: String,
}

/// Trait for geocoding services.
pub trait Geocoder: Send + Sync {
    /// Looks up a human-readable name for a position.
    fn reverse(
        &self,
        position: Coordinate,
    ) -> impl Future<Output = Result<String, GeocodeError>> + Send;

    /// Finds the best match for a free-text query.
    ///
    /// Returns `Ok(None)` when the service has no match.
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<Place>, GeocodeError>> + Send;

    /// Returns the service name for logging.
    fn name(&self) -> &str;
}

/// Label used when no place name can be resolved.
pub fn fallback_label(position: Coordinate) -> String {
    format!("Location {:.4}, {:.4}", position.lat(), position.lon())
}
