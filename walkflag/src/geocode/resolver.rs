//! Place naming with a guaranteed fallback.

use tracing::warn;

use super::types::{fallback_label, Geocoder};
use crate::coord::Coordinate;

/// Resolves display names for discovered endpoints.
///
/// Never fails: when the geocoder errors the coordinate itself becomes the
/// label (see [`fallback_label`]).
pub struct PlaceResolver<G: Geocoder> {
    geocoder: G,
}

impl<G: Geocoder> PlaceResolver<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    /// Returns the wrapped geocoder.
    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Returns a human-readable name for `position`.
    pub async fn resolve_place_name(&self, position: Coordinate) -> String {
        match self.geocoder.reverse(position).await {
            Ok(name) => name,
            Err(e) => {
                warn!(
                    service = self.geocoder.name(),
                    position = %position,
                    error = %e,
                    "Reverse geocoding failed, using coordinate label"
                );
                fallback_label(position)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::{GeocodeError, Place};
    use crate::http::HttpError;

    struct FixedGeocoder(Result<String, GeocodeError>);

    impl Geocoder for FixedGeocoder {
        async fn reverse(&self, _position: Coordinate) -> Result<String, GeocodeError> {
            self.0.clone()
        }

        async fn search(&self, _query: &str) -> Result<Option<Place>, GeocodeError> {
            Ok(None)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[tokio::test]
    async fn test_returns_display_name() {
        let resolver = PlaceResolver::new(FixedGeocoder(Ok("Namsan Tower".to_string())));
        assert_eq!(
            resolver.resolve_place_name(coord(37.55, 126.99)).await,
            "Namsan Tower"
        );
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_coordinates() {
        let resolver = PlaceResolver::new(FixedGeocoder(Err(GeocodeError::Http(
            HttpError::Request("connection reset".to_string()),
        ))));

        let name = resolver.resolve_place_name(coord(37.611_549, 126.979_12)).await;
        assert_eq!(name, "Location 37.6115, 126.9791");
    }

    #[tokio::test]
    async fn test_not_found_falls_back() {
        let resolver = PlaceResolver::new(FixedGeocoder(Err(GeocodeError::NotFound(
            "Unable to geocode".to_string(),
        ))));

        let name = resolver.resolve_place_name(coord(-12.5, -150.25)).await;
        assert_eq!(name, "Location -12.5000, -150.2500");
    }

    #[test]
    fn test_fallback_label_format() {
        assert_eq!(
            fallback_label(coord(37.5665, 126.978)),
            "Location 37.5665, 126.9780"
        );
    }
}
