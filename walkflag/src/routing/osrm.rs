//! OSRM walking router

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use super::types::{RouteResult, RoutingError, WalkingRouter};
use crate::coord::Coordinate;
use crate::http::AsyncHttpClient;
use crate::pacing::RequestPacer;

/// Public OSRM demo server.
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

/// OSRM routing profile for pedestrians.
const FOOT_PROFILE: &str = "foot";

/// OSRM route service response.
///
/// Only the fields needed to build a [`RouteResult`] are deserialized.
#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Meters
    distance: f64,
    geometry: OsrmGeometry,
}

/// GeoJSON LineString; positions are `[longitude, latitude]`.
#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

/// Walking router backed by an OSRM HTTP endpoint.
pub struct OsrmRouter<C: AsyncHttpClient> {
    http: C,
    base_url: String,
    pacer: Option<Arc<RequestPacer>>,
}

impl<C: AsyncHttpClient> OsrmRouter<C> {
    /// Creates a router for the OSRM server at `base_url`.
    pub fn new(http: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            pacer: None,
        }
    }

    /// Paces every request through a shared [`RequestPacer`].
    pub fn with_pacer(mut self, pacer: Arc<RequestPacer>) -> Self {
        self.pacer = Some(pacer);
        self
    }

    /// Builds the route request URL, asking for full GeoJSON geometry.
    fn route_url(&self, start: Coordinate, end: Coordinate) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}?overview=full&geometries=geojson",
            self.base_url,
            FOOT_PROFILE,
            start.lon(),
            start.lat(),
            end.lon(),
            end.lat()
        )
    }
}

impl<C: AsyncHttpClient> WalkingRouter for OsrmRouter<C> {
    async fn route(&self, start: Coordinate, end: Coordinate) -> Result<RouteResult, RoutingError> {
        if let Some(pacer) = &self.pacer {
            pacer.acquire().await;
        }

        let url = self.route_url(start, end);
        let body = self.http.get(&url).await?;
        let route = parse_route_response(&body)?;

        debug!(
            distance_km = route.distance_km(),
            points = route.polyline().len(),
            "OSRM route resolved"
        );

        Ok(route)
    }

    fn name(&self) -> &str {
        "OSRM"
    }
}

/// Parses an OSRM route response, keeping only the first route.
fn parse_route_response(body: &[u8]) -> Result<RouteResult, RoutingError> {
    let response: OsrmResponse = serde_json::from_slice(body)
        .map_err(|e| RoutingError::InvalidResponse(e.to_string()))?;

    if response.code != "Ok" {
        return Err(RoutingError::Service {
            message: response.message.unwrap_or_default(),
            code: response.code,
        });
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(RoutingError::NoRoute)?;

    let polyline = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lon, lat]| Coordinate::from_lon_lat(lon, lat))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| RoutingError::InvalidResponse(e.to_string()))?;

    RouteResult::new(polyline, route.distance / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::tests::MockAsyncHttpClient;
    use crate::http::HttpError;

    const OK_BODY: &str = r#"{
        "code": "Ok",
        "routes": [
            {
                "distance": 5234.7,
                "duration": 3768.9,
                "weight_name": "duration",
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[126.978, 37.5665], [126.9785, 37.59], [126.9791, 37.6115]]
                },
                "legs": []
            },
            {
                "distance": 9000.0,
                "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}
            }
        ],
        "waypoints": []
    }"#;

    fn seoul() -> Coordinate {
        Coordinate::new(37.5665, 126.9780).unwrap()
    }

    fn north_target() -> Coordinate {
        Coordinate::new(37.6115, 126.9780).unwrap()
    }

    #[test]
    fn test_parse_first_route() {
        let route = parse_route_response(OK_BODY.as_bytes()).unwrap();

        assert!((route.distance_km() - 5.2347).abs() < 1e-9);
        assert_eq!(route.polyline().len(), 3);
    }

    #[test]
    fn test_parse_swaps_axis_order() {
        let route = parse_route_response(OK_BODY.as_bytes()).unwrap();

        assert_eq!(route.start(), seoul());
        assert_eq!(route.endpoint().lat(), 37.6115);
        assert_eq!(route.endpoint().lon(), 126.9791);
    }

    #[test]
    fn test_parse_service_error_code() {
        let body = br#"{"code": "NoSegment", "message": "Could not find a matching segment"}"#;
        let result = parse_route_response(body);

        assert_eq!(
            result,
            Err(RoutingError::Service {
                code: "NoSegment".to_string(),
                message: "Could not find a matching segment".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_zero_routes() {
        let result = parse_route_response(br#"{"code": "Ok", "routes": []}"#);
        assert_eq!(result, Err(RoutingError::NoRoute));
    }

    #[test]
    fn test_parse_malformed_body() {
        let result = parse_route_response(b"<html>Too Many Requests</html>");
        assert!(matches!(result, Err(RoutingError::InvalidResponse(_))));
    }

    #[test]
    fn test_parse_single_point_geometry_rejected() {
        let body = br#"{"code": "Ok", "routes": [
            {"distance": 10.0, "geometry": {"coordinates": [[126.978, 37.5665]]}}
        ]}"#;
        assert!(matches!(
            parse_route_response(body),
            Err(RoutingError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_parse_out_of_range_geometry_rejected() {
        let body = br#"{"code": "Ok", "routes": [
            {"distance": 10.0, "geometry": {"coordinates": [[0.0, 0.0], [0.0, 95.0]]}}
        ]}"#;
        assert!(matches!(
            parse_route_response(body),
            Err(RoutingError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_route_url_uses_lon_lat_order() {
        let router = OsrmRouter::new(MockAsyncHttpClient::json(OK_BODY), "https://osrm.test/");
        let url = router.route_url(seoul(), north_target());

        assert_eq!(
            url,
            "https://osrm.test/route/v1/foot/126.978,37.5665;126.978,37.6115?overview=full&geometries=geojson"
        );
    }

    #[tokio::test]
    async fn test_route_via_http_client() {
        let router = OsrmRouter::new(MockAsyncHttpClient::json(OK_BODY), DEFAULT_OSRM_URL);

        let route = router.route(seoul(), north_target()).await.unwrap();

        assert_eq!(route.polyline().len(), 3);
        assert_eq!(router.http.requests().len(), 1);
        assert!(router.http.requests()[0].starts_with(DEFAULT_OSRM_URL));
    }

    #[tokio::test]
    async fn test_route_http_failure() {
        let mock = MockAsyncHttpClient::new(Err(HttpError::Status {
            status: 429,
            url: "x".to_string(),
        }));
        let router = OsrmRouter::new(mock, DEFAULT_OSRM_URL);

        let result = router.route(seoul(), north_target()).await;
        assert!(matches!(result, Err(RoutingError::Http(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_route_respects_pacer() {
        let pacer = Arc::new(RequestPacer::new(std::time::Duration::from_secs(1)));
        let router = OsrmRouter::new(MockAsyncHttpClient::json(OK_BODY), DEFAULT_OSRM_URL)
            .with_pacer(Arc::clone(&pacer));

        router.route(seoul(), north_target()).await.unwrap();
        router.route(seoul(), north_target()).await.unwrap();

        assert_eq!(pacer.delayed_count(), 1);
    }
}
