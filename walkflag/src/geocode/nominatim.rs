//! Nominatim geocoder

use std::sync::Arc;

use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use super::types::{GeocodeError, Geocoder, Place};
use crate::coord::Coordinate;
use crate::http::AsyncHttpClient;
use crate::pacing::RequestPacer;

/// Public OpenStreetMap Nominatim instance.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Reverse lookup detail level (16 = major streets).
const REVERSE_ZOOM: &str = "16";

/// Reverse lookup response. Nominatim answers 200 with an `error` field when
/// nothing is found.
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Search result entry; coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct SearchEntry {
    lat: String,
    lon: String,
    display_name: String,
}

/// Geocoder backed by a Nominatim HTTP endpoint.
pub struct NominatimGeocoder<C: AsyncHttpClient> {
    http: C,
    base_url: String,
    pacer: Option<Arc<RequestPacer>>,
}

impl<C: AsyncHttpClient> NominatimGeocoder<C> {
    /// Creates a geocoder for the Nominatim server at `base_url`.
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

    fn reverse_url(&self, position: Coordinate) -> Result<Url, GeocodeError> {
        let lat = position.lat().to_string();
        let lon = position.lon().to_string();
        Url::parse_with_params(
            &format!("{}/reverse", self.base_url),
            &[
                ("format", "json"),
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("zoom", REVERSE_ZOOM),
            ],
        )
        .map_err(|e| GeocodeError::InvalidRequest(e.to_string()))
    }

    fn search_url(&self, query: &str) -> Result<Url, GeocodeError> {
        Url::parse_with_params(
            &format!("{}/search", self.base_url),
            &[("format", "json"), ("q", query), ("limit", "1")],
        )
        .map_err(|e| GeocodeError::InvalidRequest(e.to_string()))
    }

    async fn fetch(&self, url: Url) -> Result<Vec<u8>, GeocodeError> {
        if let Some(pacer) = &self.pacer {
            pacer.acquire().await;
        }
        Ok(self.http.get(url.as_str()).await?)
    }
}

impl<C: AsyncHttpClient> Geocoder for NominatimGeocoder<C> {
    async fn reverse(&self, position: Coordinate) -> Result<String, GeocodeError> {
        let url = self.reverse_url(position)?;
        let body = self.fetch(url).await?;
        parse_reverse_response(&body)
    }

    async fn search(&self, query: &str) -> Result<Option<Place>, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let url = self.search_url(query)?;
        let body = self.fetch(url).await?;
        let place = parse_search_response(&body)?;

        debug!(query, found = place.is_some(), "Nominatim search completed");
        Ok(place)
    }

    fn name(&self) -> &str {
        "Nominatim"
    }
}

fn parse_reverse_response(body: &[u8]) -> Result<String, GeocodeError> {
    let response: ReverseResponse = serde_json::from_slice(body)
        .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

    match response.display_name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(GeocodeError::NotFound(
            response
                .error
                .unwrap_or_else(|| "missing display_name".to_string()),
        )),
    }
}

fn parse_search_response(body: &[u8]) -> Result<Option<Place>, GeocodeError> {
    let entries: Vec<SearchEntry> = serde_json::from_slice(body)
        .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

    let Some(entry) = entries.into_iter().next() else {
        return Ok(None);
    };

    let lat: f64 = entry
        .lat
        .parse()
        .map_err(|_| GeocodeError::InvalidResponse(format!("bad latitude '{}'", entry.lat)))?;
    let lon: f64 = entry
        .lon
        .parse()
        .map_err(|_| GeocodeError::InvalidResponse(format!("bad longitude '{}'", entry.lon)))?;
    let position =
        Coordinate::new(lat, lon).map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

    Ok(Some(Place {
        position,
        display_name: entry.display_name,
    }))
}
