//! walkflag - Radial walking-distance discovery
//!
//! Given an origin, walkflag asks a walking-directions service for a route
//! toward a point about 5 km away in each cardinal direction, keeps the
//! routes whose walking distance falls in an acceptance band, and names
//! their endpoints with a reverse geocoder. The accepted endpoints are the
//! "flags" a map can show around the origin.
//!
//! # High-Level API
//!
//! ```ignore
//! use std::sync::Arc;
//! use walkflag::coord::Coordinate;
//! use walkflag::discovery::{DiscoveryConfig, RadialDiscoveryEngine};
//! use walkflag::geocode::{NominatimGeocoder, DEFAULT_NOMINATIM_URL};
//! use walkflag::http::AsyncReqwestClient;
//! use walkflag::routing::{OsrmRouter, DEFAULT_OSRM_URL};
//!
//! let http = AsyncReqwestClient::new()?;
//! let engine = RadialDiscoveryEngine::new(
//!     OsrmRouter::new(http.clone(), DEFAULT_OSRM_URL),
//!     NominatimGeocoder::new(http, DEFAULT_NOMINATIM_URL),
//!     DiscoveryConfig::default(),
//! )?;
//!
//! let origin = Coordinate::new(37.5665, 126.9780)?;
//! for found in engine.discover(origin).await {
//!     println!("{} {} km: {}", found.flag.direction, found.flag.distance_km, found.flag.place_name);
//! }
//! ```

pub mod config;
pub mod coord;
pub mod discovery;
pub mod export;
pub mod geocode;
pub mod http;
pub mod logging;
pub mod pacing;
pub mod routing;
pub mod session;

/// Version of the walkflag library and CLI.
///
/// Synchronized across the workspace through `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
