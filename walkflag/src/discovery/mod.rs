//! Radial walking-distance discovery
//!
//! Given an origin, [`RadialDiscoveryEngine`] finds for each cardinal
//! direction a walkable endpoint roughly [`DEFAULT_TARGET_KM`] away, accepts
//! it when the walking distance lies in the configured band, and names it.
//!
//! # Example
//!
//! ```ignore
//! use walkflag::discovery::{DiscoveryConfig, RadialDiscoveryEngine};
//!
//! let engine = RadialDiscoveryEngine::new(router, geocoder, DiscoveryConfig::default())?;
//! for discovery in engine.discover(origin).await {
//!     println!("{}: {}", discovery.flag.direction, discovery.flag.place_name);
//! }
//! ```

mod config;
mod engine;
mod types;

pub use config::{
    DiscoveryConfig, DEFAULT_MAX_KM, DEFAULT_MIN_KM, DEFAULT_PACE_MS, DEFAULT_TARGET_KM,
};
pub use engine::RadialDiscoveryEngine;
pub use types::{Discovery, DiscoveryError, DiscoverySummary, Flag};
