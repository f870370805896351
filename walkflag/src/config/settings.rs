//! Settings structs for each configuration section.
//!
//! Each struct represents one `[section]` of the INI config file.

use std::path::PathBuf;
use std::time::Duration;

use crate::discovery::DiscoveryConfig;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub routing: RoutingSettings,
    pub geocoding: GeocodingSettings,
    pub discovery: DiscoverySettings,
    pub logging: LoggingSettings,
}

/// Walking-directions service (OSRM).
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingSettings {
    /// Base URL of the OSRM server
    pub url: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

/// Geocoding service (Nominatim).
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodingSettings {
    /// Base URL of the Nominatim server
    pub url: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// User-Agent sent with every request
    pub user_agent: String,
}

/// Discovery distances and pacing.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverySettings {
    pub target_km: f64,
    pub min_km: f64,
    pub max_km: f64,
    /// Pause after each direction in milliseconds
    pub pace_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}

impl RoutingSettings {
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl GeocodingSettings {
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl DiscoverySettings {
    /// Engine configuration for these settings. Not yet validated.
    pub fn to_discovery_config(&self) -> DiscoveryConfig {
        DiscoveryConfig {
            target_km: self.target_km,
            min_km: self.min_km,
            max_km: self.max_km,
            pace_interval: Duration::from_millis(self.pace_ms),
        }
    }
}
