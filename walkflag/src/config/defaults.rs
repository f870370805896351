//! Default values for all configuration settings.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::discovery::{DEFAULT_MAX_KM, DEFAULT_MIN_KM, DEFAULT_PACE_MS, DEFAULT_TARGET_KM};
use crate::geocode::DEFAULT_NOMINATIM_URL;
use crate::http::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::routing::DEFAULT_OSRM_URL;

/// Default request timeout for both services, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = DEFAULT_TIMEOUT.as_secs();

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "walkflag.log";

/// Default log file path (~/.walkflag/walkflag.log).
pub fn default_log_file() -> PathBuf {
    config_directory().join(DEFAULT_LOG_FILE_NAME)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            routing: RoutingSettings {
                url: DEFAULT_OSRM_URL.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            geocoding: GeocodingSettings {
                url: DEFAULT_NOMINATIM_URL.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
                user_agent: DEFAULT_USER_AGENT.to_string(),
            },
            discovery: DiscoverySettings {
                target_km: DEFAULT_TARGET_KM,
                min_km: DEFAULT_MIN_KM,
                max_km: DEFAULT_MAX_KM,
                pace_ms: DEFAULT_PACE_MS,
            },
            logging: LoggingSettings {
                file: default_log_file(),
            },
        }
    }
}
