//! INI serialization logic for converting `ConfigFile` → INI string.

use super::parser::path_to_display;
use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[routing]
; OSRM server used for walking directions (foot profile)
; The public demo server is rate limited; run your own for heavy use
url = {}
; Timeout in seconds for routing requests (default: 10)
timeout = {}

[geocoding]
; Nominatim server used for place names and search
url = {}
; Timeout in seconds for geocoding requests (default: 10)
timeout = {}
; User-Agent sent with every request
; Nominatim's usage policy requires one that identifies your application
user_agent = {}

[discovery]
; Straight-line distance in km used to seed each direction (default: 5.0)
target_km = {}
; Accepted walking distance band in km, inclusive (default: 4.0 - 6.0)
min_km = {}
max_km = {}
; Pause in milliseconds after each direction (default: 1000)
; Keeps request rates within the public services' limits
pace_ms = {}

[logging]
; Log file, cleared at the start of every run
file = {}
"#,
        config.routing.url,
        config.routing.timeout,
        config.geocoding.url,
        config.geocoding.timeout,
        config.geocoding.user_agent,
        config.discovery.target_km,
        config.discovery.min_km,
        config.discovery.max_km,
        config.discovery.pace_ms,
        path_to_display(&config.logging.file),
    )
}
