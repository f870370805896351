//! CLI runner for common setup and operations.
//!
//! Encapsulates logging initialization and construction of the discovery
//! session from the loaded configuration.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use walkflag::config::ConfigFile;
use walkflag::discovery::RadialDiscoveryEngine;
use walkflag::geocode::NominatimGeocoder;
use walkflag::http::AsyncReqwestClient;
use walkflag::logging::{init_logging, split_log_path, LoggingGuard};
use walkflag::pacing::RequestPacer;
use walkflag::routing::OsrmRouter;
use walkflag::session::MapSession;

use crate::error::CliError;

/// Session wired to the live routing and geocoding services.
pub type LiveSession =
    MapSession<OsrmRouter<AsyncReqwestClient>, NominatimGeocoder<AsyncReqwestClient>>;

/// Public Nominatim asks for at most one request per second.
const GEOCODER_MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// With `debug_mode`, log events are also mirrored to stderr at debug
    /// level regardless of `RUST_LOG`.
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let (log_dir, log_file) = split_log_path(&config.logging.file).ok_or_else(|| {
            CliError::LoggingInit(format!(
                "'{}' is not a usable log file path",
                config.logging.file.display()
            ))
        })?;

        let logging_guard = init_logging(&log_dir, &log_file, debug_mode, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("walkflag v{}", walkflag::VERSION);
        info!("walkflag CLI: {} command", command);
    }

    /// Build a session backed by the configured OSRM and Nominatim servers.
    pub fn create_session(&self) -> Result<Arc<LiveSession>, CliError> {
        let routing = &self.config.routing;
        let geocoding = &self.config.geocoding;

        let routing_http = AsyncReqwestClient::with_options(
            routing.timeout_duration(),
            &geocoding.user_agent,
        )
        .map_err(CliError::HttpClient)?;
        let geocoding_http =
            AsyncReqwestClient::with_options(geocoding.timeout_duration(), &geocoding.user_agent)
                .map_err(CliError::HttpClient)?;

        let router = OsrmRouter::new(routing_http, routing.url.as_str());
        let geocoder = NominatimGeocoder::new(geocoding_http, geocoding.url.as_str())
            .with_pacer(Arc::new(RequestPacer::new(GEOCODER_MIN_INTERVAL)));

        let discovery = self.config.discovery.to_discovery_config();
        let engine =
            RadialDiscoveryEngine::new(router, geocoder, discovery).map_err(CliError::Discovery)?;

        info!(
            routing = %routing.url,
            geocoding = %geocoding.url,
            "Session created"
        );

        Ok(Arc::new(MapSession::new(Arc::new(engine))))
    }
}
