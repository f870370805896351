//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use walkflag::config::ConfigFileError;
use walkflag::coord::CoordError;
use walkflag::discovery::DiscoveryError;
use walkflag::export::ExportError;
use walkflag::http::HttpError;
use walkflag::session::SessionError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Coordinates given on the command line are out of range
    InvalidCoordinate(CoordError),
    /// Failed to create the HTTP client
    HttpClient(HttpError),
    /// Discovery settings are unusable
    Discovery(DiscoveryError),
    /// Marker placement or discovery failed
    Session(SessionError),
    /// Failed to write the GeoJSON file
    Export { path: PathBuf, error: ExportError },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Session(SessionError::NoSearchResult(_)) => {
                eprintln!();
                eprintln!("Try a more specific query, for example:");
                eprintln!("  walkflag search \"Seoul City Hall, Seoul\"");
            }
            CliError::Session(SessionError::Search(_)) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. No network connection");
                eprintln!("  2. The geocoding server is down: check 'walkflag config get geocoding.url'");
                eprintln!("  3. Rate limited: public Nominatim allows about one request per second");
            }
            CliError::Discovery(_) => {
                eprintln!();
                eprintln!("Check the [discovery] section with 'walkflag config list'.");
            }
            _ => {}
        }

        let code = match self {
            CliError::Session(SessionError::Discovery(DiscoveryError::Cancelled)) => 130,
            _ => 1,
        };
        process::exit(code)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::InvalidCoordinate(e) => write!(f, "Invalid coordinate: {}", e),
            CliError::HttpClient(e) => write!(f, "Failed to create HTTP client: {}", e),
            CliError::Discovery(e) => write!(f, "{}", e),
            CliError::Session(e) => write!(f, "{}", e),
            CliError::Export { path, error } => {
                write!(f, "Failed to export '{}': {}", path.display(), error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::InvalidCoordinate(e) => Some(e),
            CliError::HttpClient(e) => Some(e),
            CliError::Discovery(e) => Some(e),
            CliError::Session(e) => Some(e),
            CliError::Export { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<SessionError> for CliError {
    fn from(e: SessionError) -> Self {
        CliError::Session(e)
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::InvalidCoordinate(e)
    }
}
