//! User configuration for walkflag.
//!
//! Settings live in `~/.walkflag/config.ini`. A missing file means defaults;
//! any key present in the file overrides its default.
//!
//! # Example
//!
//! ```no_run
//! use walkflag::config::{ConfigFile, ConfigKey};
//!
//! let mut config = ConfigFile::load()?;
//! ConfigKey::DiscoveryTargetKm.set(&mut config, "4.5")?;
//! config.save()?;
//!
//! let discovery = config.discovery.to_discovery_config();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFile, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{DiscoverySettings, GeocodingSettings, LoggingSettings, RoutingSettings};
