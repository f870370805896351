//! Configuration key access and validation.
//!
//! Type-safe get and set of configuration values by `section.key` name,
//! with validation via value specifications.

use std::str::FromStr;

use thiserror::Error;

use super::file::ConfigFile;
use super::parser::{expand_tilde, path_to_display};

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
///
/// Each key maps to a specific field in [`ConfigFile`] and knows how to
/// get and set its value with proper validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    RoutingUrl,
    RoutingTimeout,

    GeocodingUrl,
    GeocodingTimeout,
    GeocodingUserAgent,

    DiscoveryTargetKm,
    DiscoveryMinKm,
    DiscoveryMaxKm,
    DiscoveryPaceMs,

    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|key| key.name() == lower)
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "discovery.target_km").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::RoutingUrl => "routing.url",
            ConfigKey::RoutingTimeout => "routing.timeout",
            ConfigKey::GeocodingUrl => "geocoding.url",
            ConfigKey::GeocodingTimeout => "geocoding.timeout",
            ConfigKey::GeocodingUserAgent => "geocoding.user_agent",
            ConfigKey::DiscoveryTargetKm => "discovery.target_km",
            ConfigKey::DiscoveryMinKm => "discovery.min_km",
            ConfigKey::DiscoveryMaxKm => "discovery.max_km",
            ConfigKey::DiscoveryPaceMs => "discovery.pace_ms",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the section name (e.g., "discovery").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "target_km").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::RoutingUrl => config.routing.url.clone(),
            ConfigKey::RoutingTimeout => config.routing.timeout.to_string(),
            ConfigKey::GeocodingUrl => config.geocoding.url.clone(),
            ConfigKey::GeocodingTimeout => config.geocoding.timeout.to_string(),
            ConfigKey::GeocodingUserAgent => config.geocoding.user_agent.clone(),
            ConfigKey::DiscoveryTargetKm => config.discovery.target_km.to_string(),
            ConfigKey::DiscoveryMinKm => config.discovery.min_km.to_string(),
            ConfigKey::DiscoveryMaxKm => config.discovery.max_km.to_string(),
            ConfigKey::DiscoveryPaceMs => config.discovery.pace_ms.to_string(),
            ConfigKey::LoggingFile => path_to_display(&config.logging.file),
        }
    }

    /// Set the value in a config file.
    ///
    /// Validates the value according to the key's specification. Discovery
    /// keys also must leave a usable band; otherwise the config is unchanged.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let previous = config.discovery.clone();

        self.apply(config, value)
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason,
            })?;

        if let Err(e) = config.discovery.to_discovery_config().validate() {
            config.discovery = previous;
            return Err(ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason: e.to_string(),
            });
        }

        Ok(())
    }

    /// Validate a value according to this key's specification.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.specification()
            .is_satisfied_by(value)
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason,
            })
    }

    /// Validates and stores a single value without cross-key checks.
    pub(super) fn apply(&self, config: &mut ConfigFile, value: &str) -> Result<(), String> {
        self.specification().is_satisfied_by(value)?;

        match self {
            ConfigKey::RoutingUrl => config.routing.url = value.to_string(),
            ConfigKey::RoutingTimeout => config.routing.timeout = parse_number(value)?,
            ConfigKey::GeocodingUrl => config.geocoding.url = value.to_string(),
            ConfigKey::GeocodingTimeout => config.geocoding.timeout = parse_number(value)?,
            ConfigKey::GeocodingUserAgent => config.geocoding.user_agent = value.to_string(),
            ConfigKey::DiscoveryTargetKm => config.discovery.target_km = parse_number(value)?,
            ConfigKey::DiscoveryMinKm => config.discovery.min_km = parse_number(value)?,
            ConfigKey::DiscoveryMaxKm => config.discovery.max_km = parse_number(value)?,
            ConfigKey::DiscoveryPaceMs => config.discovery.pace_ms = parse_number(value)?,
            ConfigKey::LoggingFile => config.logging.file = expand_tilde(value),
        }
        Ok(())
    }

    /// Get the validation specification for this key.
    fn specification(&self) -> Box<dyn ValueSpecification> {
        match self {
            ConfigKey::RoutingUrl => Box::new(UrlSpec),
            ConfigKey::RoutingTimeout => Box::new(PositiveIntegerSpec),
            ConfigKey::GeocodingUrl => Box::new(UrlSpec),
            ConfigKey::GeocodingTimeout => Box::new(PositiveIntegerSpec),
            ConfigKey::GeocodingUserAgent => Box::new(NonEmptySpec),
            ConfigKey::DiscoveryTargetKm => Box::new(PositiveNumberSpec),
            ConfigKey::DiscoveryMinKm => Box::new(NonNegativeNumberSpec),
            ConfigKey::DiscoveryMaxKm => Box::new(PositiveNumberSpec),
            ConfigKey::DiscoveryPaceMs => Box::new(NonNegativeIntegerSpec),
            ConfigKey::LoggingFile => Box::new(NonEmptySpec),
        }
    }

    /// Get all supported configuration keys.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::RoutingUrl,
            ConfigKey::RoutingTimeout,
            ConfigKey::GeocodingUrl,
            ConfigKey::GeocodingTimeout,
            ConfigKey::GeocodingUserAgent,
            ConfigKey::DiscoveryTargetKm,
            ConfigKey::DiscoveryMinKm,
            ConfigKey::DiscoveryMaxKm,
            ConfigKey::DiscoveryPaceMs,
            ConfigKey::LoggingFile,
        ]
    }
}

fn parse_number<T: FromStr>(value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", value))
}

// ============================================================================
// Value Specifications
// ============================================================================

/// Trait for value validation specifications.
trait ValueSpecification {
    /// Returns Ok(()) if valid, Err(reason) if invalid.
    fn is_satisfied_by(&self, value: &str) -> Result<(), String>;
}

/// Specification for base URLs.
struct UrlSpec;

impl ValueSpecification for UrlSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if !(value.starts_with("http://") || value.starts_with("https://")) {
            return Err("must be a URL starting with 'http://' or 'https://'".to_string());
        }
        reqwest::Url::parse(value)
            .map(|_| ())
            .map_err(|e| format!("must be a valid URL ({})", e))
    }
}

/// Specification for integers greater than zero.
struct PositiveIntegerSpec;

impl ValueSpecification for PositiveIntegerSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        match value.parse::<u64>() {
            Ok(n) if n > 0 => Ok(()),
            _ => Err("must be a positive integer".to_string()),
        }
    }
}

/// Specification for integers including zero.
struct NonNegativeIntegerSpec;

impl ValueSpecification for NonNegativeIntegerSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        value
            .parse::<u64>()
            .map(|_| ())
            .map_err(|_| "must be zero or a positive integer".to_string())
    }
}

/// Specification for finite numbers greater than zero.
struct PositiveNumberSpec;

impl ValueSpecification for PositiveNumberSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        match value.parse::<f64>() {
            Ok(n) if n.is_finite() && n > 0.0 => Ok(()),
            _ => Err("must be a positive number".to_string()),
        }
    }
}

/// Specification for finite numbers including zero.
struct NonNegativeNumberSpec;

impl ValueSpecification for NonNegativeNumberSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        match value.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => Ok(()),
            _ => Err("must be zero or a positive number".to_string()),
        }
    }
}

/// Specification for required text values.
struct NonEmptySpec;

impl ValueSpecification for NonEmptySpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err("must not be empty".to_string())
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_parsing() {
        assert_eq!(
            "discovery.target_km".parse::<ConfigKey>().unwrap(),
            ConfigKey::DiscoveryTargetKm
        );
        assert_eq!(
            "routing.url".parse::<ConfigKey>().unwrap(),
            ConfigKey::RoutingUrl
        );
        // Case insensitive
        assert_eq!(
            "GEOCODING.USER_AGENT".parse::<ConfigKey>().unwrap(),
            ConfigKey::GeocodingUserAgent
        );
        assert!("invalid.key".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn test_key_name_parts() {
        assert_eq!(ConfigKey::DiscoveryPaceMs.section(), "discovery");
        assert_eq!(ConfigKey::DiscoveryPaceMs.key_name(), "pace_ms");
        assert_eq!(ConfigKey::LoggingFile.section(), "logging");
        assert_eq!(ConfigKey::LoggingFile.key_name(), "file");
    }

    #[test]
    fn test_get_value() {
        let config = ConfigFile::default();

        assert_eq!(ConfigKey::RoutingTimeout.get(&config), "10");
        assert_eq!(ConfigKey::DiscoveryTargetKm.get(&config), "5");
        assert_eq!(ConfigKey::DiscoveryPaceMs.get(&config), "1000");
    }

    #[test]
    fn test_set_value() {
        let mut config = ConfigFile::default();

        ConfigKey::RoutingUrl
            .set(&mut config, "http://localhost:5000")
            .unwrap();
        assert_eq!(config.routing.url, "http://localhost:5000");

        ConfigKey::DiscoveryTargetKm.set(&mut config, "4.5").unwrap();
        assert_eq!(config.discovery.target_km, 4.5);

        ConfigKey::DiscoveryPaceMs.set(&mut config, "0").unwrap();
        assert_eq!(config.discovery.pace_ms, 0);
    }

    #[test]
    fn test_validate_url() {
        assert!(ConfigKey::RoutingUrl.validate("https://example.com").is_ok());
        assert!(ConfigKey::RoutingUrl.validate("http://127.0.0.1:5000").is_ok());
        assert!(ConfigKey::RoutingUrl.validate("").is_err());
        assert!(ConfigKey::RoutingUrl.validate("not-a-url").is_err());
    }

    #[test]
    fn test_validate_numbers() {
        assert!(ConfigKey::RoutingTimeout.validate("30").is_ok());
        assert!(ConfigKey::RoutingTimeout.validate("0").is_err());
        assert!(ConfigKey::RoutingTimeout.validate("-1").is_err());
        assert!(ConfigKey::DiscoveryMinKm.validate("0").is_ok());
        assert!(ConfigKey::DiscoveryTargetKm.validate("0").is_err());
        assert!(ConfigKey::DiscoveryTargetKm.validate("NaN").is_err());
        assert!(ConfigKey::DiscoveryMaxKm.validate("inf").is_err());
    }

    #[test]
    fn test_set_inverted_band_is_rejected() {
        let mut config = ConfigFile::default();

        let result = ConfigKey::DiscoveryMinKm.set(&mut config, "7");

        assert!(matches!(
            result,
            Err(ConfigKeyError::ValidationFailed { ref key, .. }) if key == "discovery.min_km"
        ));
        // Config should be unchanged
        assert_eq!(config.discovery.min_km, 4.0);
    }

    #[test]
    fn test_set_invalid_value_fails() {
        let mut config = ConfigFile::default();

        assert!(ConfigKey::GeocodingUserAgent.set(&mut config, "  ").is_err());
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_all_keys_round_trip_names() {
        for key in ConfigKey::all() {
            assert_eq!(key.name().parse::<ConfigKey>().unwrap(), *key);
        }
    }
}
