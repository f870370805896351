//! Discovery tuning parameters.

use std::time::Duration;

use super::types::DiscoveryError;

/// Default straight-line seed distance for each direction (km).
pub const DEFAULT_TARGET_KM: f64 = 5.0;

/// Default lower bound of the accepted walking distance (km, inclusive).
pub const DEFAULT_MIN_KM: f64 = 4.0;

/// Default upper bound of the accepted walking distance (km, inclusive).
pub const DEFAULT_MAX_KM: f64 = 6.0;

/// Default pause after each direction (milliseconds).
pub const DEFAULT_PACE_MS: u64 = 1000;

/// Configuration for the radial discovery engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryConfig {
    /// Straight-line distance used to place each seed target.
    pub target_km: f64,

    /// Shortest walking distance accepted.
    pub min_km: f64,

    /// Longest walking distance accepted.
    pub max_km: f64,

    /// Pause after every direction, whatever its outcome.
    pub pace_interval: Duration,
}

impl DiscoveryConfig {
    /// Checks that the target is positive and the band is well formed.
    pub fn validate(&self) -> Result<(), DiscoveryError> {
        if !self.target_km.is_finite() || self.target_km <= 0.0 {
            return Err(DiscoveryError::InvalidConfig(format!(
                "target_km must be a positive number, got {}",
                self.target_km
            )));
        }
        if !self.min_km.is_finite() || self.min_km < 0.0 {
            return Err(DiscoveryError::InvalidConfig(format!(
                "min_km must be zero or positive, got {}",
                self.min_km
            )));
        }
        if !self.max_km.is_finite() || self.max_km < self.min_km {
            return Err(DiscoveryError::InvalidConfig(format!(
                "max_km ({}) must not be below min_km ({})",
                self.max_km, self.min_km
            )));
        }
        Ok(())
    }

    /// Returns true if a walking distance falls inside the accepted band.
    #[inline]
    pub fn accepts(&self, distance_km: f64) -> bool {
        (self.min_km..=self.max_km).contains(&distance_km)
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            target_km: DEFAULT_TARGET_KM,
            min_km: DEFAULT_MIN_KM,
            max_km: DEFAULT_MAX_KM,
            pace_interval: Duration::from_millis(DEFAULT_PACE_MS),
        }
    }
}
