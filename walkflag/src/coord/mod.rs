//! Coordinate arithmetic module
//!
//! Great-circle distances and the cardinal offset targets used to seed
//! walking route requests.

mod types;

pub use types::{Coordinate, CoordError, Direction, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Flat-Earth approximation of one degree of latitude, in kilometers.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Haversine great-circle distance between two coordinates, in kilometers.
#[inline]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat().to_radians().cos() * b.lat().to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Approximates the point `target_km` kilometers from `origin` along a
/// cardinal direction.
///
/// Uses [`KM_PER_DEGREE`] for both axes, dividing the longitude delta by
/// `cos(latitude)` so east/west offsets cover the same ground distance away
/// from the equator. The result is only a seed for the router: walking paths
/// never follow the straight line.
///
/// Latitude is clamped to the poles and longitude wrapped across the
/// antimeridian so the result is always a valid [`Coordinate`].
pub fn offset_target(origin: Coordinate, direction: Direction, target_km: f64) -> Coordinate {
    if !target_km.is_finite() {
        return origin;
    }

    let offset = target_km / KM_PER_DEGREE;
    let lon_offset = offset / origin.lat().to_radians().cos();

    let (lat, lon) = match direction {
        Direction::North => (origin.lat() + offset, origin.lon()),
        Direction::South => (origin.lat() - offset, origin.lon()),
        Direction::East => (origin.lat(), origin.lon() + lon_offset),
        Direction::West => (origin.lat(), origin.lon() - lon_offset),
    };

    normalize(lat, lon)
}

/// Clamps latitude and wraps longitude into the valid ranges.
fn normalize(lat: f64, lon: f64) -> Coordinate {
    let lat = lat.clamp(MIN_LAT, MAX_LAT);
    let lon = if (MIN_LON..=MAX_LON).contains(&lon) {
        lon
    } else if lon.is_finite() {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    } else {
        // cos(lat) underflows to zero at the poles, where every longitude
        // names the same point.
        0.0
    };

    Coordinate::new_unchecked(lat, lon)
}
