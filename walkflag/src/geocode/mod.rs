//! Geocoding
//!
//! [`Geocoder`] is the seam to the external geocoding service (reverse
//! lookup for flag names, forward search for placing markers);
//! [`NominatimGeocoder`] implements it. [`PlaceResolver`] turns reverse
//! lookups into names that are always usable.

mod nominatim;
mod resolver;
mod types;

pub use nominatim::{NominatimGeocoder, DEFAULT_NOMINATIM_URL};
pub use resolver::PlaceResolver;
pub use types::{fallback_label, GeocodeError, Geocoder, Place};
