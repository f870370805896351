//! Interactive map session
//!
//! [`MapSession`] owns every mutable collection the map displays (markers,
//! flags, routes) and serializes discovery calls on behalf of the engine,
//! which is stateless.

mod map;
mod types;

pub use map::MapSession;
pub use types::{Marker, Placement, RouteOverlay, SessionError};
