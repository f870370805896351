//! Walking route resolution
//!
//! [`WalkingRouter`] is the seam to the external directions service;
//! [`OsrmRouter`] implements it against an OSRM server. [`RouteResolver`]
//! wraps any router and absorbs its failures into `None`.

mod osrm;
mod resolver;
mod types;

pub use osrm::{OsrmRouter, DEFAULT_OSRM_URL};
pub use resolver::RouteResolver;
pub use types::{RouteResult, RoutingError, WalkingRouter};
