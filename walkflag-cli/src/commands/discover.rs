//! Discover command - find walkable flags around a coordinate.

use std::path::PathBuf;

use walkflag::coord::Coordinate;

use super::common::{finish, print_discovery, with_interrupt};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the discover command.
pub struct DiscoverArgs {
    pub lat: f64,
    pub lon: f64,
    pub geojson: Option<PathBuf>,
    pub debug: bool,
}

/// Run the discover command.
pub async fn run(args: DiscoverArgs) -> Result<(), CliError> {
    let origin = Coordinate::new(args.lat, args.lon)?;

    let runner = CliRunner::with_debug(args.debug)?;
    runner.log_startup("discover");
    let session = runner.create_session()?;

    let band = &runner.config().discovery;
    println!("Discovering walks from {}", origin);
    println!(
        "  Target {} km, accepting {}-{} km of walking",
        band.target_km, band.min_km, band.max_km
    );
    println!();

    let result = with_interrupt(
        &session,
        session.add_marker_with(origin, None, print_discovery),
    )
    .await;

    finish(&session, result, args.geojson.as_deref())
}
