//! Output and session helpers shared by the discovery commands.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use walkflag::discovery::Discovery;
use walkflag::export::FeatureCollection;
use walkflag::session::{Placement, SessionError};

use crate::error::CliError;
use crate::runner::LiveSession;

/// Print one accepted direction as soon as it arrives.
pub fn print_discovery(discovery: &Discovery) {
    let flag = &discovery.flag;
    println!(
        "  {:<5}  {:>5.2} km  {}",
        flag.direction.as_str(),
        flag.distance_km,
        flag.place_name
    );
    println!(
        "         ({:.5}, {:.5}, {} route points)",
        flag.position.lat(),
        flag.position.lon(),
        discovery.route.polyline().len()
    );
}

/// Print the closing line for a finished placement.
pub fn print_summary(placement: &Placement) {
    println!();
    match placement.discoveries.len() {
        0 => println!("No walkable destinations found in the accepted range."),
        1 => println!("Found 1 destination."),
        n => println!("Found {} destinations.", n),
    }
}

/// Run a session operation, cancelling the discovery on Ctrl-C.
pub async fn with_interrupt<T, Fut>(session: &Arc<LiveSession>, operation: Fut) -> T
where
    Fut: Future<Output = T>,
{
    let watcher = {
        let session = Arc::clone(session);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!();
                eprintln!("Cancelling...");
                session.cancel_discovery();
            }
        })
    };

    let result = operation.await;
    watcher.abort();
    result
}

/// Write the session as GeoJSON when a path was requested.
///
/// Called even after a cancelled discovery, so flags found before the
/// interruption are kept.
pub fn export_if_requested(session: &LiveSession, path: Option<&Path>) -> Result<(), CliError> {
    let Some(path) = path else {
        return Ok(());
    };

    let collection = FeatureCollection::from_session(session);
    collection
        .write_to(path)
        .map_err(|error| CliError::Export {
            path: path.to_path_buf(),
            error,
        })?;

    println!(
        "Wrote {} feature(s) to {}",
        collection.len(),
        path.display()
    );
    Ok(())
}

/// Export what was found, then report the placement outcome.
pub fn finish(
    session: &LiveSession,
    result: Result<Placement, SessionError>,
    geojson: Option<&Path>,
) -> Result<(), CliError> {
    let cancelled = matches!(
        result,
        Err(SessionError::Discovery(walkflag::discovery::DiscoveryError::Cancelled))
    );
    if result.is_ok() || cancelled {
        export_if_requested(session, geojson)?;
    }

    let placement = result?;
    print_summary(&placement);
    Ok(())
}
