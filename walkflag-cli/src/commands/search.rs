//! Search command - place a marker at a searched place and discover around it.

use std::path::PathBuf;

use super::common::{finish, print_discovery, with_interrupt};
use crate::error::CliError;
use crate::runner::{CliRunner, LiveSession};

/// Arguments for the search command.
pub struct SearchArgs {
    pub query: String,
    pub geojson: Option<PathBuf>,
    pub debug: bool,
}

/// Run the search command.
pub async fn run(args: SearchArgs) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(args.debug)?;
    runner.log_startup("search");
    let session = runner.create_session()?;

    println!("Searching for '{}'", args.query.trim());

    let mut announced = false;
    let mut announce = |session: &LiveSession| {
        if !announced {
            if let Some(marker) = session.markers().last() {
                println!("  Found {} ({})", marker.name, marker.position);
                println!();
            }
            announced = true;
        }
    };

    let result = with_interrupt(
        &session,
        session.search_and_add_with(&args.query, |discovery| {
            announce(&session);
            print_discovery(discovery);
        }),
    )
    .await;
    announce(&session);

    finish(&session, result, args.geojson.as_deref())
}
