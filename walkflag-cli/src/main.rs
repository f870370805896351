//! walkflag CLI - Command-line interface
//!
//! Finds walkable destinations about 5 km away in each cardinal direction
//! from a coordinate or a searched place.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::discover::DiscoverArgs;
use commands::search::SearchArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "walkflag")]
#[command(version = walkflag::VERSION)]
#[command(about = "Find walkable destinations around a point on the map", long_about = None)]
struct Cli {
    /// Enable debug logging to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover walking destinations around a coordinate
    Discover {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Write markers, flags and routes to this GeoJSON file
        #[arg(long)]
        geojson: Option<PathBuf>,
    },

    /// Search for a place and discover walking destinations around it
    Search {
        /// Place name or address
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Write markers, flags and routes to this GeoJSON file
        #[arg(long)]
        geojson: Option<PathBuf>,
    },

    /// View or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result: Result<(), CliError> = match cli.command {
        Commands::Discover { lat, lon, geojson } => {
            commands::discover::run(DiscoverArgs {
                lat,
                lon,
                geojson,
                debug: cli.debug,
            })
            .await
        }
        Commands::Search { query, geojson } => {
            commands::search::run(SearchArgs {
                query: query.join(" "),
                geojson,
                debug: cli.debug,
            })
            .await
        }
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
