//! `tn-convert` — convert Bar-Gera benchmark files for the solver and the
//! map viewer.
//!
//! Typical Sioux Falls session:
//!
//! ```text
//! tn-convert net   SiouxFalls_net.txt   SiouxFalls_net.csv
//! tn-convert trips SiouxFalls_trips.txt SiouxFalls_od.csv
//! tn-convert nodes SiouxFalls_node.tntp SiouxFalls_nodes.csv \
//!     --min-lon=-96.77 --max-lon=-96.67 --min-lat=43.48 --max-lat=43.62
//! tn-convert links-js SiouxFalls_net.txt SiouxFalls_nodes.csv links.js
//! ```
//!
//! Set `RUST_LOG=debug` for per-file counts.

mod commands;
mod logging;


use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use tn_spatial::{GeoBounds, JoinStrategy};

#[derive(Parser, Debug)]
#[command(name = "tn-convert")]
#[command(about = "Convert Bar-Gera network, trips and node files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Net file to canonical link CSV (LINK,A,B,a0..a4)
    Net { input: PathBuf, output: PathBuf },

    /// Trips file to canonical OD CSV (O,D,Ton)
    Trips { input: PathBuf, output: PathBuf },

    /// Planar node file to projected node CSV (node,lat,lon)
    Nodes {
        input:  PathBuf,
        output: PathBuf,
        #[command(flatten)]
        bounds: BoundsArgs,
    },

    /// Canonical OD CSV back to a trips file
    OdToTrips { input: PathBuf, output: PathBuf },

    /// Map script with one line feature per link
    LinksJs {
        net:    PathBuf,
        /// Projected node CSV
        nodes:  PathBuf,
        output: PathBuf,

        /// Headerless file with one color value per link
        #[arg(long)]
        colors: Option<PathBuf>,

        /// Headerless file with one line weight per link
        #[arg(long)]
        weights: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Strategy::Auto)]
        strategy: Strategy,
    },

    /// Map script with one desire line per OD pair
    DemandJs {
        /// Projected node CSV
        nodes:  PathBuf,
        od:     PathBuf,
        output: PathBuf,
    },

    /// Map script with one marker per node
    NodesJs {
        /// Projected node CSV
        nodes:  PathBuf,
        output: PathBuf,
    },

    /// Reorder raw solver output ([a, b, value] rows) onto canonical link order
    Results {
        raw:    PathBuf,
        /// Canonical link CSV
        links:  PathBuf,
        output: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct BoundsArgs {
    #[arg(long, allow_negative_numbers = true)]
    min_lon: f64,
    #[arg(long, allow_negative_numbers = true)]
    max_lon: f64,
    #[arg(long, allow_negative_numbers = true)]
    min_lat: f64,
    #[arg(long, allow_negative_numbers = true)]
    max_lat: f64,
}

impl From<BoundsArgs> for GeoBounds {
    fn from(b: BoundsArgs) -> Self {
        GeoBounds { min_lon: b.min_lon, max_lon: b.max_lon, min_lat: b.min_lat, max_lat: b.max_lat }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Auto,
    Ordered,
    Scanning,
}

impl From<Strategy> for JoinStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Auto => JoinStrategy::Auto,
            Strategy::Ordered => JoinStrategy::Ordered,
            Strategy::Scanning => JoinStrategy::Scanning,
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Net { input, output } => commands::net(&input, &output),
        Commands::Trips { input, output } => commands::trips(&input, &output),
        Commands::Nodes { input, output, bounds } => commands::nodes(&input, &output, bounds.into()),
        Commands::OdToTrips { input, output } => commands::od_to_trips(&input, &output),
        Commands::LinksJs { net, nodes, output, colors, weights, strategy } => commands::links_js(
            &net,
            &nodes,
            &output,
            colors.as_deref(),
            weights.as_deref(),
            strategy.into(),
        ),
        Commands::DemandJs { nodes, od, output } => commands::demand_js(&nodes, &od, &output),
        Commands::NodesJs { nodes, output } => commands::nodes_js(&nodes, &output),
        Commands::Results { raw, links, output } => commands::results(&raw, &links, &output),
    }
}

fn main() -> Result<()> {
    logging::log_init();
    run(Cli::parse())
}
