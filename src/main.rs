//! kmlkit - KML and KMZ builder

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;

use kmlkit::route::{build_route, parse_waypoints};
use kmlkit::{DOC_KML, Element, Payload, write_kmz};

#[derive(Parser)]
#[command(name = "kmlkit")]
#[command(version, about = "Build KML and KMZ files", long_about = None)]
#[command(after_help = "EXAMPLES:
    kmlkit route waypoints.csv task.kml A01 B02 C03    Route through three turnpoints
    kmlkit route waypoints.csv task.kmz A01 C03        Same, packaged as KMZ")]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a route through waypoints picked from a waypoint file
    Route {
        /// Waypoint file with `id,lon,lat,alt,description` lines
        #[arg(value_name = "WAYPOINTS")]
        waypoints: PathBuf,

        /// Output file (.kml or .kmz)
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Turnpoint ids, in route order
        #[arg(value_name = "IDS")]
        ids: Vec<String>,

        /// Document name
        #[arg(long, default_value = "Route")]
        name: String,

        /// Indentation per nesting level; empty for compact output
        #[arg(long, default_value = "  ")]
        indent: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    let level = match cli.verbose {
        0 => None,
        1 => Some(log::LevelFilter::Info),
        2 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    };
    if let Some(level) = level {
        logger.filter_level(level);
    }
    logger.init();

    let result = match cli.command {
        Command::Route {
            waypoints,
            output,
            ids,
            name,
            indent,
        } => route(&waypoints, &output, &ids, &name, &indent),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn route(
    waypoints: &Path,
    output: &Path,
    ids: &[String],
    name: &str,
    indent: &str,
) -> kmlkit::Result<()> {
    let input = fs::read_to_string(waypoints)?;
    let records = parse_waypoints(&input)?;
    info!("read {} waypoints from {}", records.len(), waypoints.display());
    let doc = build_route(name, &records, ids)?;

    let file = BufWriter::new(File::create(output)?);
    let is_kmz = output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("kmz"));
    if is_kmz {
        write_kmz(file, [(DOC_KML, Payload::from(doc))])?;
    } else {
        doc.write_indent(file, "", indent)?;
    }
    info!("wrote {}", output.display());
    Ok(())
}
