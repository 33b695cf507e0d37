// poimatch CLI - one-shot POI match scoring run

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use poimatch_cli::exit_codes::EXIT_SUCCESS;
use poimatch_cli::{pipeline, CliError};

/// Join two POI exports through their matching table and score every
/// match with a fuzzy name comparison.
///
/// Reads osm_poi.csv.gz, google_poi.csv.gz and
/// google_osm_poi_matching.csv.gz from the working directory; writes
/// out.csv and out.csv.gz next to them. No flags: paths and table
/// names are fixed for the run.
#[derive(Parser)]
#[command(name = "poimatch")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match pipeline::run(Path::new(".")) {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {message}");
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {hint}");
            }
            ExitCode::from(code)
        }
    }
}
