//! Inspect command - single-movie run to stdout.

use std::path::PathBuf;

use clap::Parser;

use crate::{ingest, pipeline};

/// Run one movie and print its bag records to stdout.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Movie id to process
    pub movie_id: String,

    /// Directory containing the interim CSV files
    #[arg(short, long, value_name = "DIR", default_value = "./data/interim")]
    pub input_dir: PathBuf,
}

/// Run one movie and pretty-print its records; a skipped movie is reported
/// as an error with its skip reason.
pub fn run(args: InspectArgs) -> Result<(), String> {
    let annotations = ingest::load_movie(&args.input_dir, &args.movie_id)
        .map_err(|e| format!("cannot load movie {}: {e}", args.movie_id))?;

    match pipeline::resolve(&annotations) {
        Ok(bags) => {
            let json = serde_json::to_string_pretty(&bags.to_records())
                .map_err(|e| format!("cannot serialize records: {e}"))?;
            println!("{json}");
            Ok(())
        }
        Err(skip) => Err(format!("movie {} not processed: {skip}", args.movie_id)),
    }
}
