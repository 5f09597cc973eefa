//! CLI for the relata binary.
//!
//! Argument parsing and command routing; the command implementations live
//! in their own submodules.

mod extract;
mod inspect;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

pub use extract::ExtractArgs;
pub use inspect::InspectArgs;

/// Character relation-bag extraction from parsed plot summaries.
#[derive(Parser)]
#[command(name = "relata")]
#[command(
    author,
    version,
    about = "Character relation-bag extraction from parsed plot summaries",
    long_about = "\
relata - per-movie character relation bags

Reads the interim CSV exports of a dependency-parsed, coreference-annotated
plot summary corpus, resolves which token spans refer to which credited
character, and collects each character's (relation label, lemma) bag.

EXAMPLES:
  relata extract -i ./data/interim -o ./data/processed --progress
  relata extract --movie-ids 330 975900
  relata inspect 330 -i ./data/interim"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build character bags for a batch of movies
    Extract(ExtractArgs),
    /// Run one movie and print its bag records to stdout
    Inspect(InspectArgs),
}

/// Parse arguments, dispatch, and map the outcome to an exit code.
#[must_use]
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Extract(args) => extract::run(args),
        Commands::Inspect(args) => inspect::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
