//! Extract command - batch processing.

use std::path::PathBuf;

use clap::Parser;

use crate::{driver, ingest};

/// Build character bags for a batch of movies.
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Directory containing the interim CSV files
    #[arg(short, long, value_name = "DIR", default_value = "./data/interim")]
    pub input_dir: PathBuf,

    /// Directory to write character bag files
    #[arg(short, long, value_name = "DIR", default_value = "./data/processed")]
    pub output_dir: PathBuf,

    /// Explicit movie ids to process (default: discover from the input directory)
    #[arg(long, value_name = "ID", num_args = 1..)]
    pub movie_ids: Vec<String>,

    /// Process at most N movies
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Show a progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress status messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the batch: discover or take explicit ids, process in parallel,
/// report the processed/total summary.
pub fn run(args: ExtractArgs) -> Result<(), String> {
    let mut movie_ids = if args.movie_ids.is_empty() {
        ingest::discover_movie_ids(&args.input_dir).map_err(|e| e.to_string())?
    } else {
        args.movie_ids.clone()
    };

    if let Some(limit) = args.limit {
        movie_ids.truncate(limit);
    }
    if movie_ids.is_empty() {
        return Err(format!(
            "no movies to process under {}",
            args.input_dir.display()
        ));
    }

    std::fs::create_dir_all(&args.output_dir)
        .map_err(|e| format!("cannot create {}: {e}", args.output_dir.display()))?;

    if !args.quiet {
        eprintln!("Processing {} movies", movie_ids.len());
    }

    let bar = if args.progress && !args.quiet {
        use indicatif::{ProgressBar, ProgressStyle};
        let bar = ProgressBar::new(movie_ids.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map_err(|e| format!("invalid progress template: {e}"))?;
        bar.set_style(style.progress_chars("#>-"));
        Some(bar)
    } else {
        None
    };

    let summary = driver::process_movies(
        &args.input_dir,
        &args.output_dir,
        &movie_ids,
        |movie_id, _written| {
            if let Some(bar) = &bar {
                bar.set_message(movie_id.to_string());
                bar.inc(1);
            }
        },
    );

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }
    if !args.quiet {
        eprintln!(
            "Built character bags for {}/{} movies",
            summary.processed, summary.total
        );
    }

    Ok(())
}
