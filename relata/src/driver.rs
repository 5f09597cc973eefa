//! Batch driver: many movies, one worker pool.
//!
//! Each movie's run is pure - it reads its own input files and writes its
//! own output file, with no state shared across movies - so the pool needs
//! no coordination beyond dispatching ids and counting results. A movie
//! that fails (soft skip or real error) is logged and counted as
//! unprocessed; it never aborts the batch.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::Result;
use crate::{ingest, pipeline};

/// Outcome counts of one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Movies whose bags were written.
    pub processed: usize,
    /// Movies attempted.
    pub total: usize,
}

/// Output path for one movie's bag records.
#[must_use]
pub fn output_path(output_dir: &Path, movie_id: &str) -> PathBuf {
    output_dir.join(format!("character_bags_{movie_id}.json"))
}

/// Process one movie end to end: ingest, resolve, write JSON records.
///
/// Returns `Ok(true)` if an output file was written, `Ok(false)` if the
/// movie was skipped for insufficient data (no file is written).
pub fn process_movie(input_dir: &Path, output_dir: &Path, movie_id: &str) -> Result<bool> {
    let annotations = ingest::load_movie(input_dir, movie_id)?;

    let bags = match pipeline::resolve(&annotations) {
        Ok(bags) => bags,
        Err(skip) => {
            log::debug!("[driver] movie {movie_id} skipped: {skip}");
            return Ok(false);
        }
    };

    let file = File::create(output_path(output_dir, movie_id))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &bags.to_records())?;
    writer.flush()?;
    Ok(true)
}

/// Process a batch of movies in parallel.
///
/// `on_done` is called once per movie (from worker threads) with the movie
/// id and whether its output was written - the hook for progress reporting.
pub fn process_movies(
    input_dir: &Path,
    output_dir: &Path,
    movie_ids: &[String],
    on_done: impl Fn(&str, bool) + Sync,
) -> BatchSummary {
    let processed = movie_ids
        .par_iter()
        .filter(|movie_id| {
            let written = match process_movie(input_dir, output_dir, movie_id) {
                Ok(written) => written,
                Err(err) => {
                    log::warn!("[driver] movie {movie_id} failed: {err}");
                    false
                }
            };
            on_done(movie_id, written);
            written
        })
        .count();

    BatchSummary {
        processed,
        total: movie_ids.len(),
    }
}
