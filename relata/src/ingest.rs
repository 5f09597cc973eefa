//! CSV ingest of one movie's interim files.
//!
//! The upstream conversion step splits the character metadata per movie and
//! flattens each CoreNLP-parsed summary into three CSV files:
//!
//! ```text
//! {input_dir}/character.metadata_{movie_id}.csv
//! {input_dir}/corenlp_plot_summaries/tokens_{movie_id}.csv
//! {input_dir}/corenlp_plot_summaries/dependencies_{movie_id}.csv
//! {input_dir}/corenlp_plot_summaries/coreferences_{movie_id}.csv
//! ```
//!
//! All files are headered; only the columns the pipeline consumes are
//! deserialized, the rest are ignored. Coreference row order is preserved;
//! chain boundaries are positional.
//!
//! Malformed rows are real errors ([`Error::Csv`]): they mean a broken
//! upstream export, not a movie with insufficient data.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use relata_core::{CorefMention, DependencyEdge, RosterEntry, Token};

use crate::error::{Error, Result};
use crate::pipeline::MovieAnnotations;

/// Subdirectory holding the per-movie CoreNLP CSV exports.
pub const CORENLP_SUBDIR: &str = "corenlp_plot_summaries";

const METADATA_PREFIX: &str = "character.metadata_";
const TOKENS_PREFIX: &str = "tokens_";

// ============================================================================
// Row formats
// ============================================================================

#[derive(Debug, Deserialize)]
struct RosterRow {
    character_name: Option<String>,
    freebase_character_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenRow {
    sentence_id: u32,
    token_id: u32,
    word: String,
    lemma: String,
}

#[derive(Debug, Deserialize)]
struct DependencyRow {
    sentence_id: u32,
    #[serde(rename = "type")]
    dep_type: String,
    governor_idx: u32,
    dependent_idx: u32,
}

#[derive(Debug, Deserialize)]
struct CorefRow {
    representative: bool,
    sentence_id: u32,
    head: u32,
}

// ============================================================================
// Readers
// ============================================================================

/// Read a movie's roster file.
pub fn read_roster(path: &Path) -> Result<Vec<RosterEntry>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut roster = Vec::new();
    for row in reader.deserialize() {
        let row: RosterRow = row?;
        roster.push(RosterEntry {
            name: row.character_name,
            id: row.freebase_character_id.unwrap_or_default(),
        });
    }
    Ok(roster)
}

/// Read a movie's token file, in arrival order.
pub fn read_tokens(path: &Path) -> Result<Vec<Token>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut tokens = Vec::new();
    for row in reader.deserialize() {
        let row: TokenRow = row?;
        tokens.push(Token {
            sentence_id: row.sentence_id,
            token_id: row.token_id,
            word: row.word,
            lemma: row.lemma,
        });
    }
    Ok(tokens)
}

/// Read a movie's dependency file.
///
/// The surface-form columns (`governor`, `dependent`) are ignored; the
/// `*_idx` columns are the token ids.
pub fn read_dependencies(path: &Path) -> Result<Vec<DependencyEdge>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut edges = Vec::new();
    for row in reader.deserialize() {
        let row: DependencyRow = row?;
        edges.push(DependencyEdge {
            sentence_id: row.sentence_id,
            dep_type: row.dep_type,
            governor: row.governor_idx,
            dependent: row.dependent_idx,
        });
    }
    Ok(edges)
}

/// Read a movie's coreference file, preserving row order.
pub fn read_coreferences(path: &Path) -> Result<Vec<CorefMention>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        let row: CorefRow = row?;
        rows.push(CorefMention {
            representative: row.representative,
            sentence_id: row.sentence_id,
            head: row.head,
        });
    }
    Ok(rows)
}

/// Load all four record files for one movie.
pub fn load_movie(input_dir: &Path, movie_id: &str) -> Result<MovieAnnotations> {
    let corenlp = input_dir.join(CORENLP_SUBDIR);
    Ok(MovieAnnotations {
        roster: read_roster(&input_dir.join(format!("{METADATA_PREFIX}{movie_id}.csv")))?,
        tokens: read_tokens(&corenlp.join(format!("{TOKENS_PREFIX}{movie_id}.csv")))?,
        dependencies: read_dependencies(&corenlp.join(format!("dependencies_{movie_id}.csv")))?,
        coreferences: read_coreferences(&corenlp.join(format!("coreferences_{movie_id}.csv")))?,
    })
}

// ============================================================================
// Discovery
// ============================================================================

/// Movie ids present in both the metadata split and the CoreNLP export.
///
/// Not every movie in the metadata has a parsed summary, and vice versa, so
/// the usable universe is the intersection. Returned sorted so a limited
/// run is deterministic.
pub fn discover_movie_ids(input_dir: &Path) -> Result<Vec<String>> {
    if !input_dir.is_dir() {
        return Err(Error::invalid_input(format!(
            "input directory not found: {}",
            input_dir.display()
        )));
    }

    let metadata_ids = ids_in_dir(input_dir, METADATA_PREFIX)?;
    let token_ids = ids_in_dir(&input_dir.join(CORENLP_SUBDIR), TOKENS_PREFIX)?;

    let mut ids: Vec<String> = metadata_ids.intersection(&token_ids).cloned().collect();
    ids.sort();
    Ok(ids)
}

/// Collect the `{prefix}{id}.csv` ids in one directory.
fn ids_in_dir(dir: &Path, prefix: &str) -> Result<HashSet<String>> {
    let mut ids = HashSet::new();
    for entry in std::fs::read_dir(dir)? {
        let path: PathBuf = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(id) = name
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(".csv"))
        {
            if !id.is_empty() {
                ids.insert(id.to_string());
            }
        }
    }
    Ok(ids)
}
