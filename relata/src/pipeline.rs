//! Per-movie resolution pipeline.
//!
//! Linear orchestration of the four stages, with early-exit short-circuits:
//!
//! 1. build the unambiguous name index from the roster,
//! 2. match name tuples against sentence tokens,
//! 3. propagate identity through coreference chains,
//! 4. classify dependency edges into relation bags.
//!
//! A movie either makes it all the way through or is reported unprocessable
//! with a [`Skip`] reason; there is no partially-processed outcome. The run
//! is pure and deterministic - nothing is shared across movies, so callers
//! may process many movies concurrently without coordination.

use relata_core::{
    group_sentences, CharacterBags, CorefMention, DependencyEdge, RosterEntry, Token,
};

use crate::{coref, matcher, relations, NameIndex};

/// All upstream records for one movie, as ingested.
#[derive(Debug, Clone, Default)]
pub struct MovieAnnotations {
    /// Character roster rows, in metadata order.
    pub roster: Vec<RosterEntry>,
    /// Tokens of the parsed summary, in arrival order.
    pub tokens: Vec<Token>,
    /// Dependency edges.
    pub dependencies: Vec<DependencyEdge>,
    /// Coreference mention rows, in chain order (order-sensitive).
    pub coreferences: Vec<CorefMention>,
}

/// Reason a movie could not be processed.
///
/// These are soft failures - "insufficient data to proceed", not errors.
/// The batch driver records the movie as unprocessed and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// Roster empty, or every name missing or ambiguous.
    NoUsableRoster,
    /// No character name matched any sentence.
    NoMentionsFound,
    /// Mentions existed but no dependency edge produced a relation.
    NoRelationsFound,
}

impl Skip {
    /// Short description of the skip reason.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Skip::NoUsableRoster => "no usable names in roster",
            Skip::NoMentionsFound => "no mentions found",
            Skip::NoRelationsFound => "no relations found",
        }
    }
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Run the full pipeline for one movie.
///
/// Coreference input may be empty (propagation is then a no-op), but an
/// empty index, an empty mention list, or empty bags end the run early.
pub fn resolve(annotations: &MovieAnnotations) -> Result<CharacterBags, Skip> {
    let index = NameIndex::build(&annotations.roster);
    if index.is_empty() {
        return Err(Skip::NoUsableRoster);
    }

    let sentences = group_sentences(&annotations.tokens);
    let mentions = matcher::match_sentences(&sentences, &index);
    if mentions.is_empty() {
        return Err(Skip::NoMentionsFound);
    }

    let mut token_map = coref::seed_token_map(&mentions);
    coref::propagate(&mut token_map, &annotations.coreferences);

    let bags = relations::extract(&token_map, &annotations.dependencies, &annotations.tokens);
    if bags.is_empty() {
        return Err(Skip::NoRelationsFound);
    }

    Ok(bags)
}
