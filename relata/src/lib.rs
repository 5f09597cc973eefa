//! # relata
//!
//! Per-movie character relation-bag extraction from dependency-parsed,
//! coreference-annotated plot summaries.
//!
//! Given a movie's character roster, tokenized sentences, dependency edges,
//! and coreference chains - all pre-computed upstream - the pipeline works
//! out which token spans refer to which character and collects each
//! character's bag of `(relation label, lemma)` pairs:
//!
//! 1. **Name index** ([`index`]): every unambiguous contiguous sub-tuple of
//!    every roster name becomes a lookup key.
//! 2. **Span matching** ([`matcher`]): greedy, longest-first,
//!    non-overlapping matching of those keys against sentence tokens.
//! 3. **Coreference propagation** ([`coref`]): chains anchored on a matched
//!    span extend the character to every member mention.
//! 4. **Relation extraction** ([`relations`]): dependency edges touching a
//!    character token are classified into agent-verb / patient-verb /
//!    attribute observations.
//!
//! Core types (`Character`, `Token`, `CharacterBags`, etc.) live in
//! `relata-core` and are re-exported here.
//!
//! # Example
//!
//! ```rust
//! use relata::pipeline::{resolve, MovieAnnotations};
//! use relata_core::{Character, DependencyEdge, RelationLabel, RosterEntry, Token};
//!
//! let movie = MovieAnnotations {
//!     roster: vec![RosterEntry::named("Alice", "c1")],
//!     tokens: vec![
//!         Token { sentence_id: 1, token_id: 0, word: "Alice".into(), lemma: "Alice".into() },
//!         Token { sentence_id: 1, token_id: 1, word: "died".into(), lemma: "die".into() },
//!     ],
//!     dependencies: vec![DependencyEdge {
//!         sentence_id: 1,
//!         dep_type: "nsubj".into(),
//!         governor: 1,
//!         dependent: 0,
//!     }],
//!     coreferences: vec![],
//! };
//!
//! let bags = resolve(&movie).unwrap();
//! let bag = bags.get(&Character::new("Alice", "c1")).unwrap();
//! assert!(bag.contains(&(RelationLabel::AgentVerb, "die".to_string())));
//! ```
//!
//! Processing is strictly per movie: every run owns its inputs and outputs
//! and shares nothing, so batches parallelize without coordination (see
//! [`driver`]).

#![warn(missing_docs)]

pub mod coref;
pub mod driver;
pub mod error;
pub mod index;
pub mod ingest;
pub mod matcher;
pub mod pipeline;
pub mod relations;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use index::NameIndex;
pub use pipeline::{resolve, MovieAnnotations, Skip};

// Re-export relata-core types for convenience.
pub use relata_core::{
    BagRecord, Character, CharacterBag, CharacterBags, CorefMention, DependencyEdge, MentionSpan,
    RelationLabel, RosterEntry, Sentence, SentenceId, Token, TokenCharacterMap, TokenId, TokenKey,
};
