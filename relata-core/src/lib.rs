//! # relata-core
//!
//! Core types for the relata toolbox: shared data structures used by the
//! resolution pipeline and its consumers.
//!
//! This crate provides:
//! - **Characters**: [`Character`], [`RosterEntry`]
//! - **Annotations**: [`Token`], [`Sentence`], [`DependencyEdge`], [`CorefMention`],
//!   [`MentionSpan`], and the per-movie [`TokenCharacterMap`]
//! - **Relations**: [`RelationLabel`], [`CharacterBags`], [`BagRecord`]
//!
//! Everything here is plain data: created fresh per movie-processing call,
//! owned by that call, and dropped (or serialized) when it returns.

#![warn(missing_docs)]

pub mod annotation;
pub mod character;
pub mod relation;

// Re-exports for convenience
pub use annotation::{
    group_sentences, CorefMention, DependencyEdge, MentionSpan, Sentence, SentenceId, Token,
    TokenCharacterMap, TokenId, TokenKey,
};
pub use character::{Character, RosterEntry};
pub use relation::{BagRecord, CharacterBag, CharacterBags, RelationLabel};
