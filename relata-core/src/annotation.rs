//! Annotation records for one movie's parsed plot summary.
//!
//! Tokenization, dependency parsing, and coreference resolution all happen
//! upstream; this module only models the already-computed records the
//! pipeline consumes, plus the two derived views it builds from them:
//! sentence-grouped token arrays ([`Sentence`]) and the per-movie
//! [`TokenCharacterMap`].

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::character::Character;

/// Sentence identifier, unique within one movie's summary.
pub type SentenceId = u32;

/// Token identifier, local to a sentence. Strictly increasing within a
/// sentence but not necessarily contiguous.
pub type TokenId = u32;

/// Position of one token within the movie: `(sentence_id, token_id)`.
pub type TokenKey = (SentenceId, TokenId);

/// Per-movie map from token position to the character it refers to.
///
/// Seeded from mention spans, then extended by coreference propagation.
/// One owned map per movie-processing call; there is no shared or global
/// instance.
pub type TokenCharacterMap = HashMap<TokenKey, Character>;

// ============================================================================
// Input records
// ============================================================================

/// One token of the parsed summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Sentence the token belongs to.
    pub sentence_id: SentenceId,
    /// Token id within the sentence.
    pub token_id: TokenId,
    /// Surface form, matched verbatim (case-sensitive) against name parts.
    pub word: String,
    /// Dictionary base form; lower-cased before use by the extractor.
    pub lemma: String,
}

/// One directed syntactic dependency edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// Sentence the edge belongs to.
    pub sentence_id: SentenceId,
    /// Dependency type, e.g. `nsubj`, `dobj`, `prep_with`.
    pub dep_type: String,
    /// Token id of the governor (head word).
    pub governor: TokenId,
    /// Token id of the dependent (attached word).
    pub dependent: TokenId,
}

/// One coreference mention row.
///
/// Chain boundaries are positional: a `representative` row opens a chain,
/// and every following non-representative row up to the next representative
/// belongs to that chain. There is no explicit chain identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorefMention {
    /// Whether this row is the representative mention of its chain.
    pub representative: bool,
    /// Sentence of the mention's head token.
    pub sentence_id: SentenceId,
    /// Head token id of the mention.
    pub head: TokenId,
}

// ============================================================================
// Derived views
// ============================================================================

/// One sentence's tokens as parallel word / token-id arrays.
///
/// The matcher slides windows over `words` and reads the committed span's
/// boundaries out of `token_ids`, so the two vectors are always the same
/// length and in token order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Sentence identifier.
    pub id: SentenceId,
    /// Surface forms, in token order.
    pub words: Vec<String>,
    /// Token ids parallel to `words`.
    pub token_ids: Vec<TokenId>,
}

impl Sentence {
    /// Number of tokens in the sentence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the sentence has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Group a movie's tokens into sentences, in sorted sentence-id order.
///
/// Token arrival order is preserved within each sentence.
#[must_use]
pub fn group_sentences(tokens: &[Token]) -> Vec<Sentence> {
    let mut grouped: BTreeMap<SentenceId, Sentence> = BTreeMap::new();
    for token in tokens {
        let sentence = grouped.entry(token.sentence_id).or_insert_with(|| Sentence {
            id: token.sentence_id,
            words: Vec::new(),
            token_ids: Vec::new(),
        });
        sentence.words.push(token.word.clone());
        sentence.token_ids.push(token.token_id);
    }
    grouped.into_values().collect()
}

/// A maximal, non-overlapping match of a character name against consecutive
/// tokens of one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionSpan {
    /// Sentence the span lies in.
    pub sentence_id: SentenceId,
    /// First token id of the span.
    pub start: TokenId,
    /// Last token id of the span (inclusive).
    pub end: TokenId,
    /// Character the span refers to.
    pub character: Character,
}

impl MentionSpan {
    /// Token ids covered by this span, inclusive on both ends.
    pub fn token_ids(&self) -> impl Iterator<Item = TokenId> {
        self.start..=self.end
    }
}
