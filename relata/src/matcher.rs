//! Greedy span matching of indexed name tuples against sentence tokens.
//!
//! Each sentence is scanned with window sizes from the index's longest key
//! down to one word, left to right within a window size. Positions consumed
//! by a committed span are skipped by every later window, so:
//!
//! - no two spans in a sentence overlap,
//! - a multi-part name always beats its own sub-names at the same position,
//! - disjoint equal-length matches are all kept; only overlapping ones race,
//!   and the leftmost wins.

use relata_core::{MentionSpan, Sentence};

use crate::index::NameIndex;

/// Scan all sentences for character mentions.
///
/// Returns the committed spans in scan order. An empty result means no
/// character name ever matched the summary.
#[must_use]
pub fn match_sentences(sentences: &[Sentence], index: &NameIndex) -> Vec<MentionSpan> {
    let mut spans = Vec::new();
    for sentence in sentences {
        match_sentence(sentence, index, &mut spans);
    }
    spans
}

/// Scan one sentence, longest window first.
fn match_sentence(sentence: &Sentence, index: &NameIndex, spans: &mut Vec<MentionSpan>) {
    let n = sentence.len();
    if n == 0 {
        return;
    }

    let mut consumed = vec![false; n];
    for width in (1..=index.max_tuple_len().min(n)).rev() {
        for start in 0..=(n - width) {
            if consumed[start..start + width].iter().any(|&taken| taken) {
                continue;
            }
            if let Some(character) = index.get(&sentence.words[start..start + width]) {
                spans.push(MentionSpan {
                    sentence_id: sentence.id,
                    start: sentence.token_ids[start],
                    end: sentence.token_ids[start + width - 1],
                    character: character.clone(),
                });
                consumed[start..start + width].fill(true);
            }
        }
    }
}
