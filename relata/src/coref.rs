//! Coreference-chain propagation of character identity.
//!
//! The mention rows arrive as a flat, ordered stream; a representative row
//! opens a chain and every following non-representative row belongs to it.
//! Propagation is a two-state scan over that stream:
//!
//! - on a representative row, look its head token up in the map: resolving
//!   to a character switches to `Propagating` with that character,
//!   otherwise the whole chain is dropped (`Idle`);
//! - while propagating, every member row's head token is written (or
//!   overwritten) with the chain's character.
//!
//! Chains are processed in input order, so a later chain that reassigns a
//! token wins. A chain whose representative is itself an unmatched pronoun
//! is dropped even if a later member coincides with a known character span;
//! identity only ever flows from representative to members.

use relata_core::{Character, CorefMention, MentionSpan, TokenCharacterMap};

/// Expand mention spans into the initial token→character map.
///
/// Every token id in a span's inclusive range maps to the span's character.
#[must_use]
pub fn seed_token_map(mentions: &[MentionSpan]) -> TokenCharacterMap {
    let mut map = TokenCharacterMap::new();
    for mention in mentions {
        for token_id in mention.token_ids() {
            map.insert((mention.sentence_id, token_id), mention.character.clone());
        }
    }
    map
}

enum State {
    Idle,
    Propagating(Character),
}

/// Extend the map with every chain anchored on a recognized character.
pub fn propagate(map: &mut TokenCharacterMap, rows: &[CorefMention]) {
    let mut state = State::Idle;
    for row in rows {
        if row.representative {
            // The representative's own mapping is left as the matcher set it.
            state = match map.get(&(row.sentence_id, row.head)) {
                Some(character) => State::Propagating(character.clone()),
                None => State::Idle,
            };
        } else if let State::Propagating(character) = &state {
            map.insert((row.sentence_id, row.head), character.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(sentence_id: u32, start: u32, end: u32, name: &str, id: &str) -> MentionSpan {
        MentionSpan {
            sentence_id,
            start,
            end,
            character: Character::new(name, id),
        }
    }

    fn rep(sentence_id: u32, head: u32) -> CorefMention {
        CorefMention {
            representative: true,
            sentence_id,
            head,
        }
    }

    fn member(sentence_id: u32, head: u32) -> CorefMention {
        CorefMention {
            representative: false,
            sentence_id,
            head,
        }
    }

    #[test]
    fn test_seed_expands_inclusive_range() {
        let map = seed_token_map(&[span(1, 0, 1, "John Smith", "a")]);

        assert_eq!(map.len(), 2);
        assert_eq!(map[&(1, 0)].id, "a");
        assert_eq!(map[&(1, 1)].id, "a");
    }

    #[test]
    fn test_chain_propagates_from_representative() {
        let mut map = seed_token_map(&[span(1, 0, 1, "Alice", "c1")]);
        let rows = vec![rep(1, 0), member(1, 5), member(2, 3)];

        propagate(&mut map, &rows);
        assert_eq!(map[&(1, 5)].id, "c1");
        assert_eq!(map[&(2, 3)].id, "c1");
    }

    #[test]
    fn test_unresolved_representative_drops_whole_chain() {
        let mut map = seed_token_map(&[span(1, 0, 0, "Alice", "c1")]);
        // Representative at an unmatched token; a member even lands on
        // Alice's own span, which must stay untouched and claim nothing.
        let rows = vec![rep(3, 7), member(1, 0), member(2, 4)];

        propagate(&mut map, &rows);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&(1, 0)].id, "c1");
        assert!(!map.contains_key(&(2, 4)));
    }

    #[test]
    fn test_later_chain_overwrites_earlier() {
        let mut map = seed_token_map(&[
            span(1, 0, 0, "Alice", "c1"),
            span(2, 0, 0, "Bob", "c2"),
        ]);
        let rows = vec![
            rep(1, 0),
            member(5, 1),
            rep(2, 0),
            member(5, 1), // same token, reassigned by the later chain
        ];

        propagate(&mut map, &rows);
        assert_eq!(map[&(5, 1)].id, "c2");
    }

    #[test]
    fn test_dropped_chain_resets_state() {
        let mut map = seed_token_map(&[span(1, 0, 0, "Alice", "c1")]);
        // First chain resolves, second does not; the second chain's members
        // must not inherit Alice from the first.
        let rows = vec![rep(1, 0), member(4, 2), rep(9, 9), member(4, 8)];

        propagate(&mut map, &rows);
        assert_eq!(map[&(4, 2)].id, "c1");
        assert!(!map.contains_key(&(4, 8)));
    }

    #[test]
    fn test_members_before_any_representative_ignored() {
        let mut map = seed_token_map(&[span(1, 0, 0, "Alice", "c1")]);
        let rows = vec![member(2, 2), member(2, 3)];

        propagate(&mut map, &rows);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_empty_rows_is_a_no_op() {
        let mut map = seed_token_map(&[span(1, 0, 0, "Alice", "c1")]);
        propagate(&mut map, &[]);
        assert_eq!(map.len(), 1);
    }
}
