//! Unambiguous name-tuple index over one movie's roster.
//!
//! For every character, every contiguous sub-sequence of the
//! whitespace-split name parts is a candidate lookup key: the full name,
//! every shorter run, and every single word. A key survives into the index
//! only if exactly one distinct character claims it across the whole
//! roster; contested keys are dropped entirely rather than resolved in
//! anyone's favor.
//!
//! # Example
//!
//! ```rust
//! use relata::NameIndex;
//! use relata_core::RosterEntry;
//!
//! let roster = vec![
//!     RosterEntry::named("John Smith", "a"),
//!     RosterEntry::named("John Doe", "b"),
//! ];
//! let index = NameIndex::build(&roster);
//!
//! // "John" is claimed by both characters and resolves to neither.
//! assert!(index.get(&["John".to_string()]).is_none());
//! assert_eq!(
//!     index.get(&["John".to_string(), "Smith".to_string()]).unwrap().id,
//!     "a"
//! );
//! ```

use std::collections::{HashMap, HashSet};

use relata_core::{Character, RosterEntry};

/// Mapping from ordered name-part tuples to the single character each one
/// unambiguously identifies.
///
/// Built once per movie, immutable afterwards, discarded after matching.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    entries: HashMap<Vec<String>, Character>,
    max_tuple_len: usize,
}

impl NameIndex {
    /// Build the index from one movie's roster.
    ///
    /// Roster rows without a name are skipped; names that split into zero
    /// parts contribute nothing. An empty or entirely-ambiguous roster
    /// yields an empty index.
    #[must_use]
    pub fn build(roster: &[RosterEntry]) -> Self {
        // Multi-map pass: record every character claiming each tuple.
        let mut claims: HashMap<Vec<String>, HashSet<Character>> = HashMap::new();
        for entry in roster {
            let Some(name) = entry.name.as_deref() else {
                continue;
            };
            let parts: Vec<&str> = name.split_whitespace().collect();
            let n = parts.len();
            let character = Character::new(name, &entry.id);

            for len in (1..=n).rev() {
                for start in 0..=(n - len) {
                    let tuple: Vec<String> =
                        parts[start..start + len].iter().map(|p| (*p).to_string()).collect();
                    claims.entry(tuple).or_default().insert(character.clone());
                }
            }
        }

        // Keep only tuples claimed by exactly one distinct character.
        let entries: HashMap<Vec<String>, Character> = claims
            .into_iter()
            .filter_map(|(tuple, mut characters)| {
                if characters.len() == 1 {
                    characters.drain().next().map(|character| (tuple, character))
                } else {
                    None
                }
            })
            .collect();

        let max_tuple_len = entries.keys().map(Vec::len).max().unwrap_or(0);

        Self {
            entries,
            max_tuple_len,
        }
    }

    /// Character unambiguously identified by `words`, if any.
    #[must_use]
    pub fn get(&self, words: &[String]) -> Option<&Character> {
        self.entries.get(words)
    }

    /// Longest key in the index, in name parts. Zero for an empty index.
    #[must_use]
    pub fn max_tuple_len(&self) -> usize {
        self.max_tuple_len
    }

    /// Number of unambiguous tuples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tuple survived ambiguity filtering.
    ///
    /// An empty index means no match is possible for the movie.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_all_contiguous_subranges_indexed() {
        let roster = vec![RosterEntry::named("Jean Luc Picard", "c1")];
        let index = NameIndex::build(&roster);

        // 3 + 2 + 1 window sizes over three parts.
        assert_eq!(index.len(), 6);
        assert_eq!(index.max_tuple_len(), 3);
        assert!(index.get(&key(&["Jean", "Luc", "Picard"])).is_some());
        assert!(index.get(&key(&["Jean", "Luc"])).is_some());
        assert!(index.get(&key(&["Luc", "Picard"])).is_some());
        assert!(index.get(&key(&["Picard"])).is_some());
        // Non-contiguous pairs are never keys.
        assert!(index.get(&key(&["Jean", "Picard"])).is_none());
    }

    #[test]
    fn test_shared_part_is_dropped() {
        let roster = vec![
            RosterEntry::named("John Smith", "a"),
            RosterEntry::named("John Doe", "b"),
        ];
        let index = NameIndex::build(&roster);

        assert!(index.get(&key(&["John"])).is_none());
        assert_eq!(index.get(&key(&["John", "Smith"])).unwrap().id, "a");
        assert_eq!(index.get(&key(&["John", "Doe"])).unwrap().id, "b");
        assert_eq!(index.get(&key(&["Smith"])).unwrap().id, "a");
    }

    #[test]
    fn test_duplicate_roster_rows_stay_unambiguous() {
        // The same (name, id) pair listed twice is one character, not a tie.
        let roster = vec![
            RosterEntry::named("Alice", "c1"),
            RosterEntry::named("Alice", "c1"),
        ];
        let index = NameIndex::build(&roster);

        assert_eq!(index.get(&key(&["Alice"])).unwrap().id, "c1");
    }

    #[test]
    fn test_same_name_different_id_is_a_tie() {
        let roster = vec![
            RosterEntry::named("Alice", "c1"),
            RosterEntry::named("Alice", "c2"),
        ];
        let index = NameIndex::build(&roster);

        assert!(index.is_empty());
    }

    #[test]
    fn test_unnamed_entries_dropped() {
        let roster = vec![
            RosterEntry::unnamed("c1"),
            RosterEntry::named("Bob", "c2"),
        ];
        let index = NameIndex::build(&roster);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&key(&["Bob"])).unwrap().id, "c2");
    }

    #[test]
    fn test_empty_roster_yields_empty_index() {
        let index = NameIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.max_tuple_len(), 0);
    }
}
