//! Relation labels and per-character relation bags.
//!
//! The extractor classifies each dependency edge touching a character token
//! into a [`RelationLabel`] and collects `(label, lemma)` pairs into that
//! character's bag. Bags are sets: repeated observations of the same pair
//! collapse to one entry.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::character::Character;

/// Role a dependency edge assigns to the lemma at its far end.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RelationLabel {
    /// The character is the agent of the verb (`nsubj`, `agent`).
    #[serde(rename = "agent verb")]
    AgentVerb,
    /// The character is the patient of the verb (`dobj`, `nsubjpass`,
    /// `iobj`, collapsed `prep_*`).
    #[serde(rename = "patient verb")]
    PatientVerb,
    /// The lemma describes the character (`appos`, `amod`, `nn`).
    #[serde(rename = "attribute")]
    Attribute,
}

impl RelationLabel {
    /// Wire name of the label, as serialized in bag records.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            RelationLabel::AgentVerb => "agent verb",
            RelationLabel::PatientVerb => "patient verb",
            RelationLabel::Attribute => "attribute",
        }
    }
}

impl std::fmt::Display for RelationLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One character's set of `(label, lemma)` observations.
pub type CharacterBag = HashSet<(RelationLabel, String)>;

/// All characters' relation bags for one movie.
///
/// Built by the extractor, discarded or serialized when the movie's
/// pipeline run returns. Insertion order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterBags {
    bags: HashMap<Character, CharacterBag>,
}

impl CharacterBags {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one `(label, lemma)` observation to a character's bag.
    ///
    /// Returns `false` if the pair was already present (set semantics).
    pub fn add(
        &mut self,
        character: &Character,
        label: RelationLabel,
        lemma: impl Into<String>,
    ) -> bool {
        self.bags
            .entry(character.clone())
            .or_default()
            .insert((label, lemma.into()))
    }

    /// Bag for one character, if any observation was recorded.
    #[must_use]
    pub fn get(&self, character: &Character) -> Option<&CharacterBag> {
        self.bags.get(character)
    }

    /// Number of characters with at least one observation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bags.len()
    }

    /// Whether no observation was recorded for any character.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bags.is_empty()
    }

    /// Iterate over `(character, bag)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Character, &CharacterBag)> {
        self.bags.iter()
    }

    /// Flatten into serializable records, sorted by `(name, id)` with each
    /// bag sorted by `(label, lemma)`.
    ///
    /// Sorting pins down the serialized form; the bags themselves stay
    /// unordered sets.
    #[must_use]
    pub fn to_records(&self) -> Vec<BagRecord> {
        let mut records: Vec<BagRecord> = self
            .bags
            .iter()
            .map(|(character, bag)| {
                let mut entries: Vec<(RelationLabel, String)> = bag.iter().cloned().collect();
                entries.sort();
                BagRecord {
                    name: character.name.clone(),
                    id: character.id.clone(),
                    bag: entries,
                }
            })
            .collect();
        records.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));
        records
    }
}

/// Serializable form of one character's bag: `{name, id, bag: [[label, lemma], ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BagRecord {
    /// Character name.
    pub name: String,
    /// Character external id.
    pub id: String,
    /// Sorted `(label, lemma)` pairs.
    pub bag: Vec<(RelationLabel, String)>,
}
