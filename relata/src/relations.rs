//! Dependency-edge classification into per-character relation bags.
//!
//! Every edge is tested twice, independently: once with the governor as the
//! candidate character and once with the dependent. Whichever side resolves
//! through the token→character map contributes the *other* side's lemma to
//! that character's bag, under the label the edge type classifies to.

use std::collections::HashMap;

use relata_core::{CharacterBags, DependencyEdge, RelationLabel, Token, TokenCharacterMap, TokenKey};

/// Classify a dependency type for a character at one end of the edge.
///
/// First match wins. `nsubj` also appears in both attribute lists, but the
/// agent-verb arm always claims it first, so the attribute arms only ever
/// see `appos`, `amod`, and `nn`.
#[must_use]
pub fn classify(dep_type: &str, character_is_governor: bool) -> Option<RelationLabel> {
    if matches!(dep_type, "nsubj" | "agent") {
        return Some(RelationLabel::AgentVerb);
    }
    if matches!(dep_type, "dobj" | "nsubjpass" | "iobj") || dep_type.starts_with("prep_") {
        return Some(RelationLabel::PatientVerb);
    }
    if character_is_governor && matches!(dep_type, "nsubj" | "appos" | "amod" | "nn") {
        return Some(RelationLabel::Attribute);
    }
    if !character_is_governor && matches!(dep_type, "nsubj" | "appos") {
        return Some(RelationLabel::Attribute);
    }
    None
}

/// Collect `(label, lemma)` pairs for every character token touched by an edge.
///
/// Lemmas are looked up lower-cased from the movie's tokens; edges whose far
/// end has no token record, or an empty lemma, contribute nothing.
#[must_use]
pub fn extract(
    map: &TokenCharacterMap,
    edges: &[DependencyEdge],
    tokens: &[Token],
) -> CharacterBags {
    let lemmas: HashMap<TokenKey, String> = tokens
        .iter()
        .map(|token| {
            (
                (token.sentence_id, token.token_id),
                token.lemma.to_lowercase(),
            )
        })
        .collect();

    let mut bags = CharacterBags::new();
    for edge in edges {
        record_side(&mut bags, map, &lemmas, edge, true);
        record_side(&mut bags, map, &lemmas, edge, false);
    }
    bags
}

/// Test one end of an edge for a character and record the far lemma.
fn record_side(
    bags: &mut CharacterBags,
    map: &TokenCharacterMap,
    lemmas: &HashMap<TokenKey, String>,
    edge: &DependencyEdge,
    character_is_governor: bool,
) {
    let (near, far) = if character_is_governor {
        (edge.governor, edge.dependent)
    } else {
        (edge.dependent, edge.governor)
    };

    let Some(character) = map.get(&(edge.sentence_id, near)) else {
        return;
    };
    let Some(label) = classify(&edge.dep_type, character_is_governor) else {
        return;
    };
    if let Some(lemma) = lemmas.get(&(edge.sentence_id, far)) {
        if !lemma.is_empty() {
            bags.add(character, label, lemma.clone());
        }
    }
}
