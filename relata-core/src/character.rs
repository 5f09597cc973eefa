//! Character identity types.
//!
//! A [`Character`] is the immutable `(name, external id)` pair a movie's
//! roster lists for one credited character. Equality and hashing are by the
//! whole pair: two roster rows sharing an external id but spelling the name
//! differently count as distinct characters, because span matching keys off
//! the name text.

use serde::{Deserialize, Serialize};

/// A named character from one movie's roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    /// Character name as credited (whitespace-tokenized for matching).
    pub name: String,
    /// Opaque external identifier (e.g. a Freebase character id).
    pub id: String,
}

impl Character {
    /// Create a new character identity.
    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// One row of a movie's character roster, as ingested.
///
/// The name may be missing in the upstream metadata; such rows carry an id
/// but can never be matched against text and are dropped when the name
/// index is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Credited character name, if the metadata records one.
    pub name: Option<String>,
    /// Opaque external identifier for the character.
    pub id: String,
}

impl RosterEntry {
    /// Create a roster entry with a known name.
    #[must_use]
    pub fn named(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: id.into(),
        }
    }

    /// Create a roster entry whose name is missing upstream.
    #[must_use]
    pub fn unnamed(id: impl Into<String>) -> Self {
        Self {
            name: None,
            id: id.into(),
        }
    }
}
