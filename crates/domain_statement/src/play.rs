//! Plays and the play catalog
//!
//! A play's billing category decides which pricing rules apply to its
//! performances. The catalog is supplied by the caller, keyed by play id,
//! and never modified by the statement pipeline.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use core_kernel::PlayId;

/// Billing category of a play
///
/// Tags other than `comedy` and `tragedy` are kept as `Unrecognized` so that
/// a catalog can still be loaded; pricing rejects them with
/// `StatementError::UnknownPlayType`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayType {
    Comedy,
    Tragedy,
    Unrecognized(String),
}

impl PlayType {
    /// Returns the catalog tag for this type
    pub fn as_str(&self) -> &str {
        match self {
            PlayType::Comedy => "comedy",
            PlayType::Tragedy => "tragedy",
            PlayType::Unrecognized(tag) => tag,
        }
    }

    /// Returns true if pricing rules exist for this type
    pub fn is_recognized(&self) -> bool {
        !matches!(self, PlayType::Unrecognized(_))
    }
}

impl From<&str> for PlayType {
    fn from(tag: &str) -> Self {
        PlayType::from(tag.to_string())
    }
}

impl From<String> for PlayType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "comedy" => PlayType::Comedy,
            "tragedy" => PlayType::Tragedy,
            _ => PlayType::Unrecognized(tag),
        }
    }
}

impl From<PlayType> for String {
    fn from(play_type: PlayType) -> Self {
        match play_type {
            PlayType::Unrecognized(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A theatrical work with its billing category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name used on statements
    pub name: String,
    /// Billing category
    #[serde(rename = "type")]
    pub play_type: PlayType,
}

impl Play {
    /// Creates a new play
    pub fn new(name: impl Into<String>, play_type: impl Into<PlayType>) -> Self {
        Self {
            name: name.into(),
            play_type: play_type.into(),
        }
    }

    /// Creates a comedy
    pub fn comedy(name: impl Into<String>) -> Self {
        Self::new(name, PlayType::Comedy)
    }

    /// Creates a tragedy
    pub fn tragedy(name: impl Into<String>) -> Self {
        Self::new(name, PlayType::Tragedy)
    }
}

/// Read-only lookup of plays by id
///
/// Plays are held behind `Arc` so enriched performances can share the
/// catalog entry instead of copying it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: BTreeMap<PlayId, Arc<Play>>,
}

impl PlayCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a play
    pub fn insert(&mut self, id: impl Into<PlayId>, play: Play) {
        self.plays.insert(id.into(), Arc::new(play));
    }

    /// Builder-style insert
    pub fn with_play(mut self, id: impl Into<PlayId>, play: Play) -> Self {
        self.insert(id, play);
        self
    }

    /// Looks up a play by id
    pub fn get(&self, id: &PlayId) -> Option<&Arc<Play>> {
        self.plays.get(id)
    }

    /// Returns true if the catalog contains the id
    pub fn contains(&self, id: &PlayId) -> bool {
        self.plays.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Iterates plays in id order
    pub fn iter(&self) -> impl Iterator<Item = (&PlayId, &Arc<Play>)> {
        self.plays.iter()
    }
}

impl<I: Into<PlayId>> FromIterator<(I, Play)> for PlayCatalog {
    fn from_iter<T: IntoIterator<Item = (I, Play)>>(iter: T) -> Self {
        let mut catalog = PlayCatalog::new();
        for (id, play) in iter {
            catalog.insert(id, play);
        }
        catalog
    }
}
