//! Precomputed policy tables.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use core::fmt;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
#[cfg(feature = "std")]
use std::collections::HashMap;
#[cfg(feature = "std")]
use std::path::Path;

use crate::error::PolicyError;
use crate::state::StateKey;

use super::Action;

/// Scores of the two actions available in a state.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ActionScores {
    /// Score of drawing another card.
    pub hit: f64,
    /// Score of keeping the current total.
    pub stand: f64,
}

impl ActionScores {
    /// Returns the better action. Hit must score strictly higher; a tie
    /// stands.
    #[must_use]
    pub fn best(&self) -> Action {
        if self.hit > self.stand {
            Action::Hit
        } else {
            Action::Stand
        }
    }
}

/// Document entries keyed by their raw text, each key appearing once.
struct RawEntries(BTreeMap<String, ActionScores>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawEntriesVisitor;

        impl<'de> Visitor<'de> for RawEntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an object mapping state keys to hit and stand scores")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = BTreeMap::new();
                while let Some((key, scores)) = map.next_entry::<String, ActionScores>()? {
                    if entries.contains_key(&key) {
                        return Err(de::Error::custom(format!("duplicate state key {key:?}")));
                    }
                    entries.insert(key, scores);
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(RawEntriesVisitor)
    }
}

/// A read-only mapping from states to action scores.
///
/// Tables are built once, from a JSON document or an iterator, and never
/// mutated afterwards, so a shared reference can be handed to any number of
/// readers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyTable {
    entries: HashMap<StateKey, ActionScores>,
    /// Document keys that were not valid state keys.
    skipped: usize,
}

impl PolicyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a policy document.
    ///
    /// The document is a JSON object whose keys are state keys such as
    /// `"(13, 2, False)"` and whose values hold numeric `hit` and `stand`
    /// fields. Keys that are not in canonical state-key form can never be
    /// looked up; they are skipped with a warning and counted in
    /// [`PolicyTable::skipped`].
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Json`] if the text is not such an object or if
    /// a key appears more than once.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcoach::{PolicyTable, StateKey};
    ///
    /// let table = PolicyTable::from_json(r#"{"(18, 10, True)": {"hit": 0.4, "stand": 0.6}}"#)?;
    /// assert!(table.get(&StateKey::new(18, 10, true)).is_some());
    /// # Ok::<(), bjcoach::PolicyError>(())
    /// ```
    pub fn from_json(text: &str) -> Result<Self, PolicyError> {
        let RawEntries(raw) = serde_json::from_str(text).map_err(PolicyError::Json)?;

        let mut entries = HashMap::new();
        let mut skipped = 0;
        for (key, scores) in raw {
            match key.parse::<StateKey>() {
                Ok(state) => {
                    entries.insert(state, scores);
                }
                Err(err) => {
                    log::warn!("skipping policy entry: {err}");
                    skipped += 1;
                }
            }
        }

        Ok(Self { entries, skipped })
    }

    /// Reads and parses a policy document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Io`] if the file cannot be read and
    /// [`PolicyError::Json`] if it cannot be parsed.
    #[cfg(feature = "std")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Returns the scores for `state`, if present.
    #[must_use]
    pub fn get(&self, state: &StateKey) -> Option<&ActionScores> {
        self.entries.get(state)
    }

    /// Returns the number of states in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table holds no states.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns how many document keys were skipped while parsing.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, &ActionScores)> {
        self.entries.iter()
    }
}

impl FromIterator<(StateKey, ActionScores)> for PolicyTable {
    fn from_iter<I: IntoIterator<Item = (StateKey, ActionScores)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            skipped: 0,
        }
    }
}
