//! Action advice from a precomputed policy table.
//!
//! An [`Advisor`] is built once from a policy document. Loading never fails:
//! a missing or malformed document leaves the advisor with an empty table and
//! a [`LoadStatus::Degraded`] marker, and every lookup then answers
//! [`Recommendation::Unknown`].

use core::fmt;
#[cfg(feature = "std")]
use std::path::Path;

use crate::error::PolicyError;
use crate::state::StateKey;

mod table;

pub use table::{ActionScores, PolicyTable};

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw another card.
    Hit,
    /// Keep the current total.
    Stand,
}

impl Action {
    /// Returns the display name of the action.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Answer to a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    /// The table prefers hitting.
    Hit,
    /// The table prefers standing, or scores both equally.
    Stand,
    /// The state is not in the table.
    Unknown,
}

impl Recommendation {
    /// Returns `"Hit"`, `"Stand"` or `"Unknown"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns the recommended action, if there is one.
    #[must_use]
    pub const fn action(self) -> Option<Action> {
        match self {
            Self::Hit => Some(Action::Hit),
            Self::Stand => Some(Action::Stand),
            Self::Unknown => None,
        }
    }
}

impl From<Action> for Recommendation {
    fn from(action: Action) -> Self {
        match action {
            Action::Hit => Self::Hit,
            Action::Stand => Self::Stand,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a player's choice compares to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// The choice matches the recommended action.
    Correct(Action),
    /// The choice differs; carries the recommended action.
    Wrong(Action),
    /// The table has no entry for the state.
    NoEntry,
}

/// How the advisor's table came to be.
#[derive(Debug)]
pub enum LoadStatus {
    /// The table was parsed or supplied successfully. It may still be empty.
    Loaded,
    /// Loading failed and the advisor fell back to an empty table.
    Degraded(PolicyError),
}

impl LoadStatus {
    /// Returns whether loading failed.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}

/// Recommends hit or stand by looking states up in a [`PolicyTable`].
#[derive(Debug)]
pub struct Advisor {
    /// Table consulted by every lookup.
    table: PolicyTable,
    /// Outcome of building the table.
    status: LoadStatus,
}

impl Advisor {
    /// Creates an advisor over an already built table.
    #[must_use]
    pub const fn new(table: PolicyTable) -> Self {
        Self {
            table,
            status: LoadStatus::Loaded,
        }
    }

    /// Creates an advisor from a policy document.
    ///
    /// Never fails; see [`LoadStatus`].
    #[must_use]
    pub fn from_json(text: &str) -> Self {
        Self::from_load(PolicyTable::from_json(text))
    }

    /// Creates an advisor from a policy document on disk.
    ///
    /// Never fails; an unreadable or malformed file yields an empty table and
    /// [`LoadStatus::Degraded`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjcoach::{Advisor, Recommendation};
    ///
    /// let advisor = Advisor::load("does/not/exist.json");
    /// assert!(advisor.status().is_degraded());
    /// assert_eq!(advisor.recommend(16, 10, false), Recommendation::Unknown);
    /// ```
    #[cfg(feature = "std")]
    #[must_use]
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        log::debug!("loading policy table from {}", path.display());
        Self::from_load(PolicyTable::from_file(path))
    }

    fn from_load(loaded: Result<PolicyTable, PolicyError>) -> Self {
        match loaded {
            Ok(table) => {
                log::info!(
                    "policy table loaded with {} entries ({} skipped)",
                    table.len(),
                    table.skipped()
                );
                Self::new(table)
            }
            Err(err) => {
                log::warn!("policy table unavailable, advice disabled: {err}");
                Self {
                    table: PolicyTable::new(),
                    status: LoadStatus::Degraded(err),
                }
            }
        }
    }

    /// Returns the table consulted by lookups.
    #[must_use]
    pub const fn table(&self) -> &PolicyTable {
        &self.table
    }

    /// Returns how the table was built.
    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Recommends an action for a player total against a dealer upcard.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcoach::{Advisor, Recommendation};
    ///
    /// let advisor = Advisor::from_json(r#"{"(13, 2, False)": {"hit": 0.8, "stand": 0.2}}"#);
    /// assert_eq!(advisor.recommend(13, 2, false), Recommendation::Hit);
    /// ```
    #[must_use]
    pub fn recommend(&self, total: u16, dealer_up_card: u8, usable_ace: bool) -> Recommendation {
        self.recommend_for(StateKey::new(total, dealer_up_card, usable_ace))
    }

    /// Recommends an action for a state snapshot.
    #[must_use]
    pub fn recommend_for(&self, state: StateKey) -> Recommendation {
        log::debug!("looking up {state}");
        self.table
            .get(&state)
            .map_or(Recommendation::Unknown, |scores| scores.best().into())
    }

    /// Compares `chosen` against the table's recommendation for `state`.
    #[must_use]
    pub fn review(&self, state: StateKey, chosen: Action) -> Feedback {
        match self.recommend_for(state).action() {
            None => Feedback::NoEntry,
            Some(best) if best == chosen => Feedback::Correct(best),
            Some(best) => Feedback::Wrong(best),
        }
    }
}
