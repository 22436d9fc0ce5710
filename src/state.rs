//! State snapshots and their policy-table key encoding.
//!
//! A state is the triple `(total, dealer upcard, usable ace)`. Policy tables
//! key it as text of the exact form `"(18, 10, True)"`: parentheses,
//! comma-space separators, decimal integers without sign or leading zeros,
//! and a capitalized boolean.

use core::fmt;
use core::str::FromStr;

use crate::error::PolicyError;
use crate::hand::Hand;

/// The decision-relevant state of one hand against the dealer's upcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    /// Hand total under the usable-ace rule.
    pub total: u16,
    /// Score value of the dealer's first card (Ace = 1).
    pub dealer_up_card: u8,
    /// Whether the hand counts an Ace as 11.
    pub usable_ace: bool,
}

impl StateKey {
    /// Creates a state key.
    #[must_use]
    pub const fn new(total: u16, dealer_up_card: u8, usable_ace: bool) -> Self {
        Self {
            total,
            dealer_up_card,
            usable_ace,
        }
    }

    /// Snapshots `hand` against the upcard of `dealer`.
    #[must_use]
    pub fn from_hands(hand: &Hand, dealer: &Hand) -> Self {
        let score = hand.score();
        Self::new(score.total, dealer.up_card_value(), score.usable_ace)
    }

    /// Returns the state as an integer triple, usable ace as 0 or 1.
    #[must_use]
    pub fn as_triple(&self) -> (u16, u8, u8) {
        (self.total, self.dealer_up_card, u8::from(self.usable_ace))
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ace = if self.usable_ace { "True" } else { "False" };
        write!(f, "({}, {}, {})", self.total, self.dealer_up_card, ace)
    }
}

/// Parses a canonical decimal integer: digits only, no sign, no leading zero.
fn parse_int<T: FromStr>(text: &str) -> Option<T> {
    let bytes = text.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    text.parse().ok()
}

impl FromStr for StateKey {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PolicyError::InvalidKey(s.into());

        let inner = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let mut parts = inner.splitn(3, ", ");
        let total = parts.next().and_then(parse_int).ok_or_else(invalid)?;
        let dealer_up_card = parts.next().and_then(parse_int).ok_or_else(invalid)?;
        let usable_ace = match parts.next() {
            Some("True") => true,
            Some("False") => false,
            _ => return Err(invalid()),
        };

        Ok(Self::new(total, dealer_up_card, usable_ace))
    }
}
