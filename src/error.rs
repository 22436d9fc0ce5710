//! Error types for engine and advisor operations.

use alloc::string::String;

use thiserror::Error;

#[cfg(feature = "std")]
type IoError = std::io::Error;
// Without `std` nothing is read from disk, so the variant cannot occur.
#[cfg(not(feature = "std"))]
type IoError = core::convert::Infallible;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("invalid rank {0}, expected 1..=13")]
    InvalidRank(u8),
}

/// A draw was attempted on an exhausted deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur during round actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round has been resolved; only a reset is accepted.
    #[error("round is already resolved")]
    Resolved,
    /// The action needs the player's turn.
    #[error("not the player's turn")]
    NotPlayerTurn,
    /// The action needs the dealer's turn.
    #[error("not the dealer's turn")]
    NotDealerTurn,
    /// The deck cannot cover the opening deal.
    #[error("not enough cards for the opening deal")]
    NotEnoughCards,
    /// No cards left in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur while loading a policy table.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The source could not be read.
    #[error("failed to read policy table: {0}")]
    Io(#[from] IoError),
    /// The document is not a valid policy table.
    #[error("malformed policy table: {0}")]
    Json(serde_json::Error),
    /// A state key does not follow the `(total, upcard, True|False)` format.
    #[error("malformed state key {0:?}")]
    InvalidKey(String),
}
