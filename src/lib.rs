//! A blackjack round engine with a policy-table action advisor.
//!
//! The crate provides a [`Round`] type that deals one hand of blackjack
//! between a player and the dealer, and an [`Advisor`] that recommends hit or
//! stand for a [`StateKey`] by looking it up in a precomputed [`PolicyTable`].
//! The two are independent: a caller snapshots the round and asks the
//! advisor.
//!
//! # Example
//!
//! ```no_run
//! use bjcoach::{Advisor, Round};
//!
//! let round = Round::new(42);
//! let advisor = Advisor::load(bjcoach::DEFAULT_POLICY_PATH);
//! let advice = advisor.recommend_for(round.player_state());
//! let _ = advice;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod advisor;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod state;

// Re-export main types
pub use advisor::{Action, ActionScores, Advisor, Feedback, LoadStatus, PolicyTable, Recommendation};
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{CardError, EmptyDeckError, PolicyError, RoundError};
pub use hand::{BLACKJACK, Hand, Role, Score};
pub use options::{DEFAULT_POLICY_PATH, RoundOptions};
pub use result::{Outcome, RoundResult};
pub use round::{Round, RoundState};
pub use state::StateKey;
