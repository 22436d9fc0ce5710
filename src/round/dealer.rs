//! Dealer policy and round settlement.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::{Hand, Role};
use crate::options::RoundOptions;
use crate::result::{Outcome, RoundResult};

use super::{Round, RoundState};

/// Returns whether a dealer holding `hand` must draw another card.
///
/// The dealer draws below the stand threshold. On a soft total equal to the
/// threshold it draws only when `stand_on_soft_17` is off.
#[must_use]
pub fn should_draw(hand: &Hand, options: &RoundOptions) -> bool {
    let score = hand.score();
    let threshold = u16::from(options.dealer_stand_threshold);
    if score.total < threshold {
        return true;
    }
    score.total == threshold && score.usable_ace && !options.stand_on_soft_17
}

/// Compares the two hands from the player's side.
#[must_use]
pub fn settle(player: &Hand, dealer: &Hand) -> RoundResult {
    let player_value = player.value();
    let dealer_value = dealer.value();
    let player_bust = player.is_busted();
    let dealer_bust = dealer.is_busted();

    let outcome = if player_bust {
        Outcome::Lose
    } else if player.is_natural() {
        if dealer.is_natural() {
            Outcome::Push
        } else {
            Outcome::Blackjack
        }
    } else if dealer_bust {
        Outcome::Win
    } else if dealer.is_natural() {
        // A natural beats any drawn 21
        Outcome::Lose
    } else if player_value > dealer_value {
        Outcome::Win
    } else if player_value < dealer_value {
        Outcome::Lose
    } else {
        Outcome::Push
    };

    RoundResult {
        outcome,
        player_value,
        dealer_value,
        player_bust,
        dealer_bust,
    }
}

impl Round {
    /// Dealer plays their hand according to the round options.
    ///
    /// The dealer draws until [`should_draw`] says stop. If the player has
    /// already busted the dealer does not draw. The round stays in
    /// [`RoundState::DealerTurn`]; call [`Round::resolve`] to settle it.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs out
    /// while the dealer must draw.
    pub fn play_dealer(&mut self) -> Result<Vec<Card>, RoundError> {
        match self.state {
            RoundState::DealerTurn => {}
            RoundState::PlayerTurn => return Err(RoundError::NotDealerTurn),
            RoundState::Resolved => return Err(RoundError::Resolved),
        }

        let mut drawn_cards = Vec::new();
        if self.player.is_busted() {
            return Ok(drawn_cards);
        }

        while should_draw(&self.dealer, &self.options) {
            drawn_cards.push(self.draw_into(Role::Dealer)?);
        }

        Ok(drawn_cards)
    }

    /// Ends the round and records its result.
    ///
    /// Accepted from the player's or the dealer's turn, so a caller can end a
    /// round right after a player bust or an opening natural.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Resolved`] if the round was already resolved.
    pub fn resolve(&mut self) -> Result<RoundResult, RoundError> {
        self.ensure_open()?;

        let result = settle(&self.player, &self.dealer);
        self.result = Some(result);
        self.state = RoundState::Resolved;

        log::debug!(
            "round resolved: {:?} ({} vs {})",
            result.outcome,
            result.player_value,
            result.dealer_value
        );

        Ok(result)
    }
}
