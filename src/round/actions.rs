use crate::card::Card;
use crate::error::RoundError;
use crate::hand::Role;

use super::{Round, RoundState};

impl Round {
    pub(super) fn ensure_open(&self) -> Result<(), RoundError> {
        if self.state == RoundState::Resolved {
            return Err(RoundError::Resolved);
        }
        Ok(())
    }

    fn ensure_player_turn(&self) -> Result<(), RoundError> {
        match self.state {
            RoundState::PlayerTurn => Ok(()),
            RoundState::DealerTurn => Err(RoundError::NotPlayerTurn),
            RoundState::Resolved => Err(RoundError::Resolved),
        }
    }

    /// Draws one card into the hand held by `role`.
    pub(super) fn draw_into(&mut self, role: Role) -> Result<Card, RoundError> {
        let card = self.deck.draw()?;
        self.hand_mut(role).add_card(card);
        Ok(card)
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust is reported by the hand, not acted on: the round stays in
    /// [`RoundState::PlayerTurn`] until the caller stands or resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn player_hit(&mut self) -> Result<Card, RoundError> {
        self.ensure_player_turn()?;
        self.draw_into(Role::Player)
    }

    /// Dealer action: Hit (draw a card).
    ///
    /// This is the primitive behind [`Round::play_dealer`]; callers running
    /// their own dealer policy may use it directly.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is resolved or the deck is empty.
    pub fn opponent_hit(&mut self) -> Result<Card, RoundError> {
        self.ensure_open()?;
        self.draw_into(Role::Dealer)
    }

    /// Player action: Stand (hand the turn to the dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_player_turn()?;
        self.state = RoundState::DealerTurn;
        Ok(())
    }
}
