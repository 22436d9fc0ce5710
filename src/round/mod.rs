//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::{Hand, Role};
use crate::options::RoundOptions;
use crate::result::RoundResult;
use crate::state::StateKey;

mod actions;
pub mod dealer;
pub mod state;

pub use state::RoundState;

/// Cards dealt before the first action: two to each side.
const OPENING_CARDS: usize = 4;

/// One hand of blackjack between a player and the dealer.
///
/// The round owns its deck, both hands, and the random number generator used
/// to shuffle fresh decks on [`Round::reset`].
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards left to draw.
    deck: Deck,
    /// Round options.
    options: RoundOptions,
    /// Current round state.
    state: RoundState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// Result, set once the round is resolved.
    result: Option<RoundResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Round {
    /// Creates a round with default options and deals the opening hands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcoach::Round;
    ///
    /// let round = Round::new(42);
    /// assert_eq!(round.player().len(), 2);
    /// assert_eq!(round.dealer().len(), 2);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_options(RoundOptions::default(), seed)
    }

    /// Creates a round with the given options and deals the opening hands.
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a fresh deck always covers the opening deal"
    )]
    pub fn with_options(options: RoundOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::shuffled(&mut rng);
        let (player, dealer) =
            Self::opening_deal(&mut deck).expect("a fresh deck holds 52 cards");

        Self {
            deck,
            options,
            state: RoundState::PlayerTurn,
            player,
            dealer,
            result: None,
            rng,
        }
    }

    /// Creates a round that deals from `deck` in its given order.
    ///
    /// `seed` drives the decks shuffled by later resets.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NotEnoughCards`] if the deck holds fewer than
    /// four cards.
    pub fn with_deck(
        options: RoundOptions,
        seed: u64,
        mut deck: Deck,
    ) -> Result<Self, RoundError> {
        let (player, dealer) = Self::opening_deal(&mut deck)?;

        Ok(Self {
            deck,
            options,
            state: RoundState::PlayerTurn,
            player,
            dealer,
            result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Deals player, player, dealer, dealer.
    fn opening_deal(deck: &mut Deck) -> Result<(Hand, Hand), RoundError> {
        if deck.len() < OPENING_CARDS {
            return Err(RoundError::NotEnoughCards);
        }

        let mut player = Hand::new(Role::Player);
        let mut dealer = Hand::new(Role::Dealer);
        player.add_card(deck.draw()?);
        player.add_card(deck.draw()?);
        dealer.add_card(deck.draw()?);
        dealer.add_card(deck.draw()?);

        Ok((player, dealer))
    }

    /// Discards the deck and both hands, then deals a fresh round.
    ///
    /// Accepted in every state.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a fresh deck always covers the opening deal"
    )]
    pub fn reset(&mut self) {
        let mut deck = Deck::shuffled(&mut self.rng);
        let (player, dealer) =
            Self::opening_deal(&mut deck).expect("a fresh deck holds 52 cards");

        self.deck = deck;
        self.player = player;
        self.dealer = dealer;
        self.result = None;
        self.state = RoundState::PlayerTurn;

        log::debug!(
            "round reset: player {} vs upcard {}",
            self.player.value(),
            self.dealer.up_card_value()
        );
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the hand held by `role`.
    #[must_use]
    pub const fn hand(&self, role: Role) -> &Hand {
        match role {
            Role::Player => &self.player,
            Role::Dealer => &self.dealer,
        }
    }

    const fn hand_mut(&mut self, role: Role) -> &mut Hand {
        match role {
            Role::Player => &mut self.player,
            Role::Dealer => &mut self.dealer,
        }
    }

    /// Returns the dealer's face-up card.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.up_card()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the player's state against the dealer's upcard.
    ///
    /// Computed from the current hands on every call.
    #[must_use]
    pub fn player_state(&self) -> StateKey {
        StateKey::from_hands(&self.player, &self.dealer)
    }

    /// Returns the dealer's own state: its total, its upcard, and its usable
    /// ace flag.
    #[must_use]
    pub fn opponent_state(&self) -> StateKey {
        StateKey::from_hands(&self.dealer, &self.dealer)
    }

    /// Returns the result once the round is resolved.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }
}
