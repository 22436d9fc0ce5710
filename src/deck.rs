//! A single shuffled 52-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::EmptyDeckError;

/// An ordered deck of cards.
///
/// Cards are drawn from the front. Internally the order is kept reversed so
/// that a draw is a `pop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards, last element is the next draw.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the 52 distinct cards and shuffles them uniformly with `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card { suit, rank });
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck that deals `draws` in the given order.
    ///
    /// No composition check is made, which makes this suitable for scripted
    /// rounds.
    #[must_use]
    pub fn from_cards(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the first remaining card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        let card = self.cards.pop().ok_or(EmptyDeckError)?;
        log::trace!("drew {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}
