//! Participant hands and usable-ace scoring.

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u16 = 21;

/// Extra value of an Ace counted as 11 instead of 1.
const ACE_BONUS: u16 = 10;

/// Scores a run of cards.
///
/// Every Ace counts 1. If at least one Ace is present and one of them can
/// count 11 without busting, exactly one is promoted. A second Ace is never
/// promoted since 11 + 11 already busts.
fn evaluate_cards(cards: &[Card]) -> Score {
    let mut sum: u16 = 0;
    let mut has_ace = false;

    for card in cards {
        has_ace |= card.is_ace();
        sum += u16::from(card.score_value());
    }

    if has_ace && sum <= BLACKJACK - ACE_BONUS {
        Score {
            total: sum + ACE_BONUS,
            usable_ace: true,
        }
    } else {
        Score {
            total: sum,
            usable_ace: false,
        }
    }
}

/// Which side of the table a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The player being advised.
    Player,
    /// The dealer, whose first card is the upcard.
    Dealer,
}

/// A hand total together with its usable-ace flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    /// Hand total, with at most one Ace counted as 11.
    pub total: u16,
    /// Whether an Ace is currently counted as 11.
    pub usable_ace: bool,
}

impl Score {
    /// Returns whether the total exceeds 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }
}

/// A participant's hand.
///
/// Cards are only ever appended. The score is derived on every call and never
/// cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Owner of the hand.
    role: Role,
    /// Cards in the hand, in the order they were received.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            cards: Vec::new(),
        }
    }

    /// Returns who owns the hand.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hand total and whether an Ace counts as 11.
    #[must_use]
    pub fn score(&self) -> Score {
        evaluate_cards(&self.cards)
    }

    /// Returns the hand total.
    #[must_use]
    pub fn value(&self) -> u16 {
        self.score().total
    }

    /// Returns whether the hand is soft (holds a usable ace).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.score().usable_ace
    }

    /// Returns whether the hand total exceeds 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.score().is_bust()
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns the first card, which the dealer shows face up.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the score value of the first card alone.
    ///
    /// An Ace counts 1 here and is never promoted. Returns 0 for an empty hand.
    #[must_use]
    pub fn up_card_value(&self) -> u8 {
        self.cards.first().map_or(0, Card::score_value)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
