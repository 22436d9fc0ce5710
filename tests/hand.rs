//! Card, deck and hand scoring tests.

use std::collections::HashSet;

use bjcoach::{Card, CardError, DECK_SIZE, Deck, EmptyDeckError, Hand, Role, Score, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

fn hand_of(ranks: &[u8]) -> Hand {
    let mut hand = Hand::new(Role::Player);
    for &rank in ranks {
        hand.add_card(card(Suit::Spades, rank));
    }
    hand
}

#[test]
fn card_rejects_out_of_range_ranks() {
    assert_eq!(Card::new(Suit::Hearts, 0), Err(CardError::InvalidRank(0)));
    assert_eq!(Card::new(Suit::Hearts, 14), Err(CardError::InvalidRank(14)));
    assert!(Card::new(Suit::Hearts, 1).is_ok());
    assert!(Card::new(Suit::Hearts, 13).is_ok());
}

#[test]
fn card_score_values() {
    assert_eq!(card(Suit::Clubs, 1).score_value(), 1);
    assert_eq!(card(Suit::Clubs, 7).score_value(), 7);
    assert_eq!(card(Suit::Clubs, 10).score_value(), 10);
    assert_eq!(card(Suit::Clubs, 11).score_value(), 10);
    assert_eq!(card(Suit::Clubs, 13).score_value(), 10);
}

#[test]
fn card_display_names_rank_and_suit() {
    assert_eq!(card(Suit::Hearts, 1).to_string(), "Ace of Hearts");
    assert_eq!(card(Suit::Clubs, 7).to_string(), "7 of Clubs");
    assert_eq!(card(Suit::Spades, 12).to_string(), "Queen of Spades");
}

#[test]
fn deck_deals_every_card_once_then_fails() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::shuffled(&mut rng);
    assert_eq!(deck.len(), DECK_SIZE);

    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        let card = deck.draw().unwrap();
        assert!(seen.insert((card.suit(), card.rank())));
    }

    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(EmptyDeckError));
}

#[test]
fn deck_order_depends_on_seed() {
    let first = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(1));
    let same = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(1));
    let other = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(2));

    assert_eq!(first, same);
    assert_ne!(first, other);
}

#[test]
fn scripted_deck_draws_in_given_order() {
    let mut deck = Deck::from_cards(&[card(Suit::Hearts, 5), card(Suit::Clubs, 9)]);
    assert_eq!(
        deck.iter().copied().collect::<Vec<_>>(),
        [card(Suit::Hearts, 5), card(Suit::Clubs, 9)]
    );

    assert_eq!(deck.draw().unwrap(), card(Suit::Hearts, 5));
    assert_eq!(deck.draw().unwrap(), card(Suit::Clubs, 9));
    assert_eq!(deck.draw(), Err(EmptyDeckError));
}

#[test]
fn ace_six_is_soft_seventeen() {
    let hand = hand_of(&[1, 6]);
    assert_eq!(
        hand.score(),
        Score {
            total: 17,
            usable_ace: true
        }
    );
    assert!(hand.is_soft());
}

#[test]
fn ace_is_demoted_when_eleven_would_bust() {
    let hand = hand_of(&[1, 6, 10]);
    assert_eq!(
        hand.score(),
        Score {
            total: 17,
            usable_ace: false
        }
    );
    assert!(!hand.is_busted());
}

#[test]
fn bust_and_hard_totals() {
    let bust = hand_of(&[10, 10, 5]);
    assert!(bust.is_busted());
    assert_eq!(bust.value(), 25);
    assert!(!bust.score().usable_ace);

    let hard = hand_of(&[10, 9]);
    assert!(!hard.is_busted());
    assert_eq!(
        hard.score(),
        Score {
            total: 19,
            usable_ace: false
        }
    );
}

#[test]
fn only_one_ace_is_ever_promoted() {
    assert_eq!(
        hand_of(&[1, 1]).score(),
        Score {
            total: 12,
            usable_ace: true
        }
    );
    assert_eq!(
        hand_of(&[1, 1, 9]).score(),
        Score {
            total: 21,
            usable_ace: true
        }
    );
    assert_eq!(
        hand_of(&[1, 1, 10]).score(),
        Score {
            total: 12,
            usable_ace: false
        }
    );
    assert_eq!(
        hand_of(&[1, 1, 1, 1]).score(),
        Score {
            total: 14,
            usable_ace: true
        }
    );
}

#[test]
fn whole_deck_scores_without_saturating() {
    let mut hand = Hand::new(Role::Player);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            hand.add_card(card(suit, rank));
        }
    }

    assert_eq!(hand.len(), DECK_SIZE);
    assert_eq!(
        hand.score(),
        Score {
            total: 340,
            usable_ace: false
        }
    );
}

#[test]
fn face_cards_count_ten() {
    assert_eq!(hand_of(&[11, 12]).value(), 20);
    assert_eq!(hand_of(&[13, 1]).value(), 21);
}

#[test]
fn natural_needs_exactly_two_cards() {
    assert!(hand_of(&[1, 13]).is_natural());
    assert!(!hand_of(&[7, 4, 10]).is_natural());
    assert!(!hand_of(&[10, 9]).is_natural());
}

#[test]
fn up_card_value_never_promotes_the_ace() {
    let mut dealer = Hand::new(Role::Dealer);
    assert_eq!(dealer.up_card_value(), 0);
    assert!(dealer.up_card().is_none());

    dealer.add_card(card(Suit::Hearts, 1));
    dealer.add_card(card(Suit::Clubs, 13));
    assert_eq!(dealer.up_card_value(), 1);
    assert_eq!(dealer.up_card(), Some(&card(Suit::Hearts, 1)));
    assert_eq!(dealer.value(), 21);
    assert_eq!(dealer.role(), Role::Dealer);

    let mut face = Hand::new(Role::Dealer);
    face.add_card(card(Suit::Diamonds, 12));
    assert_eq!(face.up_card_value(), 10);
}

#[test]
fn empty_hand_scores_zero() {
    let hand = Hand::new(Role::Player);
    assert!(hand.is_empty());
    assert_eq!(
        hand.score(),
        Score {
            total: 0,
            usable_ace: false
        }
    );
}
