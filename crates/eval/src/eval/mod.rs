// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Snipe Poker hand evaluator.
//!
//! A player hand is made of six cards, two private and four shared, and is
//! worth the best five cards hand among its six five cards subsets. Each
//! subset is classified by the [detect] functions, the best classification
//! wins and carries the player private numbers for the last tie-break.
use ahash::HashSet;
use log::{debug, trace};
use thiserror::Error;

use crate::{BEST_HAND_CARDS, Card, HAND_CARDS, PRIVATE_CARDS, combinations::for_each_array};
use snipe_cards::DeckError;

pub mod detect;
mod hand;

pub use hand::{HandEvaluation, HandRank, compare};

/// Evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The cards passed to the evaluator are not a valid hand.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The deck ran out of cards while dealing.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Evaluates a player six cards.
///
/// The `private_cards` must be two of the `six_cards`.
pub fn evaluate(six_cards: &[Card], private_cards: &[Card]) -> Result<HandEvaluation, EvalError> {
    validate(six_cards, private_cards)?;

    let private_numbers = (private_cards[0].number(), private_cards[1].number());

    // The first subset is the first five cards.
    let mut best = evaluate_hand(&std::array::from_fn(|i| six_cards[i]), private_numbers);

    for_each_array(six_cards, |hand: &[Card; BEST_HAND_CARDS]| {
        let eval = evaluate_hand(hand, private_numbers);
        if eval > best {
            best = eval;
        }
    });

    debug!("{six_cards:?} evaluated to {best:?}");

    Ok(best)
}

fn evaluate_hand(hand: &[Card; BEST_HAND_CARDS], private_numbers: (u8, u8)) -> HandEvaluation {
    let (rank, m) = detect::classify(hand);
    trace!("{hand:?} {rank} {:?} {:?}", m.rank_determining_cards, m.kickers);
    HandEvaluation::new(rank, m.rank_determining_cards, m.kickers, private_numbers)
}

fn validate(six_cards: &[Card], private_cards: &[Card]) -> Result<(), EvalError> {
    if six_cards.len() != HAND_CARDS {
        return Err(EvalError::InvalidInput(format!(
            "expected {HAND_CARDS} cards, got {}",
            six_cards.len()
        )));
    }

    if private_cards.len() != PRIVATE_CARDS {
        return Err(EvalError::InvalidInput(format!(
            "expected {PRIVATE_CARDS} private cards, got {}",
            private_cards.len()
        )));
    }

    let unique = six_cards.iter().collect::<HashSet<_>>();
    if unique.len() != six_cards.len() {
        return Err(EvalError::InvalidInput(format!(
            "duplicate cards in {six_cards:?}"
        )));
    }

    if private_cards[0] == private_cards[1] {
        return Err(EvalError::InvalidInput(format!(
            "duplicate private card {}",
            private_cards[0]
        )));
    }

    if let Some(card) = private_cards.iter().find(|c| !unique.contains(c)) {
        return Err(EvalError::InvalidInput(format!(
            "private card {card} not in the hand"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, Suit};
    use rand::prelude::*;
    use std::cmp::Ordering;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn eval(six: &str, private: &str) -> HandEvaluation {
        evaluate(&cards(six), &cards(private)).unwrap()
    }

    #[test]
    fn full_house_scenario() {
        let six = [
            Card::new(7, Suit::S1),
            Card::new(7, Suit::S2),
            Card::new(7, Suit::S3),
            Card::new(2, Suit::S4),
            Card::new(2, Suit::S1),
            Card::new(9, Suit::S2),
        ];
        let private = [Card::new(7, Suit::S1), Card::new(7, Suit::S2)];

        let e = evaluate(&six, &private).unwrap();
        assert_eq!(e.hand_rank(), HandRank::FullHouse);
        assert_eq!(e.rank_determining_cards(), &[7, 7, 7, 2, 2]);
        assert!(e.kickers().is_empty());
        assert_eq!(e.private_tiebreak(), (7, 7));
    }

    #[test]
    fn full_house_over_three_of_a_kind() {
        // Only the subset with both twos makes the full house.
        let e = eval("7S1 7S2 7S3 2S4 2S1 9S2", "9S2 2S1");
        assert_eq!(e.hand_rank(), HandRank::FullHouse);
        assert_eq!(e.private_tiebreak(), (9, 2));

        // Without the second two the best is three of a kind.
        let e = eval("7S1 7S2 7S3 2S4 8S1 9S2", "9S2 8S1");
        assert_eq!(e.hand_rank(), HandRank::ThreeOfAKind);
        assert_eq!(e.rank_determining_cards(), &[7, 7, 7]);
        assert_eq!(e.kickers(), &[9, 8]);
    }

    #[test]
    fn low_straight() {
        let e = eval("1S1 2S2 3S3 4S4 5S1 9S2", "1S1 9S2");
        assert_eq!(e.hand_rank(), HandRank::Straight);
        assert_eq!(e.rank_determining_cards(), &[5]);
        assert!(e.kickers().is_empty());

        // A six makes a higher straight.
        let e = eval("1S1 2S2 3S3 4S4 5S1 6S2", "1S1 6S2");
        assert_eq!(e.rank_determining_cards(), &[6]);
    }

    #[test]
    fn no_wraparound_straight() {
        let e = eval("10S1 9S2 8S3 7S4 1S1 3S2", "10S1 3S2");
        assert_eq!(e.hand_rank(), HandRank::HighCard);
        assert_eq!(e.kickers(), &[10, 9, 8, 7, 3]);
    }

    #[test]
    fn best_subset_is_chosen() {
        // Four of a kind beats the full house in the same six cards.
        let e = eval("4S1 4S2 4S3 4S4 9S1 9S2", "4S1 9S1");
        assert_eq!(e.hand_rank(), HandRank::FourOfAKind);
        assert_eq!(e.rank_determining_cards(), &[4, 4, 4, 4]);
        assert_eq!(e.kickers(), &[9]);

        // Two pairs out of three pairs keep the best pairs and kicker.
        let e = eval("3S1 3S2 8S3 8S4 10S1 10S2", "3S1 8S3");
        assert_eq!(e.hand_rank(), HandRank::TwoPair);
        assert_eq!(e.rank_determining_cards(), &[10, 10, 8, 8]);
        assert_eq!(e.kickers(), &[3]);

        // The lowest card is dropped from a high card hand.
        let e = eval("1S1 3S2 5S3 7S4 9S1 10S2", "1S1 3S2");
        assert_eq!(e.hand_rank(), HandRank::HighCard);
        assert_eq!(e.kickers(), &[10, 9, 7, 5, 3]);

        let e = eval("6S1 6S2 1S3 2S4 9S1 10S2", "6S1 6S2");
        assert_eq!(e.hand_rank(), HandRank::OnePair);
        assert_eq!(e.rank_determining_cards(), &[6, 6]);
        assert_eq!(e.kickers(), &[10, 9, 2]);
    }

    #[test]
    fn best_hand_at_any_position() {
        // The odd card out can sit anywhere, including first and last.
        let straight = cards("2S1 3S2 4S3 5S4 6S1");
        for pos in 0..HAND_CARDS {
            let mut six = straight.clone();
            six.insert(pos, "9S3".parse().unwrap());
            let private = [six[0], six[5]];

            let e = evaluate(&six, &private).unwrap();
            assert_eq!(e.hand_rank(), HandRank::Straight, "{six:?}");
            assert_eq!(e.rank_determining_cards(), &[6]);
        }
    }

    #[test]
    fn order_independent() {
        let six = cards("3S1 3S2 8S3 1S4 10S1 5S2");
        let private = cards("8S3 3S1");
        let expected = evaluate(&six, &private).unwrap();

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let mut shuffled = six.clone();
            shuffled.shuffle(&mut rng);
            let mut private = private.clone();
            private.shuffle(&mut rng);

            let e = evaluate(&shuffled, &private).unwrap();
            assert_eq!(e.hand_rank(), expected.hand_rank());
            assert_eq!(e.rank_determining_cards(), expected.rank_determining_cards());
            assert_eq!(e.kickers(), expected.kickers());
            assert_eq!(e.private_tiebreak(), expected.private_tiebreak());
        }
    }

    #[test]
    fn always_finds_a_hand() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..1_000 {
            let deck = Deck::new_and_shuffled(&mut rng);
            let six = &deck.cards()[..HAND_CARDS];
            let e = evaluate(six, &six[..PRIVATE_CARDS]).unwrap();

            let (high, low) = e.private_tiebreak();
            assert!(high >= low);
            assert!(e.kickers().windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn private_cards_break_ties() {
        // Same five cards hand from the shared cards, different private cards.
        let a = eval("10S1 10S2 10S3 10S4 9S1 3S1", "9S1 3S1");
        let b = eval("10S1 10S2 10S3 10S4 9S2 2S1", "9S2 2S1");
        assert_eq!(a.rank_determining_cards(), b.rank_determining_cards());
        assert_eq!(a.kickers(), b.kickers());
        assert_eq!(compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn invalid_input() {
        let six = cards("1S1 2S2 3S3 4S4 5S1 9S2");

        let five = &six[..5];
        assert!(matches!(
            evaluate(five, &six[..2]),
            Err(EvalError::InvalidInput(_))
        ));

        assert!(matches!(
            evaluate(&six, &six[..1]),
            Err(EvalError::InvalidInput(_))
        ));

        assert!(matches!(
            evaluate(&six, &cards("1S1 10S4")),
            Err(EvalError::InvalidInput(_))
        ));

        assert!(matches!(
            evaluate(&six, &cards("1S1 1S1")),
            Err(EvalError::InvalidInput(_))
        ));

        let dup = cards("1S1 1S1 3S3 4S4 5S1 9S2");
        assert!(matches!(
            evaluate(&dup, &cards("3S3 4S4")),
            Err(EvalError::InvalidInput(_))
        ));
    }
}
