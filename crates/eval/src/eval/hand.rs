// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranks and evaluated hands.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use super::EvalError;
use crate::Card;

/// The hand rank, from the weakest to the strongest.
///
/// There is no flush in Snipe Poker, suits never count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandRank {
    /// Five unmatched cards.
    HighCard = 0,
    /// Two cards with the same number.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards with the same number.
    ThreeOfAKind,
    /// Five consecutive numbers.
    Straight,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same number.
    FourOfAKind,
}

impl HandRank {
    /// Returns all ranks, strongest first.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            FourOfAKind,
            FullHouse,
            Straight,
            ThreeOfAKind,
            TwoPair,
            OnePair,
            HighCard,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
        };

        write!(f, "{rank}")
    }
}

/// The best hand a player can make with their six cards.
///
/// Evaluations are totally ordered: the hand rank first, then the rank
/// determining cards, then the kickers and finally the player private cards.
/// Equal evaluations are a genuine split.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "EvaluationRecord")]
pub struct HandEvaluation {
    hand_rank: HandRank,
    rank_determining_cards: Vec<u8>,
    kickers: Vec<u8>,
    #[serde(rename = "private_cards_for_tiebreak")]
    private_tiebreak: (u8, u8),
}

impl HandEvaluation {
    /// Creates an evaluation, the private numbers can be in any order.
    pub fn new(
        hand_rank: HandRank,
        rank_determining_cards: Vec<u8>,
        kickers: Vec<u8>,
        private_numbers: (u8, u8),
    ) -> Self {
        let (a, b) = private_numbers;
        Self {
            hand_rank,
            rank_determining_cards,
            kickers,
            private_tiebreak: (a.max(b), a.min(b)),
        }
    }

    /// The hand rank.
    pub fn hand_rank(&self) -> HandRank {
        self.hand_rank
    }

    /// The numbers that make the rank, high order component first.
    pub fn rank_determining_cards(&self) -> &[u8] {
        &self.rank_determining_cards
    }

    /// The numbers not part of the rank pattern, highest first.
    pub fn kickers(&self) -> &[u8] {
        &self.kickers
    }

    /// The player private cards numbers as (high, low).
    pub fn private_tiebreak(&self) -> (u8, u8) {
        self.private_tiebreak
    }

    /// The number a declared highest card is checked against: the first
    /// rank determining number, or the top kicker for a high card hand.
    pub fn highest_card(&self) -> u8 {
        self.rank_determining_cards
            .first()
            .or_else(|| self.kickers.first())
            .copied()
            .unwrap_or(0)
    }
}

/// The deserialized evaluation shape, checked before use.
#[derive(Deserialize)]
struct EvaluationRecord {
    hand_rank: HandRank,
    rank_determining_cards: Vec<u8>,
    kickers: Vec<u8>,
    private_cards_for_tiebreak: (u8, u8),
}

impl TryFrom<EvaluationRecord> for HandEvaluation {
    type Error = EvalError;

    fn try_from(record: EvaluationRecord) -> Result<Self, Self::Error> {
        let (a, b) = record.private_cards_for_tiebreak;
        let mut numbers = record
            .rank_determining_cards
            .iter()
            .chain(&record.kickers)
            .chain([&a, &b]);

        let valid = Card::MIN_NUMBER..=Card::MAX_NUMBER;
        let invalid = numbers.find(|&&n| !valid.contains(&n)).copied();
        drop(numbers);
        if let Some(n) = invalid {
            return Err(EvalError::InvalidInput(format!(
                "invalid card number {n} in evaluation"
            )));
        }

        Ok(HandEvaluation::new(
            record.hand_rank,
            record.rank_determining_cards,
            record.kickers,
            (a, b),
        ))
    }
}

/// Compares numbers one by one, a missing number counts as zero.
fn cmp_numbers(a: &[u8], b: &[u8]) -> Ordering {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            x.cmp(&y)
        })
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Compares two evaluations.
pub fn compare(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.hand_rank
        .cmp(&b.hand_rank)
        .then_with(|| cmp_numbers(&a.rank_determining_cards, &b.rank_determining_cards))
        .then_with(|| cmp_numbers(&a.kickers, &b.kickers))
        .then_with(|| a.private_tiebreak.cmp(&b.private_tiebreak))
}

impl Ord for HandEvaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for HandEvaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandEvaluation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for HandEvaluation {}
