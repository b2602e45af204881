// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand rank detectors.
//!
//! Each detector looks at the numbers histogram of a five cards hand and
//! reports whether the hand makes its rank, together with the numbers that
//! determine the rank and the kickers. Detectors are tried strongest first
//! and the first match classifies the hand, a hand no detector matches is a
//! [high_card] hand.
use super::HandRank;
use crate::Card;

/// A detector match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankMatch {
    /// The numbers that make the rank, high order component first.
    pub rank_determining_cards: Vec<u8>,
    /// The remaining numbers, highest first.
    pub kickers: Vec<u8>,
}

impl RankMatch {
    fn new(rank_determining_cards: Vec<u8>, kickers: Vec<u8>) -> Self {
        Self {
            rank_determining_cards,
            kickers,
        }
    }
}

/// A hand rank detector.
pub type Detector = fn(&Histogram) -> Option<RankMatch>;

/// The detectors in priority order, strongest rank first, [high_card] ends
/// the list.
pub const DETECTORS: [(HandRank, Detector); 6] = [
    (HandRank::FourOfAKind, four_of_a_kind),
    (HandRank::FullHouse, full_house),
    (HandRank::Straight, straight),
    (HandRank::ThreeOfAKind, three_of_a_kind),
    (HandRank::TwoPair, two_pair),
    (HandRank::OnePair, one_pair),
];

/// Number frequencies of a five cards hand.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// (count, number) groups sorted by count then number, descending.
    groups: Vec<(u8, u8)>,
}

impl Histogram {
    /// Builds the histogram for a hand.
    pub fn new(hand: &[Card; 5]) -> Self {
        let mut counts = [0u8; Card::MAX_NUMBER as usize + 1];
        for card in hand {
            counts[card.number() as usize] += 1;
        }

        let mut groups = Card::numbers()
            .filter(|&n| counts[n as usize] > 0)
            .map(|n| (counts[n as usize], n))
            .collect::<Vec<_>>();
        groups.sort_unstable_by(|a, b| b.cmp(a));

        Self { groups }
    }

    /// The distinct numbers, highest first.
    fn distinct(&self) -> Vec<u8> {
        let mut numbers = self.groups.iter().map(|&(_, n)| n).collect::<Vec<_>>();
        numbers.sort_unstable_by(|a, b| b.cmp(a));
        numbers
    }

    /// The numbers of the groups after the first `skip`, each repeated by
    /// its count, highest first.
    fn rest(&self, skip: usize) -> Vec<u8> {
        let mut numbers = self.groups[skip..]
            .iter()
            .flat_map(|&(count, n)| std::iter::repeat_n(n, count as usize))
            .collect::<Vec<_>>();
        numbers.sort_unstable_by(|a, b| b.cmp(a));
        numbers
    }
}

/// Classifies a five cards hand.
pub fn classify(hand: &[Card; 5]) -> (HandRank, RankMatch) {
    let histogram = Histogram::new(hand);
    DETECTORS
        .iter()
        .find_map(|(rank, detect)| detect(&histogram).map(|m| (*rank, m)))
        .unwrap_or_else(|| (HandRank::HighCard, high_card(&histogram)))
}

/// Four cards with the same number and a kicker.
pub fn four_of_a_kind(h: &Histogram) -> Option<RankMatch> {
    match h.groups[..] {
        [(4, quad), ..] => Some(RankMatch::new(vec![quad; 4], truncated(h.rest(1), 1))),
        _ => None,
    }
}

/// A triple and a pair.
pub fn full_house(h: &Histogram) -> Option<RankMatch> {
    match h.groups[..] {
        [(3, triple), (2, pair)] => Some(RankMatch::new(
            vec![triple, triple, triple, pair, pair],
            Vec::new(),
        )),
        _ => None,
    }
}

/// Five consecutive numbers, 1 only counts as the low end of 5-4-3-2-1.
pub fn straight(h: &Histogram) -> Option<RankMatch> {
    let numbers = h.distinct();
    match numbers[..] {
        [high, .., low] if numbers.len() == 5 && high - low == 4 => {
            Some(RankMatch::new(vec![high], Vec::new()))
        }
        _ => None,
    }
}

/// A triple with two unmatched cards.
pub fn three_of_a_kind(h: &Histogram) -> Option<RankMatch> {
    match h.groups[..] {
        [(3, triple), (1, _), ..] => Some(RankMatch::new(vec![triple; 3], truncated(h.rest(1), 2))),
        _ => None,
    }
}

/// Two pairs and a kicker.
pub fn two_pair(h: &Histogram) -> Option<RankMatch> {
    match h.groups[..] {
        [(2, high), (2, low), ..] => Some(RankMatch::new(
            vec![high, high, low, low],
            truncated(h.rest(2), 1),
        )),
        _ => None,
    }
}

/// A single pair with three unmatched cards.
pub fn one_pair(h: &Histogram) -> Option<RankMatch> {
    match h.groups[..] {
        [(2, pair), (1, _), ..] => Some(RankMatch::new(vec![pair; 2], truncated(h.rest(1), 3))),
        _ => None,
    }
}

/// Five numbers, matches any hand.
pub fn high_card(h: &Histogram) -> RankMatch {
    RankMatch::new(Vec::new(), truncated(h.rest(0), 5))
}

fn truncated(mut numbers: Vec<u8>, len: usize) -> Vec<u8> {
    numbers.truncate(len);
    numbers
}
