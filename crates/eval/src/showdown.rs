// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round dealing and showdown.
use log::debug;

use crate::{
    Card, Deck, EvalError, HandEvaluation, MAX_PLAYERS, MIN_PLAYERS, PRIVATE_CARDS,
    SHARED_DEAL_CARDS, evaluate,
};

/// The cards of a dealt round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    private_cards: Vec<[Card; PRIVATE_CARDS]>,
    shared_cards: Vec<Card>,
}

impl Round {
    /// The number of players in this round.
    pub fn players(&self) -> usize {
        self.private_cards.len()
    }

    /// The private cards for each player.
    pub fn private_cards(&self) -> &[[Card; PRIVATE_CARDS]] {
        &self.private_cards
    }

    /// The shared cards.
    pub fn shared_cards(&self) -> &[Card] {
        &self.shared_cards
    }

    /// The six cards of a player, private cards first.
    pub fn hand(&self, player: usize) -> Option<Vec<Card>> {
        self.private_cards
            .get(player)
            .map(|private| self.six_cards(private))
    }

    /// Evaluates each player hand.
    pub fn evaluate(&self) -> Result<Vec<HandEvaluation>, EvalError> {
        self.private_cards
            .iter()
            .map(|private| evaluate(&self.six_cards(private), private))
            .collect()
    }

    fn six_cards(&self, private: &[Card; PRIVATE_CARDS]) -> Vec<Card> {
        let mut cards = private.to_vec();
        cards.extend_from_slice(&self.shared_cards);
        cards
    }
}

/// Deals a round to `players` players.
///
/// Each player gets their private cards in turn, then the shared cards are
/// dealt in two community deals. Returns the round with the remaining deck.
pub fn deal_round(deck: &Deck, players: usize) -> Result<(Round, Deck), EvalError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
        return Err(EvalError::InvalidInput(format!(
            "{players} players, expected {MIN_PLAYERS}..={MAX_PLAYERS}"
        )));
    }

    let mut deck = deck.clone();
    let mut private_cards = Vec::with_capacity(players);
    for _ in 0..players {
        let (dealt, rest) = deck.deal(PRIVATE_CARDS)?;
        private_cards.push([dealt[0], dealt[1]]);
        deck = rest;
    }

    let (first, deck) = deck.deal(SHARED_DEAL_CARDS)?;
    let (second, deck) = deck.deal(SHARED_DEAL_CARDS)?;

    let mut shared_cards = first;
    shared_cards.extend(second);

    let round = Round {
        private_cards,
        shared_cards,
    };

    debug!("Dealt round {round:?}, {} cards left", deck.count());
    Ok((round, deck))
}

/// Returns the indices of the best evaluations.
///
/// More than one index is returned only for a genuine split, an empty
/// slice returns no winners.
pub fn showdown(evals: &[HandEvaluation]) -> Vec<usize> {
    let Some(best) = evals.iter().max() else {
        return Vec::new();
    };

    evals
        .iter()
        .enumerate()
        .filter(|(_, e)| *e == best)
        .map(|(i, _)| i)
        .collect()
}
