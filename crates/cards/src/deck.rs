// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The 40 cards deck.
use rand::prelude::*;
use thiserror::Error;

use crate::{Card, Suit};

/// Deck errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Requested more cards than the deck holds.
    #[error("cannot deal {requested} cards from a deck of {available}")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        available: usize,
    },
}

/// A cards Deck.
///
/// Shuffling and dealing never change the deck they are called on, they
/// return new decks instead, so a deck value always describes one state of
/// the dealing sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 40;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::default().shuffled(rng)
    }

    /// Returns a copy of this deck with the cards uniformly permuted.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        // Fisher-Yates.
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Deals `count` cards from the top of the deck.
    ///
    /// Returns the dealt cards and the deck with the remaining cards, fails
    /// without dealing anything if there are not enough cards.
    pub fn deal(&self, count: usize) -> Result<(Vec<Card>, Deck), DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: count,
                available: self.cards.len(),
            });
        }

        let (dealt, remaining) = self.cards.split_at(count);
        let remaining = Deck {
            cards: remaining.to_vec(),
        };

        Ok((dealt.to_vec(), remaining))
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The deck cards, top card first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Checks if a card is in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }
}

impl Default for Deck {
    /// Creates the 40 cards deck in suit-major, number-minor order.
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Card::numbers().map(move |n| Card::new(n, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
