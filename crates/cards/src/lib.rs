// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Snipe Poker cards types.
//!
//! Snipe Poker is played with a 40 cards deck: four suits of cards numbered
//! from 1 to 10. This crate defines the card type:
//!
//! ```
//! # use snipe_cards::{Card, Suit};
//! let seven = Card::new(7, Suit::S1);
//! assert_eq!(seven.number(), 7);
//! assert_eq!(seven.to_string(), "7S1");
//! ```
//!
//! and a [Deck] type for shuffling and dealing. Dealing returns the dealt
//! cards with the remaining deck:
//!
//! ```
//! # use snipe_cards::{Card, Deck, DeckError};
//! # use rand::prelude::*;
//! let deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(101));
//! let (private_cards, deck) = deck.deal(2)?;
//! assert_eq!(private_cards.len(), 2);
//! assert_eq!(deck.count(), Deck::SIZE - 2);
//!
//! assert!(deck.deal(Deck::SIZE).is_err());
//! # Ok::<(), DeckError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, CardError, Suit};

mod deck;
pub use deck::{Deck, DeckError};
