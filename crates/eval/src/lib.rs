// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Snipe Poker hand evaluator.
//!
//! In Snipe Poker each player gets two private cards and shares four
//! community cards, a player hand is the best five cards hand out of these
//! six cards. There are no flushes and numbers go from 1 to 10, so 1 only
//! plays as the bottom of the 5-4-3-2-1 straight.
//!
//! To evaluate a hand call [evaluate] with the six cards and the player
//! private cards, evaluations compare with the usual operators:
//!
//! ```
//! # use snipe_eval::*;
//! let six = [
//!     Card::new(7, Suit::S1),
//!     Card::new(7, Suit::S2),
//!     Card::new(7, Suit::S3),
//!     Card::new(2, Suit::S4),
//!     Card::new(2, Suit::S1),
//!     Card::new(9, Suit::S2),
//! ];
//! let full_house = evaluate(&six, &six[..2])?;
//! assert_eq!(full_house.hand_rank(), HandRank::FullHouse);
//! assert_eq!(full_house.rank_determining_cards(), &[7, 7, 7, 2, 2]);
//!
//! let six = [
//!     Card::new(1, Suit::S1),
//!     Card::new(2, Suit::S2),
//!     Card::new(3, Suit::S3),
//!     Card::new(4, Suit::S4),
//!     Card::new(5, Suit::S1),
//!     Card::new(9, Suit::S3),
//! ];
//! let straight = evaluate(&six, &six[4..])?;
//! assert_eq!(straight.hand_rank(), HandRank::Straight);
//! assert!(full_house > straight);
//! # Ok::<(), EvalError>(())
//! ```
//!
//! A whole round can be dealt from a [Deck] with [deal_round] and its
//! winners found with [showdown]:
//!
//! ```
//! # use snipe_eval::*;
//! # use rand::prelude::*;
//! let deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(11));
//! let (round, deck) = deal_round(&deck, 3)?;
//! assert_eq!(deck.count(), Deck::SIZE - 3 * PRIVATE_CARDS - SHARED_CARDS);
//!
//! let evals = round.evaluate()?;
//! let winners = showdown(&evals);
//! assert!(!winners.is_empty());
//! # Ok::<(), EvalError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combinations;
pub mod eval;
pub mod showdown;

pub use combinations::combinations;
pub use eval::{EvalError, HandEvaluation, HandRank, compare, evaluate};
pub use showdown::{Round, deal_round, showdown};

// Reexport cards types.
pub use snipe_cards::{Card, CardError, Deck, DeckError, Suit};

/// Number of private cards for each player.
pub const PRIVATE_CARDS: usize = 2;

/// Number of shared cards in each community deal.
pub const SHARED_DEAL_CARDS: usize = 2;

/// Number of shared cards, dealt in two community deals.
pub const SHARED_CARDS: usize = 2 * SHARED_DEAL_CARDS;

/// Number of cards in a player hand.
pub const HAND_CARDS: usize = PRIVATE_CARDS + SHARED_CARDS;

/// Number of cards in the best hand.
pub const BEST_HAND_CARDS: usize = 5;

/// Minimum number of players in a round.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players in a round.
pub const MAX_PLAYERS: usize = 6;
