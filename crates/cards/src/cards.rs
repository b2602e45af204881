// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors from building cards out of untrusted values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The card number is outside `1..=10`.
    #[error("invalid card number {0}, expected 1..=10")]
    InvalidNumber(u8),
    /// The string is not a valid card or suit.
    #[error("cannot parse card '{0}'")]
    Parse(String),
}

/// A card.
///
/// A card is packed in a single byte with the following format:
///
/// ```text
///   +--------+
///   |xxssnnnn|
///   +--------+
///   n = card number (1..=10)
///   s = suit index (S1=0, S2=1, S3=2, S4=3)
/// ```
///
/// On the wire a card is a `{"suit": "S1", "number": 7}` record.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "CardRecord", try_from = "CardRecord")]
pub struct Card(u8);

impl Card {
    /// The lowest card number.
    pub const MIN_NUMBER: u8 = 1;

    /// The highest card number.
    pub const MAX_NUMBER: u8 = 10;

    /// Create a card given a number and a suit.
    ///
    /// Panics if the number is not in `1..=10`, use [Card::try_new] for
    /// numbers coming from outside.
    pub const fn new(number: u8, suit: Suit) -> Card {
        assert!(
            number >= Self::MIN_NUMBER && number <= Self::MAX_NUMBER,
            "card number must be 1..=10"
        );
        Self(((suit as u8) << 4) | number)
    }

    /// Create a card checking the number range.
    pub fn try_new(number: u8, suit: Suit) -> Result<Card, CardError> {
        if (Self::MIN_NUMBER..=Self::MAX_NUMBER).contains(&number) {
            Ok(Self::new(number, suit))
        } else {
            Err(CardError::InvalidNumber(number))
        }
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card number.
    #[inline]
    pub fn number(&self) -> u8 {
        self.0 & 0xf
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match (self.0 >> 4) & 0x3 {
            0 => Suit::S1,
            1 => Suit::S2,
            2 => Suit::S3,
            3 => Suit::S4,
            _ => unreachable!(),
        }
    }

    /// Returns all card numbers in ascending order.
    pub fn numbers() -> impl DoubleEndedIterator<Item = u8> {
        Self::MIN_NUMBER..=Self::MAX_NUMBER
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.number(), self.suit())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card in the `<number><suit>` format, e.g. `7S1` or `10S4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || CardError::Parse(s.to_string());
        let idx = s.find('S').ok_or_else(parse_err)?;
        let number = s[..idx].parse::<u8>().map_err(|_| parse_err())?;
        let suit = s[idx..].parse::<Suit>().map_err(|_| parse_err())?;
        Card::try_new(number, suit)
    }
}

/// The serialized card shape.
#[derive(Serialize, Deserialize)]
struct CardRecord {
    suit: Suit,
    number: u8,
}

impl From<Card> for CardRecord {
    fn from(card: Card) -> Self {
        CardRecord {
            suit: card.suit(),
            number: card.number(),
        }
    }
}

impl TryFrom<CardRecord> for Card {
    type Error = CardError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        Card::try_new(record.number, record.suit)
    }
}

/// Card suit.
///
/// Suits only tell apart cards with the same number, they carry no weight
/// when ranking hands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// First suit.
    S1 = 0,
    /// Second suit.
    S2 = 1,
    /// Third suit.
    S3 = 2,
    /// Fourth suit.
    S4 = 3,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::S1, Suit::S2, Suit::S3, Suit::S4].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::S1 => "S1",
            Suit::S2 => "S2",
            Suit::S3 => "S3",
            Suit::S4 => "S4",
        };

        write!(f, "{suit}")
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S1" => Ok(Suit::S1),
            "S2" => Ok(Suit::S2),
            "S3" => Ok(Suit::S3),
            "S4" => Ok(Suit::S4),
            _ => Err(CardError::Parse(s.to_string())),
        }
    }
}
