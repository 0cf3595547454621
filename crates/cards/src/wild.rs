// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jokers and cards tokens parsing.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{Card, Color};

/// Error returned when a token is not a valid card or joker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid card token {token:?}")]
pub struct ParseCardError {
    token: String,
}

impl ParseCardError {
    pub(crate) fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }

    /// The token that failed to parse.
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// A card in a hand that may hold jokers.
///
/// A joker stands for any concrete card of its color, a black joker for
/// any club or spade and a red joker for any heart or diamond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WildCard {
    /// A concrete card.
    Card(Card),
    /// A joker with a color.
    Joker(Color),
}

impl WildCard {
    /// The token prefix for jokers.
    pub const JOKER_MARKER: char = '?';

    /// Returns the concrete card if this is not a joker.
    pub fn card(&self) -> Option<Card> {
        match self {
            WildCard::Card(card) => Some(*card),
            WildCard::Joker(_) => None,
        }
    }

    /// Checks if this is a joker.
    pub fn is_joker(&self) -> bool {
        matches!(self, WildCard::Joker(_))
    }
}

impl From<Card> for WildCard {
    fn from(card: Card) -> Self {
        WildCard::Card(card)
    }
}

impl fmt::Display for WildCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WildCard::Card(card) => write!(f, "{card}"),
            WildCard::Joker(color) => write!(f, "{}{color}", Self::JOKER_MARKER),
        }
    }
}

impl FromStr for WildCard {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(Self::JOKER_MARKER) {
            Some(color) => {
                let mut chars = color.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Color::from_symbol(c).map(WildCard::Joker),
                    _ => None,
                }
                .ok_or_else(|| ParseCardError::new(s))
            }
            None => s.parse().map(WildCard::Card),
        }
    }
}

/// Parses whitespace separated concrete cards tokens.
///
/// ```
/// # use wildhand_cards::*;
/// let cards = parse_cards("AS Kd").unwrap();
/// assert_eq!(cards, [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Diamonds)]);
/// assert!(parse_cards("AS ?B").is_err());
/// ```
pub fn parse_cards(tokens: &str) -> Result<Vec<Card>, ParseCardError> {
    parse_card_tokens(tokens.split_whitespace())
}

/// Parses a sequence of concrete cards tokens.
///
/// ```
/// # use wildhand_cards::*;
/// let cards = parse_card_tokens(["AS", "Kd"]).unwrap();
/// assert_eq!(cards, parse_cards("AS Kd").unwrap());
/// ```
pub fn parse_card_tokens<I>(tokens: I) -> Result<Vec<Card>, ParseCardError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tokens.into_iter().map(|t| t.as_ref().parse()).collect()
}

/// Parses whitespace separated cards and jokers tokens.
///
/// ```
/// # use wildhand_cards::*;
/// let cards = parse_wild_cards("AS ?r").unwrap();
/// assert_eq!(cards[1], WildCard::Joker(Color::Red));
/// ```
pub fn parse_wild_cards(tokens: &str) -> Result<Vec<WildCard>, ParseCardError> {
    parse_wild_card_tokens(tokens.split_whitespace())
}

/// Parses a sequence of cards and jokers tokens.
pub fn parse_wild_card_tokens<I>(tokens: I) -> Result<Vec<WildCard>, ParseCardError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tokens.into_iter().map(|t| t.as_ref().parse()).collect()
}
