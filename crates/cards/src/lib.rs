// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildhand Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use wildhand_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.rank() > kd.rank());
//! assert_eq!(ah.color(), kd.color());
//! ```
//!
//! a [WildCard] type for hands that may hold black and red jokers:
//!
//! ```
//! # use wildhand_cards::{Color, WildCard};
//! let joker: WildCard = "?B".parse().unwrap();
//! assert_eq!(joker, WildCard::Joker(Color::Black));
//! ```
//!
//! and a [Deck] type for iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use wildhand_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Color, Deck, Rank, Suit};

mod wild;
pub use wild::{
    ParseCardError, WildCard, parse_card_tokens, parse_cards, parse_wild_card_tokens,
    parse_wild_cards,
};
