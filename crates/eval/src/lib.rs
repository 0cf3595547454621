// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildhand Poker hand evaluator.
//!
//! Poker hand evaluator for 5 and 7 cards hands with optional black and red
//! jokers. A black joker can stand for any club or spade and a red joker for
//! any heart or diamond.
//!
//! To use the evaluator parse or create a hand and use [best_hand] to get the
//! best five cards and their [HandScore]:
//!
//! ```
//! # use wildhand_eval::*;
//! let cards = parse_cards("TD TC TH 7C 7D 8C 8S")?;
//! let best = best_hand(&cards)?;
//! assert_eq!(best.score, HandScore::FullHouse(Rank::Ten, Rank::Eight));
//! assert_eq!(best.sorted_tokens(), ["8C", "8S", "TC", "TD", "TH"]);
//! # Ok::<(), EvalError>(())
//! ```
//!
//! hands with jokers are evaluated with [best_wild_hand]:
//!
//! ```
//! # use wildhand_eval::*;
//! let cards = parse_wild_cards("6C 7C 8C 9C TC 5C ?B")?;
//! let best = best_wild_hand(&cards)?;
//! assert_eq!(best.score, HandScore::StraightFlush(Rank::Jack));
//! # Ok::<(), EvalError>(())
//! ```
//!
//! The `_tokens` functions take the cards tokens and return
//! [EvalError::InvalidCardToken] if a token is not a card:
//!
//! ```
//! # use wildhand_eval::*;
//! let best = best_wild_hand_tokens(["TD", "TC", "5H", "5C", "7C", "?R", "?B"])?;
//! assert_eq!(best.score, HandScore::FourOfAKind(Rank::Ten, Rank::Seven));
//!
//! let res = hand_rank_tokens(["6C", "7C", "8C", "9C", "1C"]);
//! assert!(matches!(res, Err(EvalError::InvalidCardToken(_))));
//! # Ok::<(), EvalError>(())
//! ```
//!
//! and two five cards hands are compared with [compare_hand_scores]:
//!
//! ```
//! # use wildhand_eval::*;
//! let s1 = hand_rank(&parse_cards("AC AD 3S 7H 9C")?)?;
//! let s2 = hand_rank(&parse_cards("AH AS 4S 7D 9D")?)?;
//! assert_eq!(compare_hand_scores(&s1, &s2), Winner::Right);
//! assert!(s2 > s1);
//! # Ok::<(), EvalError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{
    BestHand, Evaluator, HandRank, HandScore, Winner, best_hand, best_hand_tokens,
    best_wild_hand, best_wild_hand_tokens, compare_hand_scores, compare_hands, hand_rank,
    hand_rank_tokens,
};

mod error;
pub use error::{EvalError, Result};

// Reexport cards types.
pub use wildhand_cards::{
    Card, Color, Deck, ParseCardError, Rank, Suit, WildCard, parse_card_tokens, parse_cards,
    parse_wild_card_tokens, parse_wild_cards,
};
