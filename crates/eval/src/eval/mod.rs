// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! It provides a [HandScore::eval] method that classifies a five cards hand,
//! a [best_hand] function that finds the best five cards out of seven cards,
//! and a [best_wild_hand] function for seven cards hands with black and red
//! jokers. Jokers are resolved by trying all their substitutes, that is 26
//! cards for each joker and 676 combinations for a hand with two jokers.
//!
//! The **`parallel`** feature adds [Evaluator::par_best_wild_hand] to split
//! the jokers substitutions between threads.

pub mod best;
pub use best::{BestHand, best_hand};

pub mod score;
pub use score::{HandRank, HandScore, Winner, compare_hand_scores, compare_hands, hand_rank};

pub mod wild;
pub use wild::{Evaluator, best_wild_hand};

mod tokens;
pub use tokens::{best_hand_tokens, best_wild_hand_tokens, hand_rank_tokens};

#[cfg(feature = "parallel")]
mod parallel;
