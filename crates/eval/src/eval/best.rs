// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards out of seven cards.
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::score::{HAND_SIZE, HandScore, Winner, compare_hand_scores};
use crate::{Card, EvalError, Result};

/// Number of cards in a seven cards hand.
pub const SEVEN_CARDS: usize = 7;

/// The best five cards of a larger hand and their score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestHand {
    /// The hand score.
    pub score: HandScore,
    /// The five cards with the score.
    pub cards: [Card; HAND_SIZE],
}

impl BestHand {
    /// The cards sorted by their string representation.
    pub fn sorted_tokens(&self) -> Vec<String> {
        self.cards.iter().map(Card::to_string).sorted().collect()
    }
}

impl fmt::Display for BestHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.cards.iter().join(" "), self.score)
    }
}

/// Returns the best five cards out of a seven cards hand.
///
/// All the 21 five cards subsets are evaluated in lexicographic order, if
/// more subsets have the highest score the first one is returned.
///
/// Returns [EvalError::WrongCardCount] if the hand doesn't have seven cards.
pub fn best_hand(cards: &[Card]) -> Result<BestHand> {
    if cards.len() != SEVEN_CARDS {
        return Err(EvalError::WrongCardCount {
            expected: SEVEN_CARDS,
            actual: cards.len(),
        });
    }

    best_of(cards).ok_or(EvalError::WrongCardCount {
        expected: SEVEN_CARDS,
        actual: cards.len(),
    })
}

/// Returns the best five cards out of any number of cards, or `None` if
/// there are less than five cards.
pub(crate) fn best_of(cards: &[Card]) -> Option<BestHand> {
    cards
        .iter()
        .copied()
        .combinations(HAND_SIZE)
        .map(|hand| {
            let cards = std::array::from_fn(|idx| hand[idx]);
            BestHand {
                score: HandScore::eval5(&cards),
                cards,
            }
        })
        .fold(None, keep_first_best)
}

/// Folds a hand into the running best, on a tie the running best is kept.
pub(crate) fn keep_first_best(top: Option<BestHand>, hand: BestHand) -> Option<BestHand> {
    match top {
        Some(top) if compare_hand_scores(&hand.score, &top.score) != Winner::Left => Some(top),
        _ => Some(hand),
    }
}
