// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation from cards tokens.
use super::best::BestHand;
use super::score::HandScore;
use super::wild::Evaluator;
use crate::{Result, parse_card_tokens, parse_wild_card_tokens};

impl Evaluator {
    /// Parses seven cards tokens and returns the best five cards, see
    /// [Evaluator::best_hand].
    pub fn best_hand_tokens<I>(&self, tokens: I) -> Result<BestHand>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let cards = parse_card_tokens(tokens)?;
        self.best_hand(&cards)
    }

    /// Parses seven cards and jokers tokens and returns the best five cards,
    /// see [Evaluator::best_wild_hand].
    pub fn best_wild_hand_tokens<I>(&self, tokens: I) -> Result<BestHand>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let cards = parse_wild_card_tokens(tokens)?;
        self.best_wild_hand(&cards)
    }
}

/// Classifies five cards tokens.
///
/// Returns [crate::EvalError::InvalidCardToken] if a token is not a concrete
/// card, jokers are not allowed.
pub fn hand_rank_tokens<I>(tokens: I) -> Result<HandScore>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let cards = parse_card_tokens(tokens)?;
    HandScore::eval(&cards)
}

/// Best five cards out of seven cards tokens.
pub fn best_hand_tokens<I>(tokens: I) -> Result<BestHand>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Evaluator::default().best_hand_tokens(tokens)
}

/// Best five cards out of seven cards and jokers tokens.
pub fn best_wild_hand_tokens<I>(tokens: I) -> Result<BestHand>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Evaluator::default().best_wild_hand_tokens(tokens)
}
