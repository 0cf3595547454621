// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Commands implementation, each command returns the text to print.
use anyhow::{Context, Result};
use log::info;

use wildhand_eval::{
    BestHand, EvalError, Evaluator, Winner, compare_hand_scores, hand_rank_tokens,
    parse_wild_card_tokens,
};

/// Classifies a five cards hand.
pub fn rank(tokens: &str) -> Result<String> {
    let score = hand_rank_tokens(tokens.split_whitespace()).context("Hand rank failed")?;
    Ok(score.to_string())
}

/// Best five out of seven cards.
pub fn best(tokens: &str, strict: bool) -> Result<String> {
    let best = Evaluator::default()
        .strict(strict)
        .best_hand_tokens(tokens.split_whitespace())
        .context("Best hand failed")?;
    Ok(format_best(&best))
}

/// Best five out of seven cards with jokers.
pub fn wild(tokens: &str, strict: bool, tasks: usize) -> Result<String> {
    let cards = parse_wild_card_tokens(tokens.split_whitespace())
        .map_err(EvalError::from)
        .context("Best wild hand failed")?;
    let jokers = cards.iter().filter(|c| c.is_joker()).count();
    info!("Evaluating {} cards with {jokers} jokers", cards.len());

    let evaluator = Evaluator::default().strict(strict);
    let best = if tasks > 1 {
        par_best_wild_hand(&evaluator, &cards, tasks)
    } else {
        evaluator.best_wild_hand(&cards)
    }
    .context("Best wild hand failed")?;

    Ok(format_best(&best))
}

#[cfg(feature = "parallel")]
fn par_best_wild_hand(
    evaluator: &Evaluator,
    cards: &[wildhand_eval::WildCard],
    tasks: usize,
) -> wildhand_eval::Result<BestHand> {
    evaluator.par_best_wild_hand(cards, tasks)
}

#[cfg(not(feature = "parallel"))]
fn par_best_wild_hand(
    evaluator: &Evaluator,
    cards: &[wildhand_eval::WildCard],
    _tasks: usize,
) -> wildhand_eval::Result<BestHand> {
    log::warn!("Parallel feature not enabled, using one task");
    evaluator.best_wild_hand(cards)
}

/// Compares two five cards hands.
pub fn compare(left: &str, right: &str) -> Result<String> {
    let left = hand_rank_tokens(left.split_whitespace()).context("Left hand failed")?;
    let right = hand_rank_tokens(right.split_whitespace()).context("Right hand failed")?;
    let output = match compare_hand_scores(&left, &right) {
        Winner::Left => "left",
        Winner::Right => "right",
        Winner::Tie => "tie",
    };

    Ok(output.to_string())
}

fn format_best(best: &BestHand) -> String {
    format!("{} {}", best.sorted_tokens().join(" "), best.score)
}
