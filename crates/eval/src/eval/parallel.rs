// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel jokers resolution.
use log::debug;
use std::thread;

use super::best::{BestHand, keep_first_best};
use super::score::HAND_SIZE;
use super::wild::{Evaluator, resolve};
use crate::{EvalError, Result, WildCard};

impl Evaluator {
    /// Parallel [Evaluator::best_wild_hand] that splits the jokers
    /// substitutions between `num_tasks` tasks.
    ///
    /// Each task resolves a contiguous range of substitutions and the tasks
    /// results are folded in order, so the returned hand is the same hand
    /// returned by [Evaluator::best_wild_hand]. Zero tasks run as one task.
    pub fn par_best_wild_hand(&self, cards: &[WildCard], num_tasks: usize) -> Result<BestHand> {
        let num_tasks = num_tasks.max(1);
        let hand = self.split_jokers(cards)?;
        if hand.jokers.is_empty() {
            return self.best_hand(&hand.cards);
        }

        let num_subs = hand.num_substitutions();
        let subs_per_task = num_subs.div_ceil(num_tasks);

        debug!(
            "Resolving {} jokers for {num_subs} substitutions with {num_tasks} tasks",
            hand.jokers.len()
        );

        let mut results = vec![None; num_tasks];
        thread::scope(|s| {
            for (task_id, result) in results.iter_mut().enumerate() {
                let hand = &hand;
                s.spawn(move || {
                    let start = task_id * subs_per_task;
                    let subs = hand.substitutions().skip(start).take(subs_per_task);
                    *result = resolve(&hand.cards, subs);
                });
            }
        });

        results
            .into_iter()
            .flatten()
            .fold(None, keep_first_best)
            .ok_or(EvalError::WrongCardCount {
                expected: HAND_SIZE,
                actual: hand.cards.len(),
            })
    }
}
