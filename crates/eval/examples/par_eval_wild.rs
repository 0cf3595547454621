// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Samples random seven cards hands with two jokers, checks the sequential
// and parallel resolvers return the same hands and compares their times.
//
// ```bash
// $ cargo r --release --features=parallel --example par_eval_wild -- --hands 100
// ```
use clap::Parser;
use itertools::Itertools;
use rand::prelude::*;
use std::time::Instant;

use wildhand_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of hands to sample.
    #[clap(long, default_value_t = 100)]
    hands: usize,
    /// Number of parallel tasks.
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
}

fn main() {
    let cli = Cli::parse();
    let mut rng = rand::rng();
    let deck = Deck::default();

    let hands = (0..cli.hands)
        .map(|_| {
            let mut hand = deck
                .cards()
                .choose_multiple(&mut rng, 5)
                .copied()
                .map(WildCard::from)
                .collect::<Vec<_>>();
            hand.push(WildCard::Joker(Color::Black));
            hand.push(WildCard::Joker(Color::Red));
            hand
        })
        .collect::<Vec<_>>();

    let evaluator = Evaluator::default();
    let mut counts = [0usize; 9];

    let now = Instant::now();
    let seq_hands = hands
        .iter()
        .map(|hand| evaluator.best_wild_hand(hand))
        .collect::<Vec<_>>();
    let seq_elapsed = now.elapsed().as_secs_f64();

    let now = Instant::now();
    let par_hands = hands
        .iter()
        .map(|hand| evaluator.par_best_wild_hand(hand, cli.tasks as usize))
        .collect::<Vec<_>>();
    let par_elapsed = now.elapsed().as_secs_f64();

    for ((hand, seq), par) in hands.iter().zip(&seq_hands).zip(&par_hands) {
        assert_eq!(seq, par, "Mismatch for hand {}", hand.iter().join(" "));
        if let Ok(best) = seq {
            counts[best.score.category() as usize] += 1;
        }
    }

    println!("Total hands      {}", hands.len());
    println!("Sequential:      {:.3}s", seq_elapsed);
    println!("Parallel:        {:.3}s ({} tasks)\n", par_elapsed, cli.tasks);

    for (category, count) in counts.iter().enumerate() {
        println!("Category {category}:      {count}");
    }
}
