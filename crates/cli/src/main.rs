// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildhand CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::{Parser, Subcommand};
use log::error;
use std::process::ExitCode;

mod commands;

#[derive(Debug, Parser)]
#[command(about = "Poker hands evaluator with jokers")]
struct Cli {
    /// Enables debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classifies a five cards hand.
    Rank {
        /// Five cards tokens, e.g. 5C 6C 7C 8C 9C.
        #[clap(num_args = 1.., required = true)]
        cards: Vec<String>,
    },
    /// Finds the best five cards out of seven cards.
    Best {
        /// Seven cards tokens.
        #[clap(num_args = 1.., required = true)]
        cards: Vec<String>,
        /// Rejects hands with duplicate cards.
        #[clap(long)]
        strict: bool,
    },
    /// Finds the best five cards out of seven cards with ?B and ?R jokers.
    Wild {
        /// Seven cards tokens, jokers are ?B and ?R.
        #[clap(num_args = 1.., required = true)]
        cards: Vec<String>,
        /// Rejects hands with duplicate cards.
        #[clap(long)]
        strict: bool,
        /// Number of parallel tasks.
        #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
        tasks: u16,
    },
    /// Compares two five cards hands.
    Compare {
        /// The left hand, e.g. "AC AD 3S 7H 9C".
        #[clap(long, short)]
        left: String,
        /// The right hand.
        #[clap(long, short)]
        right: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let res = match cli.command {
        Command::Rank { cards } => commands::rank(&cards.join(" ")),
        Command::Best { cards, strict } => commands::best(&cards.join(" "), strict),
        Command::Wild {
            cards,
            strict,
            tasks,
        } => commands::wild(&cards.join(" "), strict, tasks as usize),
        Command::Compare { left, right } => commands::compare(&left, &right),
    };

    match res {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
