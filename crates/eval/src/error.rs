// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use crate::{Card, ParseCardError};

/// Errors returned by the hand evaluation functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A card or joker token could not be parsed.
    #[error(transparent)]
    InvalidCardToken(#[from] ParseCardError),
    /// The hand doesn't have the number of cards required by the operation.
    #[error("Expected {expected} cards, got {actual}")]
    WrongCardCount {
        /// Number of cards required.
        expected: usize,
        /// Number of cards in the hand.
        actual: usize,
    },
    /// The same card appears twice in a hand evaluated in strict mode.
    #[error("Duplicate card {0}")]
    DuplicateCard(Card),
}

/// Evaluation result.
pub type Result<T> = std::result::Result<T, EvalError>;
