// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification and comparison.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, EvalError, Rank, Result};

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Five cards in sequence of the same suit.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// The score of a five cards hand.
///
/// The score holds the hand category and the ranks used to break ties
/// between hands in the same category, rank lists are sorted from the highest
/// rank down. Scores are ordered by category first and then by tie-break
/// ranks, two scores are equal only if the hands are a tie.
///
/// Straights are ace high only, a 5-4-3-2-A hand is not a straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandScore {
    /// High card with all the ranks.
    HighCard([Rank; HAND_SIZE]),
    /// Pair rank and all the ranks.
    OnePair(Rank, [Rank; HAND_SIZE]),
    /// Higher pair rank, lower pair rank, and all the ranks.
    TwoPair(Rank, Rank, [Rank; HAND_SIZE]),
    /// Triple rank and all the ranks.
    ThreeOfAKind(Rank, [Rank; HAND_SIZE]),
    /// Straight high rank.
    Straight(Rank),
    /// All the ranks.
    Flush([Rank; HAND_SIZE]),
    /// Triple rank and pair rank.
    FullHouse(Rank, Rank),
    /// Quad rank and kicker.
    FourOfAKind(Rank, Rank),
    /// Straight high rank.
    StraightFlush(Rank),
}

impl HandScore {
    /// Classifies a five cards hand.
    ///
    /// Returns [EvalError::WrongCardCount] if the hand doesn't have five cards.
    pub fn eval(cards: &[Card]) -> Result<HandScore> {
        let cards = <&[Card; HAND_SIZE]>::try_from(cards).map_err(|_| {
            EvalError::WrongCardCount {
                expected: HAND_SIZE,
                actual: cards.len(),
            }
        })?;

        Ok(Self::eval5(cards))
    }

    pub(crate) fn eval5(cards: &[Card; HAND_SIZE]) -> HandScore {
        let mut ranks = cards.map(|c| c.rank());
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let is_flush = cards.iter().fold(0xf, |suits, c| suits & c.suit_bits()) != 0;
        let is_straight = ranks
            .windows(2)
            .all(|w| w[0].value() == w[1].value() + 1);

        let counts = RankCounts::new(&ranks);

        if is_straight && is_flush {
            return HandScore::StraightFlush(ranks[0]);
        }

        if let Some(quad) = counts.kind(4) {
            // A quad always leaves a single kicker.
            let kicker = counts.kind(1).unwrap_or(quad);
            return HandScore::FourOfAKind(quad, kicker);
        }

        if let (Some(triple), Some(pair)) = (counts.kind(3), counts.kind(2)) {
            return HandScore::FullHouse(triple, pair);
        }

        if is_flush {
            return HandScore::Flush(ranks);
        }

        if is_straight {
            return HandScore::Straight(ranks[0]);
        }

        if let Some(triple) = counts.kind(3) {
            return HandScore::ThreeOfAKind(triple, ranks);
        }

        if let Some((high, low)) = counts.two_pair() {
            return HandScore::TwoPair(high, low, ranks);
        }

        if let Some(pair) = counts.kind(2) {
            return HandScore::OnePair(pair, ranks);
        }

        HandScore::HighCard(ranks)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        match self {
            HandScore::HighCard(..) => HandRank::HighCard,
            HandScore::OnePair(..) => HandRank::OnePair,
            HandScore::TwoPair(..) => HandRank::TwoPair,
            HandScore::ThreeOfAKind(..) => HandRank::ThreeOfAKind,
            HandScore::Straight(..) => HandRank::Straight,
            HandScore::Flush(..) => HandRank::Flush,
            HandScore::FullHouse(..) => HandRank::FullHouse,
            HandScore::FourOfAKind(..) => HandRank::FourOfAKind,
            HandScore::StraightFlush(..) => HandRank::StraightFlush,
        }
    }

    /// The category number from 0 for a high card to 8 for a straight flush.
    pub fn category(&self) -> u8 {
        self.rank() as u8
    }

    /// Compares this score with another score.
    pub fn winner(&self, other: &HandScore) -> Winner {
        compare_hand_scores(self, other)
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn ranks(ranks: &[Rank]) -> String {
            ranks.iter().map(|r| r.symbol()).collect()
        }

        write!(f, "{}", self.rank())?;
        match self {
            HandScore::HighCard(all) | HandScore::Flush(all) => write!(f, " {}", ranks(all)),
            HandScore::OnePair(r, all) | HandScore::ThreeOfAKind(r, all) => {
                write!(f, " {r} {}", ranks(all))
            }
            HandScore::TwoPair(high, low, all) => write!(f, " {high}{low} {}", ranks(all)),
            HandScore::FullHouse(r1, r2) | HandScore::FourOfAKind(r1, r2) => {
                write!(f, " {r1}{r2}")
            }
            HandScore::Straight(r) | HandScore::StraightFlush(r) => write!(f, " {r}"),
        }
    }
}

/// Rank occurrences in a hand.
struct RankCounts(AHashMap<Rank, usize>);

impl RankCounts {
    fn new(ranks: &[Rank]) -> Self {
        let mut counts = AHashMap::with_capacity(ranks.len());
        for &rank in ranks {
            *counts.entry(rank).or_insert(0) += 1;
        }

        Self(counts)
    }

    /// The highest rank that occurs exactly n times.
    fn kind(&self, n: usize) -> Option<Rank> {
        self.0
            .iter()
            .filter(|&(_, &count)| count == n)
            .map(|(&rank, _)| rank)
            .max()
    }

    /// The high and low pair ranks if there are exactly two pairs.
    fn two_pair(&self) -> Option<(Rank, Rank)> {
        let mut pairs = self
            .0
            .iter()
            .filter(|&(_, &count)| count == 2)
            .map(|(&rank, _)| rank);

        match (pairs.next(), pairs.next(), pairs.next()) {
            (Some(r1), Some(r2), None) => Some((r1.max(r2), r1.min(r2))),
            _ => None,
        }
    }
}

/// The result of a comparison between a left and right hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// The left hand is higher.
    Left,
    /// The right hand is higher.
    Right,
    /// The hands have the same score.
    Tie,
}

/// Compares two scores.
///
/// The category is compared first, hands in the same category are compared
/// by the category tie-break ranks.
pub fn compare_hand_scores(left: &HandScore, right: &HandScore) -> Winner {
    use std::cmp::Ordering;

    match left.cmp(right) {
        Ordering::Greater => Winner::Left,
        Ordering::Less => Winner::Right,
        Ordering::Equal => Winner::Tie,
    }
}

/// Classifies a five cards hand, see [HandScore::eval].
pub fn hand_rank(cards: &[Card]) -> Result<HandScore> {
    HandScore::eval(cards)
}

/// Classifies and compares two five cards hands.
pub fn compare_hands(left: &[Card], right: &[Card]) -> Result<Winner> {
    let left = HandScore::eval(left)?;
    let right = HandScore::eval(right)?;
    Ok(compare_hand_scores(&left, &right))
}
