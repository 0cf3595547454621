// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand with jokers.
//!
//! A joker is expanded into all the concrete cards of its color and the best
//! five cards hand is searched for each combination of jokers substitutes.
//! A substitute that duplicates a card already in the hand is dropped, so a
//! hand with two jokers may be evaluated with five, six, or seven cards.
use itertools::Itertools;
use log::{debug, trace};

use super::best::{self, BestHand, SEVEN_CARDS, keep_first_best};
use super::score::HAND_SIZE;
use crate::{Card, Color, Deck, EvalError, Result, WildCard};

/// Hand evaluator configuration.
///
/// ```
/// # use wildhand_eval::*;
/// let cards = parse_wild_cards("TD TC 5H 5C 7C ?R ?B").unwrap();
/// let best = Evaluator::default().strict(true).best_wild_hand(&cards).unwrap();
/// assert_eq!(best.score.rank(), HandRank::FourOfAKind);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    strict: bool,
}

impl Evaluator {
    /// Rejects hands with the same concrete card twice if strict is true.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Checks if the evaluator rejects duplicate cards.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns the best five cards out of a seven cards hand.
    pub fn best_hand(&self, cards: &[Card]) -> Result<BestHand> {
        self.check_duplicates(cards)?;
        best::best_hand(cards)
    }

    /// Returns the best five cards out of a seven cards hand with jokers.
    ///
    /// With no jokers this is the same as [Evaluator::best_hand], ties between
    /// substitutions are resolved in favor of the first substitution in rank
    /// order, see [Deck::of_color].
    pub fn best_wild_hand(&self, cards: &[WildCard]) -> Result<BestHand> {
        let hand = self.split_jokers(cards)?;
        if hand.jokers.is_empty() {
            return best::best_hand(&hand.cards);
        }

        debug!(
            "Resolving {} jokers for {} substitutions",
            hand.jokers.len(),
            hand.num_substitutions()
        );

        resolve(&hand.cards, hand.substitutions()).ok_or(EvalError::WrongCardCount {
            expected: HAND_SIZE,
            actual: hand.cards.len(),
        })
    }

    /// Splits a hand into concrete cards and jokers.
    pub(crate) fn split_jokers(&self, cards: &[WildCard]) -> Result<WildHand> {
        if cards.len() != SEVEN_CARDS {
            return Err(EvalError::WrongCardCount {
                expected: SEVEN_CARDS,
                actual: cards.len(),
            });
        }

        let (cards, jokers): (Vec<_>, Vec<_>) = cards.iter().partition_map(|c| match c {
            WildCard::Card(card) => itertools::Either::Left(*card),
            WildCard::Joker(color) => itertools::Either::Right(*color),
        });

        self.check_duplicates(&cards)?;
        Ok(WildHand { cards, jokers })
    }

    fn check_duplicates(&self, cards: &[Card]) -> Result<()> {
        if !self.strict {
            return Ok(());
        }

        match cards.iter().duplicates().next() {
            Some(card) => Err(EvalError::DuplicateCard(*card)),
            None => Ok(()),
        }
    }
}

/// A hand split into concrete cards and jokers colors.
#[derive(Debug)]
pub(crate) struct WildHand {
    pub cards: Vec<Card>,
    pub jokers: Vec<Color>,
}

impl WildHand {
    /// All the jokers substitutes combinations, the first joker varies slowest.
    pub fn substitutions(&self) -> impl Iterator<Item = Vec<Card>> + '_ {
        self.jokers
            .iter()
            .map(|&color| Deck::of_color(color).into_iter())
            .multi_cartesian_product()
    }

    /// Number of substitutions combinations.
    pub fn num_substitutions(&self) -> usize {
        self.jokers
            .iter()
            .map(|&color| Deck::of_color(color).count())
            .product()
    }
}

/// Returns the best hand over the given substitutions, substitutions that
/// leave less than five cards are skipped.
pub(crate) fn resolve<I>(cards: &[Card], substitutions: I) -> Option<BestHand>
where
    I: Iterator<Item = Vec<Card>>,
{
    let mut hand = Vec::with_capacity(cards.len() + 2);

    substitutions
        .filter_map(|subs| {
            hand.clear();
            hand.extend_from_slice(cards);
            for card in subs {
                if !hand.contains(&card) {
                    hand.push(card);
                }
            }

            best::best_of(&hand)
        })
        .fold(None, |top, hand| {
            let best = keep_first_best(top, hand);
            if best != top {
                trace!("New best hand {hand}");
            }
            best
        })
}

/// Returns the best five cards out of a seven cards hand with jokers, see
/// [Evaluator::best_wild_hand].
pub fn best_wild_hand(cards: &[WildCard]) -> Result<BestHand> {
    Evaluator::default().best_wild_hand(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandRank, HandScore, Rank, Suit, Winner, compare_hand_scores, parse_wild_cards};
    use rand::{SeedableRng, prelude::*, rngs::StdRng};

    fn best_wild(tokens: &str) -> BestHand {
        best_wild_hand(&parse_wild_cards(tokens).unwrap()).unwrap()
    }

    #[test]
    fn black_joker_extends_straight_flush() {
        let hand = best_wild("6C 7C 8C 9C TC 5C ?B");
        assert_eq!(hand.sorted_tokens(), ["7C", "8C", "9C", "JC", "TC"]);
        assert_eq!(hand.score, HandScore::StraightFlush(Rank::Jack));
    }

    #[test]
    fn two_jokers_make_four_of_a_kind() {
        let hand = best_wild("TD TC 5H 5C 7C ?R ?B");
        assert_eq!(hand.sorted_tokens(), ["7C", "TC", "TD", "TH", "TS"]);
        assert_eq!(hand.score, HandScore::FourOfAKind(Rank::Ten, Rank::Seven));
    }

    #[test]
    fn no_jokers() {
        let hand = best_wild("JD TC TH 7C 7D 7S 7H");
        assert_eq!(hand.sorted_tokens(), ["7C", "7D", "7H", "7S", "JD"]);
    }

    #[test]
    fn joker_color_restricts_suit() {
        // A red joker cannot complete a club flush.
        let hand = best_wild("2C 5C 8C JC 3D 4S ?R");
        assert_eq!(hand.score, HandScore::Straight(Rank::Six));
        assert_eq!(hand.sorted_tokens(), ["2C", "3D", "4S", "5C", "6H"]);

        let hand = best_wild("2C 5C 8C JC 3D 4S ?B");
        assert_eq!(hand.score.rank(), HandRank::Flush);
        assert_eq!(hand.sorted_tokens(), ["2C", "5C", "8C", "AC", "JC"]);
    }

    #[test]
    fn same_color_jokers() {
        // The red aces are already in the hand, the jokers make the nines.
        let hand = best_wild("AH AD 2C 7S 9C ?R ?R");
        assert_eq!(hand.score, HandScore::FullHouse(Rank::Nine, Rank::Ace));
        assert_eq!(hand.sorted_tokens(), ["9C", "9D", "9H", "AD", "AH"]);

        let hand = best_wild("AH AD AC AS 9C ?R ?R");
        assert_eq!(hand.score, HandScore::FourOfAKind(Rank::Ace, Rank::King));
    }

    #[test]
    fn colliding_substitutes_are_dropped() {
        // All the cards are black, jokers substitutes that duplicate a card
        // shrink the hand, the result is still a valid concrete hand.
        let cards = parse_wild_cards("AC AS KC KS QC ?B ?B").unwrap();
        let best = best_wild_hand(&cards).unwrap();
        assert_eq!(best.score, HandScore::StraightFlush(Rank::Ace));
        assert_eq!(best.cards.iter().unique().count(), HAND_SIZE);

        // A substitute equal to a card in the hand adds nothing.
        let cards = parse_wild_cards("AC KC QC JC TC").unwrap();
        let cards = cards.iter().filter_map(|c| c.card()).collect::<Vec<_>>();
        let colliding = [vec![Card::new(Rank::Ace, Suit::Clubs)]];
        let best = resolve(&cards, colliding.into_iter()).unwrap();
        assert_eq!(best.score, HandScore::StraightFlush(Rank::Ace));
    }

    #[test]
    fn too_few_cards_after_collisions() {
        let cards = parse_wild_cards("AC KC QC JC").unwrap();
        let cards = cards.iter().filter_map(|c| c.card()).collect::<Vec<_>>();
        let subs = [vec![Card::new(Rank::Ace, Suit::Clubs)]];
        assert!(resolve(&cards, subs.into_iter()).is_none());
    }

    #[test]
    fn substitutions_order() {
        let evaluator = Evaluator::default();
        let hand = evaluator
            .split_jokers(&parse_wild_cards("2C 3C 4C 5C 6C ?R ?B").unwrap())
            .unwrap();

        assert_eq!(hand.num_substitutions(), 26 * 26);

        let subs = hand.substitutions().collect::<Vec<_>>();
        assert_eq!(subs.len(), 26 * 26);
        assert_eq!(subs[0].iter().join(" "), "2H 2C");
        assert_eq!(subs[1].iter().join(" "), "2H 2S");
        assert_eq!(subs[2].iter().join(" "), "2H 3C");
        assert_eq!(subs[26].iter().join(" "), "2D 2C");
        assert_eq!(subs[675].iter().join(" "), "AD AS");
    }

    #[test]
    fn wrong_card_count() {
        let cards = parse_wild_cards("6C 7C 8C 9C TC ?B").unwrap();
        assert_eq!(
            best_wild_hand(&cards),
            Err(EvalError::WrongCardCount {
                expected: 7,
                actual: 6
            })
        );
    }

    #[test]
    fn strict_duplicates() {
        let cards = parse_wild_cards("6C 7C 8C 9C 6C ?B ?R").unwrap();
        assert!(best_wild_hand(&cards).is_ok());

        let strict = Evaluator::default().strict(true);
        assert!(strict.is_strict());
        assert_eq!(
            strict.best_wild_hand(&cards),
            Err(EvalError::DuplicateCard(Card::new(Rank::Six, Suit::Clubs)))
        );

        let cards = parse_wild_cards("6C 7C 8C 9C TC 5C 9C")
            .unwrap()
            .into_iter()
            .filter_map(|c| c.card())
            .collect::<Vec<_>>();
        assert!(Evaluator::default().best_hand(&cards).is_ok());
        assert_eq!(
            strict.best_hand(&cards),
            Err(EvalError::DuplicateCard(Card::new(Rank::Nine, Suit::Clubs)))
        );
    }

    #[test]
    fn jokers_never_hurt() {
        let mut rng = StdRng::seed_from_u64(42);
        let deck = Deck::default();

        for _ in 0..20 {
            let cards = deck
                .cards()
                .choose_multiple(&mut rng, SEVEN_CARDS)
                .copied()
                .collect::<Vec<_>>();

            // Replace one or two cards with jokers of a random color.
            let num_jokers = rng.random_range(1..=2);
            let mut wild = cards.iter().copied().map(WildCard::from).collect::<Vec<_>>();
            for card in wild.iter_mut().take(num_jokers) {
                let color = if rng.random_bool(0.5) {
                    Color::Black
                } else {
                    Color::Red
                };
                *card = WildCard::Joker(color);
            }

            let best = best_wild_hand(&wild).unwrap();
            assert_eq!(HandScore::eval(&best.cards).unwrap(), best.score);
            assert_eq!(best.cards.iter().unique().count(), HAND_SIZE);

            // At least as good as the concrete cards without jokers.
            let concrete = best::best_of(&cards[num_jokers..]).unwrap();
            assert_ne!(compare_hand_scores(&concrete.score, &best.score), Winner::Left);

            // At least as good as the original cards when the jokers can
            // stand for them.
            if wild
                .iter()
                .zip(&cards)
                .all(|(w, c)| w.card().is_some() || w == &WildCard::Joker(c.color()))
            {
                let original = best::best_hand(&cards).unwrap();
                assert_ne!(compare_hand_scores(&original.score, &best.score), Winner::Left);
            }
        }
    }
}
