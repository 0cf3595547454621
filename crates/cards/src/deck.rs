// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::ParseCardError;

/// A concrete Poker card.
///
/// A card is packed in a single byte with the rank value in the high nibble
/// and a one-hot suit in the low nibble:
///
/// ```text
///   +--------+
///   |rrrrcdhs|
///   +--------+
///   r = rank value (deuce=2,trey=3,...,king=13,ace=14)
///   cdhs = suit of card
/// ```
///
/// so that and-ing the suit bits of a set of cards is non zero only if all
/// the cards have the same suit.
///
/// A card serializes as its id, deserialization rejects ids that are not a
/// valid rank and suit pair.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 4) | suit as u8)
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => unreachable!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match self.rank_bits() {
            2 => Rank::Deuce,
            3 => Rank::Trey,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            _ => unreachable!("Invalid rank 0x{:x}", self.0),
        }
    }

    /// Returns the card color.
    pub fn color(&self) -> Color {
        self.suit().color()
    }

    /// Returns the rank bits.
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        self.0 >> 4
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        self.0 & 0xf
    }
}

impl TryFrom<u8> for Card {
    type Error = ParseCardError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        let rank = id >> 4;
        let suit = id & 0xf;
        if (2..=14).contains(&rank) && suit.count_ones() == 1 {
            Ok(Card(id))
        } else {
            Err(ParseCardError::new(&format!("0x{id:02x}")))
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => {
                let rank = Rank::from_symbol(r);
                let suit = Suit::from_symbol(u);
                rank.zip(suit).map(|(rank, suit)| Card::new(rank, suit))
            }
            _ => None,
        }
        .ok_or_else(|| ParseCardError::new(s))
    }
}

/// Card rank, the discriminant is the rank value with the ace high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> + Clone {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank numeric value, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Parses a rank symbol, ranks symbols are upper case only.
    pub fn from_symbol(c: char) -> Option<Rank> {
        let rank = match c {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }

    /// The rank symbol.
    pub fn symbol(&self) -> char {
        match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::from_symbol(c),
            _ => None,
        }
        .ok_or_else(|| ParseCardError::new(s))
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::from_symbol(c),
            _ => None,
        }
        .ok_or_else(|| ParseCardError::new(s))
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> + Clone {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Parses a suit symbol, case insensitive.
    pub fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Clubs and spades are black, hearts and diamonds are red.
    pub fn color(&self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }
}

/// A suit color, used to restrict the cards a joker can stand for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Clubs and spades.
    Black,
    /// Hearts and diamonds.
    Red,
}

impl Color {
    /// The two suits with this color.
    pub fn suits(&self) -> [Suit; 2] {
        match self {
            Color::Black => [Suit::Clubs, Suit::Spades],
            Color::Red => [Suit::Hearts, Suit::Diamonds],
        }
    }

    /// Parses a color symbol, case insensitive.
    pub fn from_symbol(c: char) -> Option<Color> {
        match c.to_ascii_uppercase() {
            'B' => Some(Color::Black),
            'R' => Some(Color::Red),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "B"),
            Color::Red => write!(f, "R"),
        }
    }
}

/// A cards Deck
///
/// The deck is the ordered set of the 52 concrete cards, jokers are not part
/// of the deck, they are expanded into the deck cards with the same color.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a deck with only the cards of the given color in rank order,
    /// for example 2C, 2S, 3C, 3S, ..., AC, AS for black.
    pub fn of_color(color: Color) -> Self {
        let cards = Rank::ranks()
            .flat_map(|r| color.suits().into_iter().map(move |s| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck contains the given card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// The deck cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Positions of the current k-subset in lexicographic order.
        let mut pos = (0..k).collect::<Vec<_>>();
        let mut h = pos.iter().map(|&p| self.cards[p]).collect::<Vec<_>>();

        loop {
            f(&h);

            // Find the rightmost position that can still move right.
            let Some(i) = (0..k).rev().find(|&i| pos[i] != i + n - k) else {
                break;
            };

            pos[i] += 1;
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
            }

            for j in i..k {
                h[j] = self.cards[pos[j]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();

        for card in Deck::default() {
            assert_eq!(card.rank_bits(), card.rank().value());
            assert_eq!(card.suit_bits(), card.suit() as u8);
            assert_eq!(card.suit_bits().count_ones(), 1);
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);

        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.id(), 0xd4);

        let fs = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(fs.id(), 0x51);

        let ac = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(ac.id(), 0xe8);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }

        // Suits are case insensitive.
        let c = "Td".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Ten, Suit::Diamonds));

        let c = "as".parse::<Card>();
        assert!(c.is_err());

        for token in ["", "A", "ASD", "1C", "AX", "?B", "10C", "T♠"] {
            let err = token.parse::<Card>().unwrap_err();
            assert_eq!(err.token(), token);
        }
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());

        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Deuce < Rank::Trey);
        assert_eq!("Q".parse::<Rank>(), Ok(Rank::Queen));
        assert!("q".parse::<Rank>().is_err());
    }

    #[test]
    fn suit_colors() {
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);

        for color in [Color::Black, Color::Red] {
            assert!(color.suits().iter().all(|s| s.color() == color));
        }

        assert_eq!("h".parse::<Suit>(), Ok(Suit::Hearts));
    }

    #[test]
    fn deck_of_color() {
        let black = Deck::of_color(Color::Black);
        assert_eq!(black.count(), 26);
        assert!(black.cards().iter().all(|c| c.color() == Color::Black));
        assert_eq!(black.cards()[0], Card::new(Rank::Deuce, Suit::Clubs));
        assert_eq!(black.cards()[1], Card::new(Rank::Deuce, Suit::Spades));
        assert_eq!(black.cards()[25], Card::new(Rank::Ace, Suit::Spades));

        let red = Deck::of_color(Color::Red);
        assert_eq!(red.count(), 26);
        assert!(red.cards().iter().all(|c| c.color() == Color::Red));
        assert_eq!(red.cards()[0], Card::new(Rank::Deuce, Suit::Hearts));
        assert_eq!(red.cards()[1], Card::new(Rank::Deuce, Suit::Diamonds));
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_small() {
        let mut deck = Deck::of_color(Color::Red);
        deck.cards.truncate(7);

        let mut hands = Vec::new();
        deck.for_each(5, |cards| hands.push(cards.to_owned()));
        assert_eq!(hands.len(), 21);

        // Lexicographic order.
        assert_eq!(hands[0], deck.cards()[0..5]);
        assert_eq!(hands[20], deck.cards()[2..7]);

        // Nothing to do if k > n.
        deck.cards.truncate(4);
        deck.for_each(5, |_| panic!("unexpected hand"));
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert!(!deck.contains(Card::new(Rank::Ace, Suit::Diamonds)));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }

    #[test]
    fn card_serde() {
        let card = Card::new(Rank::Queen, Suit::Hearts);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "194");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);

        for card in Deck::default() {
            let json = serde_json::to_string(&card).unwrap();
            assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
        }

        // Ids that are not a rank and suit pair.
        for json in ["0", "255", "24", "32", "35", "248", "-1", "\"KD\""] {
            assert!(serde_json::from_str::<Card>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn card_from_id() {
        for card in Deck::default() {
            assert_eq!(Card::try_from(card.id()), Ok(card));
            assert_eq!(u8::from(card), card.id());
        }

        // Rank 0, rank 15, no suit, two suits.
        for id in [0x08, 0xf1, 0x50, 0x53] {
            let err = Card::try_from(id).unwrap_err();
            assert_eq!(err.token(), format!("0x{id:02x}"));
        }
    }
}
