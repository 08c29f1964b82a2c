// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::combos::{KSubset, KSubsets};

/// A Poker card.
///
/// A card is stored as its position in the 52 cards universe:
///
/// ```text
///   index = suit * 13 + (rank - 2)
///   suit  = clubs=0, diamonds=1, hearts=2, spades=3
///   rank  = deuce=2, trey=3, ..., king=13, ace=14
/// ```
///
/// so that any set of cards fits in a `u64` mask, see [Card::mask].
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Card(u8);

/// A Poker card.
impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card(suit as u8 * 13 + (rank as u8 - 2))
    }

    /// This card position in the 52 cards universe.
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// The bit for this card in a 52 bits cards mask.
    #[inline]
    pub fn mask(&self) -> u64 {
        1 << self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 / 13 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            3 => Suit::Spades,
            _ => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match self.0 % 13 {
            0 => Rank::Deuce,
            1 => Rank::Trey,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            _ => Rank::Ace,
        }
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

    /// Parses a card from its rank and suit, `"As"`, `"TH"`, `"10d"`, `"K♣"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(ParseCardError::InvalidCard(s.to_string()));
        }

        Ok(Card::new(rank.parse()?, Suit::from_char(suit)?))
    }
}

/// Parses a list of cards separated by spaces or commas.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<Card>())
        .collect()
}

impl TryFrom<u8> for Card {
    type Error = ParseCardError;

    /// Creates a card from its position in the 52 cards universe.
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if (index as usize) < Deck::SIZE {
            Ok(Card(index))
        } else {
            Err(ParseCardError::InvalidIndex(index))
        }
    }
}

/// Formats cards separated by a space.
pub fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Error parsing card text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// No card text.
    #[error("empty card")]
    Empty,
    /// The text is not a rank followed by a suit.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
    /// Unknown rank.
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    /// Unknown suit.
    #[error("invalid suit '{0}'")]
    InvalidSuit(char),
    /// The card index is outside the 52 cards universe.
    #[error("invalid card index {0}")]
    InvalidIndex(u8),
}

/// A set of cards contains the same card more than once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate cards {}", cards_to_string(.0))]
pub struct DuplicateCards(pub Vec<Card>);

/// Checks that all cards are distinct returning the cards mask.
///
/// On error the repeated cards are listed once each in input order.
pub fn check_distinct(cards: &[Card]) -> Result<u64, DuplicateCards> {
    let mut mask = 0u64;
    let mut repeated = 0u64;
    let mut dups = Vec::new();

    for card in cards {
        if mask & card.mask() != 0 {
            if repeated & card.mask() == 0 {
                dups.push(*card);
            }
            repeated |= card.mask();
        }
        mask |= card.mask();
    }

    if dups.is_empty() {
        Ok(mask)
    } else {
        Err(DuplicateCards(dups))
    }
}

/// Card rank.
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
    /// The rank value, 2 for a deuce up to 14 for an ace.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
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
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
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

impl Suit {
    /// The suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// Parses a suit letter in any case or a suit symbol.
    pub fn from_char(c: char) -> Result<Suit, ParseCardError> {
        match c {
            'c' | 'C' | '♣' | '♧' => Ok(Suit::Clubs),
            'd' | 'D' | '♦' | '♢' => Ok(Suit::Diamonds),
            'h' | 'H' | '♥' | '♡' => Ok(Suit::Hearts),
            's' | 'S' | '♠' | '♤' => Ok(Suit::Spades),
            _ => Err(ParseCardError::InvalidSuit(c)),
        }
    }
}

/// Builds the 52 cards universe in suit-major order.
const fn make_universe() -> [Card; Deck::SIZE] {
    let mut cards = [Card(0); Deck::SIZE];
    let mut idx = 0;
    while idx < Deck::SIZE {
        cards[idx] = Card(idx as u8);
        idx += 1;
    }
    cards
}

/// All the 52 cards.
static UNIVERSE: [Card; Deck::SIZE] = make_universe();

/// A cards Deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck with all the cards that are not in `cards`.
    ///
    /// The deck keeps the universe order, fails if `cards` has duplicates.
    pub fn without(cards: &[Card]) -> Result<Self, DuplicateCards> {
        let mask = check_distinct(cards)?;
        let cards = UNIVERSE
            .iter()
            .filter(|c| mask & c.mask() == 0)
            .copied()
            .collect();
        Ok(Self { cards })
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if a card is in the deck.
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

    /// Returns an iterator over all the k-cards combinations in the deck.
    ///
    /// Panics if k > 7.
    pub fn combinations(&self, k: usize) -> Combinations<'_> {
        Combinations {
            cards: &self.cards,
            subsets: KSubsets::new(self.cards.len(), k),
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            cards: UNIVERSE.to_vec(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Iterator over the k-cards combinations of a deck.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    cards: &'a [Card],
    subsets: KSubsets,
}

impl Combinations<'_> {
    fn pick(&self, subset: KSubset) -> Vec<Card> {
        subset.indices().iter().map(|&i| self.cards[i]).collect()
    }
}

impl Iterator for Combinations<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Self::Item> {
        self.subsets.next().map(|s| self.pick(s))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.subsets.size_hint()
    }
}

impl ExactSizeIterator for Combinations<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            assert_eq!(card.mask().count_ones(), 1);
            assert!(card.index() < Deck::SIZE);
            cards.insert(card.index());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);

        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.rank().value(), 13);
        assert_eq!(kd.suit(), Suit::Diamonds);

        let ac = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(ac.index(), 12);

        let ds = Card::new(Rank::Deuce, Suit::Spades);
        assert_eq!(ds.index(), 39);
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
        let ts = Card::new(Rank::Ten, Suit::Spades);
        assert_eq!("Ts".parse::<Card>(), Ok(ts));
        assert_eq!("TS".parse::<Card>(), Ok(ts));
        assert_eq!("10s".parse::<Card>(), Ok(ts));
        assert_eq!("T♠".parse::<Card>(), Ok(ts));
        assert_eq!(" ts ".parse::<Card>(), Ok(ts));

        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!(
            "s".parse::<Card>(),
            Err(ParseCardError::InvalidCard("s".to_string()))
        );
        assert_eq!(
            "1s".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!("Ax".parse::<Card>(), Err(ParseCardError::InvalidSuit('x')));

        // Round trip through display.
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
    }

    #[test]
    fn card_from_index() {
        for card in Deck::default() {
            assert_eq!(Card::try_from(card.index() as u8), Ok(card));
        }

        assert_eq!(Card::try_from(52), Err(ParseCardError::InvalidIndex(52)));
        assert_eq!(Card::try_from(200), Err(ParseCardError::InvalidIndex(200)));

        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let json = serde_json::to_string(&ah).unwrap();
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), ah);

        assert!(serde_json::from_str::<Card>("51").is_ok());
        assert!(serde_json::from_str::<Card>("52").is_err());
        assert!(serde_json::from_str::<Card>("200").is_err());
    }

    #[test]
    fn cards_list() {
        let cards = parse_cards("As Kh, 7♦,2c").unwrap();
        assert_eq!(cards_to_string(&cards), "AS KH 7D 2C");
        assert!(parse_cards("  ").unwrap().is_empty());
        assert!(parse_cards("As Zz").is_err());
    }

    #[test]
    fn distinct_cards() {
        let cards = parse_cards("AS KS AH").unwrap();
        let mask = check_distinct(&cards).unwrap();
        assert_eq!(mask.count_ones(), 3);

        let cards = parse_cards("AS KS AS 2C KS AS").unwrap();
        let err = check_distinct(&cards).unwrap_err();
        assert_eq!(err.0, parse_cards("AS KS").unwrap());
        assert_eq!(err.to_string(), "duplicate cards AS KS");
    }

    #[test]
    fn deck_without() {
        let known = parse_cards("AS KS AH KD 7C").unwrap();
        let deck = Deck::without(&known).unwrap();
        assert_eq!(deck.count(), 47);
        assert!(known.iter().all(|&c| !deck.contains(c)));

        // Keeps the universe order.
        let mut sorted = deck.cards().to_vec();
        sorted.sort();
        assert_eq!(sorted, deck.cards());

        let dup = parse_cards("AS AS").unwrap();
        assert!(Deck::without(&dup).is_err());
    }

    #[test]
    fn deck_combinations() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        for cards in deck.combinations(2) {
            assert_eq!(cards.len(), 2);
            hands.insert(cards);
        }
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        for cards in deck.combinations(3) {
            assert_eq!(cards.len(), 3);
            hands.insert(cards);
        }
        assert_eq!(hands.len(), 22_100);

        // A single empty combination.
        let empty = deck.combinations(0).collect::<Vec<_>>();
        assert_eq!(empty, vec![Vec::<Card>::new()]);
    }

    #[test]
    fn deck_combinations_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let combos = deck.combinations(5);
        assert_eq!(combos.len(), 2_118_760);
    }
}
