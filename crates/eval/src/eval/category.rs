// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A hand category from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pair, straight, or flush.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five cards in sequence of the same suit.
    StraightFlush,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 9;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category position, 0 for high card up to 8 for straight flush.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }

    /// Number of ranks needed to break a tie between two hands.
    pub(crate) fn tiebreak_len(&self) -> usize {
        match self {
            HandCategory::FourOfAKind | HandCategory::FullHouse => 2,
            HandCategory::ThreeOfAKind | HandCategory::TwoPair => 3,
            HandCategory::Pair => 4,
            _ => 5,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_order() {
        let categories = HandCategory::categories().collect::<Vec<_>>();
        assert_eq!(categories.len(), HandCategory::COUNT);
        assert!(categories.windows(2).all(|w| w[0] < w[1]));

        for (idx, c) in categories.iter().enumerate() {
            assert_eq!(c.index(), idx);
        }

        assert_eq!(HandCategory::ThreeOfAKind.to_string(), "Three of a Kind");
    }
}
