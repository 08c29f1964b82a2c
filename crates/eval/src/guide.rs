// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands guide.
//!
//! One entry for each hand category, from the weakest to the strongest, with
//! an example hand. The royal flush has its own entry even if it is only the
//! ace high straight flush.
use hitcalc_cards::{Card, Rank::*, Suit::*};

use crate::HandCategory;

/// A guide entry.
#[derive(Debug, Clone, Copy)]
pub struct GuideItem {
    /// The hand name.
    pub name: &'static str,
    /// The hand category.
    pub category: HandCategory,
    /// An example hand.
    pub cards: [Card; 5],
    /// What makes the hand.
    pub description: &'static str,
}

/// The hands guide.
pub static GUIDE: [GuideItem; 10] = [
    GuideItem {
        name: "High Card",
        category: HandCategory::HighCard,
        cards: [
            Card::new(Ace, Clubs),
            Card::new(Seven, Diamonds),
            Card::new(Four, Spades),
            Card::new(Nine, Hearts),
            Card::new(Trey, Clubs),
        ],
        description: "No matching cards. The highest card wins.",
    },
    GuideItem {
        name: "One Pair",
        category: HandCategory::Pair,
        cards: [
            Card::new(King, Spades),
            Card::new(King, Diamonds),
            Card::new(Eight, Clubs),
            Card::new(Five, Hearts),
            Card::new(Deuce, Spades),
        ],
        description: "Two cards of the same rank form a pair.",
    },
    GuideItem {
        name: "Two Pair",
        category: HandCategory::TwoPair,
        cards: [
            Card::new(Queen, Hearts),
            Card::new(Queen, Clubs),
            Card::new(Jack, Diamonds),
            Card::new(Jack, Spades),
            Card::new(Seven, Clubs),
        ],
        description: "Two different pairs of cards.",
    },
    GuideItem {
        name: "Three of a Kind",
        category: HandCategory::ThreeOfAKind,
        cards: [
            Card::new(Ten, Spades),
            Card::new(Ten, Diamonds),
            Card::new(Ten, Clubs),
            Card::new(Eight, Hearts),
            Card::new(Trey, Spades),
        ],
        description: "Three cards of the same rank.",
    },
    GuideItem {
        name: "Straight",
        category: HandCategory::Straight,
        cards: [
            Card::new(Seven, Clubs),
            Card::new(Eight, Spades),
            Card::new(Nine, Diamonds),
            Card::new(Ten, Hearts),
            Card::new(Jack, Clubs),
        ],
        description: "Five cards in numerical order of any suit.",
    },
    GuideItem {
        name: "Flush",
        category: HandCategory::Flush,
        cards: [
            Card::new(Deuce, Hearts),
            Card::new(Six, Hearts),
            Card::new(Nine, Hearts),
            Card::new(Jack, Hearts),
            Card::new(King, Hearts),
        ],
        description: "Five cards of the same suit, not in order.",
    },
    GuideItem {
        name: "Full House",
        category: HandCategory::FullHouse,
        cards: [
            Card::new(Queen, Clubs),
            Card::new(Queen, Diamonds),
            Card::new(Queen, Spades),
            Card::new(Eight, Clubs),
            Card::new(Eight, Hearts),
        ],
        description: "Three cards of one rank and two cards of another.",
    },
    GuideItem {
        name: "Four of a Kind",
        category: HandCategory::FourOfAKind,
        cards: [
            Card::new(Jack, Spades),
            Card::new(Jack, Diamonds),
            Card::new(Jack, Clubs),
            Card::new(Jack, Hearts),
            Card::new(Five, Clubs),
        ],
        description: "All four cards of the same rank.",
    },
    GuideItem {
        name: "Straight Flush",
        category: HandCategory::StraightFlush,
        cards: [
            Card::new(Eight, Spades),
            Card::new(Nine, Spades),
            Card::new(Ten, Spades),
            Card::new(Jack, Spades),
            Card::new(Queen, Spades),
        ],
        description: "Five cards in sequence, all of the same suit.",
    },
    GuideItem {
        name: "Royal Flush",
        category: HandCategory::StraightFlush,
        cards: [
            Card::new(Ten, Hearts),
            Card::new(Jack, Hearts),
            Card::new(Queen, Hearts),
            Card::new(King, Hearts),
            Card::new(Ace, Hearts),
        ],
        description: "The highest straight flush, from 10 to Ace.",
    },
];
