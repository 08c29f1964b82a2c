// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hitcalc Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use hitcalc_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//! ```
//!
//! and a [Deck] type for the 52 cards universe, the deck left after removing
//! known cards, and lazy iteration over its k-cards combinations.
//!
//! For example to iterate through all the turn and river cards after a flop:
//!
//! ```
//! # use hitcalc_cards::{Deck, parse_cards};
//! let known = parse_cards("As Ks Ah Kd 7c").unwrap();
//! let deck = Deck::without(&known).unwrap();
//! assert_eq!(deck.count(), 47);
//!
//! let mut counter = 0;
//! for cards in deck.combinations(2) {
//!     assert_eq!(cards.len(), 2);
//!     counter += 1;
//! }
//! assert_eq!(counter, 1081);
//! ```
//!
//! The [combos] module has the index level subsets iterator that can start
//! from any subset to split an enumeration between parallel tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combos;
mod deck;
pub use deck::{
    Card, Combinations, Deck, DuplicateCards, ParseCardError, Rank, Suit, cards_to_string,
    check_distinct, parse_cards,
};
