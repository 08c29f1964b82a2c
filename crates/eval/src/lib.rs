// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hitcalc Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. To use the evaluator create
//! a hand and use [HandValue] to evaluate the hand and get its category:
//!
//! ```
//! # use hitcalc_eval::*;
//! let flush = parse_cards("2H 6H 9H JH KH 3C").unwrap();
//! let pair = parse_cards("KS KD 8C 5H 2S").unwrap();
//!
//! let v1 = HandValue::eval(&flush).unwrap();
//! let v2 = HandValue::eval(&pair).unwrap();
//! assert_eq!(v1.category(), HandCategory::Flush);
//! assert!(v1 > v2);
//! ```
//!
//! The [guide] module lists an example hand for each category.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub mod guide;
pub use eval::{EvalError, HandCategory, HandValue};

// Reexport cards types.
pub use hitcalc_cards::{Card, Deck, Rank, Suit, parse_cards};
