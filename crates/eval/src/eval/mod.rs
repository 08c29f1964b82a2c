// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies every five cards subset of a 5, 6, or 7 cards hand
//! (at most 21 subsets) by counting ranks and suits, and keeps the subset with
//! the highest [HandValue].
//!
//! It provides a [HandValue::eval] method that computes the hand value, useful
//! for computing odds and other stats, and [HandValue::eval_with_best_hand]
//! that also returns the five best cards, useful for UIs to show a hand.
mod category;
mod value;

pub use category::HandCategory;
pub use value::{EvalError, HandValue};
