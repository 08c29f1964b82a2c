// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Odds computation errors.
use thiserror::Error;

use hitcalc_cards::{Card, DuplicateCards, cards_to_string};
use hitcalc_eval::EvalError;

/// Errors returned by an odds query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquityError {
    /// The query does not have exactly two hole cards.
    #[error("expected 2 hole cards, got {}: [{}]", .0.len(), cards_to_string(.0))]
    InvalidHoleCardCount(Vec<Card>),
    /// The number of community cards is outside the allowed range.
    #[error(
        "expected {min} to 5 community cards, got {}: [{}]",
        .cards.len(),
        cards_to_string(.cards)
    )]
    InvalidCommunityCardCount {
        /// The community cards.
        cards: Vec<Card>,
        /// The minimum number of community cards.
        min: usize,
    },
    /// The same card appears more than once.
    #[error(transparent)]
    DuplicateCard(#[from] DuplicateCards),
    /// A hand to evaluate does not have 5 to 7 cards.
    #[error("invalid number of cards {0}, a hand must have 5 to 7 cards")]
    InvalidCardCount(usize),
    /// The runout cards cannot be drawn from the deck.
    #[error("cannot draw {missing} runout cards from {available} cards")]
    InvalidRunoutSize {
        /// The number of cards to draw.
        missing: isize,
        /// The number of cards in the deck.
        available: usize,
    },
    /// The query was cancelled before completion.
    #[error("odds computation cancelled")]
    Cancelled,
}

impl From<EvalError> for EquityError {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::InvalidCardCount(n) => EquityError::InvalidCardCount(n),
            EvalError::DuplicateCard(dups) => EquityError::DuplicateCard(dups),
        }
    }
}
