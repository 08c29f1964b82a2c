// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Runouts of the community cards still to come.
use hitcalc_cards::{
    Card, Deck, Rank, Suit,
    combos::{KSubsets, nck},
};

use crate::{EquityError, known::BOARD_SIZE};

/// All the ways to draw the missing community cards from a deck.
#[derive(Debug, Clone)]
pub struct Runouts {
    deck: Deck,
    missing: usize,
}

impl Runouts {
    /// Creates the runouts of `missing` cards drawn from `deck`.
    pub fn new(deck: Deck, missing: usize) -> Result<Self, EquityError> {
        if missing > BOARD_SIZE || missing > deck.count() {
            return Err(EquityError::InvalidRunoutSize {
                missing: missing as isize,
                available: deck.count(),
            });
        }

        Ok(Self { deck, missing })
    }

    /// Creates the runouts that complete a board with `board_len` known cards.
    pub fn for_board(deck: Deck, board_len: usize) -> Result<Self, EquityError> {
        match BOARD_SIZE.checked_sub(board_len) {
            Some(missing) => Self::new(deck, missing),
            None => Err(EquityError::InvalidRunoutSize {
                missing: BOARD_SIZE as isize - board_len as isize,
                available: deck.count(),
            }),
        }
    }

    /// The number of cards in each runout.
    pub fn missing(&self) -> usize {
        self.missing
    }

    /// The deck runouts are drawn from.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The number of runouts, n choose k for a deck of n cards.
    pub fn len(&self) -> u64 {
        nck(self.deck.count(), self.missing)
    }

    /// Checks if there are no runouts, never true as there is always at least
    /// the empty runout.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates all the runouts in lexicographic order of deck positions.
    ///
    /// Each call restarts from the first runout.
    pub fn iter(&self) -> RunoutIter<'_> {
        RunoutIter {
            cards: self.deck.cards(),
            subsets: KSubsets::new(self.deck.count(), self.missing),
        }
    }

    /// Splits the runouts into at most `parts` contiguous ranges.
    ///
    /// Chaining the ranges gives the same sequence as [Runouts::iter].
    pub fn partition(&self, parts: usize) -> Vec<RunoutIter<'_>> {
        let parts = parts.max(1) as u64;
        let total = self.len();
        let per_part = total.div_ceil(parts).max(1);

        (0..parts)
            .map(|part| part * per_part)
            .filter(|&start| start < total)
            .map(|start| RunoutIter {
                cards: self.deck.cards(),
                subsets: KSubsets::range(self.deck.count(), self.missing, start, per_part),
            })
            .collect()
    }
}

/// The community cards of one runout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Runout {
    cards: [Card; BOARD_SIZE],
    len: usize,
}

impl Runout {
    /// The runout cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards[..self.len]
    }
}

/// Iterator over a range of runouts.
#[derive(Debug, Clone)]
pub struct RunoutIter<'a> {
    cards: &'a [Card],
    subsets: KSubsets,
}

impl Iterator for RunoutIter<'_> {
    type Item = Runout;

    fn next(&mut self) -> Option<Self::Item> {
        let subset = self.subsets.next()?;

        let mut cards = [Card::new(Rank::Deuce, Suit::Clubs); BOARD_SIZE];
        for (card, &idx) in cards.iter_mut().zip(subset.indices()) {
            *card = self.cards[idx];
        }

        Some(Runout {
            cards,
            len: subset.indices().len(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.subsets.size_hint()
    }
}

impl ExactSizeIterator for RunoutIter<'_> {}
