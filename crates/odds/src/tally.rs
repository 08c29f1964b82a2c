// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Per category runout counters.
use std::{iter, ops};

use hitcalc_eval::{HandCategory, HandValue};

use crate::ProbabilityReport;

/// Number of runouts for each hand category.
///
/// Tallies from different runout ranges are merged by adding them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u64; HandCategory::COUNT],
    royal_flushes: u64,
    total: u64,
}

impl Tally {
    /// Counts a runout final hand.
    pub fn add(&mut self, value: HandValue) {
        self.counts[value.category().index()] += 1;
        if value.is_royal_flush() {
            self.royal_flushes += 1;
        }
        self.total += 1;
    }

    /// The number of runouts for a category.
    pub fn count(&self, category: HandCategory) -> u64 {
        self.counts[category.index()]
    }

    /// The number of straight flush runouts that are royal flushes.
    pub fn royal_flushes(&self) -> u64 {
        self.royal_flushes
    }

    /// The number of runouts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Converts the counts to percentages.
    pub fn into_report(self) -> ProbabilityReport {
        ProbabilityReport::from_tally(&self)
    }
}

impl ops::AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        for (count, other) in self.counts.iter_mut().zip(rhs.counts) {
            *count += other;
        }
        self.royal_flushes += rhs.royal_flushes;
        self.total += rhs.total;
    }
}

impl ops::Add for Tally {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Tally::default(), |acc, t| acc + t)
    }
}
