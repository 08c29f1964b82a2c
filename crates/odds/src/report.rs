// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand category probabilities.
use serde::Serialize;
use std::fmt;

use hitcalc_eval::HandCategory;

use crate::Tally;

/// The probability to end with a hand category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandProbability {
    /// The hand category.
    pub category: HandCategory,
    /// The number of runouts that end in this category.
    pub count: u64,
    /// The percentage of runouts, from 0 to 100.
    pub percentage: f64,
}

/// A display row with a hand name and a formatted percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbabilityRow {
    /// The hand name.
    pub name: &'static str,
    /// The percentage followed by a percent sign.
    pub probability: String,
}

/// The probabilities of all hand categories for a query.
///
/// Probabilities are sorted from the most likely category, categories with the
/// same probability are sorted from the strongest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityReport {
    probabilities: Vec<HandProbability>,
    total_runouts: u64,
    royal_flushes: u64,
}

impl ProbabilityReport {
    /// Creates a report from the runouts counts.
    pub fn from_tally(tally: &Tally) -> Self {
        let total = tally.total();
        let mut probabilities = HandCategory::categories()
            .map(|category| {
                let count = tally.count(category);
                HandProbability {
                    category,
                    count,
                    percentage: percentage(count, total),
                }
            })
            .collect::<Vec<_>>();

        // Equal counts give equal percentages so sort on the exact counts.
        probabilities.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| b.category.cmp(&a.category))
        });

        Self {
            probabilities,
            total_runouts: total,
            royal_flushes: tally.royal_flushes(),
        }
    }

    /// The sorted probabilities.
    pub fn probabilities(&self) -> &[HandProbability] {
        &self.probabilities
    }

    /// Iterates the sorted probabilities.
    pub fn iter(&self) -> impl Iterator<Item = &HandProbability> {
        self.probabilities.iter()
    }

    /// The percentage for a category.
    pub fn percentage(&self, category: HandCategory) -> f64 {
        self.probabilities
            .iter()
            .find(|p| p.category == category)
            .map(|p| p.percentage)
            .unwrap_or_default()
    }

    /// The number of runouts for a category.
    pub fn count(&self, category: HandCategory) -> u64 {
        self.probabilities
            .iter()
            .find(|p| p.category == category)
            .map(|p| p.count)
            .unwrap_or_default()
    }

    /// The most likely category.
    pub fn most_likely(&self) -> Option<HandCategory> {
        self.probabilities.first().map(|p| p.category)
    }

    /// The number of runouts evaluated.
    pub fn total_runouts(&self) -> u64 {
        self.total_runouts
    }

    /// The percentage of runouts ending in a royal flush, these runouts are
    /// also part of the straight flush percentage.
    pub fn royal_flush_percentage(&self) -> f64 {
        percentage(self.royal_flushes, self.total_runouts)
    }

    /// Display rows with percentages formatted with `decimals` digits.
    ///
    /// With `split_royal` royal flushes get their own row and are removed from
    /// the straight flush row.
    pub fn rows(&self, decimals: usize, split_royal: bool) -> Vec<ProbabilityRow> {
        // (name, count, strength)
        let mut rows = self
            .probabilities
            .iter()
            .map(|p| {
                let count = if split_royal && p.category == HandCategory::StraightFlush {
                    p.count - self.royal_flushes
                } else {
                    p.count
                };
                (p.category.name(), count, p.category.index() * 2)
            })
            .collect::<Vec<_>>();

        if split_royal {
            let strength = HandCategory::StraightFlush.index() * 2 + 1;
            rows.push(("Royal Flush", self.royal_flushes, strength));
        }

        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.2.cmp(&a.2)));

        rows.into_iter()
            .map(|(name, count, _)| ProbabilityRow {
                name,
                probability: format!(
                    "{:.*}%",
                    decimals,
                    percentage(count, self.total_runouts)
                ),
            })
            .collect()
    }
}

impl fmt::Display for ProbabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows(2, false) {
            writeln!(f, "{:<16}{:>8}", row.name, row.probability)?;
        }

        Ok(())
    }
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    }
}
