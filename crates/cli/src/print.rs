// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal output.
use serde_json::{Value, json};
use std::fmt::Write;

use hitcalc_eval::{Card, HandValue, guide::GuideItem};
use hitcalc_odds::{KnownCards, ProbabilityReport};

/// Formats cards with their suit symbols.
pub fn cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| format!("{}{}", c.rank(), c.suit().symbol()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a report as a table.
pub fn report_table(
    known: &KnownCards,
    report: &ProbabilityReport,
    decimals: usize,
    split_royal: bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Starting Hand:   {}", cards(known.hole()));
    let _ = writeln!(out, "Community Cards: {}", cards(known.community()));
    let _ = writeln!(out, "Runouts:         {}\n", report.total_runouts());

    for row in report.rows(decimals, split_royal) {
        let _ = writeln!(out, "{:<17}{:>10}", row.name, row.probability);
    }

    out
}

/// Formats a report as JSON.
pub fn report_json(
    known: &KnownCards,
    report: &ProbabilityReport,
    decimals: usize,
    split_royal: bool,
) -> Value {
    json!({
        "hole": known.hole().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
        "community": known.community().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
        "total_runouts": report.total_runouts(),
        "rows": report.rows(decimals, split_royal),
        "probabilities": report.probabilities(),
    })
}

/// Formats a hand value with its best five cards.
pub fn hand_value(value: &HandValue, best: &[Card]) -> String {
    format!("{}: {}", value.label(), cards(best))
}

/// Formats the hands guide.
pub fn guide(items: &[GuideItem]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "{:<16} {}", item.name, cards(&item.cards));
        let _ = writeln!(out, "{:<16} {}\n", "", item.description);
    }
    out
}
