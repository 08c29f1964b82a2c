// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
//
// High Card:       1302540
// Pair:            1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// ```
use std::time::Instant;

use hitcalc_eval::*;

fn main() {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; HandCategory::COUNT];

    for hand in Deck::default().combinations(5) {
        match HandValue::eval(&hand) {
            Ok(value) => counts[value.category().index()] += 1,
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        let name = format!("{}:", category.name());
        println!("{name:<17}{}", counts[category.index()]);
    }
}
