// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hitcalc Poker hand category odds.
//!
//! Given two hole cards and 3 to 5 community cards this crate computes, for
//! each of the nine hand categories, the probability that the best five cards
//! hand ends in that category once all the community cards are dealt.
//!
//! Odds are exact: every runout of the missing community cards is evaluated
//! with [HandValue](hitcalc_eval::HandValue) and counted in a [Tally].
//!
//! ```
//! # use hitcalc_odds::*;
//! let hole = parse_cards("As Ks").unwrap();
//! let board = parse_cards("Ah Kd 7c").unwrap();
//!
//! let known = KnownCards::new(&hole, &board).unwrap();
//! let report = compute_equity(&known).unwrap();
//! assert_eq!(report.total_runouts(), 1081);
//! assert_eq!(report.most_likely(), Some(HandCategory::TwoPair));
//! ```
//!
//! Large queries, with fewer known community cards, are split into ranges of
//! runouts evaluated on parallel tasks (see [EquityConfig]), and a query can
//! run on a background thread with [EquityTask].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod engine;
pub mod error;
pub mod known;
pub mod report;
pub mod runout;
pub mod tally;
pub mod task;

pub use engine::{CancelToken, EquityConfig, compute_equity, compute_equity_with};
pub use error::EquityError;
pub use known::{CommunityPolicy, KnownCards};
pub use report::{HandProbability, ProbabilityReport, ProbabilityRow};
pub use runout::{Runout, Runouts};
pub use tally::Tally;
pub use task::{EquityResult, EquityTask};

// Reexport cards and evaluator types.
pub use hitcalc_eval::{Card, HandCategory, HandValue, parse_cards};
