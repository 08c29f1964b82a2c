// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Exact hand category odds by enumerating all runouts.
use log::{debug, trace};
use std::{
    num::NonZeroUsize,
    panic,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
};

use hitcalc_cards::{Card, Rank, Suit};
use hitcalc_eval::HandValue;

use crate::{
    EquityError, KnownCards, ProbabilityReport, Tally,
    known::{BOARD_SIZE, HOLE_SIZE},
    runout::{RunoutIter, Runouts},
};

/// Odds computation config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquityConfig {
    /// The number of parallel tasks.
    pub tasks: usize,
    /// Queries with fewer runouts than this run on the calling thread.
    pub parallel_threshold: u64,
}

impl EquityConfig {
    /// Default number of runouts for parallel evaluation, a preflop query has
    /// about 2M runouts, a flop query about 1K.
    pub const PARALLEL_THRESHOLD: u64 = 50_000;

    /// A config that always runs on the calling thread.
    pub fn sequential() -> Self {
        Self {
            tasks: 1,
            parallel_threshold: u64::MAX,
        }
    }
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            tasks: thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            parallel_threshold: Self::PARALLEL_THRESHOLD,
        }
    }
}

/// A flag to stop a running query.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks running queries to stop at the next runout.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Checks if the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Computes the probability of each hand category for the known cards with
/// the default config.
pub fn compute_equity(known: &KnownCards) -> Result<ProbabilityReport, EquityError> {
    compute_equity_with(known, &EquityConfig::default(), &CancelToken::new())
}

/// Computes the probability of each hand category for the known cards.
///
/// Returns [EquityError::Cancelled] if the token is cancelled before all the
/// runouts have been evaluated.
pub fn compute_equity_with(
    known: &KnownCards,
    config: &EquityConfig,
    cancel: &CancelToken,
) -> Result<ProbabilityReport, EquityError> {
    let runouts = Runouts::for_board(known.reduced_deck()?, known.community().len())?;

    let tasks = if config.tasks > 1 && runouts.len() >= config.parallel_threshold {
        config.tasks
    } else {
        1
    };

    debug!(
        "Evaluating {} runouts for {known} with {tasks} tasks",
        runouts.len()
    );

    let tally = if tasks > 1 {
        par_tally(known, &runouts, tasks, cancel)?
    } else {
        tally_runouts(known, runouts.iter(), cancel)?
    };

    Ok(tally.into_report())
}

/// Evaluates runout ranges on scoped threads and merges their tallies.
fn par_tally(
    known: &KnownCards,
    runouts: &Runouts,
    num_tasks: usize,
    cancel: &CancelToken,
) -> Result<Tally, EquityError> {
    thread::scope(|s| {
        let handles = runouts
            .partition(num_tasks)
            .into_iter()
            .enumerate()
            .map(|(task_id, range)| {
                s.spawn(move || {
                    trace!("Task {task_id} evaluating {} runouts", range.len());
                    tally_runouts(known, range, cancel)
                })
            })
            .collect::<Vec<_>>();

        // Merge after all the tasks are done.
        let results = handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect::<Vec<_>>();

        results.into_iter().sum::<Result<Tally, EquityError>>()
    })
}

/// Evaluates a range of runouts.
fn tally_runouts(
    known: &KnownCards,
    runouts: RunoutIter<'_>,
    cancel: &CancelToken,
) -> Result<Tally, EquityError> {
    let mut hand = [Card::new(Rank::Deuce, Suit::Clubs); HOLE_SIZE + BOARD_SIZE];
    let known_cards = known.cards();
    let known_len = known_cards.len();
    hand[..known_len].copy_from_slice(&known_cards);

    let mut tally = Tally::default();
    for runout in runouts {
        if cancel.is_cancelled() {
            debug!("Query for {known} cancelled");
            return Err(EquityError::Cancelled);
        }

        let cards = runout.cards();
        let hand_len = known_len + cards.len();
        hand[known_len..hand_len].copy_from_slice(cards);
        tally.add(HandValue::eval(&hand[..hand_len])?);
    }

    Ok(tally)
}
