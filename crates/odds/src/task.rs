// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Background odds queries.
use log::debug;
use std::{panic, thread};

use crate::{CancelToken, EquityConfig, EquityError, KnownCards, ProbabilityReport};

/// The result of a query.
pub type EquityResult = Result<ProbabilityReport, EquityError>;

/// An odds query running on a background thread.
///
/// Dropping the task without joining it lets the query run to completion and
/// discards its report, use [EquityTask::cancel] to stop it early.
#[derive(Debug)]
pub struct EquityTask {
    cancel: CancelToken,
    handle: thread::JoinHandle<EquityResult>,
}

impl EquityTask {
    /// Starts a query on a background thread.
    pub fn spawn(known: KnownCards, config: EquityConfig) -> Self {
        Self::spawn_with_callback(known, config, |_| {})
    }

    /// Starts a query on a background thread and calls `on_done` with a copy
    /// of the result when the query completes.
    ///
    /// A cancelled query calls `on_done` with [EquityError::Cancelled].
    pub fn spawn_with_callback<F>(known: KnownCards, config: EquityConfig, on_done: F) -> Self
    where
        F: FnOnce(&EquityResult) + Send + 'static,
    {
        let cancel = CancelToken::new();
        let task_cancel = cancel.clone();
        let handle = thread::spawn(move || {
            debug!("Starting background query for {known}");
            let res = crate::compute_equity_with(&known, &config, &task_cancel);
            on_done(&res);
            res
        });

        Self { cancel, handle }
    }

    /// Asks the query to stop at the next runout.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Checks if the query has completed.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the query to complete and returns its result.
    pub fn join(self) -> EquityResult {
        self.handle
            .join()
            .unwrap_or_else(|e| panic::resume_unwind(e))
    }
}
