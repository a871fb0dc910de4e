// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel trials.
use rand::prelude::*;
use std::{panic, thread};

use super::{CancelToken, EquityConfig, Showdowns, trial::Dealer};
use crate::{Card, Deck};

/// Known cards shared by all tasks.
#[derive(Clone, Copy)]
pub(crate) struct Known<'a> {
    pub hole: [Card; 2],
    pub board: &'a [Card],
    /// The deck without the hole and board cards.
    pub remaining: &'a Deck,
}

/// Runs the configured number of trials on `config.tasks` tasks and sums the
/// tasks showdowns.
///
/// Each task has its own dealer and random generator so no state is shared
/// between tasks but the cancel flag.
pub(crate) fn run_trials(
    config: &EquityConfig,
    known: Known<'_>,
    cancel: Option<&CancelToken>,
) -> Showdowns {
    let num_tasks = config.tasks.clamp(1, config.trials.max(1));

    if num_tasks == 1 {
        let mut rng = task_rng(config.seed, 0);
        return run_task(config.trials, known, &mut rng, cancel);
    }

    thread::scope(|s| {
        let handles = (0..num_tasks)
            .map(|task_id| {
                let trials = task_trials(config.trials, num_tasks, task_id);
                let seed = config.seed;
                s.spawn(move || {
                    let mut rng = task_rng(seed, task_id);
                    run_task(trials, known, &mut rng, cancel)
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .fold(Showdowns::default(), |acc, s| acc + s)
    })
}

/// Runs `trials` showdowns, stops early if cancelled.
fn run_task<R: Rng + ?Sized>(
    trials: usize,
    known: Known<'_>,
    rng: &mut R,
    cancel: Option<&CancelToken>,
) -> Showdowns {
    let mut dealer = Dealer::new(known.hole, known.board, known.remaining);
    let mut showdowns = Showdowns::default();

    for _ in 0..trials {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            break;
        }

        showdowns.record(dealer.deal(rng));
    }

    showdowns
}

/// Number of trials for a task, the first `trials % num_tasks` tasks run one
/// more trial.
fn task_trials(trials: usize, num_tasks: usize, task_id: usize) -> usize {
    trials / num_tasks + usize::from(task_id < trials % num_tasks)
}

/// Creates a task random generator, seeded tasks use independent streams.
fn task_rng(seed: Option<u64>, task_id: usize) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
        None => SmallRng::from_os_rng(),
    }
}
