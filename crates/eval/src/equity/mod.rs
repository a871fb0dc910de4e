// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity simulator.
//!
//! The simulator estimates the probability that the hero hole cards win at
//! showdown against one random opponent hand. Each trial completes the board
//! and deals the opponent two cards from the deck without the known cards,
//! then compares the two hands with the [evaluator](crate::eval).
//!
//! ```
//! # use pocketeq_eval::{equity::estimate_equity, parse_cards};
//! let hole = parse_cards("AS AH").unwrap();
//! let board = parse_cards("AD AC KS KH KD").unwrap();
//! let equity = estimate_equity(&hole, &board).unwrap();
//! assert!(equity > 0.999);
//! ```
//!
//! Use a [Simulator] to change the number of trials and tasks, the tie policy,
//! to seed the random generators, or to cancel a long simulation:
//!
//! ```
//! # use pocketeq_eval::{equity::*, parse_cards};
//! let config = EquityConfig {
//!     trials: 20_000,
//!     tasks: 4,
//!     ties: TiePolicy::Split,
//!     seed: Some(42),
//! };
//!
//! let hole = parse_cards("KS KH").unwrap();
//! let equity = Simulator::new(config).run(&hole, &[]).unwrap();
//! assert_eq!(equity.completed(), 20_000);
//! assert!(equity.probability() > 0.75);
//! ```
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{
    ops::{Add, AddAssign},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Instant,
};

use crate::{Card, Deck, HandValue, first_duplicate};

mod error;
pub use error::EquityError;

mod parallel;
mod trial;

use trial::Outcome;

/// Default number of trials.
pub const DEFAULT_TRIALS: usize = 15_000;

/// How tied showdowns count towards equity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TiePolicy {
    /// Only wins count, ties count as losses.
    #[default]
    WinsOnly,
    /// A tie counts as half a win.
    Split,
}

/// Simulation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquityConfig {
    /// Number of showdowns to simulate.
    pub trials: usize,
    /// Number of parallel tasks the trials are split into.
    pub tasks: usize,
    /// How tied showdowns are counted.
    pub ties: TiePolicy,
    /// Seed for reproducible simulations, tasks seeds are derived from it.
    pub seed: Option<u64>,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            tasks: 1,
            ties: TiePolicy::default(),
            seed: None,
        }
    }
}

/// Showdowns counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdowns {
    /// Showdowns won by the hero.
    pub wins: u64,
    /// Tied showdowns.
    pub ties: u64,
    /// Showdowns lost by the hero.
    pub losses: u64,
}

impl Showdowns {
    /// The total number of showdowns.
    pub fn total(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
    }
}

impl Add for Showdowns {
    type Output = Showdowns;

    fn add(self, rhs: Self) -> Self::Output {
        Showdowns {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            losses: self.losses + rhs.losses,
        }
    }
}

impl AddAssign for Showdowns {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// The result of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Equity {
    showdowns: Showdowns,
    trials: u64,
    ties: TiePolicy,
}

impl Equity {
    /// The probability of winning in [0, 1], computed over the completed
    /// trials, 0 if no trial completed.
    pub fn probability(&self) -> f64 {
        let completed = self.completed();
        if completed == 0 {
            return 0.0;
        }

        let wins = match self.ties {
            TiePolicy::WinsOnly => self.showdowns.wins as f64,
            TiePolicy::Split => self.showdowns.wins as f64 + self.showdowns.ties as f64 / 2.0,
        };

        wins / completed as f64
    }

    /// The simulated showdowns.
    pub fn showdowns(&self) -> Showdowns {
        self.showdowns
    }

    /// The number of requested trials.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// The number of completed trials.
    pub fn completed(&self) -> u64 {
        self.showdowns.total()
    }

    /// Checks if all the requested trials completed.
    pub fn is_complete(&self) -> bool {
        self.completed() == self.trials
    }

    /// The tie policy used for the probability.
    pub fn tie_policy(&self) -> TiePolicy {
        self.ties
    }
}

/// A cancellation signal for a running simulation.
///
/// Clones share the same signal, tasks check it between trials.
#[derive(Debug, Default, Clone)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a new token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation to all the token clones.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Checks if the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Equity simulator.
#[derive(Debug, Default, Clone)]
pub struct Simulator {
    config: EquityConfig,
    cancel: Option<CancelToken>,
}

impl Simulator {
    /// Creates a simulator with the given configuration.
    pub fn new(config: EquityConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Sets a token to cancel the simulation from another thread.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// The simulator configuration.
    pub fn config(&self) -> &EquityConfig {
        &self.config
    }

    /// Estimates the equity of the `hole` cards given the known `community`
    /// cards.
    ///
    /// Fails before running any trial if there are not 2 hole cards and 0, 3,
    /// 4, or 5 community cards, or if a card is repeated. A cancelled
    /// simulation returns the equity for the trials completed before the
    /// cancellation.
    pub fn run(&self, hole: &[Card], community: &[Card]) -> Result<Equity, EquityError> {
        validate(hole, community)?;

        let hole: [Card; 2] = hole.try_into().map_err(|_| EquityError::InvalidCardCount {
            hole: hole.len(),
            community: community.len(),
        })?;

        let remaining = Deck::default().without_known_cards(&[&hole[..], community].concat());
        let known = parallel::Known {
            hole,
            board: community,
            remaining: &remaining,
        };

        debug!(
            "Simulating {} trials on {} tasks for {} {} [{}]",
            self.config.trials,
            self.config.tasks,
            hole[0],
            hole[1],
            community
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        );

        let now = Instant::now();
        let showdowns = parallel::run_trials(&self.config, known, self.cancel.as_ref());
        let equity = Equity {
            showdowns,
            trials: self.config.trials as u64,
            ties: self.config.ties,
        };

        if !equity.is_complete() {
            info!(
                "Simulation cancelled after {} of {} trials",
                equity.completed(),
                equity.trials()
            );
        }

        debug!(
            "Equity {:.4} {:?} in {:.3}s",
            equity.probability(),
            equity.showdowns(),
            now.elapsed().as_secs_f64()
        );

        Ok(equity)
    }
}

/// Checks that there are exactly 2 hole cards, 0, 3, 4, or 5 community
/// cards, and no repeated card.
pub fn validate(hole: &[Card], community: &[Card]) -> Result<(), EquityError> {
    if hole.len() != 2 || !matches!(community.len(), 0 | 3 | 4 | 5) {
        return Err(EquityError::InvalidCardCount {
            hole: hole.len(),
            community: community.len(),
        });
    }

    match first_duplicate(&[hole, community].concat()) {
        Some(card) => Err(EquityError::DuplicateCards { card }),
        None => Ok(()),
    }
}

/// Estimates the equity of the `hole` cards with the default configuration,
/// returns a probability in [0, 1].
pub fn estimate_equity(hole: &[Card], community: &[Card]) -> Result<f64, EquityError> {
    Simulator::default()
        .run(hole, community)
        .map(|equity| equity.probability())
}

/// Returns the best hand that can be formed with the known cards.
pub fn best_hand(hole: &[Card], community: &[Card]) -> Result<HandValue, EquityError> {
    validate(hole, community)?;
    Ok(HandValue::eval(&[hole, community].concat()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandCategory, parse_cards};

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn seeded(trials: usize, tasks: usize, seed: u64) -> Simulator {
        Simulator::new(EquityConfig {
            trials,
            tasks,
            ties: TiePolicy::WinsOnly,
            seed: Some(seed),
        })
    }

    #[test]
    fn nuts_equity() {
        let hole = cards("AS AH");
        let board = cards("AD AC KS KH KD");

        let value = best_hand(&hole, &board).unwrap();
        assert_eq!(value.category(), HandCategory::FourOfAKind);
        assert_eq!(value.label(), "Four of a Kind (Aces)");

        let equity = estimate_equity(&hole, &board).unwrap();
        assert!(equity > 0.999, "equity {equity}");
    }

    #[test]
    fn invalid_card_count() {
        let err = estimate_equity(&cards("AS"), &[]).unwrap_err();
        assert_eq!(
            err,
            EquityError::InvalidCardCount {
                hole: 1,
                community: 0
            }
        );

        let err = estimate_equity(&cards("AS KS QS"), &[]).unwrap_err();
        assert!(matches!(err, EquityError::InvalidCardCount { hole: 3, .. }));

        for board in ["2C", "2C 3C", "2C 3C 4C 5C 6C 7C"] {
            let err = estimate_equity(&cards("AS AH"), &cards(board)).unwrap_err();
            assert!(matches!(err, EquityError::InvalidCardCount { hole: 2, .. }));
        }

        // Count errors are checked before duplicates.
        let err = best_hand(&cards("AS AS AS"), &[]).unwrap_err();
        assert!(matches!(err, EquityError::InvalidCardCount { .. }));
    }

    #[test]
    fn duplicate_cards() {
        let card = Card::new(crate::Rank::Ace, crate::Suit::Spades);

        let err = estimate_equity(&cards("AS AS"), &[]).unwrap_err();
        assert_eq!(err, EquityError::DuplicateCards { card });

        let err = estimate_equity(&cards("AS KH"), &cards("2C AS 7D")).unwrap_err();
        assert_eq!(err, EquityError::DuplicateCards { card });

        let err = best_hand(&cards("2C KH"), &cards("2C 3S 7D 8D")).unwrap_err();
        assert!(matches!(err, EquityError::DuplicateCards { .. }));
    }

    #[test]
    fn cancelled_simulation_runs_no_trials() {
        let token = CancelToken::new();
        token.cancel();

        let sim = seeded(10_000, 2, 1).with_cancel(token.clone());
        let equity = sim.run(&cards("AS KS"), &[]).unwrap();
        assert!(token.is_cancelled());
        assert_eq!(equity.completed(), 0);
        assert_eq!(equity.trials(), 10_000);
        assert!(!equity.is_complete());
        assert_eq!(equity.probability(), 0.0);
    }

    #[test]
    fn equity_in_unit_interval() {
        let hands = [
            ("AS AH", ""),
            ("7C 2D", ""),
            ("KS QS", "JS TS 2D"),
            ("9H 9D", "9S 2C 2D 5H"),
            ("3C 4D", "AS KS QS JS 9H"),
        ];

        for (seed, (hole, board)) in hands.into_iter().enumerate() {
            let equity = seeded(2_000, 2, seed as u64)
                .run(&cards(hole), &cards(board))
                .unwrap();
            assert!(equity.is_complete());
            assert_eq!(equity.completed(), 2_000);

            let p = equity.probability();
            assert!((0.0..=1.0).contains(&p), "{hole} [{board}] equity {p}");
        }
    }

    #[test]
    fn pocket_aces_preflop() {
        // Aces win about 85% against a random hand.
        let equity = seeded(20_000, 4, 9).run(&cards("AS AH"), &[]).unwrap();
        let p = equity.probability();
        assert!((0.82..0.88).contains(&p), "equity {p}");
    }

    #[test]
    fn independent_runs_converge() {
        let hole = cards("JS TS");
        let p1 = seeded(DEFAULT_TRIALS, 1, 1).run(&hole, &[]).unwrap().probability();
        let p2 = seeded(DEFAULT_TRIALS, 1, 2).run(&hole, &[]).unwrap().probability();
        assert!((p1 - p2).abs() < 0.02, "{p1} vs {p2}");
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let hole = cards("8C 8D");
        let board = cards("2S 9H KD");

        let e1 = seeded(3_000, 3, 77).run(&hole, &board).unwrap();
        let e2 = seeded(3_000, 3, 77).run(&hole, &board).unwrap();
        assert_eq!(e1, e2);
        assert_eq!(e1.showdowns().total(), 3_000);
    }

    #[test]
    fn tie_policies() {
        // Royal flush on board, every showdown is a tie.
        let hole = cards("2C 3D");
        let board = cards("TS JS QS KS AS");

        let equity = seeded(500, 1, 3).run(&hole, &board).unwrap();
        assert_eq!(equity.showdowns().ties, 500);
        assert_eq!(equity.probability(), 0.0);

        let config = EquityConfig {
            trials: 500,
            ties: TiePolicy::Split,
            seed: Some(3),
            ..EquityConfig::default()
        };
        let equity = Simulator::new(config).run(&hole, &board).unwrap();
        assert_eq!(equity.probability(), 0.5);

        // Same streams, splitting can only add equity.
        let hole = cards("AS 5D");
        let board = cards("AC 8H 8S 2D");
        let wins_only = seeded(4_000, 2, 5).run(&hole, &board).unwrap();
        let config = EquityConfig {
            ties: TiePolicy::Split,
            ..*seeded(4_000, 2, 5).config()
        };
        let split = Simulator::new(config).run(&hole, &board).unwrap();
        assert_eq!(wins_only.showdowns(), split.showdowns());
        assert!(split.probability() >= wins_only.probability());
    }

    #[test]
    fn best_hand_labels() {
        let value = best_hand(&cards("AS AH"), &[]).unwrap();
        assert_eq!(value.label(), "One Pair (Aces)");

        let value = best_hand(&cards("KS KH"), &cards("KD 2C 2D")).unwrap();
        assert_eq!(value.label(), "Full House (Kings full of Twos)");

        let value = best_hand(&cards("AS 2D"), &cards("3C 4H 5S 9D")).unwrap();
        assert_eq!(value.label(), "Straight (Five high)");
    }

    #[test]
    fn showdowns_add() {
        let mut a = Showdowns {
            wins: 1,
            ties: 2,
            losses: 3,
        };
        a += Showdowns {
            wins: 10,
            ties: 20,
            losses: 30,
        };
        assert_eq!(a.total(), 66);
        assert_eq!(a.wins, 11);
    }
}
