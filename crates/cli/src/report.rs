// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation report.
use serde::Serialize;
use std::fmt;

use pocketeq_eval::{
    Card, HandCategory, HandValue, TiePolicy,
    equity::{Equity, Showdowns},
};

/// The best hand and equity for the known cards.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Hero hole cards.
    pub hole: Vec<String>,
    /// Known community cards.
    pub board: Vec<String>,
    /// Best hand label.
    pub best_hand: String,
    /// Best hand category.
    pub category: HandCategory,
    /// Equity in [0, 1].
    pub equity: f64,
    /// Requested trials.
    pub trials: u64,
    /// Completed trials.
    pub completed: u64,
    /// Showdowns counters.
    pub showdowns: Showdowns,
    /// How ties are counted.
    pub ties: TiePolicy,
}

impl Report {
    /// Creates a report for a simulation.
    pub fn new(hole: &[Card], board: &[Card], best_hand: HandValue, equity: &Equity) -> Self {
        Self {
            hole: hole.iter().map(ToString::to_string).collect(),
            board: board.iter().map(ToString::to_string).collect(),
            best_hand: best_hand.label(),
            category: best_hand.category(),
            equity: equity.probability(),
            trials: equity.trials(),
            completed: equity.completed(),
            showdowns: equity.showdowns(),
            ties: equity.tie_policy(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = if self.board.is_empty() {
            "-".to_string()
        } else {
            self.board.join(" ")
        };

        let ties = match self.ties {
            TiePolicy::WinsOnly => "ties not counted",
            TiePolicy::Split => "ties split",
        };

        writeln!(f, "Hole:       {}", self.hole.join(" "))?;
        writeln!(f, "Board:      {board}")?;
        writeln!(f, "Best hand:  {}", self.best_hand)?;
        writeln!(f, "Equity:     {:.2}% ({ties})", self.equity * 100.0)?;
        writeln!(
            f,
            "Showdowns:  {} won, {} tied, {} lost",
            self.showdowns.wins, self.showdowns.ties, self.showdowns.losses
        )?;

        if self.completed < self.trials {
            writeln!(
                f,
                "Cancelled after {} of {} trials",
                self.completed, self.trials
            )?;
        }

        Ok(())
    }
}
