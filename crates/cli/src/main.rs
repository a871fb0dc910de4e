// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pocketeq CLI.
//!
//! Estimates the equity of two hole cards against a random hand and shows the
//! best hand that can be formed with the known cards.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use pocketeq_eval::{
    Card, EquityConfig, Simulator, TiePolicy,
    equity::{self, CancelToken, DEFAULT_TRIALS},
};

pub mod recognize;
pub mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// The hole cards, i.e. "AS AH".
    #[clap(long)]
    hole: String,
    /// The known community cards, i.e. "AD AC KS", unknown cards can be
    /// written as "_".
    #[clap(long, short, default_value = "")]
    board: String,
    /// Read the community cards from a recognized cards transcript with one
    /// "<rank> of <suit>" card per line.
    #[clap(long, conflicts_with = "board")]
    board_from: Option<PathBuf>,
    /// Number of simulated showdowns.
    #[clap(long, short, default_value_t = DEFAULT_TRIALS as u32,
           value_parser = clap::value_parser!(u32).range(1..=10_000_000))]
    trials: u32,
    /// Number of parallel simulation tasks.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=64))]
    tasks: u8,
    /// Seed for reproducible simulations.
    #[clap(long)]
    seed: Option<u64>,
    /// Count a tied showdown as half a win.
    #[clap(long)]
    split_ties: bool,
    /// Print the report as JSON.
    #[clap(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(Cli::parse()).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let hole = known_cards(&cli.hole).context("Invalid hole cards")?;
    let board = match &cli.board_from {
        Some(path) => {
            let image = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            recognize::recognize_cards(&recognize::TranscriptRecognizer, &image).await?
        }
        None => known_cards(&cli.board).context("Invalid board cards")?,
    };

    // Fails early on invalid cards before starting the simulation.
    let best_hand = equity::best_hand(&hole, &board)?;

    let config = EquityConfig {
        trials: cli.trials as usize,
        tasks: cli.tasks as usize,
        ties: if cli.split_ties {
            TiePolicy::Split
        } else {
            TiePolicy::WinsOnly
        },
        seed: cli.seed,
    };

    let token = CancelToken::new();
    let simulator = Simulator::new(config).with_cancel(token.clone());

    // Run the simulation off the runtime threads so that Ctrl-C can cancel it.
    let mut task = tokio::task::spawn_blocking({
        let (hole, board) = (hole.clone(), board.clone());
        move || simulator.run(&hole, &board)
    });

    let joined = tokio::select! {
        res = &mut task => res,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, stopping simulation");
            token.cancel();
            task.await
        }
    };

    let equity = joined.context("Simulation task failed")??;
    let report = report::Report::new(&hole, &board, best_hand, &equity);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}

/// Parses a list of cards, unset cards written as "_" or "?" are dropped.
fn known_cards(s: &str) -> Result<Vec<Card>> {
    let cards = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| match t {
            "_" | "?" | "??" => Ok(None),
            _ => t.parse::<Card>().map(Some),
        })
        .collect::<Result<Vec<Option<Card>>, _>>()?;

    Ok(cards.into_iter().flatten().collect())
}
