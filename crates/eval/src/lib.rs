// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pocketeq hand evaluator and equity simulator.
//!
//! The [eval] module evaluates 2 to 7 cards hands, the value of a hand has a
//! category and tiebreak ranks, values compare by category first and then by
//! tiebreak ranks:
//!
//! ```
//! # use pocketeq_eval::*;
//! let flush = HandValue::eval(&parse_cards("2C 3C 4C 5C 7C").unwrap());
//! let straight = HandValue::eval(&parse_cards("TS JD QC KH AS").unwrap());
//! assert!(flush > straight);
//! assert_eq!(straight.label(), "Straight (Ace high)");
//! ```
//!
//! The [equity] module estimates the probability that two hole cards win at
//! showdown against a random hand given 0, 3, 4, or 5 known community cards:
//!
//! ```
//! # use pocketeq_eval::*;
//! let hole = parse_cards("AS KS").unwrap();
//! let board = parse_cards("QS JS 2D").unwrap();
//!
//! let equity = equity::estimate_equity(&hole, &board).unwrap();
//! assert!((0.0..=1.0).contains(&equity));
//!
//! let err = equity::estimate_equity(&hole[..1], &board).unwrap_err();
//! assert!(matches!(err, equity::EquityError::InvalidCardCount { .. }));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandCategory, HandValue};

pub mod equity;
pub use equity::{EquityConfig, EquityError, Simulator, TiePolicy};

// Reexport cards types.
pub use pocketeq_cards::{
    Card, Deck, ParseCardError, Rank, Suit, first_duplicate, has_duplicates, parse_cards,
};
