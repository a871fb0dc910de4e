// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator maps 2 to 7 cards to a [HandValue] for the best 5 cards hand
//! that can be formed with them. Values are totally ordered: the
//! [HandCategory] dominates, ties within a category are broken by the
//! category tiebreak ranks (i.e. the trips rank before the pair rank for a full
//! house, then kickers).
//!
//! Evaluation is pure, the same cards in any order always give the same
//! value:
//!
//! ```
//! # use pocketeq_eval::{parse_cards, HandCategory, HandValue};
//! let cards = parse_cards("AS AH AD AC KS KH KD").unwrap();
//! let value = HandValue::eval(&cards);
//! assert_eq!(value.category(), HandCategory::FourOfAKind);
//! assert_eq!(value.label(), "Four of a Kind (Aces)");
//! ```

mod value;
pub use value::{HandCategory, HandValue};

mod evaluator;
