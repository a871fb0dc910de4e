// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity errors.
use thiserror::Error;

use crate::Card;

/// Error returned when the known cards can't be simulated.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum EquityError {
    /// There are not exactly 2 hole cards, or the community cards are not 0,
    /// 3, 4, or 5.
    #[error(
        "Invalid card count {hole} hole cards and {community} community cards, \
         expected 2 hole cards and 0, 3, 4, or 5 community cards"
    )]
    InvalidCardCount {
        /// Number of hole cards.
        hole: usize,
        /// Number of community cards.
        community: usize,
    },
    /// A card appears more than once in the hole and community cards.
    #[error("Duplicate card {card}")]
    DuplicateCards {
        /// The repeated card.
        card: Card,
    },
}
