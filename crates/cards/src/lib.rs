// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pocketeq cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pocketeq_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "King of Diamonds".parse().unwrap();
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! and a [Deck] type for filtering known cards, dealing random cards, and
//! iterating hands in the deck:
//!
//! ```
//! # use pocketeq_cards::{parse_cards, Deck};
//! let known = parse_cards("AS AH KD").unwrap();
//! let mut deck = Deck::default().without_known_cards(&known);
//! assert_eq!(deck.count(), 49);
//!
//! let card = deck.deal_random(&mut rand::rng());
//! assert!(!known.contains(&card));
//! assert_eq!(deck.count(), 48);
//! ```
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use pocketeq_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit, first_duplicate, has_duplicates};

mod parse;
pub use parse::{ParseCardError, parse_cards};
