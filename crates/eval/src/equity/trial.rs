// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown trials.
use rand::Rng;
use std::cmp::Ordering;

use crate::{Card, Deck, HandValue};

/// A showdown outcome for the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Win,
    Tie,
    Loss,
}

/// Deals random showdowns for a hero hand and a partial board.
pub(crate) struct Dealer<'a> {
    /// The deck without the known cards.
    remaining: &'a Deck,
    /// Per trial copy of the remaining deck.
    deck: Deck,
    /// Hero hole cards followed by the board.
    hero: [Card; 7],
    /// Opponent hole cards followed by the board.
    villain: [Card; 7],
    known_board: usize,
}

impl<'a> Dealer<'a> {
    /// Creates a dealer, `remaining` must not contain any hole or board card.
    pub fn new(hole: [Card; 2], board: &[Card], remaining: &'a Deck) -> Self {
        assert!(board.len() <= 5);

        let mut hero = [hole[0]; 7];
        hero[..2].copy_from_slice(&hole);
        hero[2..2 + board.len()].copy_from_slice(board);

        Self {
            remaining,
            deck: remaining.clone(),
            hero,
            villain: hero,
            known_board: board.len(),
        }
    }

    /// Completes the board, deals the opponent hand, and compares the two
    /// hands at showdown.
    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Outcome {
        self.deck.reset_from(self.remaining);

        for pos in (2 + self.known_board)..7 {
            self.hero[pos] = self.deck.deal_random(rng);
        }

        self.villain[2..].copy_from_slice(&self.hero[2..]);
        self.villain[0] = self.deck.deal_random(rng);
        self.villain[1] = self.deck.deal_random(rng);

        let hero = HandValue::eval(&self.hero);
        let villain = HandValue::eval(&self.villain);
        match hero.cmp(&villain) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Tie,
            Ordering::Less => Outcome::Loss,
        }
    }
}
