// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank counting hand evaluator.
//!
//! A hand is reduced to a per rank count, a per suit rank bit mask, and a mask
//! of the ranks present, with bit `i` set for the rank with ordinal `i`. The
//! categories are then checked from the strongest to the weakest.
use std::iter;

use super::{HandCategory, HandValue};
use crate::{Card, Rank, Suit};

/// Bit mask for the ten to ace straight.
const BROADWAY: u16 = 0b1_1111_0000_0000;

/// Bit mask for the wheel (Ace, two, three, four, five).
const WHEEL: u16 = 0b1_0000_0000_1111;

/// Evaluates the best 5 cards hand out of 2 to 7 cards.
pub(crate) fn evaluate(cards: &[Card]) -> HandValue {
    assert!((2..=7).contains(&cards.len()), "2 <= cards <= 7");

    let mut counts = [0u8; Rank::COUNT];
    let mut suited = [0u16; Suit::COUNT];
    let mut present = 0u16;

    for card in cards {
        let bit = rank_bit(card.rank());
        counts[card.rank() as usize] += 1;
        suited[card.suit() as usize] |= bit;
        present |= bit;
    }

    // At most one suit can have five cards out of seven.
    if let Some(flush) = suited.into_iter().find(|mask| mask.count_ones() >= 5) {
        if flush & BROADWAY == BROADWAY {
            return HandValue::new(HandCategory::RoyalFlush, []);
        }

        if let Some(high) = straight_high(flush) {
            return HandValue::new(HandCategory::StraightFlush, [high]);
        }
    }

    let (mut quads, mut trips, mut pairs) = (0u16, 0u16, 0u16);
    for (ordinal, &count) in counts.iter().enumerate() {
        let bit = 1u16 << ordinal;
        match count {
            4 => quads |= bit,
            3 => trips |= bit,
            2 => pairs |= bit,
            _ => {}
        }
    }

    if let Some(quad) = highest(quads) {
        let kicker = ranks_desc(present & !rank_bit(quad)).take(1);
        return HandValue::new(HandCategory::FourOfAKind, iter::once(quad).chain(kicker));
    }

    if let Some(trip) = highest(trips) {
        // A second set of trips plays as the pair.
        if let Some(pair) = highest((trips & !rank_bit(trip)) | pairs) {
            return HandValue::new(HandCategory::FullHouse, [trip, pair]);
        }
    }

    if let Some(flush) = suited.into_iter().find(|mask| mask.count_ones() >= 5) {
        return HandValue::new(HandCategory::Flush, ranks_desc(flush).take(5));
    }

    if let Some(high) = straight_high(present) {
        return HandValue::new(HandCategory::Straight, [high]);
    }

    if let Some(trip) = highest(trips) {
        let kickers = ranks_desc(present & !rank_bit(trip)).take(2);
        return HandValue::new(HandCategory::ThreeOfAKind, iter::once(trip).chain(kickers));
    }

    if pairs.count_ones() >= 2 {
        let mut top = ranks_desc(pairs);
        if let (Some(high), Some(low)) = (top.next(), top.next()) {
            let kicker = ranks_desc(present & !rank_bit(high) & !rank_bit(low)).take(1);
            return HandValue::new(HandCategory::TwoPair, [high, low].into_iter().chain(kicker));
        }
    }

    if let Some(pair) = highest(pairs) {
        let kickers = ranks_desc(present & !rank_bit(pair)).take(3);
        return HandValue::new(HandCategory::OnePair, iter::once(pair).chain(kickers));
    }

    HandValue::new(HandCategory::HighCard, ranks_desc(present).take(5))
}

/// Returns the high rank of the best straight in a ranks mask.
fn straight_high(mask: u16) -> Option<Rank> {
    // Scan from the Ace down for five consecutive ranks.
    for high in (4..Rank::COUNT).rev() {
        let run = 0b1_1111u16 << (high - 4);
        if mask & run == run {
            return Some(Rank::from_ordinal(high));
        }
    }

    // The Ace ordinal is above the King, the wheel needs its own check.
    (mask & WHEEL == WHEEL).then_some(Rank::Five)
}

#[inline]
fn rank_bit(rank: Rank) -> u16 {
    1 << rank as u16
}

/// Returns the highest rank in a ranks mask.
#[inline]
fn highest(mask: u16) -> Option<Rank> {
    ranks_desc(mask).next()
}

/// Iterates the ranks in a ranks mask from the highest.
fn ranks_desc(mask: u16) -> impl Iterator<Item = Rank> {
    Rank::ranks().rev().filter(move |&r| mask & rank_bit(r) != 0)
}
