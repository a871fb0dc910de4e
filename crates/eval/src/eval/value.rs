// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and values.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Card, Rank};

/// A poker hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No matches.
    HighCard = 0,
    /// One card matches another.
    OnePair,
    /// Two different pairs of matching cards.
    TwoPair,
    /// Three of the same rank.
    ThreeOfAKind,
    /// Five cards in a sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of one rank and two of another rank.
    FullHouse,
    /// Four of the same rank.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ten to Ace all of the same suit.
    RoyalFlush,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Max number of tiebreak ranks in a hand value.
const MAX_TIEBREAK: usize = 5;

/// Score radix, a tiebreak term is a rank ordinal + 1 or 0 if missing.
const RADIX: u32 = 14;

/// Score offset between two consecutive categories.
const CATEGORY_BASE: u32 = RADIX.pow(MAX_TIEBREAK as u32);

/// The value of a poker hand.
///
/// A value has a category, a list of tiebreak ranks in priority order (i.e.
/// trips rank then pair rank for a full house), and a score that orders
/// values by category first and then by tiebreak ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HandValue {
    category: HandCategory,
    tiebreak: [Rank; MAX_TIEBREAK],
    len: u8,
    score: u32,
}

impl HandValue {
    /// Evaluates a hand of 2 to 7 cards and returns the value of the best 5
    /// cards hand.
    ///
    /// Panics if the number of cards is not 2 <= n <= 7.
    pub fn eval(cards: &[Card]) -> HandValue {
        super::evaluator::evaluate(cards)
    }

    /// Creates a new value, only the first five tiebreak ranks are used.
    pub(crate) fn new<I>(category: HandCategory, tiebreak: I) -> HandValue
    where
        I: IntoIterator<Item = Rank>,
    {
        let mut ranks = [Rank::Deuce; MAX_TIEBREAK];
        let mut len = 0;
        let mut score = category as u32 * CATEGORY_BASE;
        let mut weight = CATEGORY_BASE / RADIX;

        for rank in tiebreak.into_iter().take(MAX_TIEBREAK) {
            ranks[len] = rank;
            score += (rank as u32 + 1) * weight;
            weight /= RADIX;
            len += 1;
        }

        HandValue {
            category,
            tiebreak: ranks,
            len: len as u8,
            score,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tiebreak ranks from the most to the least significant.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak[..self.len as usize]
    }

    /// The hand strength, a stronger hand has a higher score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// A human readable label, i.e. "Full House (Kings full of Twos)".
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = self.category;
        match *self.tiebreak() {
            [] => write!(f, "{category}"),
            [high, ..] => match category {
                HandCategory::RoyalFlush => write!(f, "{category}"),
                HandCategory::StraightFlush | HandCategory::Flush | HandCategory::Straight => {
                    write!(f, "{category} ({} high)", high.name())
                }
                HandCategory::FullHouse => match self.tiebreak().get(1) {
                    Some(pair) => {
                        write!(f, "{category} ({} full of {})", high.plural(), pair.plural())
                    }
                    None => write!(f, "{category} ({})", high.plural()),
                },
                HandCategory::TwoPair => match self.tiebreak().get(1) {
                    Some(low) => write!(f, "{category} ({} and {})", high.plural(), low.plural()),
                    None => write!(f, "{category} ({})", high.plural()),
                },
                HandCategory::FourOfAKind | HandCategory::ThreeOfAKind | HandCategory::OnePair => {
                    write!(f, "{category} ({})", high.plural())
                }
                HandCategory::HighCard => write!(f, "{category} ({})", high.name()),
            },
        }
    }
}
