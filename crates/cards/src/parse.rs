// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards parsing.
//!
//! Cards can be written in a short form, a rank symbol followed by a suit
//! letter or symbol (`As`, `TH`, `10h`, `K♦`), or in a long form as
//! `"<rank> of <suit>"` (`Ace of Spades`, `10 of hearts`). Parsing is case
//! insensitive.
use std::str::FromStr;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Error returned when parsing cards.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum ParseCardError {
    /// The rank is not a known rank.
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    /// The suit is not a known suit.
    #[error("invalid suit '{0}'")]
    InvalidSuit(String),
    /// The card is not in short or long form.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.trim().to_ascii_lowercase().as_str() {
            "2" | "two" | "deuce" => Rank::Deuce,
            "3" | "three" | "trey" => Rank::Trey,
            "4" | "four" => Rank::Four,
            "5" | "five" => Rank::Five,
            "6" | "six" => Rank::Six,
            "7" | "seven" => Rank::Seven,
            "8" | "eight" => Rank::Eight,
            "9" | "nine" => Rank::Nine,
            "t" | "10" | "ten" => Rank::Ten,
            "j" | "jack" => Rank::Jack,
            "q" | "queen" => Rank::Queen,
            "k" | "king" => Rank::King,
            "a" | "ace" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s.trim().to_ascii_lowercase().as_str() {
            "c" | "♣" | "♧" | "club" | "clubs" => Suit::Clubs,
            "d" | "♦" | "♢" | "diamond" | "diamonds" => Suit::Diamonds,
            "h" | "♥" | "♡" | "heart" | "hearts" => Suit::Hearts,
            "s" | "♠" | "♤" | "spade" | "spades" => Suit::Spades,
            _ => return Err(ParseCardError::InvalidSuit(s.to_string())),
        };

        Ok(suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // Long form "<rank> of <suit>".
        let words = s.split_whitespace().collect::<Vec<_>>();
        match words.as_slice() {
            [rank, of, suit] if of.eq_ignore_ascii_case("of") => {
                return Ok(Card::new(rank.parse()?, suit.parse()?));
            }
            [_] => {}
            _ => return Err(ParseCardError::InvalidCard(s.to_string())),
        }

        // Short form, the suit is the last char.
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .ok_or_else(|| ParseCardError::InvalidCard(s.to_string()))?;
        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(ParseCardError::InvalidCard(s.to_string()));
        }

        let mut buf = [0u8; 4];
        Ok(Card::new(rank.parse()?, suit.encode_utf8(&mut buf).parse()?))
    }
}

/// Parses a list of short form cards separated by whitespace or commas.
///
/// ```
/// # use pocketeq_cards::{parse_cards, Card, Rank, Suit};
/// let cards = parse_cards("As, Kd 10h").unwrap();
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Hearts));
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_short_form() {
        assert_eq!("AS".parse(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("kd".parse(), Ok(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!("Th".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("10c".parse(), Ok(Card::new(Rank::Ten, Suit::Clubs)));
        assert_eq!(" 2♠ ".parse(), Ok(Card::new(Rank::Deuce, Suit::Spades)));
        assert_eq!("Q♡".parse(), Ok(Card::new(Rank::Queen, Suit::Hearts)));
    }

    #[test]
    fn parse_long_form() {
        assert_eq!(
            "Ace of Spades".parse(),
            Ok(Card::new(Rank::Ace, Suit::Spades))
        );
        assert_eq!(
            "10 of hearts".parse(),
            Ok(Card::new(Rank::Ten, Suit::Hearts))
        );
        assert_eq!(
            "queen  OF  Diamonds".parse(),
            Ok(Card::new(Rank::Queen, Suit::Diamonds))
        );
        assert_eq!("2 of club".parse(), Ok(Card::new(Rank::Deuce, Suit::Clubs)));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "1S".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!(
            "AX".parse::<Card>(),
            Err(ParseCardError::InvalidSuit("X".to_string()))
        );
        assert_eq!(
            "A".parse::<Card>(),
            Err(ParseCardError::InvalidCard("A".to_string()))
        );
        assert_eq!(
            "".parse::<Card>(),
            Err(ParseCardError::InvalidCard("".to_string()))
        );
        assert_eq!(
            "Ace of".parse::<Card>(),
            Err(ParseCardError::InvalidCard("Ace of".to_string()))
        );
        assert_eq!(
            "Prince of Persia".parse::<Card>(),
            Err(ParseCardError::InvalidRank("Prince".to_string()))
        );
    }

    #[test]
    fn parse_list() {
        let cards = parse_cards("AS AH, AD\tAC").unwrap();
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().all(|c| c.rank() == Rank::Ace));

        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards("AS ZZ").is_err());
    }

    #[test]
    fn display_round_trip() {
        for card in crate::Deck::default() {
            assert_eq!(card.to_string().parse(), Ok(card));

            let long = format!("{} of {}", card.rank().name(), card.suit().name());
            assert_eq!(long.parse(), Ok(card));
        }
    }
}
