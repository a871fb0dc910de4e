// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Poker card.
///
/// A card is an immutable rank and suit pair, two cards are equal if they have
/// the same rank and suit.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The card position in a new deck, a value in 0..52.
    #[inline]
    pub fn index(&self) -> usize {
        self.suit as usize * Rank::COUNT + self.rank as usize
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Card rank.
///
/// The discriminant is the rank ordinal, ranks compare by ordinal with the Ace
/// being the highest rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// All ranks in ordinal order.
    pub const ALL: [Rank; Rank::COUNT] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank with the given ordinal.
    ///
    /// Panics if the ordinal is not in 0..13.
    #[inline]
    pub fn from_ordinal(ordinal: usize) -> Rank {
        Self::ALL[ordinal]
    }

    /// The rank name, i.e. "King".
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "Two",
            Rank::Trey => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// The rank plural name, i.e. "Kings".
    pub fn plural(&self) -> &'static str {
        match self {
            Rank::Deuce => "Twos",
            Rank::Trey => "Threes",
            Rank::Four => "Fours",
            Rank::Five => "Fives",
            Rank::Six => "Sixes",
            Rank::Seven => "Sevens",
            Rank::Eight => "Eights",
            Rank::Nine => "Nines",
            Rank::Ten => "Tens",
            Rank::Jack => "Jacks",
            Rank::Queen => "Queens",
            Rank::King => "Kings",
            Rank::Ace => "Aces",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Suits have no order, the discriminant is only used to index the deck.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// All suits.
    pub const ALL: [Suit; Suit::COUNT] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// The suit name, i.e. "Spades".
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

/// Creates the 52 cards deck, suit by suit.
const fn make_deck() -> [Card; Deck::SIZE] {
    let mut cards = [Card::new(Rank::Deuce, Suit::Clubs); Deck::SIZE];
    let mut s = 0;

    while s < Suit::COUNT {
        let mut r = 0;
        while r < Rank::COUNT {
            cards[s * Rank::COUNT + r] = Card::new(Rank::ALL[r], Suit::ALL[s]);
            r += 1;
        }

        s += 1;
    }

    cards
}

const FULL_DECK: [Card; Deck::SIZE] = make_deck();

/// A cards Deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Returns this deck without the cards that are equal to any known card.
    pub fn without_known_cards(mut self, known: &[Card]) -> Self {
        self.cards.retain(|c| !known.contains(c));
        self
    }

    /// Deals a card from the top of the deck.
    ///
    /// Panics if the deck is empty.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().expect("deal from an empty deck")
    }

    /// Deals a uniformly random card from the deck.
    ///
    /// The drawn card is swapped with the last card and popped so that each
    /// draw is constant time.
    ///
    /// Panics if the deck is empty.
    pub fn deal_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        assert!(!self.cards.is_empty(), "deal from an empty deck");
        let pos = rng.random_range(0..self.cards.len());
        self.cards.swap_remove(pos)
    }

    /// Replaces this deck cards with the `other` deck cards, reusing this deck
    /// allocation.
    pub fn reset_from(&mut self, other: &Deck) {
        self.cards.clone_from(&other.cards);
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The cards in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Positions of the current k-subset in lexicographic order.
        let mut pos = [0usize; 7];
        for (i, p) in pos.iter_mut().enumerate().take(k) {
            *p = i;
        }

        let mut hand = [FULL_DECK[0]; 7];
        loop {
            for i in 0..k {
                hand[i] = self.cards[pos[i]];
            }

            f(&hand[..k]);

            // Find the rightmost position that can move right.
            let mut i = k;
            loop {
                if i == 0 {
                    return;
                }

                i -= 1;
                if pos[i] < n - k + i {
                    break;
                }
            }

            pos[i] += 1;
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            cards: FULL_DECK.to_vec(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Returns the first card that appears more than once in `cards`.
pub fn first_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = 0u64;
    for card in cards {
        let bit = 1u64 << card.index();
        if seen & bit != 0 {
            return Some(*card);
        }

        seen |= bit;
    }

    None
}

/// Checks if two cards in `cards` have the same rank and suit.
pub fn has_duplicates(cards: &[Card]) -> bool {
    first_duplicate(cards).is_some()
}
