// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{CardError, SuitSymbols};

/// All ranks indexed by their rank bits.
const RANKS: [Rank; 13] = [
    Rank::Deuce,
    Rank::Trey,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// A Poker card.
///
/// A card is encoded in a 32 bits word with each card having the following
/// format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxxxxxxx|
///   +--------+--------+--------+--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank of card
/// ```
///
/// The one-hot suit bits of five cards AND to non zero only for a flush, and
/// the one-hot rank bits OR to the set of ranks in a hand.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card(u32);

/// A Poker card.
impl Card {
    /// Create a card given a suit and rank.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u32, suit as u32);
        Self((rank << 8) | (suit << 12) | (1 << (rank + 16)))
    }

    /// Create a card from a rank and a suit token, i.e. `("10", "H")`.
    pub fn from_tokens(rank: &str, suit: &str) -> Result<Card, CardError> {
        Ok(Card::new(rank.parse()?, suit.parse()?))
    }

    /// This card unique id.
    pub fn id(&self) -> u32 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        RANKS[self.rank_bits() as usize]
    }

    /// Returns the rank bits.
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        ((self.0 >> 12) & 0xf) as u8
    }

    /// Returns the one-hot rank mask, bit 0 for a deuce and bit 12 for an ace.
    #[inline]
    pub fn rank_mask(&self) -> u16 {
        (self.0 >> 16) as u16
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CardError::EmptyCard);
        }

        // The only two characters rank is a ten, everything after the rank
        // is the suit token that may be a multi bytes symbol.
        let split = if s.starts_with("10") {
            2
        } else {
            s.chars().next().map_or(0, char::len_utf8)
        };

        let (rank, suit) = s.split_at(split);
        Card::from_tokens(rank, suit)
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Parses a list of cards separated by whitespaces or commas, i.e.
/// `"AS KD, 10H"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Card rank.
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
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        RANKS.into_iter()
    }

    /// The rank numeric value, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// The rank name used in hands descriptions, i.e. "seven" in "seven high".
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "two",
            Rank::Trey => "three",
            Rank::Four => "four",
            Rank::Five => "five",
            Rank::Six => "six",
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ace => "ace",
        }
    }

    /// The plural rank name, i.e. "deuces" in "pair of deuces".
    pub fn plural(&self) -> &'static str {
        match self {
            Rank::Deuce => "deuces",
            Rank::Trey => "threes",
            Rank::Four => "fours",
            Rank::Five => "fives",
            Rank::Six => "sixes",
            Rank::Seven => "sevens",
            Rank::Eight => "eights",
            Rank::Nine => "nines",
            Rank::Ten => "tens",
            Rank::Jack => "jacks",
            Rank::Queen => "queens",
            Rank::King => "kings",
            Rank::Ace => "aces",
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

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(CardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
///
/// Suits have no order, they only matter for flushes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
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

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            SuitSymbols::letters(),
            SuitSymbols::unicode(),
            SuitSymbols::decor(),
        ]
        .iter()
        .find_map(|symbols| symbols.suit(s).ok())
        .ok_or_else(|| CardError::InvalidSuit(s.to_string()))
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

/// Calls the `f` closure for each k-cards subset of `cards`.
///
/// Panics if k is not 2 <= k <= 7.
pub fn for_each_subset<F>(cards: &[Card], k: usize, mut f: F)
where
    F: FnMut(&[Card]),
{
    assert!((2..=7).contains(&k), "2 <= k <= 7");

    if k > cards.len() {
        return;
    }

    let n = cards.len();
    let mut h = [Card::new(Rank::Ace, Suit::Hearts); 7];

    for c1 in 0..n {
        h[0] = cards[c1];

        for c2 in (c1 + 1)..n {
            h[1] = cards[c2];

            if k == 2 {
                f(&h[0..k]);
                continue;
            }

            for c3 in (c2 + 1)..n {
                h[2] = cards[c3];

                if k == 3 {
                    f(&h[0..k]);
                    continue;
                }

                for c4 in (c3 + 1)..n {
                    h[3] = cards[c4];

                    if k == 4 {
                        f(&h[0..k]);
                        continue;
                    }

                    for c5 in (c4 + 1)..n {
                        h[4] = cards[c5];

                        if k == 5 {
                            f(&h[0..k]);
                            continue;
                        }

                        for c6 in (c5 + 1)..n {
                            h[5] = cards[c6];

                            if k == 6 {
                                f(&h[0..k]);
                                continue;
                            }

                            for c7 in (c6 + 1)..n {
                                h[6] = cards[c7];
                                f(&h[0..k]);
                            }
                        }
                    }
                }
            }
        }
    }
}

/// An ordered cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, f: F)
    where
        F: FnMut(&[Card]),
    {
        for_each_subset(&self.cards, k, f);
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
