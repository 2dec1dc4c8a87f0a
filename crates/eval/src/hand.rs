// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards poker hands.
//!
//! A [Hand] is classified once when created, its [HandValue] orders hands of
//! any category and two hands with the same value tie.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{Card, EvalError, Rank, parse_cards};

/// The hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pair, straight, or flush.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
}

impl HandRank {
    /// Returns all hand ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
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
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// A hand value used to compare hands.
///
/// The value is the hand category followed by the five cards ranks, sorted by
/// group size and then by rank so that grouped cards come before kickers, for
/// example a full house tens over deuces has ranks `TTT22`. Straights ranks
/// go from the top of the run down, with the wheel ace last (`5432A`).
///
/// Comparing the category first and then the ranks in order gives the poker
/// hands order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    ranks: [Rank; 5],
}

impl HandValue {
    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The cards ranks in comparison order.
    pub fn ranks(&self) -> [Rank; 5] {
        self.ranks
    }
}

/// The rank mask of A-2-3-4-5.
const WHEEL: u16 = 0b1_0000_0000_1111;

/// Counts and suits of a five cards hand used for classification.
struct Shape {
    /// The (count, rank) groups, largest group first and higher rank first for
    /// groups of the same size.
    groups: Vec<(u8, Rank)>,
    is_flush: bool,
    is_straight: bool,
    is_wheel: bool,
}

impl Shape {
    fn new(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 13];
        let mut mask = 0u16;
        let mut suits = 0xfu8;

        for card in cards {
            counts[card.rank_bits() as usize] += 1;
            mask |= card.rank_mask();
            suits &= card.suit_bits();
        }

        let mut groups = Rank::ranks()
            .rev()
            .filter(|&r| counts[r as usize] > 0)
            .map(|r| (counts[r as usize], r))
            .collect::<Vec<_>>();

        // Stable sort keeps higher ranks first within groups of the same size.
        groups.sort_by(|g1, g2| g2.0.cmp(&g1.0));

        let is_wheel = mask == WHEEL;
        let is_run = mask.count_ones() == 5 && mask >> mask.trailing_zeros() == 0b11111;

        Self {
            groups,
            is_flush: suits != 0,
            is_straight: is_wheel || is_run,
            is_wheel,
        }
    }

    /// Checks the groups sizes match the pattern.
    fn is_grouped(&self, pattern: &[u8]) -> bool {
        self.groups.iter().map(|g| g.0).eq(pattern.iter().copied())
    }

    /// The ranks in comparison order.
    fn ranks(&self) -> [Rank; 5] {
        let mut ranks = [Rank::Deuce; 5];

        let expanded = self
            .groups
            .iter()
            .flat_map(|&(count, rank)| std::iter::repeat_n(rank, count as usize));
        for (slot, rank) in ranks.iter_mut().zip(expanded) {
            *slot = rank;
        }

        // The wheel is a five high straight, the ace plays low.
        if self.is_wheel {
            ranks.rotate_left(1);
        }

        ranks
    }
}

type Detector = fn(&Shape) -> bool;

/// Categories detectors, the first match classifies the hand.
const DETECTORS: [(HandRank, Detector); 9] = [
    (HandRank::StraightFlush, |s| s.is_flush && s.is_straight),
    (HandRank::FourOfAKind, |s| s.is_grouped(&[4, 1])),
    (HandRank::FullHouse, |s| s.is_grouped(&[3, 2])),
    (HandRank::Flush, |s| s.is_flush),
    (HandRank::Straight, |s| s.is_straight),
    (HandRank::ThreeOfAKind, |s| s.is_grouped(&[3, 1, 1])),
    (HandRank::TwoPair, |s| s.is_grouped(&[2, 2, 1])),
    (HandRank::OnePair, |s| s.is_grouped(&[2, 1, 1, 1])),
    (HandRank::HighCard, |_| true),
];

/// A five cards poker hand.
///
/// Hands compare by [HandValue], so hands made of different cards tie if they
/// have the same category and ranks:
///
/// ```
/// # use pokerhand_eval::*;
/// let h1 = "3C 3H 3S 2H 2S".parse::<Hand>().unwrap();
/// let h2 = "3D 3H 3C 2D 2C".parse::<Hand>().unwrap();
/// assert_eq!(h1, h2);
/// assert_eq!(h1.description(), "full house, threes over deuces");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    cards: [Card; 5],
    value: HandValue,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five distinct cards.
    pub fn new(cards: &[Card]) -> Result<Hand, EvalError> {
        let cards = <[Card; Self::SIZE]>::try_from(cards)
            .map_err(|_| EvalError::InvalidHandSize(cards.len()))?;

        if let Some(card) = find_duplicate(&cards) {
            return Err(EvalError::DuplicateCard(card));
        }

        Ok(Self::classify(cards))
    }

    /// Classifies five cards that are known to be distinct.
    pub(crate) fn classify(mut cards: [Card; Self::SIZE]) -> Hand {
        let shape = Shape::new(&cards);

        let rank = DETECTORS
            .iter()
            .find(|(_, detect)| detect(&shape))
            .map_or(HandRank::HighCard, |&(rank, _)| rank);

        let ranks = shape.ranks();

        // Put the cards in the same order as the value ranks.
        cards.sort_by_key(|c| ranks.iter().position(|&r| r == c.rank()));

        Hand {
            cards,
            value: HandValue { rank, ranks },
        }
    }

    /// The hand cards, grouped cards first and then kickers.
    pub fn cards(&self) -> &[Card; Self::SIZE] {
        &self.cards
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.value.rank
    }

    /// The hand value.
    pub fn value(&self) -> HandValue {
        self.value
    }

    /// Returns a description of this hand, i.e. "two pair, aces and jacks".
    pub fn description(&self) -> String {
        let r = &self.value.ranks;

        match self.value.rank {
            HandRank::HighCard => format!("{} high", r[0].name()),
            HandRank::OnePair => format!("pair of {}", r[0].plural()),
            HandRank::TwoPair => format!("two pair, {} and {}", r[0].plural(), r[2].plural()),
            HandRank::ThreeOfAKind => format!("three of a kind, {}", r[0].plural()),
            HandRank::Straight => format!("{}-high straight", r[0].name()),
            HandRank::Flush => format!("{}-high flush", r[0].name()),
            HandRank::FullHouse => {
                format!("full house, {} over {}", r[0].plural(), r[3].plural())
            }
            HandRank::FourOfAKind => format!("four of a kind, {}", r[0].plural()),
            HandRank::StraightFlush if r[0] == Rank::Ace => "royal flush".to_string(),
            HandRank::StraightFlush => format!("{}-high straight flush", r[0].name()),
        }
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl FromStr for Hand {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::new(&parse_cards(s)?)
    }
}

/// Returns the first card that appears twice.
pub(crate) fn find_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = AHashSet::with_capacity(cards.len());
    cards.iter().find(|c| !seen.insert(c.id())).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, Suit};

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn hand_descriptions() {
        [
            ("2C 3S 4S 5S 7S", "seven high"),
            ("JC AS KS 10S 9S", "ace high"),
            ("2C 2S 4S 5S 7S", "pair of deuces"),
            ("AC 6S KS QS 6C", "pair of sixes"),
            ("2C 6S 2S AS 6C", "two pair, sixes and deuces"),
            ("JC AS JS QS AC", "two pair, aces and jacks"),
            ("AC 2C KS 2S KC", "two pair, kings and deuces"),
            ("AC 3S KS 3C 3H", "three of a kind, threes"),
            ("8C KS 8S 8H AS", "three of a kind, eights"),
            ("QC 6S KS QS QH", "three of a kind, queens"),
            ("AC 3S 5S 4H 2S", "five-high straight"),
            ("8C 6S 9S 5S 7H", "nine-high straight"),
            ("QC KS 10S JS AS", "ace-high straight"),
            ("2S 3S 4S 5S 7S", "seven-high flush"),
            ("4C 7C 6C 9C 2C", "nine-high flush"),
            ("JD 10D 4D 3D 2D", "jack-high flush"),
            ("AH 2H 3H 4H 6H", "ace-high flush"),
            ("10H 2H 2C 2S 10C", "full house, deuces over tens"),
            ("10H 2H 2C 10S 10C", "full house, tens over deuces"),
            ("4H AH 4C 4S 4D", "four of a kind, fours"),
            ("AH 2H 3H 4H 5H", "five-high straight flush"),
            ("6C 2C 3C 4C 5C", "six-high straight flush"),
            ("9D 8D 10D 7D 6D", "ten-high straight flush"),
            ("KS QS 10S JS 9S", "king-high straight flush"),
            ("KS QS 10S JS AS", "royal flush"),
        ]
        .into_iter()
        .for_each(|(cards, description)| {
            let h = hand(cards);
            assert_eq!(h.description(), description, "{cards}");
            assert_eq!(h.to_string(), description, "{cards}");
        });
    }

    #[test]
    fn description_is_stable() {
        let h = hand("7H 7D KS 2C 9D");
        assert_eq!(h.description(), h.description());
        assert_eq!(h.description(), "pair of sevens");
    }

    #[test]
    fn hand_categories() {
        [
            ("AS KS QS JS TS", HandRank::StraightFlush),
            ("9C 9D 9H 9S AC", HandRank::FourOfAKind),
            ("3C 3D 3H JS JC", HandRank::FullHouse),
            ("KH TH 8H 6H 3H", HandRank::Flush),
            ("AC 5C 4D 3H 2S", HandRank::Straight),
            ("QC QD QH TS 2C", HandRank::ThreeOfAKind),
            ("JC JD 9C 9H 2S", HandRank::TwoPair),
            ("AH AD TS 9C 2D", HandRank::OnePair),
            ("AH KD 7S 5C 2D", HandRank::HighCard),
            // Ace doesn't wrap around.
            ("QS KD AC 2H 3S", HandRank::HighCard),
        ]
        .into_iter()
        .for_each(|(cards, rank)| assert_eq!(hand(cards).rank(), rank, "{cards}"));
    }

    #[test]
    fn hand_value_ranks() {
        use Rank::*;

        let h = hand("TH 2H 2C TS TC");
        assert_eq!(h.value().ranks(), [Ten, Ten, Ten, Deuce, Deuce]);

        let h = hand("5C KD 5S 9H KC");
        assert_eq!(h.value().ranks(), [King, King, Five, Five, Nine]);

        let h = hand("AC 3S 5S 4H 2S");
        assert_eq!(h.value().ranks(), [Five, Four, Trey, Deuce, Ace]);

        // Cards follow the value order.
        let ranks = h.cards().iter().map(|c| c.rank()).collect::<Vec<_>>();
        assert_eq!(ranks, h.value().ranks());

        let h = hand("4H AH 4C 4S 4D");
        assert_eq!(h.cards()[4], Card::new(Ace, Suit::Hearts));
    }

    #[test]
    fn wheel_is_lowest_straight() {
        let wheel = hand("AC 2D 3H 4S 5C");
        assert_eq!(wheel.rank(), HandRank::Straight);
        assert!(wheel < hand("2D 3H 4S 5C 6C"));
        assert!(wheel > hand("AC AD KH QS JC"));

        let steel_wheel = hand("AC 2C 3C 4C 5C");
        assert_eq!(steel_wheel.rank(), HandRank::StraightFlush);
        assert!(steel_wheel < hand("2D 3D 4D 5D 6D"));
    }

    #[test]
    fn category_beats_ranks() {
        // The weakest hand of each category beats the best of the previous.
        let hands = [
            ("AS KD QH JC 9S", "2S 2D 3H 4C 5D"),
            ("AS AD KH QC JS", "2S 2D 3H 3C 4D"),
            ("AS AD KH KC QS", "2S 2D 2H 3C 4D"),
            ("AS AD AH KC QS", "AS 2D 3H 4C 5D"),
            ("AS KD QH JC TS", "2S 3S 4S 5S 7S"),
            ("AS KS QS JS 9S", "2S 2D 2H 3C 3D"),
            ("AS AD AH KC KS", "2S 2D 2H 2C 3D"),
            ("AS AD AH AC KS", "AS 2S 3S 4S 5S"),
        ];

        for (lower, higher) in hands {
            let (lower, higher) = (hand(lower), hand(higher));
            assert!(lower.rank() < higher.rank());
            assert!(lower < higher);
            assert!(higher > lower);
            assert_ne!(lower, higher);
        }
    }

    #[test]
    fn kickers_decide() {
        assert!(hand("AS AD 9H 5C 3S") > hand("AH AC 9D 5S 2S"));
        assert!(hand("KS KD 9H 9C 3S") > hand("KH KC 9D 9S 2S"));
        assert!(hand("8S 8D 8H AC 3S") > hand("8C 8D 8H KC QS"));
        assert!(hand("7S 7D 7H 7C 3S") > hand("7S 7D 7H 7C 2S"));
        assert!(hand("AH JH 9H 5H 3H") > hand("AD JD 9D 5D 2D"));
        assert_eq!(hand("AS KD 9H 5C 3S"), hand("AH KC 9D 5S 3D"));
    }

    #[test]
    fn full_house_ties() {
        let h1 = hand("3C 3D 3H 2C 2D");
        let h2 = hand("3S 3D 3C 2H 2S");
        assert_eq!(h1, h2);
        assert_eq!(h1.cmp(&h2), Ordering::Equal);
        assert_eq!(h1.description(), "full house, threes over deuces");

        // The triple decides before the pair.
        assert!(hand("3C 3D 3H 2C 2D") > hand("2C 2D 2H AC AD"));
    }

    #[test]
    fn hand_errors() {
        assert_eq!(
            "AS KS QS JS".parse::<Hand>().unwrap_err(),
            EvalError::InvalidHandSize(4)
        );
        assert_eq!(
            "AS KS QS JS TS 9S".parse::<Hand>().unwrap_err(),
            EvalError::InvalidHandSize(6)
        );
        assert_eq!(
            "AS KS QS JS AS".parse::<Hand>().unwrap_err(),
            EvalError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades))
        );
        assert!(matches!(
            "AS KS QS JS 1S".parse::<Hand>(),
            Err(EvalError::Card(_))
        ));
    }

    #[test]
    fn order_is_total() {
        let hands = [
            "AS KD QH JC 9S",
            "2S 2D 3H 4C 5D",
            "AH AC 9D 5S 2S",
            "KS KD 9H 9C 3S",
            "AC 2D 3H 4S 5C",
            "2S 3S 4S 5S 7S",
            "3C 3D 3H 2C 2D",
            "3S 3D 3C 2H 2S",
            "7S 7D 7H 7C 3S",
            "KS QS TS JS AS",
        ]
        .map(hand);

        for a in &hands {
            for b in &hands {
                let outcomes = [a < b, a == b, a > b];
                assert_eq!(outcomes.iter().filter(|&&o| o).count(), 1);
                assert_eq!(a.cmp(b), b.cmp(a).reverse());

                for c in &hands {
                    if a <= b && b <= c {
                        assert!(a <= c);
                    }
                }
            }
        }
    }

    #[test]
    fn all_five_cards_hands() {
        let mut counts = [0usize; 9];

        Deck::default().for_each(5, |cards| {
            let h = Hand::new(cards).unwrap();
            counts[h.rank() as usize] += 1;
        });

        let expected = [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 40];
        assert_eq!(counts, expected);
    }
}
