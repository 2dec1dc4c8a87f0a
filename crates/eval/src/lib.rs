// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator finds the best 5 cards [Hand] out of the community and hole
//! cards, a hand knows its [HandRank] category and compares with other hands
//! using its [HandValue]:
//!
//! ```
//! # use pokerhand_eval::*;
//! let board = parse_cards("9D 4C 5S 6D 7S").unwrap();
//! let h1 = best_possible_hand(&board, ("KC".parse().unwrap(), "QC".parse().unwrap())).unwrap();
//! let h2 = best_possible_hand(&board, ("AC".parse().unwrap(), "2C".parse().unwrap())).unwrap();
//! assert!(h2 > h1);
//! assert_eq!(h2.description(), "ace high");
//! ```
//!
//! Hands with the same ranks tie, [showdown] returns all the players with the
//! best hand:
//!
//! ```
//! # use pokerhand_eval::*;
//! let board = parse_cards("JD TC 9S 8D 6S").unwrap();
//! let holes = parse_cards("5C 4C 3C 2C").unwrap();
//! let result = showdown(&board, &[(holes[0], holes[1]), (holes[2], holes[3])]).unwrap();
//! assert_eq!(result.winners, vec![0, 1]);
//! assert_eq!(result.hands[0], result.hands[1]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Showdown, best_hand, best_possible_hand, showdown};

pub mod hand;
pub use hand::{Hand, HandRank, HandValue};

mod error;
pub use error::EvalError;

// Reexport cards types.
pub use pokerhand_cards::{
    Card, CardError, Deck, Rank, Suit, SuitSymbols, for_each_subset, parse_cards,
};
