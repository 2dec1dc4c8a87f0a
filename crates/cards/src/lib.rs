// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pokerhand_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "10D".parse::<Card>().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! ```
//!
//! a [SuitSymbols] table to render and parse cards with custom suit symbols:
//!
//! ```
//! # use pokerhand_cards::{Card, Rank, Suit, SuitSymbols};
//! let kh = Card::new(Rank::King, Suit::Hearts);
//! assert_eq!(SuitSymbols::unicode().format_card(kh), "K♥");
//! assert_eq!("K🔒".parse::<Card>().unwrap(), kh);
//! ```
//!
//! and a [Deck] type for iterating cards combinations, for example to iterate
//! through all 5 cards hands:
//!
//! ```no_run
//! # use pokerhand_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit, for_each_subset, parse_cards};

mod error;
pub use error::CardError;

mod symbols;
pub use symbols::SuitSymbols;
