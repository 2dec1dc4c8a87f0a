// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Suit symbols used to render and parse cards.
use serde::{Deserialize, Serialize};

use crate::{Card, CardError, Suit};

/// Emoji variation selector some terminals append to symbols.
const VARIATION_SELECTOR: char = '\u{fe0f}';

/// A table of symbols for the four suits.
///
/// The symbols only affect how cards are displayed and parsed, cards
/// comparison never looks at them. The table can be deserialized from a
/// configuration file to use custom symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitSymbols {
    /// The clubs symbol.
    pub clubs: String,
    /// The diamonds symbol.
    pub diamonds: String,
    /// The hearts symbol.
    pub hearts: String,
    /// The spades symbol.
    pub spades: String,
}

impl SuitSymbols {
    /// Single letter symbols: C, D, H, S.
    pub fn letters() -> Self {
        Self::new("C", "D", "H", "S")
    }

    /// Unicode card suits: ♣, ♦, ♥, ♠.
    pub fn unicode() -> Self {
        Self::new("♣", "♦", "♥", "♠")
    }

    /// Decor emoji: ⛓ clubs, 🔑 diamonds, 🔒 hearts, 🕸 spades.
    pub fn decor() -> Self {
        Self::new("⛓", "🔑", "🔒", "🕸")
    }

    fn new(clubs: &str, diamonds: &str, hearts: &str, spades: &str) -> Self {
        Self {
            clubs: clubs.to_string(),
            diamonds: diamonds.to_string(),
            hearts: hearts.to_string(),
            spades: spades.to_string(),
        }
    }

    /// Returns the symbol for a suit.
    pub fn symbol(&self, suit: Suit) -> &str {
        match suit {
            Suit::Clubs => &self.clubs,
            Suit::Diamonds => &self.diamonds,
            Suit::Hearts => &self.hearts,
            Suit::Spades => &self.spades,
        }
    }

    /// Returns the suit for a symbol, letters match ignoring case.
    pub fn suit(&self, token: &str) -> Result<Suit, CardError> {
        let token = token.trim().trim_end_matches(VARIATION_SELECTOR);

        Suit::suits()
            .find(|&suit| {
                let symbol = self.symbol(suit).trim_end_matches(VARIATION_SELECTOR);
                !symbol.is_empty() && symbol.eq_ignore_ascii_case(token)
            })
            .ok_or_else(|| CardError::InvalidSuit(token.to_string()))
    }

    /// Formats a card with this table symbols.
    pub fn format_card(&self, card: Card) -> String {
        format!("{}{}", card.rank(), self.symbol(card.suit()))
    }

    /// Formats a list of cards separated by spaces.
    pub fn format_cards(&self, cards: &[Card]) -> String {
        cards
            .iter()
            .map(|&c| self.format_card(c))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for SuitSymbols {
    fn default() -> Self {
        Self::letters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rank;

    #[test]
    fn symbols_lookup() {
        for symbols in [
            SuitSymbols::letters(),
            SuitSymbols::unicode(),
            SuitSymbols::decor(),
        ] {
            for suit in Suit::suits() {
                assert_eq!(symbols.suit(symbols.symbol(suit)), Ok(suit));
            }
        }

        let letters = SuitSymbols::letters();
        assert_eq!(letters.suit("s"), Ok(Suit::Spades));
        assert_eq!(
            letters.suit("♠"),
            Err(CardError::InvalidSuit("♠".to_string()))
        );

        let decor = SuitSymbols::decor();
        assert_eq!(decor.suit("🕸\u{fe0f}"), Ok(Suit::Spades));
    }

    #[test]
    fn custom_symbols() {
        let symbols = SuitSymbols {
            clubs: "c".to_string(),
            diamonds: "d".to_string(),
            hearts: "h".to_string(),
            spades: "".to_string(),
        };

        assert_eq!(symbols.suit("H"), Ok(Suit::Hearts));
        assert!(symbols.suit("").is_err());
    }

    #[test]
    fn symbols_from_config() {
        let config = r#"{"clubs": "c", "diamonds": "d", "hearts": "h", "spades": "♤"}"#;
        let symbols = serde_json::from_str::<SuitSymbols>(config).unwrap();

        assert_eq!(symbols.suit("♤"), Ok(Suit::Spades));
        assert_eq!(symbols.suit("H"), Ok(Suit::Hearts));
        assert_eq!(symbols.symbol(Suit::Spades), "♤");

        let json = serde_json::to_string(&SuitSymbols::unicode()).unwrap();
        assert_eq!(
            serde_json::from_str::<SuitSymbols>(&json).unwrap(),
            SuitSymbols::unicode()
        );

        assert!(serde_json::from_str::<SuitSymbols>(r#"{"clubs": "c"}"#).is_err());
    }

    #[test]
    fn format_cards() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ten, Suit::Hearts),
        ];

        assert_eq!(SuitSymbols::default().format_cards(&cards), "AS TH");
        assert_eq!(SuitSymbols::unicode().format_cards(&cards), "A♠ T♥");
        assert_eq!(SuitSymbols::decor().format_card(cards[1]), "T🔒");
    }
}
