// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use crate::{Card, CardError};

/// Errors returned when building or evaluating hands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A hand must have exactly five cards.
    #[error("a hand needs 5 cards, got {0}")]
    InvalidHandSize(usize),
    /// The same card appears twice.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// Not enough cards to make a hand.
    #[error("at least 5 cards are needed to make a hand, got {0}")]
    InsufficientCards(usize),
    /// A showdown without players.
    #[error("no players at showdown")]
    NoPlayers,
    /// Invalid card text.
    #[error(transparent)]
    Card(#[from] CardError),
}
