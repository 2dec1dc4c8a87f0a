// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards parsing errors.
use thiserror::Error;

/// Errors returned when creating cards from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank token is not one of 2..10, J, Q, K, A.
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    /// The suit token doesn't match any suit symbol.
    #[error("invalid suit '{0}'")]
    InvalidSuit(String),
    /// The card text is empty.
    #[error("empty card")]
    EmptyCard,
}
