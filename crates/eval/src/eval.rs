// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand evaluation.
//!
//! The evaluator goes through all the 5 cards combinations of the available
//! cards, 21 hands for a 7 cards pool, and keeps the highest one.
use log::debug;
use std::cmp::Ordering;

use crate::{Card, EvalError, Hand, for_each_subset, hand::find_duplicate};

/// Returns the best hand for a player given the community and hole cards.
pub fn best_possible_hand(community: &[Card], hole: (Card, Card)) -> Result<Hand, EvalError> {
    let mut pool = Vec::with_capacity(community.len() + 2);
    pool.extend_from_slice(community);
    pool.extend([hole.0, hole.1]);
    best_hand(&pool)
}

/// Returns the best 5 cards hand out of a pool of at least 5 distinct cards.
///
/// When more than one combination makes the best hand the first one found
/// is returned, all of them compare equal.
pub fn best_hand(pool: &[Card]) -> Result<Hand, EvalError> {
    if pool.len() < Hand::SIZE {
        return Err(EvalError::InsufficientCards(pool.len()));
    }

    if let Some(card) = find_duplicate(pool) {
        return Err(EvalError::DuplicateCard(card));
    }

    // Subsets have exactly Hand::SIZE cards, the first one is pool[..5].
    let mut best = Hand::classify([pool[0], pool[1], pool[2], pool[3], pool[4]]);
    for_each_subset(pool, Hand::SIZE, |cards| {
        let hand = Hand::classify([cards[0], cards[1], cards[2], cards[3], cards[4]]);
        if hand > best {
            best = hand;
        }
    });

    debug!("Best hand from {} cards: {}", pool.len(), best);
    Ok(best)
}

/// The outcome of a showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown {
    /// The best hand for each player, in the players order.
    pub hands: Vec<Hand>,
    /// The indices of the players with the best hand, more than one on a tie.
    pub winners: Vec<usize>,
}

/// Evaluates the players hands at showdown and finds the winners.
///
/// The `holes` are the players hole cards and `community` the board cards.
pub fn showdown(community: &[Card], holes: &[(Card, Card)]) -> Result<Showdown, EvalError> {
    if holes.is_empty() {
        return Err(EvalError::NoPlayers);
    }

    let all_cards = holes
        .iter()
        .flat_map(|&(c1, c2)| [c1, c2])
        .chain(community.iter().copied())
        .collect::<Vec<_>>();
    if let Some(card) = find_duplicate(&all_cards) {
        return Err(EvalError::DuplicateCard(card));
    }

    let hands = holes
        .iter()
        .map(|&hole| best_possible_hand(community, hole))
        .collect::<Result<Vec<_>, _>>()?;

    let mut winners = vec![0];
    for (idx, hand) in hands.iter().enumerate().skip(1) {
        match hand.cmp(&hands[winners[0]]) {
            Ordering::Greater => winners = vec![idx],
            Ordering::Equal => winners.push(idx),
            Ordering::Less => {}
        }
    }

    debug!("Showdown winners {winners:?} out of {} players", hands.len());
    Ok(Showdown { hands, winners })
}
