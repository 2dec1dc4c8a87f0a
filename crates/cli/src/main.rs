// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands command line tool.
//!
//! ```bash
//! $ pokerhand best --board "9D 4C 5S 6D 7S" --hole "AC 2C"
//! $ pokerhand compare --board "JD TC 9S 8D 6S" --hole "5C 4C" --hole "3C 2C"
//! $ pokerhand --symbols unicode describe "KS QS TS JS AS"
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use std::time::Instant;

use pokerhand_eval::{
    Card, Deck, EvalError, Hand, HandRank, SuitSymbols, best_possible_hand, parse_cards, showdown,
};

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// The suit symbols used to print cards.
    #[clap(long, short, value_enum, default_value_t = Symbols::Letters, global = true)]
    symbols: Symbols,
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prints the best hand for the board and hole cards.
    Best {
        /// The community cards, i.e. "9D 4C 5S".
        #[clap(long, short)]
        board: String,
        /// The two hole cards, i.e. "AC 2C".
        #[clap(long)]
        hole: String,
    },
    /// Describes a five cards hand.
    Describe {
        /// The hand cards, i.e. "KS QS TS JS AS".
        cards: String,
    },
    /// Compares the players best hands at showdown.
    Compare {
        /// The community cards.
        #[clap(long, short)]
        board: String,
        /// The hole cards for each player, repeat for each player.
        #[clap(long, required = true)]
        hole: Vec<String>,
    },
    /// Counts the hands in each category for all 5 cards hands.
    Stats,
}

/// Suit symbols presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Symbols {
    /// C, D, H, S
    Letters,
    /// ♣, ♦, ♥, ♠
    Unicode,
    /// ⛓, 🔑, 🔒, 🕸
    Decor,
}

impl From<Symbols> for SuitSymbols {
    fn from(symbols: Symbols) -> Self {
        match symbols {
            Symbols::Letters => SuitSymbols::letters(),
            Symbols::Unicode => SuitSymbols::unicode(),
            Symbols::Decor => SuitSymbols::decor(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let symbols = SuitSymbols::from(cli.symbols);

    match cli.command {
        Command::Best { board, hole } => {
            let hand = best_possible_hand(&parse_cards(&board)?, parse_hole(&hole)?)?;
            println!("{}: {hand}", symbols.format_cards(hand.cards()));
        }
        Command::Describe { cards } => {
            let hand = cards.parse::<Hand>()?;
            println!("{}: {hand}", symbols.format_cards(hand.cards()));
        }
        Command::Compare { board, hole } => {
            let board = parse_cards(&board)?;
            let holes = hole
                .iter()
                .map(|h| parse_hole(h))
                .collect::<Result<Vec<_>>>()?;

            let result = showdown(&board, &holes)?;
            for (idx, (hole, hand)) in holes.iter().zip(&result.hands).enumerate() {
                println!(
                    "Player {}: {} {}: {hand}",
                    idx + 1,
                    symbols.format_cards(&[hole.0, hole.1]),
                    symbols.format_cards(hand.cards()),
                );
            }

            println!("{}", outcome(&result.winners));
        }
        Command::Stats => stats()?,
    }

    Ok(())
}

/// Parses exactly two hole cards.
fn parse_hole(s: &str) -> Result<(Card, Card)> {
    match parse_cards(s)?.as_slice() {
        &[c1, c2] => Ok((c1, c2)),
        cards => bail!("expected 2 hole cards, got {}", cards.len()),
    }
}

/// Formats showdown winners as 1-based player numbers.
fn outcome(winners: &[usize]) -> String {
    match winners {
        [winner] => format!("Winner: player {}", winner + 1),
        winners => {
            let players = winners
                .iter()
                .map(|w| (w + 1).to_string())
                .collect::<Vec<_>>();
            format!("Tie: players {}", players.join(", "))
        }
    }
}

fn stats() -> Result<()> {
    info!("Evaluating all 5 cards hands");

    let now = Instant::now();
    let counts = count_hands(&Deck::default())?;

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        println!("{:<17}{}", format!("{rank}:"), counts[rank as usize]);
    }

    Ok(())
}

/// Counts the 5 cards hands of a deck by category, stops at the first error.
fn count_hands(deck: &Deck) -> Result<[usize; 9], EvalError> {
    let mut counts = [0usize; 9];
    let mut error = None;

    deck.for_each(Hand::SIZE, |cards| {
        if error.is_some() {
            return;
        }

        match Hand::new(cards) {
            Ok(hand) => counts[hand.rank() as usize] += 1,
            Err(e) => error = Some(e),
        }
    });

    match error {
        Some(e) => Err(e),
        None => Ok(counts),
    }
}
