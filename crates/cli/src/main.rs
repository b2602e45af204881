// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Snipe Poker command line dealer.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::{Parser, Subcommand};
use log::error;

use snipe_eval::{Card, MAX_PLAYERS, MIN_PLAYERS};

mod commands;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deal one round and show the winners.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 4, value_parser = players_parser())]
        players: u8,
        /// Seed for the shuffle, a random one if not given.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Deal many rounds and count the hand ranks.
    Stats {
        /// Number of players.
        #[clap(long, short, default_value_t = 4, value_parser = players_parser())]
        players: u8,
        /// Number of rounds.
        #[clap(long, short, default_value_t = 10_000, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: u32,
        /// Seed for the shuffle, a random one if not given.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Evaluate six cards, the first two are the private cards.
    Eval {
        /// The cards as number and suit, e.g. 7S1 10S4.
        #[clap(num_args = 6, required = true)]
        cards: Vec<Card>,
    },
}

fn players_parser() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(MIN_PLAYERS as i64..=MAX_PLAYERS as i64)
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let res = match cli.command {
        Command::Deal { players, seed } => commands::deal(&commands::Config {
            players: players as usize,
            rounds: 1,
            seed,
        }),
        Command::Stats {
            players,
            rounds,
            seed,
        } => commands::stats(&commands::Config {
            players: players as usize,
            rounds: rounds as usize,
            seed,
        }),
        Command::Eval { cards } => commands::eval(&cards),
    };

    if let Err(e) = res {
        error!("{e}");
        std::process::exit(1);
    }
}
