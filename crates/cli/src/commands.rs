// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Command implementations.
use ahash::HashMap;
use anyhow::Result;
use log::info;
use rand::prelude::*;

use snipe_eval::{
    Card, Deck, HandEvaluation, HandRank, PRIVATE_CARDS, deal_round, evaluate, showdown,
};

/// Commands configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of players in each round.
    pub players: usize,
    /// Number of rounds to deal.
    pub rounds: usize,
    /// Shuffle seed, a random seed is drawn if not set.
    pub seed: Option<u64>,
}

impl Config {
    fn rng(&self) -> StdRng {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        info!("Using seed {seed}");
        StdRng::seed_from_u64(seed)
    }
}

/// Deals one round and prints each player hand and the winners.
pub fn deal(config: &Config) -> Result<()> {
    let mut rng = config.rng();
    let deck = Deck::new_and_shuffled(&mut rng);
    let (round, _) = deal_round(&deck, config.players)?;
    let evals = round.evaluate()?;

    println!("Shared: {}", format_cards(round.shared_cards()));
    for (player, (private, eval)) in round.private_cards().iter().zip(&evals).enumerate() {
        println!(
            "Player {}: {}  {}",
            player + 1,
            format_cards(private),
            format_eval(eval)
        );
    }

    let winners = showdown(&evals)
        .into_iter()
        .map(|p| (p + 1).to_string())
        .collect::<Vec<_>>();
    println!("Winners: {}", winners.join(", "));

    Ok(())
}

/// Deals many rounds and prints how often each hand rank shows up.
pub fn stats(config: &Config) -> Result<()> {
    let mut rng = config.rng();
    let counts = count_ranks(config, &mut rng)?;
    let total = counts.values().sum::<usize>();

    println!("Total hands      {total}");
    for rank in HandRank::ranks() {
        let count = counts.get(&rank).copied().unwrap_or(0);
        println!(
            "{:<16} {:>10} {:>7.3}%",
            format!("{rank}:"),
            count,
            100.0 * count as f64 / total.max(1) as f64
        );
    }

    Ok(())
}

/// Evaluates six cards, the first two being the private cards, and prints
/// the evaluation as JSON.
pub fn eval(cards: &[Card]) -> Result<()> {
    let private = cards.get(..PRIVATE_CARDS).unwrap_or_default();
    let eval = evaluate(cards, private)?;
    println!("{}", serde_json::to_string_pretty(&eval)?);
    Ok(())
}

fn count_ranks<R: Rng>(config: &Config, rng: &mut R) -> Result<HashMap<HandRank, usize>> {
    let mut counts = HashMap::default();

    for _ in 0..config.rounds {
        let deck = Deck::new_and_shuffled(rng);
        let (round, _) = deal_round(&deck, config.players)?;
        for eval in round.evaluate()? {
            *counts.entry(eval.hand_rank()).or_insert(0) += 1;
        }
    }

    Ok(counts)
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_eval(eval: &HandEvaluation) -> String {
    let numbers = eval
        .rank_determining_cards()
        .iter()
        .chain(eval.kickers())
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} [{numbers}]", eval.hand_rank())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(players: usize, rounds: usize) -> Config {
        Config {
            players,
            rounds,
            seed: Some(21),
        }
    }

    #[test]
    fn count_all_hands() {
        let config = config(3, 500);
        let counts = count_ranks(&config, &mut StdRng::seed_from_u64(21)).unwrap();
        assert_eq!(counts.values().sum::<usize>(), 1_500);

        // Pairs are far more common than four of a kind.
        let pairs = counts.get(&HandRank::OnePair).copied().unwrap_or(0);
        let quads = counts.get(&HandRank::FourOfAKind).copied().unwrap_or(0);
        assert!(pairs > quads);
    }

    #[test]
    fn count_is_seeded() {
        let config = config(2, 200);
        let c1 = count_ranks(&config, &mut StdRng::seed_from_u64(9)).unwrap();
        let c2 = count_ranks(&config, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(c1, c2);
    }

    #[test]
    fn invalid_players() {
        let config = config(7, 1);
        assert!(count_ranks(&config, &mut StdRng::seed_from_u64(1)).is_err());
        assert!(deal(&config).is_err());
    }

    #[test]
    fn eval_cards() {
        let cards = ["7S1", "7S2", "7S3", "2S4", "2S1", "9S2"]
            .iter()
            .map(|c| c.parse().unwrap())
            .collect::<Vec<Card>>();
        assert!(eval(&cards).is_ok());
        assert!(eval(&cards[..5]).is_err());
    }

    #[test]
    fn formatting() {
        let cards = [Card::new(7, snipe_eval::Suit::S1), Card::new(10, snipe_eval::Suit::S4)];
        assert_eq!(format_cards(&cards), "7S1 10S4");

        let e = HandEvaluation::new(HandRank::TwoPair, vec![9, 9, 4, 4], vec![7], (9, 4));
        assert_eq!(format_eval(&e), "Two Pair [9 9 4 4 7]");
    }
}
