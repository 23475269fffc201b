//! Deal command handler: one hand dealt, printed and scored.
//!
//! Useful to eyeball the dealing protocol. The same seed always prints the
//! same hand.

use crate::error::CliError;
use crate::formatters::{format_board, format_card};
use cardfloor_ai::create_bot;
use cardfloor_engine::dealer::Dealer;
use cardfloor_engine::deck::Deck;
use cardfloor_engine::player::Seat;
use cardfloor_engine::table::Table;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;

/// Deal a single hand among `players` bots and print hole cards, the board
/// and the winner.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut seats = (1..=players)
        .map(|i| -> Result<Seat, CliError> {
            Ok(Box::new(create_bot("random", Some(&format!("P{}", i)))?))
        })
        .collect::<Result<Vec<Seat>, CliError>>()?;

    let mut table = Table::new(&mut seats, 1)?.with_dealer(Dealer::new(Deck::new_with_seed(seed)));
    let outcome = table.play_hand(0, &mut ChaCha20Rng::seed_from_u64(seed))?;

    writeln!(out, "Seed: {}", seed)?;
    for p in table.seats() {
        let hole: Vec<String> = p.hand().iter().map(format_card).collect();
        writeln!(out, "Hole {}: {}", p.name(), hole.join(" "))?;
    }
    writeln!(out, "Board: {}", format_board(table.dealer().community()))?;
    let winner = table
        .seats()
        .iter()
        .find(|p| p.id() == outcome.winner_id)
        .map(|p| p.name())
        .unwrap_or(outcome.winner_id.as_str());
    writeln!(
        out,
        "Winner: {} (high card {}, {} tied)",
        winner, outcome.winning_value, outcome.tied
    )?;
    Ok(())
}
