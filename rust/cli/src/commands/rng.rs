//! `rng` command: show the top of a seeded shuffle.
//!
//! Useful for checking that a seed reproduces the same deck across machines
//! and releases. Cards are listed in draw order.

use std::io::Write;

use sequence_engine::deck::{Deck, Seed};

use crate::error::CliError;
use crate::formatters::format_hand;

pub fn handle_rng_command(seed: Option<u64>, count: usize, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let deck = Deck::new_with_seed(Seed(seed));
    let top = deck.cards().iter().rev().take(count);
    writeln!(out, "Seed {}: {}", seed, format_hand(top))?;
    Ok(())
}
