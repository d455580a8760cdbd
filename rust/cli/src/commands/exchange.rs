//! `exchange` command: trade a dead card for a fresh one.
//!
//! The turn does not pass; the same player still has to play a card.

use std::io::Write;

use sequence_engine::cards::Card;
use sequence_engine::player::PlayerRef;

use super::play::{held_copy, run_game_command};
use crate::error::CliError;

pub fn handle_exchange_command(
    input: &str,
    game: Option<&str>,
    player: &PlayerRef,
    card: Card,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    run_game_command(input, game, out, |engine, game_id, state| {
        let card = held_copy(state, player, card);
        engine.exchange_dead_card(game_id, player, card)
    })
}
