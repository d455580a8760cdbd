//! `deal` command: show the opening hands a seed produces.
//!
//! Nothing is written to disk; `new` with the same seed and player count
//! deals the same table.

use std::io::Write;

use sequence_engine::board::BoardType;
use sequence_engine::deck::Seed;
use sequence_engine::game::{GameInit, GameState};
use sequence_engine::player::PlayerId;

use super::new::seat_players;
use crate::error::CliError;
use crate::formatters::format_hand;

pub fn handle_deal_command(
    seed: Option<u64>,
    players: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let players = players.unwrap_or(2);
    let init = GameInit::new(
        seat_players(players),
        PlayerId(1),
        Seed(seed),
        BoardType::Sequence,
        2,
    )?;
    let state = GameState::new(&init)?;

    writeln!(out, "Seed: {}", seed)?;
    for seat in 0..state.player_count() {
        writeln!(
            out,
            "{} ({}): {}",
            state.player_handles()[seat],
            state.teams()[seat],
            format_hand(state.hand(seat))
        )?;
    }
    writeln!(out, "Deck: {} cards", state.deck().remaining())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_deals_the_same_table() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        handle_deal_command(Some(42), Some(4), &mut first).unwrap();
        handle_deal_command(Some(42), Some(4), &mut second).unwrap();
        assert_eq!(first, second);

        let text = String::from_utf8(first).unwrap();
        assert!(text.starts_with("Seed: 42\n"));
        assert!(text.contains("p4 (Green): "));
        assert!(text.contains("Deck: 84 cards"));
    }

    #[test]
    fn hands_hold_the_deal_size() {
        let mut out = Vec::new();
        handle_deal_command(Some(1), None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let p1 = text.lines().find(|l| l.starts_with("p1")).unwrap();
        let cards = p1.split_once(": ").unwrap().1.split(' ').count();
        assert_eq!(cards, 7);
        assert!(text.contains("Deck: 90 cards"));
    }
}
