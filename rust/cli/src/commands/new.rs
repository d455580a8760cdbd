//! `new` command: create a game record in a JSONL game file.
//!
//! Unset options fall back to the resolved configuration. Seats are named
//! `p1..pN` with ids `1..N` and `p1` moves first. An existing file is
//! appended to; the new game takes the next free id for today's date.

use std::io::Write;
use std::path::Path;

use chrono::Utc;
use sequence_engine::board::BoardType;
use sequence_engine::deck::Seed;
use sequence_engine::engine::{Engine, NoopNotifier};
use sequence_engine::game::{GameId, GameInit};
use sequence_engine::logger::format_game_id;
use sequence_engine::player::{Player, PlayerId};

use crate::config;
use crate::error::CliError;
use crate::formatters::format_hand;
use crate::game_file::GameFile;

/// Players `p1..pN` with ids `1..N`.
pub(super) fn seat_players(count: usize) -> Vec<Player> {
    (1..=count as u64)
        .map(|id| Player::new(id, format!("p{}", id)))
        .collect()
}

pub fn handle_new_command(
    players: Option<usize>,
    board: Option<BoardType>,
    win: Option<u8>,
    seed: Option<u64>,
    output: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let players = players.unwrap_or(cfg.players);
    let board = board.unwrap_or(cfg.board);
    let win = win.unwrap_or(cfg.win_condition);
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let init = GameInit::new(seat_players(players), PlayerId(1), Seed(seed), board, win)?;

    let file = if Path::new(output).exists() {
        GameFile::open(output)?
    } else {
        GameFile::empty(output)
    };
    let date = Utc::now().format("%Y%m%d").to_string();
    let today = file
        .records()
        .iter()
        .filter(|r| r.game_id.0.starts_with(&date))
        .count();
    let game_id = GameId::new(format_game_id(&date, today as u32 + 1));

    let mut engine = Engine::new(file, NoopNotifier);
    let state = engine.create_game(&game_id, init)?;

    writeln!(out, "Game: {}", game_id)?;
    writeln!(
        out,
        "Board: {}  Players: {}  Sequences to win: {}  Seed: {}",
        board, players, win, seed
    )?;
    for seat in 0..state.player_count() {
        writeln!(
            out,
            "{} (#{}, {}): {}",
            state.player_handles()[seat],
            state.player_ids()[seat],
            state.teams()[seat],
            format_hand(state.hand(seat))
        )?;
    }
    writeln!(out, "Saved to {}", engine.store().path())?;
    Ok(())
}
