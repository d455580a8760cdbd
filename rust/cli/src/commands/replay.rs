//! Replay command handler.
//!
//! Steps through every game in a JSONL game file (plain or `.zst`), printing
//! one line per event and the outcome. Lines that are not game records are
//! skipped with a warning; a game whose log cannot be replayed is reported
//! and makes the command fail once every game has been shown.

use std::io::Write;

use sequence_engine::logger::GameRecord;

use super::show::status_line;
use crate::error::CliError;
use crate::formatters::format_event;
use crate::io_utils::read_text_auto;
use crate::parse_json_or_continue;
use crate::ui;

pub fn handle_replay_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(input)?;
    let mut games = 0usize;
    let mut failed = 0usize;

    for (n, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: GameRecord = parse_json_or_continue!(line, err, format!("line {}", n + 1));
        games += 1;

        writeln!(
            out,
            "Game {}: {} players, {} board, {} to win, seed {}",
            record.game_id,
            record.init.players.len(),
            record.init.board_type,
            record.init.win_condition,
            record.init.seed.0
        )?;
        for event in &record.events {
            writeln!(out, "  {}", format_event(&record.init, event))?;
        }
        match record.replay() {
            Ok(state) => writeln!(out, "  {}", status_line(&state))?,
            Err(e) => {
                failed += 1;
                ui::write_error(err, &format!("game {} does not replay: {}", record.game_id, e))?;
            }
        }
    }

    if games == 0 {
        writeln!(out, "No games found in {}.", input)?;
    }
    if failed > 0 {
        return Err(CliError::Engine(format!(
            "{} of {} games failed to replay",
            failed, games
        )));
    }
    Ok(())
}
