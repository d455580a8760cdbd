//! `show` command: print the current table of a recorded game.
//!
//! Without `--as` the whole table is shown, every hand included. With
//! `--as PLAYER` only what that player may see is shown, optionally as the
//! JSON projection handed to broadcasters.

use std::io::Write;

use sequence_engine::game::GameState;
use sequence_engine::player::{PlayerId, PlayerRef};

use crate::error::CliError;
use crate::formatters::{format_hand, render_board};
use crate::game_file::GameFile;

fn handle_for(state: &GameState, id: PlayerId) -> String {
    state
        .player_ids()
        .iter()
        .position(|p| *p == id)
        .map(|seat| state.player_handles()[seat].to_string())
        .unwrap_or_else(|| format!("#{}", id))
}

/// `Winner: Red` once the game is over, otherwise who moves next.
pub(super) fn status_line(state: &GameState) -> String {
    match (state.winner(), state.current_player_id()) {
        (Some(team), _) => format!("Winner: {} (version {})", team, state.version()),
        (None, Some(id)) => format!(
            "Next: {} (#{}) (version {})",
            handle_for(state, id),
            id,
            state.version()
        ),
        (None, None) => format!("Game over (version {})", state.version()),
    }
}

fn sequence_lines(state: &GameState) -> Vec<String> {
    state
        .sequences()
        .iter()
        .map(|seq| {
            let cells: Vec<String> = seq.coords.iter().map(|c| c.to_string()).collect();
            format!("  {}: {}", seq.team, cells.join(" "))
        })
        .collect()
}

pub fn handle_show_command(
    input: &str,
    game: Option<&str>,
    viewer: Option<&PlayerRef>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let file = GameFile::open(input)?;
    let record = file.select(game)?;
    let state = record.replay()?;

    if let Some(viewer) = viewer {
        let view = state.player_view(viewer).ok_or_else(|| {
            CliError::InvalidInput(format!("{} is not seated in game {}", viewer, record.game_id))
        })?;
        if json {
            let text = serde_json::to_string_pretty(&view).map_err(std::io::Error::other)?;
            writeln!(out, "{}", text)?;
            return Ok(());
        }
        writeln!(
            out,
            "Game {} as {} (#{}, {})",
            record.game_id,
            handle_for(&state, view.viewer),
            view.viewer,
            view.team
        )?;
        write!(
            out,
            "{}",
            render_board(state.board(), state.chips(), state.coords_in_sequence())
        )?;
        writeln!(out, "Hand: {}", format_hand(&view.hand))?;
        if !view.dead_cards.is_empty() {
            writeln!(out, "Dead cards: {}", format_hand(&view.dead_cards))?;
        }
        for seat in &view.seats {
            writeln!(
                out,
                "  {} (#{}, {}): {} cards",
                seat.handle, seat.id, seat.team, seat.hand_size
            )?;
        }
        writeln!(
            out,
            "Deck: {}  Discards: {}",
            view.deck_remaining,
            view.discards.len()
        )?;
        writeln!(out, "{}", status_line(&state))?;
        return Ok(());
    }

    writeln!(
        out,
        "Game {} ({} board, {} to win)",
        record.game_id,
        state.init().board_type,
        state.win_condition()
    )?;
    write!(
        out,
        "{}",
        render_board(state.board(), state.chips(), state.coords_in_sequence())
    )?;
    let sequences = sequence_lines(&state);
    if sequences.is_empty() {
        writeln!(out, "Sequences: none")?;
    } else {
        writeln!(out, "Sequences:")?;
        for line in sequences {
            writeln!(out, "{}", line)?;
        }
    }
    writeln!(out, "Hands:")?;
    for seat in 0..state.player_count() {
        writeln!(
            out,
            "  {} (#{}, {}): {}",
            state.player_handles()[seat],
            state.player_ids()[seat],
            state.teams()[seat],
            format_hand(state.hand(seat))
        )?;
    }
    writeln!(
        out,
        "Deck: {}  Discards: {}",
        state.deck().remaining(),
        state.discards().len()
    )?;
    writeln!(out, "{}", status_line(&state))?;
    Ok(())
}
