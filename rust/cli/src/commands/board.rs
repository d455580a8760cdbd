//! `board` command: print the printed layout of a board variant.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use sequence_engine::board::BoardType;

use crate::error::CliError;
use crate::formatters::render_board;

pub fn handle_board_command(board: Option<BoardType>, out: &mut dyn Write) -> Result<(), CliError> {
    let board = board.unwrap_or(BoardType::Sequence);
    writeln!(out, "Board: {}", board)?;
    write!(
        out,
        "{}",
        render_board(board.board(), &BTreeMap::new(), &BTreeSet::new())
    )?;
    Ok(())
}
