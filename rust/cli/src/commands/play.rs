//! `play` command: run PlayCard against a recorded game.
//!
//! The event is appended to the game file only when the rules accept it; a
//! rejected move leaves the file untouched and exits with status 2.

use std::io::Write;

use sequence_engine::board::Coord;
use sequence_engine::cards::{Card, DeckNo};
use sequence_engine::engine::{Engine, NoopNotifier};
use sequence_engine::errors::EngineError;
use sequence_engine::game::{GameEvent, GameId, GameState};
use sequence_engine::player::PlayerRef;

use super::show::status_line;
use crate::error::CliError;
use crate::formatters::format_event;
use crate::game_file::GameFile;

/// The copy of `card` the player actually holds.
///
/// Both decks print the same faces, so `2S` names whichever two of spades is
/// in hand. The card is returned unchanged when the player holds neither copy
/// and the rules report the miss.
pub(super) fn held_copy(state: &GameState, player: &PlayerRef, card: Card) -> Card {
    let Some(seat) = state.player_index(player) else {
        return card;
    };
    let hand = state.hand(seat);
    if hand.contains(&card) {
        return card;
    }
    let other = match card.deck {
        DeckNo::One => DeckNo::Two,
        DeckNo::Two => DeckNo::One,
    };
    let twin = Card::new(other, card.suit, card.rank);
    if hand.contains(&twin) { twin } else { card }
}

/// Opens `input`, runs `command` against the selected game and prints the
/// resulting event followed by the game status.
pub(super) fn run_game_command<F>(
    input: &str,
    game: Option<&str>,
    out: &mut dyn Write,
    command: F,
) -> Result<(), CliError>
where
    F: FnOnce(&mut Engine<GameFile>, &GameId, &GameState) -> Result<GameEvent, EngineError>,
{
    let file = GameFile::open(input)?;
    let game_id = file.select(game)?.game_id.clone();
    let mut engine = Engine::new(file, NoopNotifier);
    let state = engine.load_state(&game_id)?;

    let event = command(&mut engine, &game_id, &state)?;
    let next = state.apply(&event);
    writeln!(out, "{}", format_event(state.init(), &event))?;
    writeln!(out, "{}", status_line(&next))?;
    Ok(())
}

pub fn handle_play_command(
    input: &str,
    game: Option<&str>,
    player: &PlayerRef,
    card: Card,
    at: Coord,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    run_game_command(input, game, out, |engine, game_id, state| {
        let card = held_copy(state, player, card);
        engine.play_card(game_id, player, card, at)
    })
}
