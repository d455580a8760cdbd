//! Verify command handler.
//!
//! Re-derives every recorded event through the rules and reports each game
//! whose log does not hold up:
//!
//! - game ids must follow `YYYYMMDD-NNNNNN` and be unique within the file
//! - the setup must be valid
//! - events must be numbered `1, 2, 3, ...` and stop once the game is won
//! - each event must equal what `play_card`/`exchange_dead_card` produce from
//!   the state before it
//! - all 104 cards must be accounted for after every event
//!
//! Errors are collected as `BatchValidationError`s so one run lists them all.

use std::collections::HashSet;
use std::io::Write;

use sequence_engine::cards::FULL_DECK_SIZE;
use sequence_engine::game::{GameEvent, GameState};
use sequence_engine::logger::GameRecord;
use sequence_engine::player::PlayerRef;
use sequence_engine::rules;

use crate::error::{BatchValidationError, CliError};
use crate::io_utils::read_text_auto;

/// The context names the game (or the line when the record is unreadable).
type VerifyError = BatchValidationError<String>;

fn valid_id(s: &str) -> bool {
    s.len() == 15
        && s.is_ascii()
        && s[0..8].chars().all(|c| c.is_ascii_digit())
        && &s[8..9] == "-"
        && s[9..].chars().all(|c| c.is_ascii_digit())
}

/// What the rules produce for the command `event` records.
fn recompute(state: &GameState, event: &GameEvent) -> Result<GameEvent, String> {
    let player = PlayerRef::Id(event.by_player_id);
    if event.is_dead_card_exchange() {
        rules::exchange_dead_card(state, &player, event.card_used).map_err(|e| e.to_string())
    } else {
        rules::play_card(state, &player, event.card_used, event.coord).map_err(|e| e.to_string())
    }
}

/// Checks one game's events, stopping at the first one that does not hold.
fn verify_events(record: &GameRecord, errors: &mut Vec<VerifyError>) {
    let mut state = match GameState::new(&record.init) {
        Ok(state) => state,
        Err(e) => {
            errors.push(VerifyError {
                item_context: record.game_id.to_string(),
                message: format!("invalid setup: {}", e),
            });
            return;
        }
    };
    for event in &record.events {
        let context = format!("{} event {}", record.game_id, event.index);
        let problem = if state.is_over() {
            Some("recorded after the game was won".to_string())
        } else if event.index != state.version() + 1 {
            Some(format!("expected index {}", state.version() + 1))
        } else {
            match recompute(&state, event) {
                Ok(expected) if &expected == event => None,
                Ok(_) => Some("recorded event differs from recomputed event".to_string()),
                Err(e) => Some(format!("rejected by the rules: {}", e)),
            }
        };
        if let Some(message) = problem {
            errors.push(VerifyError {
                item_context: context,
                message,
            });
            return;
        }
        state = state.apply(event);
        if state.card_count() != FULL_DECK_SIZE {
            errors.push(VerifyError {
                item_context: context,
                message: format!("{} cards in play, expected {}", state.card_count(), FULL_DECK_SIZE),
            });
            return;
        }
    }
}

/// Handle the verify command.
///
/// # Returns
///
/// `Ok(())` if every game checks out, otherwise an `Err` that maps to exit
/// code `2` after the failures have been listed on `err`.
pub fn handle_verify_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(input)?;
    let mut errors: Vec<VerifyError> = Vec::new();
    let mut seen = HashSet::new();
    let mut games = 0usize;
    let mut events = 0usize;

    for (n, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        games += 1;
        let record: GameRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                errors.push(VerifyError {
                    item_context: format!("line {}", n + 1),
                    message: format!("invalid game record: {}", e),
                });
                continue;
            }
        };
        events += record.events.len();
        if !valid_id(&record.game_id.0) {
            errors.push(VerifyError {
                item_context: record.game_id.to_string(),
                message: "game id is not YYYYMMDD-NNNNNN".to_string(),
            });
        }
        if !seen.insert(record.game_id.clone()) {
            errors.push(VerifyError {
                item_context: record.game_id.to_string(),
                message: "duplicate game id".to_string(),
            });
        }
        verify_events(&record, &mut errors);
    }

    if errors.is_empty() {
        writeln!(out, "Verify: OK (games={}, events={})", games, events)?;
        return Ok(());
    }
    writeln!(out, "Verify: FAIL (games={}, events={})", games, events)?;
    writeln!(err, "Errors found:")?;
    for error in &errors {
        writeln!(err, "  {}", error)?;
    }
    Err(CliError::InvalidInput(format!(
        "{} validation errors found",
        errors.len()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sequence_engine::board::BoardType;
    use sequence_engine::deck::Seed;
    use sequence_engine::game::{GameId, GameInit};
    use sequence_engine::player::{Player, PlayerId};
    use tempfile::tempdir;

    fn played_record(moves: usize) -> GameRecord {
        let init = GameInit::new(
            vec![Player::new(1, "p1"), Player::new(2, "p2")],
            PlayerId(1),
            Seed(31),
            BoardType::Sequence,
            2,
        )
        .unwrap();
        let mut record = GameRecord::new(GameId::new("20250101-000001"), init.clone());
        let mut state = GameState::new(&init).unwrap();
        for _ in 0..moves {
            let who = PlayerRef::Id(state.current_player_id().unwrap());
            let seat = state.player_index(&who).unwrap();
            let (card, at) = state
                .hand(seat)
                .iter()
                .find_map(|c| rules::legal_coords(&state, &who, c).first().map(|at| (*c, *at)))
                .unwrap();
            let event = rules::play_card(&state, &who, card, at).unwrap();
            state = state.apply(&event);
            record.events.push(event);
        }
        record
    }

    fn run_on(records: &[GameRecord]) -> (Result<(), CliError>, String, String) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("v.jsonl");
        let content: String = records
            .iter()
            .map(|r| serde_json::to_string(r).unwrap() + "\n")
            .collect();
        std::fs::write(&path, content).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_verify_command(path.to_str().unwrap(), &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn legal_games_verify() {
        let (result, out, err) = run_on(&[played_record(4)]);
        assert!(result.is_ok(), "{}", err);
        assert_eq!(out.trim(), "Verify: OK (games=1, events=4)");
    }

    #[test]
    fn tampered_events_are_reported() {
        let mut record = played_record(3);
        record.events[1].card_drawn = None;
        let (result, out, err) = run_on(&[record]);
        assert!(result.is_err());
        assert!(out.starts_with("Verify: FAIL"));
        assert!(err.contains("20250101-000001 event 2: recorded event differs"));
    }

    #[test]
    fn gaps_and_duplicates_are_reported() {
        let mut record = played_record(2);
        record.events.remove(0);
        let (result, _, err) = run_on(&[record.clone(), record]);
        assert!(result.is_err());
        assert!(err.contains("event 2: expected index 1"));
        assert!(err.contains("20250101-000001: duplicate game id"));
    }

    #[test]
    fn game_id_format() {
        assert!(valid_id("20250101-000001"));
        assert!(!valid_id("2025-01-01-000001"));
        assert!(!valid_id("20250101000001"));
        assert!(!valid_id("20250101-abcdef"));
    }
}
