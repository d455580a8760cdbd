use std::fs;
use std::path::PathBuf;

use sequence_engine::board::BoardType;
use sequence_engine::deck::Seed;
use sequence_engine::game::{GameInit, GameState};
use sequence_engine::logger::{format_game_id, GameLogger, GameRecord};
use sequence_engine::player::{Player, PlayerId};
use sequence_engine::rules::{legal_coords, play_card};

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn record() -> GameRecord {
    let players = vec![Player::new(1, "a"), Player::new(2, "b")];
    let init = GameInit::new(players, PlayerId(1), Seed(8), BoardType::OneEyedJack, 2).unwrap();
    let state = GameState::new(&init).unwrap();
    let (card, coord) = state
        .hand(0)
        .iter()
        .find_map(|c| legal_coords(&state, &"a".into(), c).first().map(|at| (*c, *at)))
        .unwrap();
    let event = play_card(&state, &"a".into(), card, coord).unwrap();
    let mut rec = GameRecord::new(format_game_id("20250102", 1).as_str().into(), init);
    rec.events.push(event);
    rec
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("gamelog");
    let mut logger = GameLogger::create(&path).expect("create logger");
    logger.write(&record()).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    let _ = fs::remove_file(&path);
}

#[test]
fn written_record_parses_and_replays() {
    let path = tmp_path("gamelog_replay");
    let rec = record();
    let mut logger = GameLogger::create(&path).expect("create logger");
    logger.write(&rec).expect("write");

    let text = fs::read_to_string(&path).expect("read file");
    let line = text.lines().next().expect("one line");
    let parsed: GameRecord = serde_json::from_str(line).expect("parse record");
    assert_eq!(parsed.game_id, rec.game_id);
    assert_eq!(parsed.events, rec.events);
    assert!(parsed.ts.is_some());

    let state = parsed.replay().expect("replay");
    assert_eq!(state.version(), 1);
    assert_eq!(state.chips().len(), 1);
    let _ = fs::remove_file(&path);
}

#[test]
fn game_id_format() {
    assert_eq!(format_game_id("20250102", 42), "20250102-000042");
}

#[test]
fn existing_timestamps_are_written_unchanged() {
    let path = tmp_path("gamelog_ts");
    let mut rec = record();
    rec.ts = Some("2024-06-01T12:00:00Z".to_string());
    let mut logger = GameLogger::create(&path).expect("create logger");
    logger.write(&rec).expect("write");

    let text = fs::read_to_string(&path).expect("read file");
    let parsed: GameRecord = serde_json::from_str(text.trim_end()).expect("parse record");
    assert_eq!(parsed.ts.as_deref(), Some("2024-06-01T12:00:00Z"));
    let _ = fs::remove_file(&path);
}
