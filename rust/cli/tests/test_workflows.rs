mod helpers;

use helpers::{coord_arg, last_state, next_move, path_str, run_cli};
use sequence_cli::game_file::GameFile;
use sequence_engine::player::PlayerId;
use tempfile::tempdir;

#[test]
fn new_play_show_replay_verify() {
    let dir = tempdir().unwrap();
    let path = path_str(&dir.path().join("games").join("table.jsonl"));

    let res = run_cli(&["new", "--players", "2", "--seed", "42", "--output", &path]);
    assert_eq!(res.exit_code, 0, "new failed: {}", res.stderr);
    assert!(res.stdout.starts_with("Game: "));
    assert!(res.stdout.contains("Seed: 42"));
    assert!(res.stdout.contains(&format!("Saved to {}", path)));

    // two full turns
    for mover in ["p1", "p2"] {
        let state = last_state(&path);
        let (card, at) = next_move(&state);
        let res = run_cli(&[
            "play",
            "--input",
            &path,
            "--player",
            mover,
            "--card",
            &card.to_string(),
            "--at",
            &coord_arg(at),
        ]);
        assert_eq!(res.exit_code, 0, "play failed: {}", res.stderr);
        assert!(res.stdout.starts_with(&format!("#{} {} plays", state.version() + 1, mover)));
    }
    let state = last_state(&path);
    assert_eq!(state.version(), 2);
    assert_eq!(state.current_player_id(), Some(PlayerId(1)));

    let res = run_cli(&["show", "--input", &path]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Next: p1 (#1) (version 2)"));

    let res = run_cli(&["show", "--input", &path, "--as", "p2", "--json"]);
    assert_eq!(res.exit_code, 0);
    let view: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(view["version"], 2);
    assert_eq!(view["chips"].as_array().map(|c| c.len()), Some(state.chips().len()));

    let res = run_cli(&["replay", "--input", &path]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("  #1 p1 plays"));
    assert!(res.stdout.contains("  #2 p2 plays"));

    let res = run_cli(&["verify", "--input", &path]);
    assert_eq!(res.exit_code, 0, "verify failed: {}", res.stderr);
    assert_eq!(res.stdout.trim(), "Verify: OK (games=1, events=2)");
}

#[test]
fn out_of_turn_play_is_rejected_and_not_recorded() {
    let dir = tempdir().unwrap();
    let path = path_str(&dir.path().join("t.jsonl"));
    assert_eq!(run_cli(&["new", "--seed", "5", "--output", &path]).exit_code, 0);

    let state = last_state(&path);
    let (card, at) = next_move(&state);
    let res = run_cli(&[
        "play",
        "--input",
        &path,
        "--player",
        "p2",
        "--card",
        &card.to_string(),
        "--at",
        &coord_arg(at),
    ]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.starts_with("Error: "));
    assert!(res.stdout.is_empty());
    assert!(GameFile::open(&path).unwrap().records()[0].events.is_empty());
}

#[test]
fn tampered_logs_fail_verification() {
    let dir = tempdir().unwrap();
    let path = path_str(&dir.path().join("t.jsonl"));
    assert_eq!(run_cli(&["new", "--seed", "6", "--output", &path]).exit_code, 0);
    let (card, at) = next_move(&last_state(&path));
    let play = run_cli(&[
        "play", "--input", &path, "--player", "#1", "--card", &card.to_string(), "--at",
        &coord_arg(at),
    ]);
    assert_eq!(play.exit_code, 0, "{}", play.stderr);

    let mut record = GameFile::open(&path).unwrap().records()[0].clone();
    record.events[0].next_player_id = Some(PlayerId(1));
    std::fs::write(&path, serde_json::to_string(&record).unwrap() + "\n").unwrap();

    let res = run_cli(&["verify", "--input", &path]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.starts_with("Verify: FAIL (games=1, events=1)"));
    assert!(res.stderr.contains("event 1: recorded event differs"));
}

#[test]
fn a_second_game_is_appended_to_the_same_file() {
    let dir = tempdir().unwrap();
    let path = path_str(&dir.path().join("many.jsonl"));
    assert_eq!(run_cli(&["new", "--seed", "1", "--output", &path]).exit_code, 0);
    let res = run_cli(&["new", "--players", "3", "--seed", "2", "--output", &path]);
    assert_eq!(res.exit_code, 0, "{}", res.stderr);

    let file = GameFile::open(&path).unwrap();
    assert_eq!(file.records().len(), 2);
    let first = file.records()[0].game_id.0.clone();
    let res = run_cli(&["show", "--input", &path, "--game", &first]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with(&format!("Game {} (sequence board", first)));
    assert!(!res.stdout.contains("p3"));
}
