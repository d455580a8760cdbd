//! Exit codes and stream discipline: results on stdout, errors on stderr.

mod helpers;

use helpers::run_cli;

#[test]
fn help_and_version_succeed_on_stdout() {
    let res = run_cli(&["--help"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("verify"));
    assert!(res.stderr.is_empty());

    let res = run_cli(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with("sequence "));
}

#[test]
fn unknown_commands_list_the_real_ones() {
    let res = run_cli(&["shuffle"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Commands:"));
    for cmd in ["new", "play", "exchange", "verify"] {
        assert!(res.stderr.contains(&format!("  {}", cmd)));
    }
}

#[test]
fn bad_values_are_rejected_before_running() {
    for args in [
        &["deal", "--players", "5"][..],
        &["board", "--board", "chess"][..],
        &["new", "--win", "7", "--output", "never.jsonl"][..],
        &["play", "--input", "x", "--player", "p1", "--card", "ZZ", "--at", "1,1"][..],
        &["play", "--input", "x", "--player", "p1", "--card", "2S", "--at", "10,1"][..],
    ] {
        let res = run_cli(args);
        assert_eq!(res.exit_code, 2, "{:?} should fail", args);
        assert!(res.stdout.is_empty());
    }
    assert!(!std::path::Path::new("never.jsonl").exists());
}

#[test]
fn missing_files_are_errors() {
    let res = run_cli(&["replay", "--input", "/definitely/not/here.jsonl"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Error: "));
    assert!(res.stderr.contains("/definitely/not/here.jsonl"));
}

#[test]
fn read_only_commands_succeed() {
    let deal = run_cli(&["deal", "--seed", "3", "--players", "6"]);
    assert_eq!(deal.exit_code, 0);
    assert_eq!(deal.stdout.lines().count(), 8);

    let board = run_cli(&["board"]);
    assert_eq!(board.exit_code, 0);
    assert!(board.stdout.starts_with("Board: sequence"));

    let rng = run_cli(&["rng", "--seed", "3", "--count", "5"]);
    assert_eq!(rng.exit_code, 0);
    assert_eq!(rng.stdout.trim_end().split(' ').count(), 2 + 5);
}
