//! Shared helpers for the CLI integration tests.
//!
//! `run_cli` drives `sequence_cli::run` in-process and captures both streams;
//! `EnvGuard` sets environment variables for one test and restores them on
//! drop. Tests that use `EnvGuard` must be `#[serial]`.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use sequence_engine::board::Coord;
use sequence_engine::cards::Card;
use sequence_engine::game::GameState;
use sequence_engine::player::PlayerRef;
use sequence_engine::rules::legal_coords;
use sequence_cli::game_file::GameFile;

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv = std::iter::once("sequence").chain(args.iter().copied());
    let exit_code = sequence_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for (key, value) in pairs {
            restores.push((key.to_string(), std::env::var(key).ok()));
            // SAFETY: env-mutating tests are serialized with #[serial]
            unsafe { std::env::set_var(key, value) };
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            // SAFETY: see EnvGuard::apply
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

pub fn game_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

/// Current state of the last game in `path`.
pub fn last_state(path: &str) -> GameState {
    let file = GameFile::open(path).expect("open game file");
    file.select(None)
        .expect("a game")
        .replay()
        .expect("replayable log")
}

/// A card the current player can play, and where.
pub fn next_move(state: &GameState) -> (Card, Coord) {
    let id = state.current_player_id().expect("game in progress");
    let who = PlayerRef::from(id);
    let seat = state.player_index(&who).expect("seated");
    state
        .hand(seat)
        .iter()
        .find_map(|c| legal_coords(state, &who, c).first().map(|at| (*c, *at)))
        .expect("a legal move")
}

/// `COL,ROW` as the CLI expects it.
pub fn coord_arg(coord: Coord) -> String {
    format!("{},{}", coord.column, coord.row)
}
