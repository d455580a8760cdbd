//! # Sequence CLI Library
//!
//! Terminal front-end for the `sequence-engine` rules core: create games,
//! issue moves against a JSONL game file, and inspect, replay or verify
//! recorded games.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments and executes the matching subcommand, writing
//! normal output to `out` and diagnostics to `err`.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["sequence", "new", "--players", "2", "--output", "game.jsonl"];
//! let code = sequence_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `new`: Create a game record
//! - `deal`: Deal a table for inspection
//! - `board`: Print a board layout
//! - `show`: Print the table of a recorded game, optionally as one player sees it
//! - `play`: Play a card against a recorded game
//! - `exchange`: Exchange a dead card
//! - `replay`: Step through recorded games
//! - `verify`: Re-derive recorded games through the rules
//! - `rng`: Print the top of a seeded deck
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
mod exit_code;
pub mod formatters;
pub mod game_file;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, SequenceCli};

use commands::{
    handle_board_command, handle_cfg_command, handle_deal_command, handle_exchange_command,
    handle_new_command, handle_play_command, handle_replay_command, handle_rng_command,
    handle_show_command, handle_verify_command,
};

pub use error::{BatchValidationError, CliError};

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["sequence", "rng", "--seed", "42"];
/// let code = sequence_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &[
        "new", "deal", "board", "show", "play", "exchange", "replay", "verify", "rng", "cfg",
    ];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match SequenceCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Sequence CLI");
            write_or_exit!(err, "Usage: sequence <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: sequence --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::New {
            players,
            board,
            win,
            seed,
            output,
        } => handle_new_command(players, board, win, seed, &output, out),
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out),
        Commands::Board { board } => handle_board_command(board, out),
        Commands::Show {
            input,
            game,
            viewer,
            json,
        } => handle_show_command(&input, game.as_deref(), viewer.as_ref(), json, out),
        Commands::Play {
            input,
            game,
            player,
            card,
            at,
        } => handle_play_command(&input, game.as_deref(), &player, card, at, out),
        Commands::Exchange {
            input,
            game,
            player,
            card,
        } => handle_exchange_command(&input, game.as_deref(), &player, card, out),
        Commands::Replay { input } => handle_replay_command(&input, out, err),
        Commands::Verify { input } => handle_verify_command(&input, out, err),
        Commands::Rng { seed, count } => handle_rng_command(seed, count, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    if let Err(e) = &result {
        write_or_exit!(err, "Error: {}", e);
    }
    exit_code::for_result(&result)
}
