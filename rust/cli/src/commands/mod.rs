//! Command handler modules for the Sequence CLI.
//!
//! Each subcommand lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers for that command only
//! - Output streams (`&mut dyn Write`) passed in as parameters
//! - Errors returned as [`crate::error::CliError`]; [`crate::run`] reports them
//!
//! Commands that change a game (`new`, `play`, `exchange`) go through
//! [`sequence_engine::engine::Engine`] with a [`crate::game_file::GameFile`]
//! as its event store.

mod board;
mod cfg;
mod deal;
mod exchange;
mod new;
mod play;
mod replay;
mod rng;
mod show;
mod verify;

pub use board::handle_board_command;
pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use exchange::handle_exchange_command;
pub use new::handle_new_command;
pub use play::handle_play_command;
pub use replay::handle_replay_command;
pub use rng::handle_rng_command;
pub use show::handle_show_command;
pub use verify::handle_verify_command;
