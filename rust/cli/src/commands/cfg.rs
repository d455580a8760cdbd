//! `cfg` command: print the resolved configuration.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "players": {
//!     "value": 4,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config;
use crate::error::CliError;

/// Loads the configuration with source tracking and prints it as pretty JSON.
///
/// # Errors
///
/// Returns `CliError::Config` if the config file or an environment override
/// is invalid, and `CliError::Io` if writing to `out` fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "board": {
            "value": config.board,
            "source": sources.board,
        },
        "win_condition": {
            "value": config.win_condition,
            "source": sources.win_condition,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
