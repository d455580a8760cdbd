//! Process exit statuses of the `sequence` binary.

use crate::error::CliError;

/// Command completed.
pub const SUCCESS: i32 = 0;

/// Bad input, rejected move, failed verification or I/O failure.
pub const ERROR: i32 = 2;

/// Exit status for the outcome of a command handler.
pub fn for_result(result: &Result<(), CliError>) -> i32 {
    match result {
        Ok(()) => SUCCESS,
        Err(_) => ERROR,
    }
}
