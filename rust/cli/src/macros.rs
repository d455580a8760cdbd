//! Macros for common CLI error handling patterns.

/// Write a line to a stream, returning [`crate::exit_code::ERROR`] from the
/// enclosing function if the stream is gone.
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

/// Parse one JSONL line, or warn on `$err` and `continue` the enclosing loop.
///
/// ```ignore
/// let record: GameRecord = parse_json_or_continue!(line, err, format!("line {}", n));
/// ```
#[macro_export]
macro_rules! parse_json_or_continue {
    ($line:expr, $err:expr, $context:expr) => {
        match serde_json::from_str($line) {
            Ok(r) => r,
            Err(e) => {
                let _ = $crate::ui::display_warning(
                    $err,
                    &format!("Skipping {}: {}", $context, e),
                );
                continue;
            }
        }
    };
}
