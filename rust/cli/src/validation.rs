//! Parsing and validation of command-line values.
//!
//! These functions double as clap `value_parser`s, so malformed cards,
//! coordinates, boards and player counts are rejected before a command runs,
//! with a message that says what was expected.

use sequence_engine::board::{BoardType, Coord};
use sequence_engine::cards::Card;
use sequence_engine::player::{PlayerId, PlayerRef, SUPPORTED_PLAYER_COUNTS};

/// Parse a card such as `2S`, `10H`, `TH#2` or `jd#1`.
///
/// ```rust
/// # use sequence_cli::validation::parse_card;
/// assert_eq!(parse_card("2s").unwrap().to_string(), "2S#1");
/// assert!(parse_card("1X").is_err());
/// ```
pub fn parse_card(input: &str) -> Result<Card, String> {
    input
        .trim()
        .parse::<Card>()
        .map_err(|e| format!("invalid card '{}': {} (e.g. 2S, TH#2, JD)", input, e))
}

/// Parse a board coordinate given as `COL,ROW`, both 0-9.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let coord = input
        .trim()
        .parse::<Coord>()
        .map_err(|e| format!("invalid coordinate '{}': {} (expected COL,ROW)", input, e))?;
    if !coord.in_bounds() {
        return Err(format!(
            "coordinate {} is off the board (columns and rows run 0-9)",
            coord
        ));
    }
    Ok(coord)
}

pub fn parse_board(input: &str) -> Result<BoardType, String> {
    input.parse::<BoardType>()
}

pub fn parse_player_count(input: &str) -> Result<usize, String> {
    let n: usize = input
        .trim()
        .parse()
        .map_err(|_| format!("invalid player count '{}'", input))?;
    if !SUPPORTED_PLAYER_COUNTS.contains(&n) {
        return Err(format!("unsupported player count {} (use 2, 3, 4 or 6)", n));
    }
    Ok(n)
}

/// A player named by handle, or by id when written `#ID`.
pub fn parse_player(input: &str) -> Result<PlayerRef, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("player must not be empty".to_string());
    }
    match input.strip_prefix('#') {
        Some(id) => id
            .parse::<u64>()
            .map(|id| PlayerRef::Id(PlayerId(id)))
            .map_err(|_| format!("invalid player id '{}'", input)),
        None => Ok(PlayerRef::from(input)),
    }
}
