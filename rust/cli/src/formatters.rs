//! Card, board and event formatters for terminal display.
//!
//! Unicode suit symbols are used where the terminal is known to render them,
//! with an ASCII fallback otherwise:
//!
//! - **Unicode mode**: ♥ ♠ ♦ ♣
//! - **ASCII mode**: h s d c
//!
//! Cards are listed in hands with their parseable text form (`7H#2`) so they
//! can be pasted straight into `--card`.
//!
//! ```rust
//! use sequence_engine::cards::{Rank, Suit, Tile};
//! use sequence_cli::formatters::format_tile;
//!
//! let tile = Tile::new(Suit::Spades, Rank::Ace);
//! assert!(format_tile(&tile) == "A♠" || format_tile(&tile) == "As");
//! ```

use std::collections::{BTreeMap, BTreeSet};

use sequence_engine::board::{BOARD_SIZE, Board, Coord};
use sequence_engine::cards::{Card, Rank, Suit, Tile};
use sequence_engine::game::{GameEvent, GameInit};
use sequence_engine::player::Team;

/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Unix terminals are assumed
/// to handle Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Spades => "s",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
        }
        .to_string()
    }
}

/// Single-character rank (A, 2-9, T, J, Q, K).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ace => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
    }
    .to_string()
}

pub fn format_tile(tile: &Tile) -> String {
    format!("{}{}", format_rank(&tile.rank), format_suit(&tile.suit))
}

/// A card as it reads on the table, without its deck number.
pub fn format_card(card: &Card) -> String {
    format_tile(&card.tile())
}

/// Space-separated cards in their parseable form, e.g. `2S#1 TH#2`.
pub fn format_hand<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    cards
        .into_iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn team_letter(team: Team) -> char {
    match team {
        Team::Red => 'R',
        Team::Green => 'G',
        Team::Blue => 'B',
    }
}

/// The board as a grid, row 0 on top and columns numbered across.
///
/// Corners show `*`, empty cells their tile, chips `(R)`, and chips locked in
/// a sequence `[R]`.
pub fn render_board(
    board: &Board,
    chips: &BTreeMap<Coord, Team>,
    locked: &BTreeSet<Coord>,
) -> String {
    let mut out = String::from("   ");
    for column in 0..BOARD_SIZE {
        out.push_str(&format!("{:>4}", column));
    }
    out.push('\n');
    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{:>3}", row));
        for column in 0..BOARD_SIZE {
            let coord = Coord::new(column, row);
            let cell = match (chips.get(&coord), board.tile_at(coord)) {
                (Some(team), _) if locked.contains(&coord) => format!("[{}]", team_letter(*team)),
                (Some(team), _) => format!("({})", team_letter(*team)),
                (None, Some(tile)) => format_tile(&tile),
                (None, None) => "*".to_string(),
            };
            out.push_str(&format!("{:>4}", cell));
        }
        out.push('\n');
    }
    out
}

fn handle_of(init: &GameInit, event: &GameEvent) -> String {
    init.players
        .iter()
        .find(|p| p.id == event.by_player_id)
        .map(|p| p.handle.to_string())
        .unwrap_or_else(|| format!("#{}", event.by_player_id))
}

/// One line describing what an event did.
pub fn format_event(init: &GameInit, event: &GameEvent) -> String {
    let who = handle_of(init, event);
    let mut line = if event.is_dead_card_exchange() {
        format!(
            "#{} {} exchanges dead card {}",
            event.index,
            who,
            format_card(&event.card_used)
        )
    } else {
        match event.chip {
            Some(team) => format!(
                "#{} {} plays {} at {} -> {} chip",
                event.index,
                who,
                format_card(&event.card_used),
                event.coord,
                team
            ),
            None => format!(
                "#{} {} plays {} at {} -> chip removed",
                event.index,
                who,
                format_card(&event.card_used),
                event.coord
            ),
        }
    };
    for seq in &event.sequences {
        let cells: Vec<String> = seq.coords.iter().map(|c| c.to_string()).collect();
        line.push_str(&format!("; {} sequence {}", seq.team, cells.join(" ")));
    }
    if let Some(team) = event.winner {
        line.push_str(&format!("; {} wins", team));
    }
    line
}
