//! Command-line surface of the `sequence` binary.

use clap::{Parser, Subcommand};

use sequence_engine::board::{BoardType, Coord};
use sequence_engine::cards::Card;
use sequence_engine::player::PlayerRef;

use crate::validation::{parse_board, parse_card, parse_coord, parse_player, parse_player_count};

#[derive(Parser, Debug)]
#[command(
    name = "sequence",
    version,
    about = "Sequence board game rules engine CLI"
)]
pub struct SequenceCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new game and write it to a JSONL game file
    New {
        /// Number of players (2, 3, 4 or 6)
        #[arg(long, value_parser = parse_player_count)]
        players: Option<usize>,
        /// Board layout: sequence or one-eyed-jack
        #[arg(long, value_parser = parse_board)]
        board: Option<BoardType>,
        /// Sequences a team needs to win
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
        win: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
        /// Game file to create (.jsonl or .jsonl.zst)
        #[arg(long)]
        output: String,
    },
    /// Deal a table and print every hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = parse_player_count)]
        players: Option<usize>,
    },
    /// Print a board layout
    Board {
        #[arg(long, value_parser = parse_board)]
        board: Option<BoardType>,
    },
    /// Print the current table of a recorded game
    Show {
        #[arg(long)]
        input: String,
        /// Game id (defaults to the last game in the file)
        #[arg(long)]
        game: Option<String>,
        /// Only what this player may see (handle, or #ID)
        #[arg(long = "as", value_parser = parse_player)]
        viewer: Option<PlayerRef>,
        /// Print the player's view as JSON
        #[arg(long, requires = "viewer")]
        json: bool,
    },
    /// Play a card: place a chip, or remove one with a one-eyed jack
    Play {
        #[arg(long)]
        input: String,
        #[arg(long)]
        game: Option<String>,
        #[arg(long, value_parser = parse_player)]
        player: PlayerRef,
        #[arg(long, value_parser = parse_card)]
        card: Card,
        /// Target cell as COL,ROW
        #[arg(long, value_parser = parse_coord)]
        at: Coord,
    },
    /// Swap a dead card for a fresh one without ending the turn
    Exchange {
        #[arg(long)]
        input: String,
        #[arg(long)]
        game: Option<String>,
        #[arg(long, value_parser = parse_player)]
        player: PlayerRef,
        #[arg(long, value_parser = parse_card)]
        card: Card,
    },
    /// Step through every recorded game
    Replay {
        #[arg(long)]
        input: String,
    },
    /// Re-derive every recorded event through the rules
    Verify {
        #[arg(long)]
        input: String,
    },
    /// Print the top of a seeded deck
    Rng {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}
