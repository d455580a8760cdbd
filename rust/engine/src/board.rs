use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{Card, Tile};
use crate::layouts::{self, Layout};
use crate::player::Team;

/// Width and height of every board.
pub const BOARD_SIZE: i32 = 10;

/// Number of chips in a line that form a sequence.
pub const SEQUENCE_LENGTH: usize = 5;

/// A grid position: `column` grows to the right, `row` grows downward.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Coord {
    pub column: i32,
    pub row: i32,
}

impl Coord {
    /// Sentinel meaning "no board placement", used only by dead-card exchanges.
    pub const NONE: Coord = Coord {
        column: -1,
        row: -1,
    };

    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    pub fn is_none(&self) -> bool {
        *self == Coord::NONE
    }

    pub fn in_bounds(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.column) && (0..BOARD_SIZE).contains(&self.row)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.column, self.row)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid coordinate '{0}' (expected COL,ROW)")]
pub struct ParseCoordError(pub String);

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (col, row) = trimmed
            .split_once(',')
            .ok_or_else(|| ParseCoordError(s.to_string()))?;
        let column = col
            .trim()
            .parse()
            .map_err(|_| ParseCoordError(s.to_string()))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| ParseCoordError(s.to_string()))?;
        Ok(Coord::new(column, row))
    }
}

/// A locked line of five coordinates owned by one team.
/// Coordinates are kept sorted so that two sequences over the same cells compare equal.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Seq {
    pub coords: [Coord; SEQUENCE_LENGTH],
    pub team: Team,
}

impl Seq {
    pub fn new(coords: [Coord; SEQUENCE_LENGTH], team: Team) -> Self {
        let mut coords = coords;
        coords.sort();
        Self { coords, team }
    }

    pub fn contains(&self, coord: &Coord) -> bool {
        self.coords.contains(coord)
    }
}

/// The two printed board variants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoardType {
    /// Spiral layout
    OneEyedJack,
    /// Classic printed layout
    Sequence,
}

impl BoardType {
    pub fn all() -> [BoardType; 2] {
        [BoardType::OneEyedJack, BoardType::Sequence]
    }

    /// The shared, immutable board for this variant.
    pub fn board(self) -> &'static Board {
        static BOARDS: OnceLock<[Board; 2]> = OnceLock::new();
        let boards = BOARDS.get_or_init(|| {
            [
                Board::build(BoardType::OneEyedJack, &layouts::ONE_EYED_JACK),
                Board::build(BoardType::Sequence, &layouts::SEQUENCE),
            ]
        });
        match self {
            BoardType::OneEyedJack => &boards[0],
            BoardType::Sequence => &boards[1],
        }
    }
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardType::OneEyedJack => f.write_str("one-eyed-jack"),
            BoardType::Sequence => f.write_str("sequence"),
        }
    }
}

impl FromStr for BoardType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "one-eyed-jack" | "oneeyedjack" => Ok(BoardType::OneEyedJack),
            "sequence" => Ok(BoardType::Sequence),
            other => Err(format!(
                "Unknown board '{}' (expected one-eyed-jack or sequence)",
                other
            )),
        }
    }
}

/// A board layout together with its tile-to-coordinate reverse index.
#[derive(Debug)]
pub struct Board {
    kind: BoardType,
    cells: Layout,
    coords_by_tile: HashMap<Tile, [Coord; 2]>,
}

const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

impl Board {
    fn build(kind: BoardType, cells: &Layout) -> Self {
        let mut coords_by_tile: HashMap<Tile, [Coord; 2]> = HashMap::with_capacity(48);
        for (row, line) in cells.iter().enumerate() {
            for (column, cell) in line.iter().enumerate() {
                let Some(tile) = cell else { continue };
                let coord = Coord::new(column as i32, row as i32);
                coords_by_tile
                    .entry(*tile)
                    .and_modify(|pair| pair[1] = coord)
                    .or_insert([coord, coord]);
            }
        }
        Self {
            kind,
            cells: *cells,
            coords_by_tile,
        }
    }

    pub fn kind(&self) -> BoardType {
        self.kind
    }

    /// The printed tile at `coord`; `None` for corners and out-of-range coordinates.
    pub fn tile_at(&self, coord: Coord) -> Option<Tile> {
        if !coord.in_bounds() {
            return None;
        }
        self.cells[coord.row as usize][coord.column as usize]
    }

    pub fn is_corner(&self, coord: Coord) -> bool {
        coord.in_bounds() && self.tile_at(coord).is_none()
    }

    /// Whether `card` may be placed at `coord` as far as the printed tile is concerned.
    pub fn matches(&self, coord: Coord, card: &Card) -> bool {
        if !coord.in_bounds() {
            return false;
        }
        if card.is_two_eyed_jack() {
            return true;
        }
        self.tile_at(coord) == Some(card.tile())
    }

    /// Both coordinates bearing `tile`. Jacks are not printed and have no entry.
    pub fn coords_for(&self, tile: &Tile) -> Option<&[Coord; 2]> {
        self.coords_by_tile.get(tile)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Option<Tile>)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(column, cell)| (Coord::new(column as i32, row as i32), *cell))
        })
    }

    /// Sequences completed for `team` by a chip at `coord`.
    ///
    /// `chips` must already include the new chip. `team_sequence_coords` holds
    /// the coordinates of sequences `team` has already locked; a window may
    /// reuse at most one of them. Each of the four lines through `coord` is
    /// scanned independently, so a single placement can complete several
    /// sequences at once.
    pub fn get_sequences(
        &self,
        chips: &BTreeMap<Coord, Team>,
        team_sequence_coords: &BTreeSet<Coord>,
        coord: Coord,
        team: Team,
    ) -> Vec<Seq> {
        let owned = |c: &Coord| self.is_corner(*c) || chips.get(c) == Some(&team);
        let reach = SEQUENCE_LENGTH as i32;
        let mut found = Vec::new();

        for (dc, dr) in DIRECTIONS {
            let line: Vec<Coord> = (-reach..=reach)
                .map(|k| Coord::new(coord.column + k * dc, coord.row + k * dr))
                .collect();

            let mut start = 0;
            while start + SEQUENCE_LENGTH <= line.len() {
                let window = &line[start..start + SEQUENCE_LENGTH];
                if window.iter().all(owned) {
                    let shared = window
                        .iter()
                        .filter(|c| team_sequence_coords.contains(*c))
                        .count();
                    if shared < 2 {
                        let mut coords = [Coord::NONE; SEQUENCE_LENGTH];
                        coords.copy_from_slice(window);
                        found.push(Seq::new(coords, team));
                        // the next window may share only this window's last cell
                        start += SEQUENCE_LENGTH - 1;
                        continue;
                    }
                }
                start += 1;
            }
        }
        found
    }
}
