//! Player-scoped projections of a [`GameState`].
//!
//! A view carries everything a seated player is allowed to see: public table
//! data plus the viewer's own hand. It is the shape handed to broadcasters.

use serde::{Deserialize, Serialize};

use crate::board::{BoardType, Coord, Seq};
use crate::cards::Card;
use crate::game::{GameEvent, GameState};
use crate::player::{PlayerHandle, PlayerId, PlayerRef, Team};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub id: PlayerId,
    pub handle: PlayerHandle,
    pub team: Team,
    pub hand_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipView {
    pub coord: Coord,
    pub team: Team,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub board_type: BoardType,
    pub win_condition: u8,
    pub version: u64,
    pub viewer: PlayerId,
    pub team: Team,
    pub hand: Vec<Card>,
    pub dead_cards: Vec<Card>,
    pub seats: Vec<SeatView>,
    pub chips: Vec<ChipView>,
    pub sequences: Vec<Seq>,
    pub deck_remaining: usize,
    pub discards: Vec<Card>,
    pub current_player_id: Option<PlayerId>,
    pub winner: Option<Team>,
    pub can_exchange_dead_card: bool,
    pub latest_event: Option<GameEvent>,
}

impl GameState {
    /// What `player` sees of the table, or `None` if they are not seated.
    pub fn player_view(&self, player: &PlayerRef) -> Option<GameView> {
        let seat = self.player_index(player)?;
        let viewer = self.player_ids()[seat];
        let hand: Vec<Card> = self.hand(seat).iter().copied().collect();
        let dead_cards = hand
            .iter()
            .filter(|c| self.dead_cards().contains(*c))
            .copied()
            .collect();
        let seats = (0..self.player_count())
            .map(|i| SeatView {
                id: self.player_ids()[i],
                handle: self.player_handles()[i].clone(),
                team: self.teams()[i],
                hand_size: self.hand(i).len(),
            })
            .collect();
        let is_current = self.current_player_id() == Some(viewer);

        Some(GameView {
            board_type: self.init().board_type,
            win_condition: self.win_condition(),
            version: self.version(),
            viewer,
            team: self.teams()[seat],
            hand,
            dead_cards,
            seats,
            chips: self
                .chips()
                .iter()
                .map(|(coord, team)| ChipView {
                    coord: *coord,
                    team: *team,
                })
                .collect(),
            sequences: self.sequences().to_vec(),
            deck_remaining: self.deck().remaining(),
            discards: self.discards().to_vec(),
            current_player_id: self.current_player_id(),
            winner: self.winner(),
            can_exchange_dead_card: is_current && !self.has_exchanged_dead_card(),
            latest_event: self.latest_event().map(|e| e.redacted_for(viewer)),
        })
    }
}
