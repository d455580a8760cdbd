use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardType, Coord, Seq};
use crate::cards::Card;
use crate::deck::{Deck, Seed};
use crate::errors::{ReplayError, SetupError};
use crate::player::{teams_for, Player, PlayerHandle, PlayerId, PlayerRef, Team};

/// Identifier of a game, formatted `YYYYMMDD-NNNNNN` by [`crate::logger::format_game_id`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        GameId::new(id)
    }
}

/// Immutable description of how a game was set up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInit {
    /// Seated players in turn order
    pub players: Vec<Player>,
    /// Player who takes the first turn
    pub first_player_id: PlayerId,
    /// Seed for every shuffle in the game
    pub seed: Seed,
    /// Board variant
    pub board_type: BoardType,
    /// Number of sequences a team needs to win (1-4)
    pub win_condition: u8,
}

impl GameInit {
    pub fn new(
        players: Vec<Player>,
        first_player_id: PlayerId,
        seed: Seed,
        board_type: BoardType,
        win_condition: u8,
    ) -> Result<Self, SetupError> {
        let init = Self {
            players,
            first_player_id,
            seed,
            board_type,
            win_condition,
        };
        init.validate()?;
        Ok(init)
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if teams_for(self.players.len()).is_none() {
            return Err(SetupError::UnsupportedPlayerCount(self.players.len()));
        }
        if !(1..=4).contains(&self.win_condition) {
            return Err(SetupError::InvalidWinCondition(self.win_condition));
        }
        let mut ids = HashSet::new();
        let mut handles = HashSet::new();
        for p in &self.players {
            if !ids.insert(p.id) {
                return Err(SetupError::DuplicatePlayer(p.id.to_string()));
            }
            if !handles.insert(&p.handle) {
                return Err(SetupError::DuplicatePlayer(p.handle.to_string()));
            }
        }
        if !ids.contains(&self.first_player_id) {
            return Err(SetupError::FirstPlayerNotSeated(
                self.first_player_id.to_string(),
            ));
        }
        Ok(())
    }
}

/// The single fact produced by a successful command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Acting player
    pub by_player_id: PlayerId,
    /// Card taken from the acting player's hand
    pub card_used: Card,
    /// Card drawn to replace it, if the deck had one
    pub card_drawn: Option<Card>,
    /// Team of the chip placed, or `None` when a chip was removed
    pub chip: Option<Team>,
    /// Target cell, or [`Coord::NONE`] for a dead-card exchange
    pub coord: Coord,
    /// Position in the game's event log, starting at 1
    pub index: u64,
    /// Player to act next; `None` once the game is over
    pub next_player_id: Option<PlayerId>,
    /// Sequences completed by this move
    #[serde(default)]
    pub sequences: Vec<Seq>,
    #[serde(default)]
    pub winner: Option<Team>,
}

impl GameEvent {
    pub fn is_dead_card_exchange(&self) -> bool {
        self.coord.is_none()
    }

    /// Copy of the event as `viewer` may see it: only the acting player learns the drawn card.
    pub fn redacted_for(&self, viewer: PlayerId) -> GameEvent {
        let mut event = self.clone();
        if viewer != self.by_player_id {
            event.card_drawn = None;
        }
        event
    }
}

/// Event-sourced game aggregate.
///
/// Built from a [`GameInit`] and advanced only by [`GameState::apply`], which
/// returns a new state and leaves the old one untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    init: GameInit,
    player_ids: Vec<PlayerId>,
    player_handles: Vec<PlayerHandle>,
    teams: Vec<Team>,
    hands: Vec<BTreeSet<Card>>,
    chips: BTreeMap<Coord, Team>,
    coords_in_sequence: BTreeSet<Coord>,
    sequences: Vec<Seq>,
    deck: Deck,
    discards: Vec<Card>,
    dead_cards: BTreeSet<Card>,
    current_player_id: Option<PlayerId>,
    exchanged_dead_card: bool,
    version: u64,
    winner: Option<Team>,
    latest_event: Option<GameEvent>,
}

impl GameState {
    /// The freshly dealt table, before any event.
    pub fn new(init: &GameInit) -> Result<Self, SetupError> {
        init.validate()?;
        let player_count = init.players.len();
        let teams =
            teams_for(player_count).ok_or(SetupError::UnsupportedPlayerCount(player_count))?;
        let mut deck = Deck::new_with_seed(init.seed);
        let hands = deck
            .deal_hands(player_count)
            .ok_or(SetupError::UnsupportedPlayerCount(player_count))?;

        let mut state = Self {
            init: init.clone(),
            player_ids: init.players.iter().map(|p| p.id).collect(),
            player_handles: init.players.iter().map(|p| p.handle.clone()).collect(),
            teams,
            hands: hands.into_iter().map(|h| h.into_iter().collect()).collect(),
            chips: BTreeMap::new(),
            coords_in_sequence: BTreeSet::new(),
            sequences: Vec::new(),
            deck,
            discards: Vec::new(),
            dead_cards: BTreeSet::new(),
            current_player_id: Some(init.first_player_id),
            exchanged_dead_card: false,
            version: 0,
            winner: None,
            latest_event: None,
        };
        state.refresh_dead_cards();
        Ok(state)
    }

    /// Folds an untrusted event log onto a fresh table, checking that each
    /// event follows the state it is applied to and moves only cards that
    /// exist: the used card from the actor's hand, the drawn card from the deck.
    pub fn replay(init: &GameInit, events: &[GameEvent]) -> Result<Self, ReplayError> {
        let mut state = GameState::new(init)?;
        for event in events {
            if state.is_over() {
                return Err(ReplayError::GameAlreadyOver { index: event.index });
            }
            if event.index != state.version + 1 {
                return Err(ReplayError::OutOfOrder {
                    version: state.version,
                    found: event.index,
                });
            }
            let Some(seat) = state.index_of(event.by_player_id) else {
                return Err(ReplayError::UnknownPlayer { index: event.index });
            };
            if !state.hands[seat].contains(&event.card_used) {
                return Err(ReplayError::CardNotInHand { index: event.index });
            }
            if event
                .card_drawn
                .is_some_and(|drawn| !state.deck.cards().contains(&drawn))
            {
                return Err(ReplayError::CardNotInDeck { index: event.index });
            }
            state = state.apply(event);
        }
        Ok(state)
    }

    /// Returns the state after `event`.
    ///
    /// # Panics
    ///
    /// Panics if the event was not computed from this state: its index must be
    /// `version + 1` and its player must be seated. Use [`GameState::replay`]
    /// for logs that have not been checked.
    pub fn apply(&self, event: &GameEvent) -> GameState {
        assert_eq!(
            event.index,
            self.version + 1,
            "event {} applied to game at version {}",
            event.index,
            self.version
        );
        let Some(seat) = self.index_of(event.by_player_id) else {
            panic!(
                "event {} names player {} who is not seated",
                event.index, event.by_player_id
            );
        };

        let mut next = self.clone();
        next.hands[seat].remove(&event.card_used);
        if let Some(drawn) = event.card_drawn {
            next.deck.remove(&drawn);
            next.hands[seat].insert(drawn);
        }

        if !event.is_dead_card_exchange() {
            match event.chip {
                Some(team) => {
                    next.chips.insert(event.coord, team);
                }
                None => {
                    next.chips.remove(&event.coord);
                }
            }
        }
        next.discards.push(event.card_used);

        for seq in &event.sequences {
            next.coords_in_sequence.extend(seq.coords.iter().copied());
            next.sequences.push(seq.clone());
            tracing::info!(
                version = event.index,
                team = %seq.team,
                "sequence completed"
            );
        }

        next.exchanged_dead_card = event.is_dead_card_exchange()
            && event.next_player_id == Some(event.by_player_id);
        next.current_player_id = event.next_player_id;
        if event.winner.is_some() {
            next.winner = event.winner;
            next.current_player_id = None;
            tracing::info!(version = event.index, winner = ?event.winner, "game over");
        }
        next.version = event.index;

        if next.deck.is_empty() {
            let pile = std::mem::take(&mut next.discards);
            tracing::debug!(cards = pile.len(), "reshuffling discards into deck");
            next.deck.reshuffle(pile);
        }

        next.refresh_dead_cards();
        next.latest_event = Some(event.clone());

        tracing::debug!(
            version = next.version,
            player = %event.by_player_id,
            coord = %event.coord,
            card = %event.card_used,
            "event applied"
        );
        next
    }

    fn refresh_dead_cards(&mut self) {
        let board = self.board();
        let chips = &self.chips;
        self.dead_cards = self
            .hands
            .iter()
            .flatten()
            .filter(|card| {
                board
                    .coords_for(&card.tile())
                    .is_some_and(|pair| pair.iter().all(|c| chips.contains_key(c)))
            })
            .copied()
            .collect();
    }

    pub fn init(&self) -> &GameInit {
        &self.init
    }

    pub fn board(&self) -> &'static Board {
        self.init.board_type.board()
    }

    pub fn win_condition(&self) -> u8 {
        self.init.win_condition
    }

    pub fn player_count(&self) -> usize {
        self.player_ids.len()
    }

    pub fn player_ids(&self) -> &[PlayerId] {
        &self.player_ids
    }

    pub fn player_handles(&self) -> &[PlayerHandle] {
        &self.player_handles
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Seat index of a player named by id or handle.
    pub fn player_index(&self, player: &PlayerRef) -> Option<usize> {
        match player {
            PlayerRef::Id(id) => self.index_of(*id),
            PlayerRef::Handle(handle) => self.player_handles.iter().position(|h| h == handle),
        }
    }

    fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.player_ids.iter().position(|p| *p == id)
    }

    /// Seat that plays after `seat`.
    pub fn next_seat(&self, seat: usize) -> usize {
        (seat + 1) % self.player_ids.len()
    }

    pub fn hand(&self, seat: usize) -> &BTreeSet<Card> {
        &self.hands[seat]
    }

    pub fn hands(&self) -> &[BTreeSet<Card>] {
        &self.hands
    }

    pub fn chips(&self) -> &BTreeMap<Coord, Team> {
        &self.chips
    }

    pub fn coords_in_sequence(&self) -> &BTreeSet<Coord> {
        &self.coords_in_sequence
    }

    /// Coordinates locked by sequences of one team.
    pub fn team_sequence_coords(&self, team: Team) -> BTreeSet<Coord> {
        self.sequences
            .iter()
            .filter(|s| s.team == team)
            .flat_map(|s| s.coords.iter().copied())
            .collect()
    }

    pub fn sequences(&self) -> &[Seq] {
        &self.sequences
    }

    pub fn sequence_count(&self, team: Team) -> usize {
        self.sequences.iter().filter(|s| s.team == team).count()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Hand cards whose two board cells are both taken.
    pub fn dead_cards(&self) -> &BTreeSet<Card> {
        &self.dead_cards
    }

    pub fn current_player_id(&self) -> Option<PlayerId> {
        self.current_player_id
    }

    /// Whether the current player already swapped a dead card during this turn.
    pub fn has_exchanged_dead_card(&self) -> bool {
        self.exchanged_dead_card
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.current_player_id.is_none()
    }

    pub fn latest_event(&self) -> Option<&GameEvent> {
        self.latest_event.as_ref()
    }

    /// Cards in deck, discards and hands together; constant for the whole game.
    pub fn card_count(&self) -> usize {
        let in_hands: usize = self.hands.iter().map(|h| h.len()).sum();
        self.deck.remaining() + self.discards.len() + in_hands
    }
}
