use crate::board::Coord;
use crate::cards::Card;
use crate::errors::EngineError;
use crate::game::{GameEvent, GameId, GameInit, GameState};
use crate::player::PlayerRef;
use crate::rules;
use crate::store::EventStore;

/// Receives every committed event together with the state it produced.
/// Delivery (push, fan-out, per-player redaction) is up to the implementation;
/// [`GameState::player_view`] gives the player-scoped shape.
pub trait Notifier {
    fn publish(&self, game_id: &GameId, state: &GameState, event: &GameEvent);
}

/// Notifier that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn publish(&self, _game_id: &GameId, _state: &GameState, _event: &GameEvent) {}
}

/// Command façade over an [`EventStore`]: loads a game, runs the command
/// processor against it, persists the resulting event and notifies.
///
/// Callers must still serialize commands per game; a concurrent writer that
/// lost the race is rejected by the store's index check.
///
/// # Examples
///
/// ```
/// use sequence_engine::board::BoardType;
/// use sequence_engine::deck::Seed;
/// use sequence_engine::engine::{Engine, NoopNotifier};
/// use sequence_engine::game::{GameId, GameInit};
/// use sequence_engine::player::{Player, PlayerId};
/// use sequence_engine::rules::legal_coords;
/// use sequence_engine::store::InMemoryEventStore;
///
/// let mut engine = Engine::new(InMemoryEventStore::new(), NoopNotifier);
/// let players = vec![Player::new(1, "alice"), Player::new(2, "bob")];
/// let init = GameInit::new(players, PlayerId(1), Seed(7), BoardType::Sequence, 2).unwrap();
/// let game_id = GameId::new("20250101-000001");
/// let state = engine.create_game(&game_id, init).unwrap();
///
/// // play the first card alice can legally place
/// let (card, coord) = state
///     .hand(0)
///     .iter()
///     .find_map(|c| legal_coords(&state, &"alice".into(), c).first().map(|at| (*c, *at)))
///     .unwrap();
/// let event = engine.play_card(&game_id, &"alice".into(), card, coord).unwrap();
/// assert_eq!(event.index, 1);
/// assert_eq!(engine.load_state(&game_id).unwrap().version(), 1);
/// ```
#[derive(Debug)]
pub struct Engine<S, N = NoopNotifier> {
    store: S,
    notifier: N,
}

impl<S: EventStore, N: Notifier> Engine<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Registers a new game and returns its freshly dealt table.
    pub fn create_game(
        &mut self,
        game_id: &GameId,
        init: GameInit,
    ) -> Result<GameState, EngineError> {
        let state = GameState::new(&init)?;
        self.store.create_game(game_id, init)?;
        tracing::info!(game_id = %game_id, players = state.player_count(), "game created");
        Ok(state)
    }

    /// Rebuilds the current state from the stored log.
    pub fn load_state(&self, game_id: &GameId) -> Result<GameState, EngineError> {
        let (init, events) = self.store.get_game_by_id(game_id)?;
        Ok(GameState::replay(&init, &events)?)
    }

    pub fn play_card(
        &mut self,
        game_id: &GameId,
        player: &PlayerRef,
        card: Card,
        coord: Coord,
    ) -> Result<GameEvent, EngineError> {
        let state = self.load_state(game_id)?;
        let event = rules::play_card(&state, player, card, coord).map_err(|e| {
            tracing::warn!(game_id = %game_id, player = %player, card = %card, coord = %coord, error = %e, "play rejected");
            e
        })?;
        self.commit(game_id, &state, event)
    }

    pub fn exchange_dead_card(
        &mut self,
        game_id: &GameId,
        player: &PlayerRef,
        card: Card,
    ) -> Result<GameEvent, EngineError> {
        let state = self.load_state(game_id)?;
        let event = rules::exchange_dead_card(&state, player, card).map_err(|e| {
            tracing::warn!(game_id = %game_id, player = %player, card = %card, error = %e, "exchange rejected");
            e
        })?;
        self.commit(game_id, &state, event)
    }

    fn commit(
        &mut self,
        game_id: &GameId,
        state: &GameState,
        event: GameEvent,
    ) -> Result<GameEvent, EngineError> {
        self.store.add_event(game_id, event.clone())?;
        let next = state.apply(&event);
        self.notifier.publish(game_id, &next, &event);
        Ok(event)
    }
}
