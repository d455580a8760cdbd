//! Persistence contract for game event logs.

use std::collections::HashMap;

use crate::errors::StoreError;
use crate::game::{GameEvent, GameId, GameInit};

/// Append-only storage of one event log per game.
///
/// Implementations must reject an event whose index is not exactly one past
/// the last stored index; this is the optimistic version check that keeps at
/// most one command per game in flight.
pub trait EventStore {
    fn create_game(&mut self, game_id: &GameId, init: GameInit) -> Result<(), StoreError>;

    fn add_event(&mut self, game_id: &GameId, event: GameEvent) -> Result<(), StoreError>;

    fn get_game_by_id(&self, game_id: &GameId) -> Result<(GameInit, Vec<GameEvent>), StoreError>;
}

/// Process-local event store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventStore {
    games: HashMap<GameId, (GameInit, Vec<GameEvent>)>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl EventStore for InMemoryEventStore {
    fn create_game(&mut self, game_id: &GameId, init: GameInit) -> Result<(), StoreError> {
        if self.games.contains_key(game_id) {
            return Err(StoreError::GameAlreadyExists(game_id.clone()));
        }
        self.games.insert(game_id.clone(), (init, Vec::new()));
        Ok(())
    }

    fn add_event(&mut self, game_id: &GameId, event: GameEvent) -> Result<(), StoreError> {
        let (_, events) = self
            .games
            .get_mut(game_id)
            .ok_or_else(|| StoreError::GameNotFound(game_id.clone()))?;
        append_checked(game_id, events, event)
    }

    fn get_game_by_id(&self, game_id: &GameId) -> Result<(GameInit, Vec<GameEvent>), StoreError> {
        self.games
            .get(game_id)
            .cloned()
            .ok_or_else(|| StoreError::GameNotFound(game_id.clone()))
    }
}

/// Appends `event` if its index directly follows the last one in `events`.
pub fn append_checked(
    game_id: &GameId,
    events: &mut Vec<GameEvent>,
    event: GameEvent,
) -> Result<(), StoreError> {
    let expected = events.last().map_or(1, |e| e.index + 1);
    if event.index != expected {
        return Err(StoreError::IndexConflict {
            game_id: game_id.clone(),
            expected,
            found: event.index,
        });
    }
    events.push(event);
    Ok(())
}
