use thiserror::Error;

use crate::game::GameId;

/// Reasons a PlayCard command is refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlayCardError {
    #[error("Player is not in this game")]
    PlayerIsNotInGame,
    #[error("It is not this player's turn")]
    PlayerIsNotCurrentPlayer,
    #[error("A chip is already on that coordinate")]
    CoordIsOccupied,
    #[error("Player does not hold that card")]
    PlayerDoesNotHaveCard,
    #[error("Card does not match the board at that coordinate")]
    CardDoesNotMatchCoord,
    #[error("There is no chip to remove on that coordinate")]
    CoordIsEmpty,
    #[error("Cannot remove a chip belonging to your own team")]
    ChipBelongsToPlayerTeam,
    #[error("Cannot remove a chip that is part of a sequence")]
    ChipIsPartOfSequence,
}

/// Reasons an ExchangeDeadCard command is refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeDeadCardError {
    #[error("Player is not in this game")]
    PlayerIsNotInGame,
    #[error("It is not this player's turn")]
    PlayerIsNotCurrentPlayer,
    #[error("Player does not hold that card")]
    PlayerDoesNotHaveCard,
    #[error("Card is not dead")]
    CardIsNotDead,
    #[error("Player has already exchanged a dead card this turn")]
    PlayerHasAlreadyExchangedDeadCard,
}

/// Invalid game setup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("Unsupported player count: {0} (expected 2, 3, 4 or 6)")]
    UnsupportedPlayerCount(usize),
    #[error("Win condition must be between 1 and 4, got {0}")]
    InvalidWinCondition(u8),
    #[error("Duplicate player: {0}")]
    DuplicatePlayer(String),
    #[error("First player {0} is not seated in the game")]
    FirstPlayerNotSeated(String),
}

/// An event log that does not fit the state it is replayed onto.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("Event index {found} does not follow version {version}")]
    OutOfOrder { version: u64, found: u64 },
    #[error("Event {index} was recorded after the game ended")]
    GameAlreadyOver { index: u64 },
    #[error("Event {index} names a player who is not in the game")]
    UnknownPlayer { index: u64 },
    #[error("Event {index} uses a card the player does not hold")]
    CardNotInHand { index: u64 },
    #[error("Event {index} draws a card that is not in the deck")]
    CardNotInDeck { index: u64 },
    #[error("Invalid game setup: {0}")]
    Setup(#[from] SetupError),
}

/// Failures of the event store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Game {0} not found")]
    GameNotFound(GameId),
    #[error("Game {0} already exists")]
    GameAlreadyExists(GameId),
    #[error("Event index conflict for game {game_id}: expected {expected}, got {found}")]
    IndexConflict {
        game_id: GameId,
        expected: u64,
        found: u64,
    },
    #[error("Storage failure: {0}")]
    Backend(String),
}

/// Everything the [`crate::engine::Engine`] façade can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    PlayCard(#[from] PlayCardError),
    #[error(transparent)]
    ExchangeDeadCard(#[from] ExchangeDeadCardError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[error(transparent)]
    Setup(#[from] SetupError),
}
