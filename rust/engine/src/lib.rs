//! # sequence-engine: Rules Core for a Sequence-style Board Game
//!
//! Players discard cards to place chips on a 10x10 board, jacks remove or
//! wildcard chips, and unbroken lines of five chips form sequences that count
//! toward a configurable win condition. The engine is pure and deterministic:
//! game state is rebuilt by replaying events, and commands are plain
//! functions from a state to an event or a typed error.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card, Tile, suits, ranks and the 104-card pool
//! - [`board`] - Board variants, coordinates, tile matching and sequence detection
//! - [`deck`] - Seeded Fisher-Yates shuffle, dealing and reshuffling
//! - [`player`] - Player identity, handles and team assignment
//! - [`game`] - Event-sourced `GameState`, `GameInit` and `GameEvent`
//! - [`rules`] - Command processor: `play_card` and `exchange_dead_card`
//! - [`view`] - Player-scoped projections of the state
//! - [`store`] - Event store contract and an in-memory implementation
//! - [`engine`] - Load / validate / persist / notify façade
//! - [`logger`] - JSONL game records
//! - [`errors`] - Closed error enumerations
//!
//! ## Quick Start
//!
//! ```rust
//! use sequence_engine::board::{BoardType, Coord};
//! use sequence_engine::deck::Seed;
//! use sequence_engine::game::{GameInit, GameState};
//! use sequence_engine::player::{Player, PlayerId};
//! use sequence_engine::rules::{legal_coords, play_card};
//!
//! let players = vec![Player::new(1, "alice"), Player::new(2, "bob")];
//! let init = GameInit::new(players, PlayerId(1), Seed(42), BoardType::Sequence, 2).unwrap();
//! let state = GameState::new(&init).unwrap();
//!
//! let card = *state.hand(0).iter().find(|c| !c.is_one_eyed_jack()).unwrap();
//! let coord: Coord = legal_coords(&state, &"alice".into(), &card)[0];
//! let event = play_card(&state, &"alice".into(), card, coord).unwrap();
//! let next = state.apply(&event);
//! assert_eq!(next.version(), 1);
//! assert_eq!(next.current_player_id(), Some(PlayerId(2)));
//! ```

pub mod board;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
mod layouts;
pub mod logger;
pub mod player;
pub mod rules;
pub mod store;
pub mod view;
