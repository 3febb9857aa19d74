//! Ular Tangga - a Snakes and Ladders rules engine
//!
//! This crate provides the core game logic for Ular Tangga, including:
//! - The board topology (snakes, ladders and bounds) with validation
//! - An injectable die, so games can be replayed deterministically
//! - The turn-based game state machine with win detection and reset
//!
//! # Architecture
//!
//! The engine holds no presentation state. A UI (the terminal client, or a
//! browser through the `wasm` feature) owns a `GameState`, submits
//! `GameAction`s, and renders from `GameSnapshot`s and `GameEvent`s.
//!
//! # Modules
//!
//! - [`board`]: Squares, snakes and ladders
//! - [`dice`]: Random and scripted dice
//! - [`player`]: Player tokens
//! - [`config`]: Game settings and construction errors
//! - [`actions`]: Actions, roll outcomes and events
//! - [`game`]: Game state machine

pub mod actions;
pub mod board;
pub mod config;
pub mod dice;
pub mod game;
pub mod player;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent, RollOutcome, Transport, TransportKind};
pub use board::{
    BoardTopology, PlayerId, Square, SquareKind, TopologyEntries, TopologyError, BOARD_SIZE,
    START_SQUARE,
};
pub use config::{ConfigError, GameConfig, OvershootRule, MAX_PLAYERS, MIN_PLAYERS};
pub use dice::{DiceSource, DieValue, RandomDice, ScriptedDice};
pub use game::{GameError, GameSnapshot, GameState};
pub use player::{Player, PlayerColor};
