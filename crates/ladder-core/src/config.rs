//! Game configuration and construction-time errors.

use crate::board::TopologyError;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Fewest players a game can start with
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can start with
pub const MAX_PLAYERS: usize = 4;

/// What happens when a roll would carry a token past the last square
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OvershootRule {
    /// Stop on the last square (and win)
    #[default]
    Clamp,
    /// Stay put and lose the turn; the last square needs an exact roll
    ExactLanding,
}

impl FromStr for OvershootRule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(OvershootRule::Clamp),
            "exact" | "exact-landing" | "exact_landing" => Ok(OvershootRule::ExactLanding),
            other => Err(ConfigError::UnknownOvershootRule(other.to_string())),
        }
    }
}

/// Errors that stop a game from being created
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid board: {0}")]
    Topology(#[from] TopologyError),

    #[error("a game needs 2-4 players, got {count}")]
    PlayerCount { count: usize },

    #[error("die value {0} is outside 1-6")]
    InvalidDieValue(u8),

    #[error("scripted dice need at least one value")]
    EmptyDiceScript,

    #[error("unknown overshoot rule '{0}' (expected 'clamp' or 'exact')")]
    UnknownOvershootRule(String),
}

/// Settings fixed for the lifetime of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display names, one per player, in turn order
    pub player_names: Vec<String>,
    /// How rolls past the last square are handled
    pub overshoot: OvershootRule,
}

impl GameConfig {
    /// Create a config for the given players with the default overshoot rule
    pub fn new(player_names: Vec<String>) -> Self {
        Self {
            player_names,
            overshoot: OvershootRule::default(),
        }
    }

    /// Create a config with `count` players named "Player 1", "Player 2", ...
    pub fn with_player_count(count: usize) -> Self {
        let names = (0..count)
            .map(|i| Player::default_name(i as u8))
            .collect();
        Self::new(names)
    }

    /// The reference setup: four players
    pub fn standard_4player() -> Self {
        Self::with_player_count(MAX_PLAYERS)
    }

    /// Use a different overshoot rule
    pub fn overshoot(mut self, rule: OvershootRule) -> Self {
        self.overshoot = rule;
        self
    }

    /// Number of players this config describes
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Check the roster size
    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.player_count();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(ConfigError::PlayerCount { count });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard_4player()
    }
}
