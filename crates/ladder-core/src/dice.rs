//! The die: the only source of randomness in the game.
//!
//! `GameState` draws through the [`DiceSource`] trait, so tests and replays
//! can swap the random die for a fixed sequence.

use crate::config::ConfigError;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of faces on the die
pub const DIE_FACES: u8 = 6;

/// A single die result, always in `1..=6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieValue(u8);

impl DieValue {
    /// Wrap a face value, or `None` if it is not on the die
    pub fn new(value: u8) -> Option<Self> {
        (1..=DIE_FACES).contains(&value).then_some(Self(value))
    }

    /// The face value
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DieValue {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ConfigError::InvalidDieValue(value))
    }
}

impl From<DieValue> for u8 {
    fn from(value: DieValue) -> Self {
        value.0
    }
}

impl fmt::Display for DieValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something that can be rolled for a die value
pub trait DiceSource: fmt::Debug + Send {
    fn roll(&mut self) -> DieValue;
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll(&mut self) -> DieValue {
        (**self).roll()
    }
}

/// A fair six-sided die
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Seeded from the OS
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded for a reproducible sequence of rolls
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceSource for RandomDice {
    fn roll(&mut self) -> DieValue {
        DieValue(self.rng.gen_range(1..=DIE_FACES))
    }
}

/// Replays a fixed list of rolls, starting over once it runs out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedDice {
    values: Vec<DieValue>,
    next: usize,
}

impl ScriptedDice {
    pub fn new(values: impl IntoIterator<Item = u8>) -> Result<Self, ConfigError> {
        let values = values
            .into_iter()
            .map(DieValue::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        if values.is_empty() {
            return Err(ConfigError::EmptyDiceScript);
        }
        Ok(Self { values, next: 0 })
    }

    /// How many rolls have been drawn so far
    pub fn rolls_drawn(&self) -> usize {
        self.next
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> DieValue {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
