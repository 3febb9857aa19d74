//! Runtime settings read from environment variables.

use anyhow::Context;
use ladder_core::{GameConfig, OvershootRule};

const DEFAULT_MAX_TURNS: u32 = 10_000;

/// Pause before a moved token settles on screen
const DEFAULT_ANIMATION_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Player names; empty means the standard four "Player N"
    pub players: Vec<String>,
    /// Seed for a reproducible game
    pub seed: Option<u64>,
    pub rule: OvershootRule,
    /// Roll automatically until somebody wins
    pub autoplay: bool,
    /// Autoplay gives up after this many rolls
    pub max_turns: u32,
    /// Pause after each token movement, in milliseconds
    pub animation_ms: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            seed: None,
            rule: OvershootRule::default(),
            autoplay: false,
            max_turns: DEFAULT_MAX_TURNS,
            animation_ms: DEFAULT_ANIMATION_MS,
        }
    }
}

impl CliConfig {
    /// Read `LADDER_*` variables from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("LADDER_PLAYERS") {
            config.players = raw
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(raw) = lookup("LADDER_SEED") {
            let seed = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("LADDER_SEED must be an unsigned integer, got '{}'", raw))?;
            config.seed = Some(seed);
        }

        if let Some(raw) = lookup("LADDER_RULE") {
            config.rule = raw.parse::<OvershootRule>().context("LADDER_RULE")?;
        }

        if let Some(raw) = lookup("LADDER_AUTOPLAY") {
            config.autoplay = parse_flag(&raw)
                .with_context(|| format!("LADDER_AUTOPLAY must be true or false, got '{}'", raw))?;
        }

        if let Some(raw) = lookup("LADDER_MAX_TURNS") {
            config.max_turns = raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("LADDER_MAX_TURNS must be a number, got '{}'", raw))?;
        }

        if let Some(raw) = lookup("LADDER_ANIMATION_MS") {
            config.animation_ms = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("LADDER_ANIMATION_MS must be a number, got '{}'", raw))?;
        }

        Ok(config)
    }

    /// The core game settings for this run
    pub fn game_config(&self) -> GameConfig {
        let config = if self.players.is_empty() {
            GameConfig::standard_4player()
        } else {
            GameConfig::new(self.players.clone())
        };
        config.overshoot(self.rule)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
