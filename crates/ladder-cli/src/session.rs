//! Local game session management.

use crate::config::CliConfig;
use crate::protocol::{Command, DisplayMessage};
use ladder_core::{ConfigError, GameAction, GameEvent, GameState, RandomDice};
use tracing::{debug, info, warn};

/// One game at one terminal.
pub struct Session {
    game: GameState,
    names: Vec<String>,
}

impl Session {
    pub fn new(config: &CliConfig) -> Result<Self, ConfigError> {
        let dice = match config.seed {
            Some(seed) => RandomDice::with_seed(seed),
            None => RandomDice::new(),
        };
        let game = GameState::with_dice(config.game_config(), dice)?;
        let names = game.players().iter().map(|p| p.name.clone()).collect();

        Ok(Self { game, names })
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn player_names(&self) -> &[String] {
        &self.names
    }

    pub fn welcome(&self) -> DisplayMessage {
        DisplayMessage::Welcome {
            players: self.names.clone(),
            rule: self.game.overshoot_rule(),
        }
    }

    /// Whose turn it is, or that the game is over
    pub fn prompt(&self) -> DisplayMessage {
        DisplayMessage::Prompt {
            player: self.game.current_player(),
            finished: self.game.is_finished(),
        }
    }

    /// Run one command against the game and collect what should be shown
    pub fn handle(&mut self, command: Command) -> Vec<DisplayMessage> {
        match command {
            Command::Roll => self.apply(GameAction::Roll),
            Command::Reset => self.apply(GameAction::Reset),
            Command::Status => vec![DisplayMessage::Status {
                snapshot: self.game.snapshot(),
            }],
            Command::Board => vec![DisplayMessage::Board {
                entries: self.game.topology_entries(),
            }],
            Command::Json => match serde_json::to_string_pretty(&self.game.snapshot()) {
                Ok(json) => vec![DisplayMessage::Json { json }],
                Err(e) => vec![DisplayMessage::Error {
                    message: e.to_string(),
                }],
            },
            Command::Help => vec![DisplayMessage::Help],
            Command::Quit => Vec::new(),
        }
    }

    fn apply(&mut self, action: GameAction) -> Vec<DisplayMessage> {
        let player = self.game.current_player();

        match self.game.apply_action(action) {
            Ok(events) => {
                events.iter().for_each(log_event);
                events.into_iter().map(DisplayMessage::Event).collect()
            }
            Err(e) => {
                warn!(player, ?action, "Action rejected: {}", e);
                vec![DisplayMessage::Rejected {
                    reason: e.to_string(),
                }]
            }
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::GameWon { player } => info!(player = *player, "Game won"),
        GameEvent::GameReset => info!("Game reset"),
        GameEvent::DiceRolled { player, value } => {
            debug!(player = *player, value = value.get(), "Dice rolled")
        }
        other => debug!(event = ?other, "Game event"),
    }
}
