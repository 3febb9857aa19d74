//! Commands typed at the terminal and the messages shown in reply.

use ladder_core::{GameEvent, GameSnapshot, OvershootRule, PlayerId, TopologyEntries};
use std::str::FromStr;
use thiserror::Error;

/// Commands read from the player's terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Roll for the current player (also an empty line)
    Roll,
    /// Start the game over
    Reset,
    /// Show every player's position
    Status,
    /// List snakes and ladders
    Board,
    /// Print the snapshot as JSON
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "roll" | "r" => Ok(Command::Roll),
            "reset" => Ok(Command::Reset),
            "status" | "s" => Ok(Command::Status),
            "board" | "b" => Ok(Command::Board),
            "json" => Ok(Command::Json),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Messages sent to the renderer task.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayMessage {
    /// Shown once at start-up
    Welcome {
        players: Vec<String>,
        rule: OvershootRule,
    },

    /// Something happened in the game
    Event(GameEvent),

    /// A roll was refused
    Rejected { reason: String },

    /// Positions and turn
    Status { snapshot: GameSnapshot },

    /// Snake and ladder listing
    Board { entries: TopologyEntries },

    /// Raw snapshot JSON
    Json { json: String },

    Help,

    /// Ask the next player for input
    Prompt {
        player: PlayerId,
        finished: bool,
    },

    /// Error occurred
    Error { message: String },
}

impl DisplayMessage {
    /// Token movements are held on screen for the animation delay
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            DisplayMessage::Event(
                GameEvent::PlayerMoved { .. }
                    | GameEvent::SnakeBitten { .. }
                    | GameEvent::LadderClimbed { .. }
            )
        )
    }
}
