//! Text rendering of display messages.

use crate::protocol::DisplayMessage;
use ladder_core::{GameEvent, OvershootRule, Player, PlayerColor, PlayerId, START_SQUARE};

const HELP: [&str; 7] = [
    "Commands:",
    "  <Enter> | roll   roll the die for the current player",
    "  reset            start the game over",
    "  status           show every player's square",
    "  board            list snakes and ladders",
    "  json             print the game snapshot as JSON",
    "  quit             leave the game",
];

/// Turns display messages into lines of terminal text.
pub struct View {
    names: Vec<String>,
}

impl View {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    fn name(&self, player: PlayerId) -> String {
        self.names
            .get(player as usize)
            .cloned()
            .unwrap_or_else(|| Player::default_name(player))
    }

    pub fn render(&self, message: &DisplayMessage) -> Vec<String> {
        match message {
            DisplayMessage::Welcome { players, rule } => vec![
                format!("Ular Tangga: {} players ({})", players.len(), players.join(", ")),
                match rule {
                    OvershootRule::Clamp => "Rolling past 100 stops on 100.".to_string(),
                    OvershootRule::ExactLanding => "An exact roll is needed to reach 100.".to_string(),
                },
                "Press Enter to roll, or type 'help'.".to_string(),
            ],

            DisplayMessage::Event(event) => self.render_event(event).into_iter().collect(),

            DisplayMessage::Rejected { reason } => vec![format!("Not allowed: {}", reason)],

            DisplayMessage::Status { snapshot } => {
                let mut lines: Vec<String> = snapshot
                    .players
                    .iter()
                    .enumerate()
                    .map(|(i, &position)| {
                        let id = i as PlayerId;
                        let square = if position == START_SQUARE {
                            "off the board".to_string()
                        } else {
                            format!("square {}", position)
                        };
                        format!(
                            "  {} ({}): {}",
                            self.name(id),
                            PlayerColor::for_player(id).name(),
                            square
                        )
                    })
                    .collect();
                lines.push(match snapshot.winner {
                    Some(winner) => format!("Winner: {}", self.name(winner)),
                    None => format!(
                        "Rolls so far: {}, next up: {}",
                        snapshot.turn_number,
                        self.name(snapshot.current_player)
                    ),
                });
                lines
            }

            DisplayMessage::Board { entries } => {
                let mut lines = vec!["Snakes:".to_string()];
                lines.extend(
                    entries
                        .snakes
                        .iter()
                        .map(|(from, to)| format!("  {} -> {}", from, to)),
                );
                lines.push("Ladders:".to_string());
                lines.extend(
                    entries
                        .ladders
                        .iter()
                        .map(|(from, to)| format!("  {} -> {}", from, to)),
                );
                lines
            }

            DisplayMessage::Json { json } => vec![json.clone()],

            DisplayMessage::Help => HELP.iter().map(|line| line.to_string()).collect(),

            DisplayMessage::Prompt { player, finished } => {
                if *finished {
                    vec!["Game over. Type 'reset' to play again or 'quit' to leave.".to_string()]
                } else {
                    vec![format!("{}, your roll.", self.name(*player))]
                }
            }

            DisplayMessage::Error { message } => vec![format!("Error: {}", message)],
        }
    }

    fn render_event(&self, event: &GameEvent) -> Option<String> {
        let line = match event {
            GameEvent::DiceRolled { player, value } => {
                format!("{} rolled a {}", self.name(*player), value)
            }
            GameEvent::PlayerMoved { player, from, to } if *from == START_SQUARE => {
                format!("{} enters the board on {}", self.name(*player), to)
            }
            GameEvent::PlayerMoved { player, from, to } => {
                format!("{} moves from {} to {}", self.name(*player), from, to)
            }
            GameEvent::OvershootBlocked { player, position, .. } => format!(
                "{} needs an exact roll from {} and stays put",
                self.name(*player),
                position
            ),
            GameEvent::SnakeBitten { player, from, to } => {
                format!("Snake! {} slides from {} down to {}", self.name(*player), from, to)
            }
            GameEvent::LadderClimbed { player, from, to } => {
                format!("Ladder! {} climbs from {} up to {}", self.name(*player), from, to)
            }
            GameEvent::TurnEnded { .. } => return None,
            GameEvent::GameWon { player } => format!("{} wins!", self.name(*player)),
            GameEvent::GameReset => "Game reset. Everyone is back at the start.".to_string(),
        };
        Some(line)
    }
}
