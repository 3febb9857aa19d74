//! Player tokens.

use crate::board::{PlayerId, Square, START_SQUARE};
use serde::{Deserialize, Serialize};

/// Token color for UI rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl PlayerColor {
    /// Get color for a player index
    pub fn for_player(id: PlayerId) -> Self {
        match id % 4 {
            0 => PlayerColor::Red,
            1 => PlayerColor::Green,
            2 => PlayerColor::Blue,
            _ => PlayerColor::Yellow,
        }
    }

    /// Get hex color code for rendering
    pub fn hex_code(&self) -> u32 {
        match self {
            PlayerColor::Red => 0xFF0000,
            PlayerColor::Green => 0x00FF00,
            PlayerColor::Blue => 0x0000FF,
            PlayerColor::Yellow => 0xFFFF00,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlayerColor::Red => "red",
            PlayerColor::Green => "green",
            PlayerColor::Blue => "blue",
            PlayerColor::Yellow => "yellow",
        }
    }
}

/// A player and their token's position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// `START_SQUARE` until the first roll
    pub position: Square,
}

impl Player {
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            position: START_SQUARE,
        }
    }

    /// "Player 1" for id 0, and so on
    pub fn default_name(id: PlayerId) -> String {
        format!("Player {}", id + 1)
    }

    pub fn color(&self) -> PlayerColor {
        PlayerColor::for_player(self.id)
    }

    /// Whether the token has entered the board yet
    pub fn is_on_board(&self) -> bool {
        self.position != START_SQUARE
    }

    /// Send the token back off the board
    pub fn reset(&mut self) {
        self.position = START_SQUARE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_off_board() {
        let mut player = Player::new(2, "Siti".to_string());
        assert_eq!(player.position, START_SQUARE);
        assert!(!player.is_on_board());

        player.position = 31;
        assert!(player.is_on_board());

        player.reset();
        assert!(!player.is_on_board());
    }

    #[test]
    fn test_colors_follow_turn_order() {
        assert_eq!(PlayerColor::for_player(0), PlayerColor::Red);
        assert_eq!(PlayerColor::for_player(3), PlayerColor::Yellow);
        assert_eq!(Player::new(1, Player::default_name(1)).color().name(), "green");
        assert_eq!(PlayerColor::Blue.hex_code(), 0x0000FF);
    }

    #[test]
    fn test_default_name_is_one_based() {
        assert_eq!(Player::default_name(0), "Player 1");
        assert_eq!(Player::default_name(3), "Player 4");
    }
}
