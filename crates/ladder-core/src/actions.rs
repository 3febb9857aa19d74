//! Game actions, roll outcomes and the events they produce.
//!
//! A presentation layer submits [`GameAction`]s and renders the
//! [`GameEvent`]s that come back, without re-deriving any rules.

use crate::board::{PlayerId, Square};
use crate::dice::DieValue;
use serde::{Deserialize, Serialize};

/// Everything a player (or the host) can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Roll the die and move the current player's token
    Roll,
    /// Put every token back off the board and start over
    Reset,
}

/// Which way a transport moved the token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportKind {
    Snake,
    Ladder,
}

/// A snake slide or ladder climb taken during a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transport {
    pub kind: TransportKind,
    pub from: Square,
    pub to: Square,
}

/// Result of one accepted roll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Who rolled
    pub player: PlayerId,
    /// What they rolled
    pub die: DieValue,
    /// Where the token started
    pub from: Square,
    /// Where the die put the token, before any snake or ladder
    pub landed: Square,
    /// Snake or ladder taken from `landed`, if any
    pub transport: Option<Transport>,
    /// Where the token ended up
    pub position: Square,
    /// The roll would have carried the token past the last square
    pub overshot: bool,
    /// The token stayed put because the roll overshot (exact-landing rule)
    pub forfeited: bool,
    /// This roll ended the game
    pub game_over: bool,
    pub winner: Option<PlayerId>,
    /// Whose turn it is now; the roller again once the game is over
    pub next_player: PlayerId,
}

impl RollOutcome {
    /// Break the outcome into the events a UI or log shows, in order
    pub fn events(&self) -> Vec<GameEvent> {
        let player = self.player;
        let mut events = vec![GameEvent::DiceRolled {
            player,
            value: self.die,
        }];

        if self.forfeited {
            events.push(GameEvent::OvershootBlocked {
                player,
                position: self.from,
                roll: self.die,
            });
        } else {
            events.push(GameEvent::PlayerMoved {
                player,
                from: self.from,
                to: self.landed,
            });
        }

        if let Some(transport) = self.transport {
            events.push(match transport.kind {
                TransportKind::Snake => GameEvent::SnakeBitten {
                    player,
                    from: transport.from,
                    to: transport.to,
                },
                TransportKind::Ladder => GameEvent::LadderClimbed {
                    player,
                    from: transport.from,
                    to: transport.to,
                },
            });
        }

        match self.winner {
            Some(winner) if self.game_over => events.push(GameEvent::GameWon { player: winner }),
            _ => events.push(GameEvent::TurnEnded {
                player,
                next_player: self.next_player,
            }),
        }

        events
    }
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The die was rolled
    DiceRolled { player: PlayerId, value: DieValue },

    /// A token moved by the die roll
    PlayerMoved {
        player: PlayerId,
        from: Square,
        to: Square,
    },

    /// The roll overshot the last square and the token stayed put
    OvershootBlocked {
        player: PlayerId,
        position: Square,
        roll: DieValue,
    },

    /// A token slid down a snake
    SnakeBitten {
        player: PlayerId,
        from: Square,
        to: Square,
    },

    /// A token climbed a ladder
    LadderClimbed {
        player: PlayerId,
        from: Square,
        to: Square,
    },

    /// Turn passed to the next player
    TurnEnded {
        player: PlayerId,
        next_player: PlayerId,
    },

    /// A player reached the last square
    GameWon { player: PlayerId },

    /// The game was reset to its starting state
    GameReset,
}
