//! Core game state machine.
//!
//! This module contains the main `GameState` struct and all game logic:
//! dice-driven movement, snake and ladder resolution, turn rotation,
//! win detection and reset.

use crate::actions::{GameAction, GameEvent, RollOutcome, Transport, TransportKind};
use crate::board::{BoardTopology, PlayerId, Square, SquareKind, TopologyEntries};
use crate::config::{ConfigError, GameConfig, OvershootRule};
use crate::dice::{DiceSource, DieValue, RandomDice};
use crate::player::Player;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a roll was refused. The game state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Already rolled this turn")]
    AlreadyRolled,

    #[error("Game is over")]
    GameOver,
}

/// Read-only view of the game for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Token positions in turn order
    pub players: Vec<Square>,
    pub current_player: PlayerId,
    pub last_roll: Option<DieValue>,
    pub winner: Option<PlayerId>,
    pub turn_number: u32,
}

impl GameSnapshot {
    /// What a freshly created (or reset) game looks like
    pub fn initial(player_count: usize) -> Self {
        Self {
            players: vec![0; player_count],
            current_player: 0,
            last_roll: None,
            winner: None,
            turn_number: 0,
        }
    }
}

/// The complete game state
#[derive(Debug)]
pub struct GameState {
    board: BoardTopology,
    players: Vec<Player>,
    current_player: PlayerId,
    /// Set while a roll resolves; kept on the winning roll
    last_roll: Option<DieValue>,
    winner: Option<PlayerId>,
    /// Accepted rolls since the game started or was reset
    turn_number: u32,
    overshoot: OvershootRule,
    dice: Box<dyn DiceSource>,
}

impl GameState {
    /// Create a game on the standard board with a fair die
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_dice(config, RandomDice::new())
    }

    /// Create a game on the standard board with the given die
    pub fn with_dice(
        config: GameConfig,
        dice: impl DiceSource + 'static,
    ) -> Result<Self, ConfigError> {
        Self::with_board_and_dice(config, BoardTopology::standard(), dice)
    }

    /// Create a game on a custom board with the given die
    pub fn with_board_and_dice(
        config: GameConfig,
        board: BoardTopology,
        dice: impl DiceSource + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, board, Box::new(dice)))
    }

    /// Create a standard 4-player game
    pub fn new_standard_4player() -> Self {
        Self::from_parts(
            GameConfig::standard_4player(),
            BoardTopology::standard(),
            Box::new(RandomDice::new()),
        )
    }

    fn from_parts(config: GameConfig, board: BoardTopology, dice: Box<dyn DiceSource>) -> Self {
        let players = config
            .player_names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Player::new(i as PlayerId, name))
            .collect();

        Self {
            board,
            players,
            current_player: 0,
            last_roll: None,
            winner: None,
            turn_number: 0,
            overshoot: config.overshoot,
            dice,
        }
    }

    /// Get the number of players
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a player by ID
    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id as usize)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn board(&self) -> &BoardTopology {
        &self.board
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn last_roll(&self) -> Option<DieValue> {
        self.last_roll
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn overshoot_rule(&self) -> OvershootRule {
        self.overshoot
    }

    /// Check if the game is finished
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Get the winner if the game is finished
    pub fn get_winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Whether the current player may roll right now
    pub fn can_roll(&self) -> bool {
        self.check_can_roll().is_ok()
    }

    fn check_can_roll(&self) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        if self.last_roll.is_some() {
            return Err(GameError::AlreadyRolled);
        }
        Ok(())
    }

    /// Get all currently valid actions
    pub fn valid_actions(&self) -> Vec<GameAction> {
        let mut actions = Vec::new();
        if self.can_roll() {
            actions.push(GameAction::Roll);
        }
        actions.push(GameAction::Reset);
        actions
    }

    /// Apply an action to the game state
    pub fn apply_action(&mut self, action: GameAction) -> Result<Vec<GameEvent>, GameError> {
        match action {
            GameAction::Roll => self.roll_and_advance().map(|outcome| outcome.events()),
            GameAction::Reset => {
                self.reset();
                Ok(vec![GameEvent::GameReset])
            }
        }
    }

    /// Roll the die for the current player, move their token, and pass the turn.
    ///
    /// Refused without touching the state once the game is over or if the
    /// current player has already rolled.
    pub fn roll_and_advance(&mut self) -> Result<RollOutcome, GameError> {
        self.check_can_roll()?;

        let player = self.current_player;
        let die = self.dice.roll();
        self.last_roll = Some(die);

        let size = self.board.size();
        let from = self.players[player as usize].position;
        let raw = from + die.get();
        let overshot = raw > size;
        let forfeited = overshot && self.overshoot == OvershootRule::ExactLanding;

        let (landed, transport) = if forfeited {
            (from, None)
        } else {
            let landed = raw.min(size);
            (landed, self.transport_from(landed))
        };
        let position = transport.map_or(landed, |t| t.to);

        self.players[player as usize].position = position;
        self.turn_number += 1;

        if position == size {
            self.winner = Some(player);
        } else {
            self.current_player = ((player as usize + 1) % self.players.len()) as PlayerId;
            self.last_roll = None;
        }

        Ok(RollOutcome {
            player,
            die,
            from,
            landed,
            transport,
            position,
            overshot,
            forfeited,
            game_over: self.winner.is_some(),
            winner: self.winner,
            next_player: self.current_player,
        })
    }

    fn transport_from(&self, square: Square) -> Option<Transport> {
        match self.board.classify(square) {
            SquareKind::Plain => None,
            SquareKind::SnakeMouth { tail } => Some(Transport {
                kind: TransportKind::Snake,
                from: square,
                to: tail,
            }),
            SquareKind::LadderBottom { top } => Some(Transport {
                kind: TransportKind::Ladder,
                from: square,
                to: top,
            }),
        }
    }

    /// Put every token back off the board and give the first player the turn
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.current_player = 0;
        self.last_roll = None;
        self.winner = None;
        self.turn_number = 0;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.iter().map(|p| p.position).collect(),
            current_player: self.current_player,
            last_roll: self.last_roll,
            winner: self.winner,
            turn_number: self.turn_number,
        }
    }

    /// Every snake and ladder on the board, for display panels
    pub fn topology_entries(&self) -> TopologyEntries {
        self.board.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;
    use crate::dice::ScriptedDice;
    use pretty_assertions::assert_eq;

    fn game_with_rolls(players: usize, rolls: &[u8]) -> GameState {
        GameState::with_dice(
            GameConfig::with_player_count(players),
            ScriptedDice::new(rolls.iter().copied()).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_game_matches_initial_snapshot() {
        let game = GameState::new_standard_4player();
        assert_eq!(game.snapshot(), GameSnapshot::initial(4));
        assert_eq!(game.valid_actions(), vec![GameAction::Roll, GameAction::Reset]);
    }

    #[test]
    fn test_bad_player_count_is_a_config_error() {
        let result = GameState::new(GameConfig::with_player_count(6));
        assert!(matches!(result, Err(ConfigError::PlayerCount { count: 6 })));
    }

    #[test]
    fn test_plain_move() {
        let mut game = game_with_rolls(2, &[4]);
        let outcome = game.roll_and_advance().unwrap();

        assert_eq!(outcome.from, 0);
        assert_eq!(outcome.landed, 4);
        assert_eq!(outcome.position, 4);
        assert_eq!(outcome.transport, None);
        assert_eq!(outcome.next_player, 1);
        assert_eq!(game.snapshot().players, vec![4, 0]);
        assert_eq!(game.last_roll(), None);
        assert_eq!(game.turn_number(), 1);
    }

    #[test]
    fn test_ladder_bottom_climbs() {
        // 0 + 6 = 6, then 6 + 1 = 7 -> ladder to 14
        let mut game = game_with_rolls(2, &[6, 2, 1]);
        game.roll_and_advance().unwrap();
        game.roll_and_advance().unwrap();
        let outcome = game.roll_and_advance().unwrap();

        assert_eq!(outcome.landed, 7);
        assert_eq!(
            outcome.transport,
            Some(Transport {
                kind: TransportKind::Ladder,
                from: 7,
                to: 14
            })
        );
        assert_eq!(game.get_player(0).unwrap().position, 14);
    }

    #[test]
    fn test_snake_mouth_slides() {
        let mut game = game_with_rolls(2, &[4]);
        game.players[0].position = 12;

        let outcome = game.roll_and_advance().unwrap();
        assert_eq!(outcome.landed, 16);
        assert_eq!(outcome.position, 6);
        assert_eq!(outcome.transport.map(|t| t.kind), Some(TransportKind::Snake));
    }

    #[test]
    fn test_overshoot_clamps_and_wins() {
        let mut game = game_with_rolls(4, &[5]);
        game.players[0].position = 96;

        let outcome = game.roll_and_advance().unwrap();
        assert!(outcome.overshot);
        assert!(!outcome.forfeited);
        assert_eq!(outcome.position, BOARD_SIZE);
        assert!(outcome.game_over);
        assert_eq!(outcome.winner, Some(0));
        assert_eq!(outcome.next_player, 0);
        assert_eq!(game.get_winner(), Some(0));
        assert_eq!(game.last_roll(), DieValue::new(5));
    }

    #[test]
    fn test_overshoot_forfeits_with_exact_landing() {
        let config = GameConfig::with_player_count(2).overshoot(OvershootRule::ExactLanding);
        let mut game = GameState::with_dice(config, ScriptedDice::new([5, 1, 4]).unwrap()).unwrap();
        game.players[0].position = 96;

        let outcome = game.roll_and_advance().unwrap();
        assert!(outcome.overshot);
        assert!(outcome.forfeited);
        assert_eq!(outcome.position, 96);
        assert_eq!(game.current_player(), 1);
        assert!(!game.is_finished());

        game.roll_and_advance().unwrap();
        let outcome = game.roll_and_advance().unwrap();
        assert_eq!(outcome.position, BOARD_SIZE);
        assert_eq!(game.get_winner(), Some(0));
    }

    #[test]
    fn test_rolls_after_win_are_rejected() {
        let mut game = game_with_rolls(2, &[4, 3]);
        game.players[0].position = 96;
        game.roll_and_advance().unwrap();

        let before = game.snapshot();
        assert_eq!(game.roll_and_advance(), Err(GameError::GameOver));
        assert_eq!(game.apply_action(GameAction::Roll), Err(GameError::GameOver));
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.valid_actions(), vec![GameAction::Reset]);
    }

    #[test]
    fn test_second_roll_in_same_turn_is_rejected() {
        let mut game = game_with_rolls(2, &[3]);
        game.last_roll = DieValue::new(3);

        let before = game.snapshot();
        assert_eq!(game.roll_and_advance(), Err(GameError::AlreadyRolled));
        assert_eq!(game.snapshot(), before);
        assert!(!game.can_roll());
    }

    #[test]
    fn test_game_over_is_reported_before_already_rolled() {
        let mut game = game_with_rolls(2, &[3]);
        game.last_roll = DieValue::new(3);
        game.winner = Some(1);
        assert_eq!(game.roll_and_advance(), Err(GameError::GameOver));
    }

    #[test]
    fn test_turns_rotate_round_robin() {
        let mut game = game_with_rolls(3, &[1, 2, 3]);
        let order: Vec<PlayerId> = (0..7)
            .map(|_| game.roll_and_advance().unwrap().player)
            .collect();
        assert_eq!(order, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = game_with_rolls(4, &[6, 5, 4, 3]);
        for _ in 0..6 {
            game.roll_and_advance().unwrap();
        }
        assert_ne!(game.snapshot(), GameSnapshot::initial(4));

        let events = game.apply_action(GameAction::Reset).unwrap();
        assert_eq!(events, vec![GameEvent::GameReset]);
        assert_eq!(game.snapshot(), GameSnapshot::initial(4));
        assert_eq!(game.get_player(2).unwrap().name, "Player 3");
    }

    #[test]
    fn test_reset_after_win_allows_play() {
        let mut game = game_with_rolls(2, &[4]);
        game.players[1].position = 96;
        game.current_player = 1;
        game.roll_and_advance().unwrap();
        assert!(game.is_finished());

        game.reset();
        assert!(game.can_roll());
        assert_eq!(game.roll_and_advance().unwrap().player, 0);
    }

    #[test]
    fn test_ladder_to_last_square_wins() {
        // 77 + 3 = 80 -> ladder to 100
        let mut game = game_with_rolls(2, &[3]);
        game.players[0].position = 77;

        let outcome = game.roll_and_advance().unwrap();
        assert_eq!(outcome.position, BOARD_SIZE);
        assert!(outcome.game_over);
        assert_eq!(
            outcome.events().last(),
            Some(&GameEvent::GameWon { player: 0 })
        );
    }

    #[test]
    fn test_custom_board() {
        let board = BoardTopology::new(&[(5, 1)], &[(3, 98)]).unwrap();
        let mut game = GameState::with_board_and_dice(
            GameConfig::with_player_count(2),
            board,
            ScriptedDice::new([3, 5]).unwrap(),
        )
        .unwrap();

        assert_eq!(game.roll_and_advance().unwrap().position, 98);
        assert_eq!(game.roll_and_advance().unwrap().position, 1);
        assert_eq!(game.topology_entries().ladders, vec![(3, 98)]);
    }
}
