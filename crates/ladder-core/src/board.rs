//! Board topology: the squares, snakes and ladders.
//!
//! This module contains:
//! - Square and player identifiers
//! - The snake and ladder mappings with construction-time validation
//! - Square classification used by the game state machine
//! - Display-friendly listings of every transport on the board

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A position on the board. `0` is off the board, `1..=BOARD_SIZE` are playable squares.
pub type Square = u8;

/// Player identifier (0-3 for a 4-player game)
pub type PlayerId = u8;

/// Number of squares on the board; reaching it wins the game
pub const BOARD_SIZE: Square = 100;

/// Where every token starts: not yet entered the board
pub const START_SQUARE: Square = 0;

/// Snakes on the standard board, mouth -> tail
const STANDARD_SNAKES: [(Square, Square); 10] = [
    (16, 6),
    (47, 26),
    (49, 11),
    (56, 53),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (99, 40),
];

/// Ladders on the standard board, bottom -> top
const STANDARD_LADDERS: [(Square, Square); 8] = [
    (7, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

/// What happens to a token that lands on a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareKind {
    /// Nothing happens
    Plain,
    /// The token slides down to `tail`
    SnakeMouth { tail: Square },
    /// The token climbs up to `top`
    LadderBottom { top: Square },
}

/// Invalid board configuration, reported when the topology is built
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TopologyError {
    #[error("square {square} is off a board of {size} squares")]
    OutOfRange { square: Square, size: Square },

    #[error("snake at {mouth} must lead down, but its tail is {tail}")]
    SnakeNotDownward { mouth: Square, tail: Square },

    #[error("ladder at {bottom} must lead up, but its top is {top}")]
    LadderNotUpward { bottom: Square, top: Square },

    #[error("square {0} starts more than one snake or ladder")]
    DuplicateEntry(Square),

    #[error("square {0} is both a snake mouth and a ladder bottom")]
    Overlap(Square),
}

/// Every snake and ladder as `(from, to)` pairs, sorted by starting square
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyEntries {
    pub snakes: Vec<(Square, Square)>,
    pub ladders: Vec<(Square, Square)>,
}

/// The static layout of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTopology {
    size: Square,
    snakes: BTreeMap<Square, Square>,
    ladders: BTreeMap<Square, Square>,
}

impl BoardTopology {
    /// Build a board from snake (mouth, tail) and ladder (bottom, top) pairs.
    ///
    /// Starting squares must lie in `1..BOARD_SIZE`, destinations in
    /// `0..=BOARD_SIZE`. Snakes must lead down, ladders up, and no square
    /// may start both a snake and a ladder.
    pub fn new(
        snakes: &[(Square, Square)],
        ladders: &[(Square, Square)],
    ) -> Result<Self, TopologyError> {
        let size = BOARD_SIZE;
        let check_range = |square: Square, is_start: bool| {
            let in_range = if is_start {
                (1..size).contains(&square)
            } else {
                square <= size
            };
            if in_range {
                Ok(())
            } else {
                Err(TopologyError::OutOfRange { square, size })
            }
        };

        let mut snake_map = BTreeMap::new();
        for &(mouth, tail) in snakes {
            check_range(mouth, true)?;
            check_range(tail, false)?;
            if mouth <= tail {
                return Err(TopologyError::SnakeNotDownward { mouth, tail });
            }
            if snake_map.insert(mouth, tail).is_some() {
                return Err(TopologyError::DuplicateEntry(mouth));
            }
        }

        let mut ladder_map = BTreeMap::new();
        for &(bottom, top) in ladders {
            check_range(bottom, true)?;
            check_range(top, false)?;
            if bottom >= top {
                return Err(TopologyError::LadderNotUpward { bottom, top });
            }
            if snake_map.contains_key(&bottom) {
                return Err(TopologyError::Overlap(bottom));
            }
            if ladder_map.insert(bottom, top).is_some() {
                return Err(TopologyError::DuplicateEntry(bottom));
            }
        }

        Ok(Self {
            size,
            snakes: snake_map,
            ladders: ladder_map,
        })
    }

    /// The standard 100-square board
    pub fn standard() -> Self {
        Self {
            size: BOARD_SIZE,
            snakes: STANDARD_SNAKES.into_iter().collect(),
            ladders: STANDARD_LADDERS.into_iter().collect(),
        }
    }

    /// Number of squares on the board
    pub fn size(&self) -> Square {
        self.size
    }

    /// Look up what a token landing on `square` does next
    pub fn classify(&self, square: Square) -> SquareKind {
        if let Some(&tail) = self.snakes.get(&square) {
            SquareKind::SnakeMouth { tail }
        } else if let Some(&top) = self.ladders.get(&square) {
            SquareKind::LadderBottom { top }
        } else {
            SquareKind::Plain
        }
    }

    /// All snakes and ladders, for display panels
    pub fn entries(&self) -> TopologyEntries {
        TopologyEntries {
            snakes: self.snakes.iter().map(|(&from, &to)| (from, to)).collect(),
            ladders: self.ladders.iter().map(|(&from, &to)| (from, to)).collect(),
        }
    }
}

impl Default for BoardTopology {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_passes_validation() {
        let validated = BoardTopology::new(&STANDARD_SNAKES, &STANDARD_LADDERS).unwrap();
        assert_eq!(validated, BoardTopology::standard());
        assert_eq!(validated.size(), BOARD_SIZE);
    }

    #[test]
    fn test_classify_standard_squares() {
        let board = BoardTopology::standard();

        assert_eq!(board.classify(16), SquareKind::SnakeMouth { tail: 6 });
        assert_eq!(board.classify(99), SquareKind::SnakeMouth { tail: 40 });
        assert_eq!(board.classify(7), SquareKind::LadderBottom { top: 14 });
        assert_eq!(board.classify(80), SquareKind::LadderBottom { top: 100 });
        assert_eq!(board.classify(50), SquareKind::Plain);
        assert_eq!(board.classify(BOARD_SIZE), SquareKind::Plain);
        assert_eq!(board.classify(START_SQUARE), SquareKind::Plain);
    }

    #[test]
    fn test_entries_are_sorted_by_start() {
        let entries = BoardTopology::standard().entries();

        assert_eq!(entries.snakes.len(), 10);
        assert_eq!(entries.ladders.len(), 8);
        assert_eq!(entries.snakes.first(), Some(&(16, 6)));
        assert_eq!(entries.ladders.last(), Some(&(80, 100)));
        assert!(entries.snakes.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(entries.ladders.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_snake_must_lead_down() {
        assert_eq!(
            BoardTopology::new(&[(10, 20)], &[]),
            Err(TopologyError::SnakeNotDownward { mouth: 10, tail: 20 })
        );
        assert_eq!(
            BoardTopology::new(&[(10, 10)], &[]),
            Err(TopologyError::SnakeNotDownward { mouth: 10, tail: 10 })
        );
    }

    #[test]
    fn test_ladder_must_lead_up() {
        assert_eq!(
            BoardTopology::new(&[], &[(30, 5)]),
            Err(TopologyError::LadderNotUpward { bottom: 30, top: 5 })
        );
    }

    #[test]
    fn test_squares_must_be_on_board() {
        assert_eq!(
            BoardTopology::new(&[], &[(90, 101)]),
            Err(TopologyError::OutOfRange {
                square: 101,
                size: BOARD_SIZE
            })
        );
        // Nothing can start off the board or on the finishing square
        assert!(matches!(
            BoardTopology::new(&[], &[(0, 5)]),
            Err(TopologyError::OutOfRange { square: 0, .. })
        ));
        assert!(matches!(
            BoardTopology::new(&[(BOARD_SIZE, 1)], &[]),
            Err(TopologyError::OutOfRange { square: 100, .. })
        ));
        // A snake back to the start is allowed
        assert!(BoardTopology::new(&[(12, START_SQUARE)], &[]).is_ok());
    }

    #[test]
    fn test_overlap_is_rejected() {
        assert_eq!(
            BoardTopology::new(&[(40, 3)], &[(40, 60)]),
            Err(TopologyError::Overlap(40))
        );

        // A ladder top sitting on a snake mouth is fine
        assert!(BoardTopology::new(&[(40, 3)], &[(20, 40)]).is_ok());
    }

    #[test]
    fn test_duplicate_start_is_rejected() {
        assert_eq!(
            BoardTopology::new(&[(40, 3), (40, 5)], &[]),
            Err(TopologyError::DuplicateEntry(40))
        );
        assert_eq!(
            BoardTopology::new(&[], &[(4, 30), (4, 50)]),
            Err(TopologyError::DuplicateEntry(4))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TopologyError::Overlap(40).to_string(),
            "square 40 is both a snake mouth and a ladder bottom"
        );
    }
}
