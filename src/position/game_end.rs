//! Terminal-state classification from the cached legal-move set.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Position};

/// Whether the game can continue from the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    /// The side to move is mated.
    Checkmate { winner: Color },
    /// The side to move has no legal move and is not in check.
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl Position {
    /// Classify the position. Advisory only; `unmake_move` still works from
    /// a terminal position.
    #[must_use]
    pub fn game_status(&self) -> GameStatus {
        if !self.legal_moves.is_empty() {
            GameStatus::Ongoing
        } else if self.in_check(self.side_to_move) {
            GameStatus::Checkmate {
                winner: self.side_to_move.opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        matches!(self.game_status(), GameStatus::Checkmate { .. })
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.game_status() == GameStatus::Stalemate
    }

    pub(crate) fn report_game_end(&self) {
        match self.game_status() {
            GameStatus::Ongoing => {}
            GameStatus::Checkmate { winner } => log::info!("Checkmate. {winner} wins"),
            GameStatus::Stalemate => log::info!("Stalemate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Move;

    #[test]
    fn test_start_position_is_ongoing() {
        let position = Position::new();
        assert_eq!(position.game_status(), GameStatus::Ongoing);
        assert!(!position.game_status().is_terminal());
    }

    #[test]
    fn test_fools_mate() {
        let mut position = Position::new();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            position
                .apply_move(Move::new(from.parse().unwrap(), to.parse().unwrap()))
                .unwrap();
        }
        assert_eq!(
            position.game_status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
        assert!(position.is_checkmate());
        assert!(!position.is_stalemate());

        position.unmake_move().unwrap();
        assert_eq!(position.game_status(), GameStatus::Ongoing);
    }

    #[test]
    fn test_stalemate_is_not_checkmate() {
        let position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!position.in_check(Color::Black));
        assert_eq!(position.game_status(), GameStatus::Stalemate);
        assert!(position.is_stalemate());
        assert!(!position.is_checkmate());
    }
}
