//! Move types and the tagged result of applying a move.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// A move as `(from, to, promotion)`.
///
/// `promotion` only matters when a pawn reaches its last rank; entries of the
/// cached legal-move set carry `None` and promotion is chosen when applying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(self, piece: Piece) -> Self {
        Move {
            from: self.from,
            to: self.to,
            promotion: Some(piece),
        }
    }

    /// Same source and destination, ignoring the promotion choice.
    #[inline]
    #[must_use]
    pub fn same_squares(self, other: Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}

/// Long algebraic notation, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

/// Mutually exclusive kinds of applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveCategory {
    Simple,
    Capture,
    Castle,
    EnPassant,
    Promotion(Piece),
}

/// What applying a move did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    pub resets_halfmove_clock: bool,
    pub category: MoveCategory,
}
