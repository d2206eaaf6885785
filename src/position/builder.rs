//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_position::position::{Color, Piece, PositionBuilder, Square};
//!
//! let sq = |s: &str| s.parse::<Square>().unwrap();
//! let position = PositionBuilder::new()
//!     .piece(sq("e1"), Color::White, Piece::King)
//!     .piece(sq("e8"), Color::Black, Piece::King)
//!     .piece(sq("a2"), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
//! ```

use super::error::FenError;
use super::{CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty board, white to move.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Place a piece, replacing whatever was on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, kingside: bool) -> Self {
        self.castling_rights.set(color, kingside);
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position, requiring exactly one king per side.
    pub fn build(self) -> Result<Position, FenError> {
        let mut position = Position::empty();
        for (square, color, piece) in self.pieces {
            position.set_piece(square, color, piece);
        }
        position.side_to_move = self.side_to_move;
        position.castling_rights = self.castling_rights;
        position.en_passant_target = self.en_passant_target;
        position.halfmove_clock = self.halfmove_clock;
        position.fullmove_number = self.fullmove_number;
        position.finish_setup()?;
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_builder_matches_fen() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("h1"), Color::White, Piece::Rook)
            .piece(sq("e8"), Color::Black, Piece::King)
            .castle(Color::White, true)
            .side_to_move(Color::Black)
            .halfmove_clock(3)
            .fullmove_number(12)
            .build()
            .unwrap();
        assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/8/4K2R b K - 3 12");
        let parsed = Position::from_fen(&position.to_fen()).unwrap();
        assert_eq!(parsed.legal_moves(), position.legal_moves());
    }

    #[test]
    fn test_piece_replaces_and_clear_removes() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
            .piece(sq("d4"), Color::White, Piece::Knight)
            .piece(sq("d4"), Color::Black, Piece::Queen)
            .piece(sq("a7"), Color::Black, Piece::Pawn)
            .clear(sq("a7"))
            .build()
            .unwrap();
        assert_eq!(position.piece_at(sq("d4")), Some((Color::Black, Piece::Queen)));
        assert_eq!(position.piece_at(sq("a7")), None);
        assert_eq!(position.piece_squares(Color::Black).len(), 2);
    }

    #[test]
    fn test_build_rejects_en_passant_without_pawn() {
        let err = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
            .piece(sq("d5"), Color::White, Piece::Pawn)
            .en_passant(sq("e6"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FenError::InvalidEnPassant {
                found: "e6".to_string()
            }
        );
    }

    #[test]
    fn test_build_requires_kings() {
        let err = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FenError::MissingKing {
                color: Color::Black
            }
        );
    }
}
