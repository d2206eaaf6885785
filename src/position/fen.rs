use std::str::FromStr;

use super::error::FenError;
use super::{CastlingRights, Color, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The board, side, castling and en-passant fields are required. A
    /// missing halfmove clock defaults to 0 and a missing fullmove number
    /// to 1. Exactly one king per side is required.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewFields { found: parts.len() });
        }

        let mut position = Position::empty();
        position.parse_board(parts[0])?;

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling_rights = CastlingRights::from_fen_field(parts[2])
            .map_err(|char| FenError::InvalidCastling { char })?;

        position.en_passant_target =
            Square::parse_optional(parts[3]).map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;

        position.halfmove_clock = parse_clock(parts.get(4), "halfmove clock", 0)?;
        position.fullmove_number = parse_clock(parts.get(5), "fullmove number", 1)?;

        position.finish_setup()?;
        log::trace!("loaded FEN '{fen}'");
        position.report_game_end();
        Ok(position)
    }

    /// Replace this position with one parsed from `fen`, dropping the undo history.
    ///
    /// On error the current position is left untouched.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Position::from_fen(fen)?;
        Ok(())
    }

    /// Serialize the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::at(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights,
            Square::format_optional(self.en_passant_target),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    fn parse_board(&mut self, field: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::InvalidRankLength {
                        rank: rank + 1,
                        files: file + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                self.set_piece(Square::at(rank, file), color, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::InvalidRankLength {
                    rank: rank + 1,
                    files: file,
                });
            }
        }
        Ok(())
    }
}

fn parse_clock(field: Option<&&str>, name: &'static str, default: u32) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| FenError::InvalidClock {
            field: name,
            found: (*text).to_string(),
        }),
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::START_FEN;

    #[test]
    fn test_start_fen_round_trip() {
        let position = Position::from_fen(START_FEN).unwrap();
        assert_eq!(position.to_fen(), START_FEN);
        assert_eq!(position.legal_moves().len(), 20);
        assert_eq!(position.king_square(Color::White), "e1".parse().unwrap());
        assert_eq!(position.king_square(Color::Black), "e8".parse().unwrap());
        assert_eq!(position.piece_squares(Color::White).len(), 16);
    }

    #[test]
    fn test_missing_clocks_default() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - -").unwrap();
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.fullmove_number(), 1);
        assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 0 1");
    }

    #[test]
    fn test_unparsable_clock_is_error() {
        let err = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1").unwrap_err();
        assert_eq!(
            err,
            FenError::InvalidClock {
                field: "halfmove clock",
                found: "x".to_string()
            }
        );
    }

    #[test]
    fn test_board_shape_errors() {
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8 w - - 0 1").unwrap_err(),
            FenError::InvalidRankCount { found: 7 }
        );
        assert_eq!(
            Position::from_fen("4k3/8/8/8/8/8/8/4K4 w - - 0 1").unwrap_err(),
            FenError::InvalidRankLength { rank: 1, files: 9 }
        );
        assert_eq!(
            Position::from_fen("4k3/8/8/8/8/8/8/4K2 w - - 0 1").unwrap_err(),
            FenError::InvalidRankLength { rank: 1, files: 7 }
        );
        assert_eq!(
            Position::from_fen("4k3/8/8/8/8/8/8/4X3 w - - 0 1").unwrap_err(),
            FenError::InvalidPiece { char: 'X' }
        );
    }

    #[test]
    fn test_field_errors() {
        assert_eq!(
            Position::from_fen("4k3/8/8/8/8/8/8/4K3 w -").unwrap_err(),
            FenError::TooFewFields { found: 3 }
        );
        assert_eq!(
            Position::from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").unwrap_err(),
            FenError::InvalidSideToMove {
                found: "x".to_string()
            }
        );
        assert_eq!(
            Position::from_fen("4k3/8/8/8/8/8/8/4K3 w KX - 0 1").unwrap_err(),
            FenError::InvalidCastling { char: 'X' }
        );
        assert_eq!(
            Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - e9 0 1").unwrap_err(),
            FenError::InvalidEnPassant {
                found: "e9".to_string()
            }
        );
    }

    #[test]
    fn test_en_passant_target_must_follow_a_double_push() {
        // Nothing behind e6 to capture.
        assert_eq!(
            Position::from_fen("4k3/8/8/3P4/8/8/8/4K3 w - e6 0 1").unwrap_err(),
            FenError::InvalidEnPassant {
                found: "e6".to_string()
            }
        );
        // A white knight behind e6 is not a capturable pawn.
        assert_eq!(
            Position::from_fen("4k3/8/8/3PN3/8/8/8/4K3 w - e6 0 1").unwrap_err(),
            FenError::InvalidEnPassant {
                found: "e6".to_string()
            }
        );
        // Wrong rank for the side to move.
        assert!(Position::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 b - e6 0 1").is_err());
        // Target square occupied.
        assert!(Position::from_fen("4k3/8/4n3/3Pp3/8/8/8/4K3 w - e6 0 1").is_err());

        let position = Position::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1").unwrap();
        assert_eq!(position.en_passant_target(), Some("e6".parse().unwrap()));
        assert_eq!(position.legal_moves().len(), 7);
    }

    #[test]
    fn test_king_count_is_validated() {
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap_err(),
            FenError::MissingKing {
                color: Color::Black
            }
        );
        assert_eq!(
            Position::from_fen("4k3/8/8/8/8/8/8/K3K3 w - - 0 1").unwrap_err(),
            FenError::TooManyKings {
                color: Color::White
            }
        );
    }

    #[test]
    fn test_set_fen_keeps_position_on_error() {
        let mut position = Position::new();
        position
            .apply_move(crate::position::Move::new(
                "e2".parse().unwrap(),
                "e4".parse().unwrap(),
            ))
            .unwrap();
        let before = position.to_fen();
        assert!(position.set_fen("not a fen").is_err());
        assert_eq!(position.to_fen(), before);
        assert_eq!(position.history_len(), 1);

        position.set_fen(START_FEN).unwrap();
        assert_eq!(position.history_len(), 0);
        assert_eq!(position.to_fen(), START_FEN);
    }

    #[test]
    fn test_from_str() {
        let position: Position = "4k3/8/8/8/8/8/8/4K3 w - - 5 40".parse().unwrap();
        assert_eq!(position.halfmove_clock(), 5);
        assert_eq!(position.fullmove_number(), 40);
    }
}
