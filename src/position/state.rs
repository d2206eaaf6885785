use super::error::FenError;
use super::history::UndoRecord;
use super::piece_list::PieceList;
use super::{CastlingRights, Color, Move, Piece, Square};

/// FEN of the standard initial position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// One mutable chess position plus its undo history.
///
/// `king_square` and `piece_lists` mirror `cells` at all times outside of
/// setup, and `legal_moves` always holds the legal moves of `side_to_move`.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) cells: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) king_square: [Square; 2],
    pub(crate) piece_lists: [PieceList; 2],
    pub(crate) legal_moves: Vec<Move>,
    pub(crate) history: Vec<UndoRecord>,
}

impl Position {
    /// The standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, &piece) in back_rank.iter().enumerate() {
            position.set_piece(Square::at(0, file), Color::White, piece);
            position.set_piece(Square::at(1, file), Color::White, Piece::Pawn);
            position.set_piece(Square::at(6, file), Color::Black, Piece::Pawn);
            position.set_piece(Square::at(7, file), Color::Black, piece);
        }
        position.castling_rights = CastlingRights::all();
        position.legal_moves = position.generate_legal_moves();
        position
    }

    /// Blank board, white to move. King squares are meaningless until
    /// `finish_setup` has validated the kings.
    pub(crate) fn empty() -> Self {
        Position {
            cells: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            king_square: [Square::at(0, 4), Square::at(7, 4)],
            piece_lists: [PieceList::new(), PieceList::new()],
            legal_moves: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Check the one-king-per-side and en-passant preconditions, then seed
    /// the legal-move cache.
    pub(crate) fn finish_setup(&mut self) -> Result<(), FenError> {
        for color in Color::BOTH {
            let kings: Vec<Square> = self.piece_lists[color.index()]
                .as_slice()
                .iter()
                .copied()
                .filter(|sq| self.cells[sq.index()] == Some((color, Piece::King)))
                .collect();
            match kings.as_slice() {
                [] => return Err(FenError::MissingKing { color }),
                [king] => self.king_square[color.index()] = *king,
                _ => return Err(FenError::TooManyKings { color }),
            }
        }
        if let Some(target) = self.en_passant_target {
            if !self.is_valid_en_passant_target(target) {
                return Err(FenError::InvalidEnPassant {
                    found: target.to_string(),
                });
            }
        }
        self.history.clear();
        self.legal_moves = self.generate_legal_moves();
        Ok(())
    }

    /// An empty square the opponent's pawn just skipped over.
    fn is_valid_en_passant_target(&self, target: Square) -> bool {
        let opponent = self.side_to_move.opponent();
        let skipped_rank = opponent.pawn_start_rank() as isize + opponent.pawn_direction();
        target.rank() as isize == skipped_rank
            && self.is_empty(target)
            && target
                .offset(opponent.pawn_direction(), 0)
                .is_some_and(|pawn| self.piece_at(pawn) == Some((opponent, Piece::Pawn)))
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Cached location of a side's king.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_square[color.index()]
    }

    /// Occupancy of one cell: `None` when empty.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.cells[sq.index()]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Squares occupied by one side, in piece-list order.
    #[must_use]
    pub fn piece_squares(&self, color: Color) -> &[Square] {
        self.piece_lists[color.index()].as_slice()
    }

    /// The cached legal-move set of the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /// Destinations of the cached legal moves starting on `from`, for move previews.
    #[must_use]
    pub fn highlighted_squares(&self, from: Square) -> Vec<Square> {
        self.legal_moves
            .iter()
            .filter(|mv| mv.from == from)
            .map(|mv| mv.to)
            .collect()
    }

    /// Number of recorded moves that can be unmade.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matches_start_fen() {
        let position = Position::new();
        assert_eq!(position.to_fen(), START_FEN);
        assert_eq!(position.legal_moves().len(), 20);
        assert_eq!(position.king_square(Color::White), Square::at(0, 4));
        assert_eq!(position.king_square(Color::Black), Square::at(7, 4));
        assert_eq!(position.piece_squares(Color::White).len(), 16);
        assert_eq!(position.piece_squares(Color::Black).len(), 16);
        assert_eq!(position.history_len(), 0);
    }

    #[test]
    fn test_highlighted_squares_for_knight() {
        let position = Position::default();
        let mut targets = position.highlighted_squares("g1".parse().unwrap());
        targets.sort();
        assert_eq!(
            targets,
            vec!["f3".parse().unwrap(), "h3".parse().unwrap()]
        );
        assert!(position.highlighted_squares("e4".parse().unwrap()).is_empty());
    }
}
