use super::movegen::tables::{DIAGONALS, KING_TARGETS, KNIGHT_TARGETS, ORTHOGONALS};
use super::{Color, Piece, Position, Square};

impl Position {
    /// Whether `color`'s king is attacked by any enemy piece.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }

    /// Whether any piece of `by` attacks `sq`, looking outward from `sq`.
    pub(crate) fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let back = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(from) = sq.offset(back, df) {
                if self.piece_at(from) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        if KNIGHT_TARGETS[sq.index()]
            .iter()
            .any(|&from| self.piece_at(from) == Some((by, Piece::Knight)))
        {
            return true;
        }

        if KING_TARGETS[sq.index()]
            .iter()
            .any(|&from| self.piece_at(from) == Some((by, Piece::King)))
        {
            return true;
        }

        self.ray_hits(sq, by, &DIAGONALS, Piece::Bishop)
            || self.ray_hits(sq, by, &ORTHOGONALS, Piece::Rook)
    }

    /// First piece met along each direction is `by`'s `slider` or queen.
    fn ray_hits(&self, sq: Square, by: Color, directions: &[(isize, isize)], slider: Piece) -> bool {
        directions.iter().any(|&(d_rank, d_file)| {
            let mut next = sq.offset(d_rank, d_file);
            while let Some(at) = next {
                if let Some((color, piece)) = self.piece_at(at) {
                    return color == by && (piece == slider || piece == Piece::Queen);
                }
                next = at.offset(d_rank, d_file);
            }
            false
        })
    }
}
