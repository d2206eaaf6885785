use super::super::{Color, Piece, Position, Square};
use super::tables::KING_TARGETS;

impl Position {
    pub(crate) fn king_targets(&self, from: Square, color: Color, targets: &mut Vec<Square>) {
        self.step_targets(&KING_TARGETS[from.index()], color, targets);
        self.castling_targets(from, color, targets);
    }

    /// Two-square king shifts. The landing square is left to the legality filter.
    fn castling_targets(&self, from: Square, color: Color, targets: &mut Vec<Square>) {
        let rank = color.back_rank();
        if from != Square::at(rank, 4) {
            return;
        }

        // Computed at most once for both wings.
        let mut in_check: Option<bool> = None;
        for kingside in [true, false] {
            if !self.castling_rights.has(color, kingside) {
                continue;
            }
            let (rook_file, between, transit_file, landing_file): (usize, &[usize], usize, usize) =
                if kingside {
                    (7, &[5, 6], 5, 6)
                } else {
                    (0, &[1, 2, 3], 3, 2)
                };
            if self.piece_at(Square::at(rank, rook_file)) != Some((color, Piece::Rook)) {
                continue;
            }
            if between.iter().any(|&file| !self.is_empty(Square::at(rank, file))) {
                continue;
            }
            if *in_check.get_or_insert_with(|| self.in_check(color)) {
                return;
            }
            if self.is_square_attacked(Square::at(rank, transit_file), color.opponent()) {
                continue;
            }
            targets.push(Square::at(rank, landing_file));
        }
    }
}
