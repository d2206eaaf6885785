//! Pseudolegal move generation and the legality filter.

mod kings;
mod knights;
mod pawns;
mod sliders;
pub(crate) mod tables;

use super::{Move, Piece, Position, Square};
use tables::{DIAGONALS, ORTHOGONALS};

const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    DIAGONALS[0],
    DIAGONALS[1],
    DIAGONALS[2],
    DIAGONALS[3],
    ORTHOGONALS[0],
    ORTHOGONALS[1],
    ORTHOGONALS[2],
    ORTHOGONALS[3],
];

impl Position {
    /// Destinations of the piece on `from`, ignoring self-check.
    ///
    /// Empty when `from` is empty or holds a piece of the side not to move.
    #[must_use]
    pub fn pseudolegal_targets(&self, from: Square) -> Vec<Square> {
        let mut targets = Vec::new();
        let Some((color, piece)) = self.piece_at(from) else {
            return targets;
        };
        if color != self.side_to_move {
            return targets;
        }
        match piece {
            Piece::Pawn => self.pawn_targets(from, color, &mut targets),
            Piece::Knight => self.knight_targets(from, color, &mut targets),
            Piece::Bishop => self.slider_targets(from, color, &DIAGONALS, &mut targets),
            Piece::Rook => self.slider_targets(from, color, &ORTHOGONALS, &mut targets),
            Piece::Queen => self.slider_targets(from, color, &QUEEN_DIRECTIONS, &mut targets),
            Piece::King => self.king_targets(from, color, &mut targets),
        }
        targets
    }

    /// Pseudolegal moves of every piece of the side to move.
    #[must_use]
    pub fn pseudolegal_moves(&self) -> Vec<Move> {
        self.piece_squares(self.side_to_move)
            .iter()
            .flat_map(|&from| {
                self.pseudolegal_targets(from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Legal moves from one square, found by trying each pseudolegal
    /// destination and testing the mover's king.
    pub fn legal_moves_from(&mut self, from: Square) -> Vec<Move> {
        let color = self.side_to_move;
        let targets = self.pseudolegal_targets(from);
        let mut legal = Vec::with_capacity(targets.len());
        for to in targets {
            let mv = Move::new(from, to);
            let placement = self.move_piece(mv);
            if !self.in_check(color) {
                legal.push(mv);
            }
            self.unmove_piece(mv, &placement);
        }
        legal
    }

    /// Legal moves of the whole side to move, in piece-list order.
    pub(crate) fn generate_legal_moves(&mut self) -> Vec<Move> {
        let c_idx = self.side_to_move.index();
        let mut legal = Vec::with_capacity(64);
        // Tentative moves restore the mover's list order, so indexing stays valid.
        for i in 0..self.piece_lists[c_idx].len() {
            let from = self.piece_lists[c_idx].as_slice()[i];
            legal.extend(self.legal_moves_from(from));
        }
        legal
    }
}
