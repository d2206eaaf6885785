//! Leaf-node counting for move generation verification.

use super::error::PerftError;
use super::{Move, Piece, Position, PROMOTION_PIECES};

impl Position {
    /// Count leaf positions `depth` plies below this one.
    ///
    /// Each promoting pawn move counts once per promotion piece. The position
    /// is unchanged afterwards.
    ///
    /// # Example
    /// ```
    /// use chess_position::Position;
    ///
    /// let mut position = Position::new();
    /// assert_eq!(position.perft(2), Ok(400));
    /// ```
    pub fn perft(&mut self, depth: i32) -> Result<u64, PerftError> {
        let depth = check_depth(depth)?;
        Ok(self.perft_nodes(depth))
    }

    /// Perft split by root move, in legal-move order.
    ///
    /// A promoting move appears once per promotion piece. Depth 0 has no
    /// root moves and yields an empty list.
    pub fn divide(&mut self, depth: i32) -> Result<Vec<(Move, u64)>, PerftError> {
        let depth = check_depth(depth)?;
        let mut counts = Vec::new();
        if depth == 0 {
            return Ok(counts);
        }
        for i in 0..self.legal_moves.len() {
            let mv = self.legal_moves[i];
            for mv in self.expand_promotions(mv) {
                let nodes = self.scoped_move(mv, |p| p.perft_nodes(depth - 1));
                counts.push((mv, nodes));
            }
        }
        Ok(counts)
    }

    fn perft_nodes(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        if depth == 1 {
            return self
                .legal_moves
                .iter()
                .map(|&mv| if self.is_promotion(mv) { 4 } else { 1 })
                .sum();
        }

        let mut nodes = 0;
        // Unmake restores the cached list, so it can be walked by index.
        for i in 0..self.legal_moves.len() {
            let mv = self.legal_moves[i];
            if self.is_promotion(mv) {
                for piece in PROMOTION_PIECES {
                    nodes += self.scoped_move(mv.with_promotion(piece), |p| {
                        p.perft_nodes(depth - 1)
                    });
                }
            } else {
                nodes += self.scoped_move(mv, |p| p.perft_nodes(depth - 1));
            }
        }
        nodes
    }

    fn expand_promotions(&self, mv: Move) -> Vec<Move> {
        if self.is_promotion(mv) {
            PROMOTION_PIECES
                .iter()
                .map(|&piece| mv.with_promotion(piece))
                .collect()
        } else {
            vec![mv]
        }
    }

    fn is_promotion(&self, mv: Move) -> bool {
        matches!(
            self.piece_at(mv.from),
            Some((color, Piece::Pawn)) if mv.to.rank() == color.pawn_promotion_rank()
        )
    }
}

fn check_depth(depth: i32) -> Result<u32, PerftError> {
    u32::try_from(depth).map_err(|_| PerftError::NegativeDepth { depth })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_is_one() {
        let mut position = Position::new();
        assert_eq!(position.perft(0), Ok(1));
        assert_eq!(position.divide(0), Ok(Vec::new()));
    }

    #[test]
    fn test_negative_depth_is_rejected() {
        let mut position = Position::new();
        assert_eq!(
            position.perft(-1),
            Err(PerftError::NegativeDepth { depth: -1 })
        );
        assert_eq!(
            position.divide(-3),
            Err(PerftError::NegativeDepth { depth: -3 })
        );
    }

    #[test]
    fn test_promotions_count_four_times() {
        let mut position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        // a8 four ways plus Ka2; b1 and b2 touch the black king.
        assert_eq!(position.perft(1), Ok(5));
        let split_total: u64 = position.divide(2).unwrap().iter().map(|(_, n)| n).sum();
        assert_eq!(position.perft(2), Ok(split_total));
    }

    #[test]
    fn test_divide_sums_to_perft() {
        let mut position = Position::new();
        let split = position.divide(3).unwrap();
        assert_eq!(split.len(), 20);
        let total: u64 = split.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 8902);
        assert_eq!(position.to_fen(), crate::position::START_FEN);
    }

    #[test]
    fn test_divide_expands_promotions() {
        let mut position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let split = position.divide(1).unwrap();
        let promotions: Vec<Option<Piece>> = split
            .iter()
            .filter(|(mv, _)| mv.from == "a7".parse().unwrap())
            .map(|(mv, _)| mv.promotion)
            .collect();
        assert_eq!(
            promotions,
            vec![
                Some(Piece::Queen),
                Some(Piece::Rook),
                Some(Piece::Bishop),
                Some(Piece::Knight)
            ]
        );
    }
}
