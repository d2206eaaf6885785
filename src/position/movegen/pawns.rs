use super::super::{Color, Position, Square};

impl Position {
    /// Pushes, double pushes from the start rank, diagonal captures and en passant.
    pub(crate) fn pawn_targets(&self, from: Square, color: Color, targets: &mut Vec<Square>) {
        let dir = color.pawn_direction();

        if let Some(single) = from.offset(dir, 0) {
            if self.is_empty(single) {
                targets.push(single);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = single.offset(dir, 0) {
                        if self.is_empty(double) {
                            targets.push(double);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target) {
                Some((target_color, _)) if target_color != color => targets.push(target),
                None if Some(target) == self.en_passant_target => targets.push(target),
                _ => {}
            }
        }
    }
}
