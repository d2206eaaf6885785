use super::super::{Color, Position, Square};
use super::tables::KNIGHT_TARGETS;

impl Position {
    pub(crate) fn knight_targets(&self, from: Square, color: Color, targets: &mut Vec<Square>) {
        self.step_targets(&KNIGHT_TARGETS[from.index()], color, targets);
    }

    /// Keep every step destination not held by `color`.
    pub(crate) fn step_targets(&self, steps: &[Square], color: Color, targets: &mut Vec<Square>) {
        targets.extend(
            steps
                .iter()
                .copied()
                .filter(|&to| self.piece_at(to).map_or(true, |(c, _)| c != color)),
        );
    }
}
