use super::make_unmake::Placement;
use super::{CastlingRights, Move, Position, Square};

/// Everything `unmake_move` needs to restore the position before one move.
#[derive(Clone, Debug)]
pub(crate) struct UndoRecord {
    pub(crate) mv: Move,
    pub(crate) placement: Placement,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    /// Legal-move set of the side that made `mv`, restored without regenerating.
    pub(crate) previous_legal_moves: Vec<Move>,
}

/// Undo-stack depth captured at the start of a scope; checked at its end.
#[must_use]
pub(crate) struct HistoryMark {
    depth: usize,
}

impl HistoryMark {
    pub(crate) fn new(position: &Position) -> Self {
        HistoryMark {
            depth: position.history.len(),
        }
    }

    pub(crate) fn assert_balanced(self, position: &Position) {
        debug_assert_eq!(
            position.history.len(),
            self.depth,
            "unbalanced apply/unmake"
        );
    }
}

impl Position {
    /// Apply `mv`, run `f` on the resulting position, then unmake `mv`.
    ///
    /// Nested calls keep apply/unmake strictly LIFO.
    pub(crate) fn scoped_move<R>(&mut self, mv: Move, f: impl FnOnce(&mut Self) -> R) -> R {
        let mark = HistoryMark::new(self);
        self.apply_trusted(mv);
        let result = f(self);
        let undone = self.undo_last();
        debug_assert!(undone.is_some_and(|m| m.same_squares(mv)));
        mark.assert_balanced(self);
        result
    }
}
