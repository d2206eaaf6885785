use std::mem;

use super::error::MoveError;
use super::history::UndoRecord;
use super::{Color, Move, MoveCategory, MoveOutcome, Piece, Position, Square};

/// Board-level effect of one move: everything needed to put the pieces back.
#[derive(Clone, Debug)]
pub(crate) struct Placement {
    pub(crate) moved: (Color, Piece),
    /// Captured piece and the square it stood on (differs from `to` for en passant).
    pub(crate) captured: Option<(Piece, Square)>,
    pub(crate) outcome: MoveOutcome,
}

impl Position {
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        debug_assert!(self.is_empty(sq), "set_piece on occupied {sq}");
        self.cells[sq.index()] = Some((color, piece));
        self.piece_lists[color.index()].insert(sq);
        if piece == Piece::King {
            self.king_square[color.index()] = sq;
        }
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) -> (Color, Piece) {
        let (color, piece) = self.cells[sq.index()]
            .take()
            .expect("remove_piece on empty square");
        self.piece_lists[color.index()].remove(sq);
        (color, piece)
    }

    fn relocate_piece(&mut self, from: Square, to: Square) {
        debug_assert!(self.is_empty(to), "relocate onto occupied {to}");
        let (color, piece) = self.cells[from.index()]
            .take()
            .expect("relocate_piece from empty square");
        self.cells[to.index()] = Some((color, piece));
        self.piece_lists[color.index()].relocate(from, to);
        if piece == Piece::King {
            self.king_square[color.index()] = to;
        }
    }

    /// Move pieces on the board only: cells, piece lists and king squares.
    ///
    /// Rights, clocks and side to move are untouched, so the legality filter
    /// can call this and `unmove_piece` around a check test.
    pub(crate) fn move_piece(&mut self, mv: Move) -> Placement {
        let (color, piece) = self.cells[mv.from.index()].expect("move_piece from empty square");
        let back_rank = color.back_rank();

        if piece == Piece::King
            && mv.from == Square::at(back_rank, 4)
            && mv.to.rank() == back_rank
            && mv.to.file().abs_diff(4) == 2
        {
            let (rook_from, rook_to) = castling_rook_squares(mv.to);
            self.relocate_piece(mv.from, mv.to);
            self.relocate_piece(rook_from, rook_to);
            return Placement {
                moved: (color, piece),
                captured: None,
                outcome: MoveOutcome {
                    resets_halfmove_clock: false,
                    category: MoveCategory::Castle,
                },
            };
        }

        let mut category = MoveCategory::Simple;
        let mut captured = None;
        let en_passant_victim = Square::at(mv.from.rank(), mv.to.file());
        if piece == Piece::Pawn
            && Some(mv.to) == self.en_passant_target
            && mv.to.file() != mv.from.file()
            && self.is_empty(mv.to)
            && self.piece_at(en_passant_victim) == Some((color.opponent(), Piece::Pawn))
        {
            let victim_sq = en_passant_victim;
            let (_, victim) = self.remove_piece(victim_sq);
            captured = Some((victim, victim_sq));
            category = MoveCategory::EnPassant;
        } else if !self.is_empty(mv.to) {
            let (_, victim) = self.remove_piece(mv.to);
            captured = Some((victim, mv.to));
            category = MoveCategory::Capture;
        }

        self.relocate_piece(mv.from, mv.to);

        if piece == Piece::Pawn && mv.to.rank() == color.pawn_promotion_rank() {
            let promoted = promotion_choice(mv);
            self.cells[mv.to.index()] = Some((color, promoted));
            category = MoveCategory::Promotion(promoted);
        }

        Placement {
            moved: (color, piece),
            captured,
            outcome: MoveOutcome {
                resets_halfmove_clock: piece == Piece::Pawn || captured.is_some(),
                category,
            },
        }
    }

    /// Exact inverse of `move_piece` for the same move.
    pub(crate) fn unmove_piece(&mut self, mv: Move, placement: &Placement) {
        let (color, piece) = placement.moved;
        if placement.outcome.category == MoveCategory::Castle {
            let (rook_from, rook_to) = castling_rook_squares(mv.to);
            self.relocate_piece(rook_to, rook_from);
            self.relocate_piece(mv.to, mv.from);
            return;
        }

        self.relocate_piece(mv.to, mv.from);
        if let MoveCategory::Promotion(_) = placement.outcome.category {
            self.cells[mv.from.index()] = Some((color, piece));
        }
        if let Some((victim, victim_sq)) = placement.captured {
            self.set_piece(victim_sq, color.opponent(), victim);
        }
    }

    /// Apply a move from the cached legal-move set.
    ///
    /// The promotion choice defaults to a queen when a pawn reaches its last
    /// rank with `mv.promotion == None`. An illegal move leaves the position
    /// unchanged.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        if !self.legal_moves.iter().any(|legal| legal.same_squares(mv)) {
            log::debug!("rejected illegal move {mv}");
            return Err(MoveError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }
        let outcome = self.make_move(mv);
        self.report_game_end();
        Ok(outcome)
    }

    /// Apply a move already known to be legal, skipping validation and
    /// game-end reporting.
    pub(crate) fn apply_trusted(&mut self, mv: Move) -> MoveOutcome {
        debug_assert!(
            self.legal_moves.iter().any(|legal| legal.same_squares(mv)),
            "trusted move {mv} is not legal"
        );
        self.make_move(mv)
    }

    fn make_move(&mut self, mv: Move) -> MoveOutcome {
        let color = self.side_to_move;
        let previous_castling_rights = self.castling_rights;
        let previous_en_passant_target = self.en_passant_target;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_fullmove_number = self.fullmove_number;

        let (_, moving_piece) = self.cells[mv.from.index()].expect("make_move 'from' empty");
        let target = self.cells[mv.to.index()];
        self.update_castling_rights(mv, color, moving_piece, target);

        let mv = if moving_piece == Piece::Pawn && mv.to.rank() == color.pawn_promotion_rank() {
            mv.with_promotion(promotion_choice(mv))
        } else {
            Move::new(mv.from, mv.to)
        };
        let placement = self.move_piece(mv);

        if placement.outcome.resets_halfmove_clock {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        self.en_passant_target = None;
        if moving_piece == Piece::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2 {
            let ep_rank = (mv.from.rank() + mv.to.rank()) / 2;
            self.en_passant_target = Some(Square::at(ep_rank, mv.from.file()));
        }

        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = color.opponent();

        let next_legal_moves = self.generate_legal_moves();
        let previous_legal_moves = mem::replace(&mut self.legal_moves, next_legal_moves);

        let outcome = placement.outcome;
        self.history.push(UndoRecord {
            mv,
            placement,
            previous_castling_rights,
            previous_en_passant_target,
            previous_halfmove_clock,
            previous_fullmove_number,
            previous_legal_moves,
        });
        outcome
    }

    fn update_castling_rights(
        &mut self,
        mv: Move,
        color: Color,
        moving_piece: Piece,
        target: Option<(Color, Piece)>,
    ) {
        let home = color.back_rank();
        if moving_piece == Piece::King && mv.from == Square::at(home, 4) {
            self.castling_rights.remove_color(color);
        } else if moving_piece == Piece::Rook {
            if mv.from == Square::at(home, 7) {
                self.castling_rights.remove(color, true);
            } else if mv.from == Square::at(home, 0) {
                self.castling_rights.remove(color, false);
            }
        }

        // Tied to the captured square only, whatever made the capture.
        let opponent = color.opponent();
        if target == Some((opponent, Piece::Rook)) {
            let their_home = opponent.back_rank();
            if mv.to == Square::at(their_home, 7) {
                self.castling_rights.remove(opponent, true);
            } else if mv.to == Square::at(their_home, 0) {
                self.castling_rights.remove(opponent, false);
            }
        }
    }

    /// Reverse the most recent recorded move.
    pub fn unmake_move(&mut self) -> Result<Move, MoveError> {
        self.undo_last().ok_or_else(|| {
            log::debug!("unmake requested with empty undo stack");
            MoveError::EmptyUndoStack
        })
    }

    pub(crate) fn undo_last(&mut self) -> Option<Move> {
        let record = self.history.pop()?;
        self.side_to_move = self.side_to_move.opponent();
        self.unmove_piece(record.mv, &record.placement);
        self.castling_rights = record.previous_castling_rights;
        self.en_passant_target = record.previous_en_passant_target;
        self.halfmove_clock = record.previous_halfmove_clock;
        self.fullmove_number = record.previous_fullmove_number;
        self.legal_moves = record.previous_legal_moves;
        log::trace!("unmade {}", record.mv);
        Some(record.mv)
    }
}

/// Rook (from, to) for a castling king landing on `king_to`.
fn castling_rook_squares(king_to: Square) -> (Square, Square) {
    let rank = king_to.rank();
    if king_to.file() == 6 {
        (Square::at(rank, 7), Square::at(rank, 5))
    } else {
        (Square::at(rank, 0), Square::at(rank, 3))
    }
}

fn promotion_choice(mv: Move) -> Piece {
    mv.promotion
        .filter(|piece| piece.is_promotion_choice())
        .unwrap_or(Piece::Queen)
}
