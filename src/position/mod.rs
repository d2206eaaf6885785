//! Mutable chess position with cached legal moves and an undo stack.
//!
//! A `Position` is built from FEN (or `PositionBuilder`), mutated in place
//! with `apply_move`, and restored with `unmake_move`. The legal-move set of
//! the side to move is always cached, and restoring a move restores the
//! previous set without regenerating it.
//!
//! # Example
//! ```
//! use chess_position::position::{GameStatus, Move, Position};
//!
//! let mut position = Position::new();
//! let e4 = Move::new("e2".parse().unwrap(), "e4".parse().unwrap());
//! position.apply_move(e4).unwrap();
//! assert_eq!(
//!     position.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! assert_eq!(position.game_status(), GameStatus::Ongoing);
//! position.unmake_move().unwrap();
//! assert_eq!(position.legal_moves().len(), 20);
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod game_end;
mod history;
mod make_unmake;
mod movegen;
mod perft;
mod piece_list;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, PerftError, SquareError};
pub use game_end::GameStatus;
pub use state::{Position, START_FEN};
pub use types::{CastlingRights, Color, Move, MoveCategory, MoveOutcome, Piece, Square};

pub(crate) use types::PROMOTION_PIECES;
