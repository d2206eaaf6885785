//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - board cell index (a1=0 ... h8=63)
//! - `Move`, `MoveCategory`, `MoveOutcome` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveCategory, MoveOutcome};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
