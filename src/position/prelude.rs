//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_position::position::prelude::*;
//!
//! let position = Position::from_fen(START_FEN).unwrap();
//! assert_eq!(position.side_to_move(), Color::White);
//! ```

pub use super::{
    CastlingRights, Color, FenError, GameStatus, Move, MoveError, Piece, Position,
    PositionBuilder, Square, START_FEN,
};
