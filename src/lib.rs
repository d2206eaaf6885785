//! Chess position core: FEN codec, legal move generation, make/unmake with
//! an undo stack, game-end detection and perft.

pub mod position;

pub use position::{Color, GameStatus, Move, Piece, Position, Square};
