//! Error types for position operations.

use std::fmt;

use super::{Color, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few fields (needs at least 4)
    TooFewFields { found: usize },
    /// Invalid piece character in the board field
    InvalidPiece { char: char },
    /// Board field does not have exactly 8 ranks
    InvalidRankCount { found: usize },
    /// A rank does not describe exactly 8 files
    InvalidRankLength { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is present but not a number
    InvalidClock { field: &'static str, found: String },
    /// No king of this color on the board
    MissingKing { color: Color },
    /// More than one king of this color on the board
    TooManyKings { color: Color },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewFields { found } => {
                write!(f, "FEN must have at least 4 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN board must have 8 ranks, found {found}")
            }
            FenError::InvalidRankLength { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidClock { field, found } => {
                write!(f, "Invalid {field} '{found}' in FEN")
            }
            FenError::MissingKing { color } => {
                write!(f, "FEN has no {color} king")
            }
            FenError::TooManyKings { color } => {
                write!(f, "FEN has more than one {color} king")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square notation and index failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
    /// Index outside 0-63
    IndexOutOfRange { index: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
            SquareError::IndexOutOfRange { index } => {
                write!(f, "Square index {index} out of range (must be 0-63)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for applying and unmaking moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Requested from/to pair is not in the current legal-move set
    IllegalMove { from: Square, to: Square },
    /// Unmake requested with no recorded move
    EmptyUndoStack,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::IllegalMove { from, to } => write!(f, "Illegal move '{from}{to}'"),
            MoveError::EmptyUndoStack => write!(f, "Nothing to unmake"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for perft and divide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerftError {
    NegativeDepth { depth: i32 },
}

impl fmt::Display for PerftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerftError::NegativeDepth { depth } => write!(f, "Negative perft depth {depth}"),
        }
    }
}

impl std::error::Error for PerftError {}
