//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::error::SquareError;

/// One of the 64 board cells, stored as its index `rank * 8 + file` (a1=0, h8=63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from rank and file (both 0-7)
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Create a square from its index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// Caller guarantees `rank < 8 && file < 8`.
    #[inline]
    pub(crate) const fn at(rank: usize, file: usize) -> Self {
        debug_assert!(rank < 8 && file < 8);
        Square((rank * 8 + file) as u8)
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 >> 3) as usize
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 & 7) as usize
    }

    /// Get the square's index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a (rank, file) delta, or `None` when the step leaves the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, d_rank: isize, d_file: isize) -> Option<Self> {
        let rank = self.rank() as isize + d_rank;
        let file = self.file() as isize + d_file;
        if rank >= 0 && rank < 8 && file >= 0 && file < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Parse a square that may be written as `-` (no square).
    pub fn parse_optional(s: &str) -> Result<Option<Self>, SquareError> {
        if s == "-" {
            Ok(None)
        } else {
            s.parse().map(Some)
        }
    }

    /// Format an optional square, writing `-` for `None`.
    #[must_use]
    pub fn format_optional(sq: Option<Self>) -> String {
        sq.map_or_else(|| "-".to_string(), |sq| sq.to_string())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (self.file() as u8 + b'a') as char,
            self.rank() + 1
        )
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(idx: usize) -> Result<Self, Self::Error> {
        Square::from_index(idx).ok_or(SquareError::IndexOutOfRange { index: idx })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let [file, rank] = bytes else {
            return Err(invalid());
        };
        // Out-of-range bytes wrap to large values and are rejected by `new`.
        Square::new(
            rank.wrapping_sub(b'1') as usize,
            file.wrapping_sub(b'a') as usize,
        )
        .ok_or_else(invalid)
    }
}
