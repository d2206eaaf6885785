//! Per-side list of occupied squares.
//!
//! Unordered and unique. Each square remembers its slot so that insert,
//! remove and relocate are O(1); removal swaps the last entry into the hole.

use super::Square;

const NO_SLOT: u8 = u8::MAX;

#[derive(Clone, Debug)]
pub(crate) struct PieceList {
    squares: Vec<Square>,
    slot: [u8; 64],
}

impl PieceList {
    pub(crate) fn new() -> Self {
        PieceList {
            squares: Vec::with_capacity(16),
            slot: [NO_SLOT; 64],
        }
    }

    #[inline]
    pub(crate) fn contains(&self, sq: Square) -> bool {
        self.slot[sq.index()] != NO_SLOT
    }

    pub(crate) fn insert(&mut self, sq: Square) {
        debug_assert!(!self.contains(sq), "square {sq} already listed");
        self.slot[sq.index()] = self.squares.len() as u8;
        self.squares.push(sq);
    }

    pub(crate) fn remove(&mut self, sq: Square) {
        let idx = self.slot[sq.index()];
        debug_assert!(idx != NO_SLOT, "square {sq} not listed");
        let idx = idx as usize;
        self.squares.swap_remove(idx);
        if let Some(&moved) = self.squares.get(idx) {
            self.slot[moved.index()] = idx as u8;
        }
        self.slot[sq.index()] = NO_SLOT;
    }

    /// Rewrite an entry in place, keeping its position in the list.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        let idx = self.slot[from.index()];
        debug_assert!(idx != NO_SLOT, "square {from} not listed");
        debug_assert!(!self.contains(to), "square {to} already listed");
        self.squares[idx as usize] = to;
        self.slot[from.index()] = NO_SLOT;
        self.slot[to.index()] = idx;
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.squares.len()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Square] {
        &self.squares
    }
}
