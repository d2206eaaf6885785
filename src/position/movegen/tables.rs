//! Per-square step tables and ray directions.

use once_cell::sync::Lazy;

use crate::position::Square;

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// On-board knight destinations for each square.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| step_targets(&KNIGHT_OFFSETS));

/// On-board adjacent squares for each square.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| step_targets(&KING_OFFSETS));

fn step_targets(offsets: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let Some(from) = Square::from_index(idx) else {
            return Vec::new();
        };
        offsets
            .iter()
            .filter_map(|&(d_rank, d_file)| from.offset(d_rank, d_file))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_corner_and_center_counts() {
        assert_eq!(KNIGHT_TARGETS[sq("a1").index()].len(), 2);
        assert_eq!(KNIGHT_TARGETS[sq("d4").index()].len(), 8);
        assert_eq!(KING_TARGETS[sq("h8").index()].len(), 3);
        assert_eq!(KING_TARGETS[sq("e4").index()].len(), 8);
    }

    #[test]
    fn test_edge_targets_never_wrap() {
        let targets = &KNIGHT_TARGETS[sq("h2").index()];
        assert!(targets.iter().all(|t| t.file() >= 5));
    }
}
