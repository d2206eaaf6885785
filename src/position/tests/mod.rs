//! Position tests.
//!
//! - `perft.rs` - node counts for reference positions
//! - `make_unmake.rs` - apply/unmake fidelity and cache consistency
//! - `edge_cases.rs` - castling, en passant, pins, terminal positions
//! - `proptest.rs` - property-based tests


use super::{Color, Move, Piece, Position, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn mv(from: &str, to: &str) -> Move {
    Move::new(sq(from), sq(to))
}

/// Check every derived structure against the cells it mirrors.
pub(super) fn assert_consistent(position: &Position) {
    for color in Color::BOTH {
        let mut listed: Vec<Square> = position.piece_squares(color).to_vec();
        listed.sort();
        let mut occupied: Vec<Square> = (0..64)
            .filter_map(Square::from_index)
            .filter(|&s| matches!(position.piece_at(s), Some((c, _)) if c == color))
            .collect();
        occupied.sort();
        assert_eq!(listed, occupied, "{color} piece list out of sync");

        let king = position.king_square(color);
        assert_eq!(
            position.piece_at(king),
            Some((color, Piece::King)),
            "{color} king square stale"
        );
    }

    // Restored caches may list moves in a different order than a fresh pass.
    let key = |m: &Move| (m.from, m.to);
    let mut cached = position.legal_moves().to_vec();
    cached.sort_by_key(key);
    let mut regenerated = position.clone().generate_legal_moves();
    regenerated.sort_by_key(key);
    assert_eq!(cached, regenerated, "legal-move cache stale");
}
