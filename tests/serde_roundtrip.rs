//! Serde round-trips for the value types.

#![cfg(feature = "serde")]

use chess_position::position::{
    CastlingRights, Color, GameStatus, Move, MoveCategory, MoveOutcome, Piece, Position, Square,
};

#[test]
fn move_roundtrip() {
    let mv = Move::new("a7".parse().unwrap(), "a8".parse().unwrap()).with_promotion(Piece::Knight);
    let json = serde_json::to_string(&mv).unwrap();
    assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);
}

#[test]
fn status_and_rights_roundtrip() {
    let status = GameStatus::Checkmate {
        winner: Color::Black,
    };
    let json = serde_json::to_string(&status).unwrap();
    assert_eq!(serde_json::from_str::<GameStatus>(&json).unwrap(), status);

    let rights = Position::new().castling_rights();
    let json = serde_json::to_string(&rights).unwrap();
    assert_eq!(serde_json::from_str::<CastlingRights>(&json).unwrap(), rights);
}

#[test]
fn square_and_category_roundtrip() {
    let square: Square = "h8".parse().unwrap();
    let json = serde_json::to_string(&square).unwrap();
    assert_eq!(serde_json::from_str::<Square>(&json).unwrap(), square);

    let category = MoveCategory::Promotion(Piece::Rook);
    let json = serde_json::to_string(&category).unwrap();
    assert_eq!(serde_json::from_str::<MoveCategory>(&json).unwrap(), category);
}

#[test]
fn outcome_roundtrip() {
    let mut position = Position::new();
    let outcome = position
        .apply_move(Move::new("e2".parse().unwrap(), "e4".parse().unwrap()))
        .unwrap();
    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(serde_json::from_str::<MoveOutcome>(&json).unwrap(), outcome);
}
