//! Move generation tests.

use super::{play, sorted, sq};
use crate::board::{Board, BoardBuilder, Color, PieceKind};

#[test]
fn test_starting_position_move_count() {
    let mut board = Board::new();
    assert_eq!(board.legal_moves(Color::White).len(), 20);
    assert_eq!(board.legal_moves(Color::Black).len(), 20);
}

#[test]
fn test_pawn_single_and_double_step() {
    let mut board = Board::new();
    assert_eq!(sorted(board.legal_destinations(sq("e2"))), vec!["e3", "e4"]);
    assert_eq!(sorted(board.legal_destinations(sq("d7"))), vec!["d5", "d6"]);
}

#[test]
fn test_pawn_double_step_needs_clear_path() {
    let mut board = BoardBuilder::starting_position()
        .piece(sq("e3"), Color::Black, PieceKind::Knight)
        .build()
        .unwrap();
    assert!(board.legal_destinations(sq("e2")).is_empty());
    assert_eq!(sorted(board.legal_destinations(sq("d2"))), vec!["d3", "e3", "d4"]);
}

#[test]
fn test_moved_pawn_has_no_double_step() {
    let mut board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, PieceKind::King)
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .moved_piece(sq("c2"), Color::White, PieceKind::Pawn)
        .build()
        .unwrap();
    assert_eq!(sorted(board.legal_destinations(sq("c2"))), vec!["c3"]);
}

#[test]
fn test_pawn_on_last_rank_is_stuck() {
    let mut board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, PieceKind::King)
        .piece(sq("h1"), Color::Black, PieceKind::King)
        .moved_piece(sq("c8"), Color::White, PieceKind::Pawn)
        .build()
        .unwrap();
    assert!(board.legal_destinations(sq("c8")).is_empty());
}

#[test]
fn test_knight_in_corner() {
    let mut board = Board::new();
    assert_eq!(sorted(board.legal_destinations(sq("b1"))), vec!["a3", "c3"]);
}

#[test]
fn test_rook_stops_at_blockers() {
    let board = BoardBuilder::new()
        .piece(sq("d4"), Color::White, PieceKind::Rook)
        .piece(sq("d6"), Color::Black, PieceKind::Pawn)
        .piece(sq("f4"), Color::White, PieceKind::Pawn)
        .build()
        .unwrap();
    let rook = board.occupant(sq("d4")).unwrap();
    assert_eq!(
        sorted(board.destinations(rook)),
        vec!["d1", "d2", "d3", "a4", "b4", "c4", "e4", "d5", "d6"]
    );
}

#[test]
fn test_queen_combines_rays() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, PieceKind::Queen)
        .piece(sq("a3"), Color::White, PieceKind::Pawn)
        .piece(sq("c1"), Color::Black, PieceKind::Knight)
        .piece(sq("c3"), Color::Black, PieceKind::Pawn)
        .build()
        .unwrap();
    let queen = board.occupant(sq("a1")).unwrap();
    assert_eq!(sorted(board.destinations(queen)), vec!["b1", "c1", "a2", "b2", "c3"]);
}

#[test]
fn test_king_never_steps_next_to_king() {
    let mut board = BoardBuilder::new()
        .piece(sq("e4"), Color::White, PieceKind::King)
        .piece(sq("e6"), Color::Black, PieceKind::King)
        .build()
        .unwrap();
    assert_eq!(
        sorted(board.legal_destinations(sq("e4"))),
        vec!["d3", "e3", "f3", "d4", "f4"]
    );
}

#[test]
fn test_king_square_never_a_move_target() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("a8"), Color::Black, PieceKind::King)
        .piece(sq("h1"), Color::White, PieceKind::King)
        .build()
        .unwrap();
    let rook = board.occupant(sq("a1")).unwrap();
    assert!(board.destinations(rook).contains(&sq("a8")));
    assert!(board
        .pseudo_moves(Color::White)
        .iter()
        .all(|mv| mv.to() != sq("a8")));
}

#[test]
fn test_en_passant_window() {
    let mut board = Board::new();
    play(&mut board, "e2", "e4");
    play(&mut board, "a7", "a6");
    play(&mut board, "e4", "e5");
    play(&mut board, "d7", "d5");

    let e5 = board.occupant(sq("e5")).unwrap();
    assert_eq!(board.en_passant_target(e5), Some(sq("d6")));
    assert!(board.legal_destinations(sq("e5")).contains(&sq("d6")));

    play(&mut board, "b1", "c3");
    play(&mut board, "a6", "a5");
    assert_eq!(board.en_passant_target(e5), None);
    assert!(!board.legal_destinations(sq("e5")).contains(&sq("d6")));
}

#[test]
fn test_no_en_passant_after_single_steps() {
    let mut board = Board::new();
    play(&mut board, "e2", "e4");
    play(&mut board, "d7", "d6");
    play(&mut board, "e4", "e5");
    play(&mut board, "d6", "d5");
    let e5 = board.occupant(sq("e5")).unwrap();
    assert_eq!(board.en_passant_target(e5), None);
}

#[test]
fn test_black_en_passant() {
    let mut board = Board::new();
    play(&mut board, "a2", "a3");
    play(&mut board, "d7", "d5");
    play(&mut board, "a3", "a4");
    play(&mut board, "d5", "d4");
    play(&mut board, "e2", "e4");
    let d4 = board.occupant(sq("d4")).unwrap();
    assert_eq!(board.en_passant_target(d4), Some(sq("e3")));
    let mv = board.find_legal_move(sq("d4"), sq("e3")).unwrap();
    assert!(mv.is_en_passant());
    assert_eq!(mv.capture_square(), sq("e4"));
}

#[test]
fn test_pinned_piece_cannot_leave_line() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e2"), Color::White, PieceKind::Knight)
        .piece(sq("e8"), Color::Black, PieceKind::Rook)
        .piece(sq("a8"), Color::Black, PieceKind::King)
        .build()
        .unwrap();
    assert!(board.legal_destinations(sq("e2")).is_empty());
    let knight = board.occupant(sq("e2")).unwrap();
    assert!(!board.destinations(knight).is_empty());
}

#[test]
fn test_illegal_move_rejected() {
    let mut board = Board::new();
    assert!(board.find_legal_move(sq("e2"), sq("e5")).is_err());
    assert!(board.find_legal_move(sq("e4"), sq("e5")).is_err());
    assert_eq!(board, Board::new());
}
