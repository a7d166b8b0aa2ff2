//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_unmake.rs` - Make/undo reversibility and the speculation guard
//! - `movegen.rs` - Per-piece destinations and en passant
//! - `check.rs` - Check, checkmate and stalemate detection
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Minimax, alpha-beta and root move selection
//! - `proptest.rs` - Property-based tests

mod movegen;

use crate::board::{Board, Move, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Play a legal move given in coordinates, panicking if it is illegal.
pub(super) fn play(board: &mut Board, from: &str, to: &str) -> Move {
    let mv = board.find_legal_move(sq(from), sq(to)).unwrap();
    board.make_move(mv);
    mv
}

pub(super) fn sorted(mut squares: Vec<Square>) -> Vec<String> {
    squares.sort_by_key(|s| s.index());
    squares.iter().map(ToString::to_string).collect()
}
