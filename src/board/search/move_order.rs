//! Move ordering utilities for search.

use super::super::{Board, Move, MoveList};

/// Material value of the piece a move captures, 0 for quiet moves
pub fn victim_value(board: &Board, mv: Move) -> i32 {
    mv.captured()
        .map_or(0, |victim| board.piece(victim).kind().value())
}

/// Captures first, most valuable victim first; quiet moves keep their
/// generation order.
pub fn order_moves(board: &Board, moves: &mut MoveList) {
    moves.sort_by_key(|&mv| std::cmp::Reverse(victim_value(board, mv)));
}
