//! Chess board representation and game rules.
//!
//! The board is a pair of arenas: 64 square slots and every piece ever
//! placed, linked by index. Moves are reversible records kept on a history
//! stack, which also drives en passant eligibility. Castling and promotion
//! are not part of the rules.
//!
//! # Example
//! ```
//! use chess_core::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod check;
mod debug;
mod error;
mod eval;
mod make_unmake;
mod movegen;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use check::GameStatus;
pub use error::{MoveError, SearchError, SetupError, SquareError};
pub use make_unmake::Speculation;
pub use state::Board;
pub use types::{
    Color, Move, MoveKind, MoveList, Piece, PieceId, PieceKind, Shade, Square, SquareSlot,
};

// Public API - search functions and configuration
pub use search::{minimax, ScoredMove, SearchEngine, SearchParams, SearchStats};

pub(crate) use state::BACK_RANK;
