//! Headless chess rules and search core.
//!
//! [`board`] holds the rules: an arena-backed board, reversible moves,
//! per-piece move generation, check analysis, evaluation and a minimax
//! search with alpha-beta pruning. [`engine`] drives a game on top of it:
//! click handling, turn order and the engine opponent.

pub mod board;
pub mod engine;

pub use board::{Board, Color, GameStatus, Move, PieceKind, Square};
pub use engine::{ClickOutcome, Game, GameOptions};
