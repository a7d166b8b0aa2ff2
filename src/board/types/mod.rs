//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `PieceKind`, `Color`, `Piece` and `PieceId` - pieces and their arena handles
//! - `Square`, `Shade` and `SquareSlot` - coordinates and the square arena entry
//! - `Move`, `MoveKind` and `MoveList` - reversible ply records

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveKind, MoveList};
pub use piece::{Color, Piece, PieceId, PieceKind};
pub use square::{Shade, Square, SquareSlot};
