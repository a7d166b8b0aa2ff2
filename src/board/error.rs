//! Error types for chess board operations.

use std::fmt;

use super::{Color, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for making and unmaking moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Undo requested with nothing on the history stack
    EmptyHistory,
    /// No piece stands on the source square
    NoPieceAt { square: Square },
    /// Destination is not in the legal set for the piece
    IllegalMove { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptyHistory => write!(f, "Cannot undo: move history is empty"),
            MoveError::NoPieceAt { square } => write!(f, "No piece on {square}"),
            MoveError::IllegalMove { from, to } => write!(f, "Illegal move {from}-{to}"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for position setup failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A second king of the same color was placed
    DuplicateKing { color: Color },
    /// A piece was placed on an occupied square
    SquareOccupied { square: Square },
    /// Every `PieceId` is already taken
    ArenaFull,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::DuplicateKing { color } => {
                write!(f, "Position already has a {color} king")
            }
            SetupError::SquareOccupied { square } => {
                write!(f, "Square {square} is already occupied")
            }
            SetupError::ArenaFull => write!(f, "Piece arena is full (256 pieces)"),
        }
    }
}

impl std::error::Error for SetupError {}

/// Error type for search failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The side to move has no legal move (checkmate or stalemate)
    NoLegalMoves { color: Color },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalMoves { color } => {
                write!(f, "No legal moves for {color}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
