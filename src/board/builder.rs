//! Fluent builder for constructing chess positions.
//!
//! Positions are assembled piece by piece, which is how tests and the
//! self-play driver set up endgames.
//!
//! # Example
//! ```
//! use chess_core::board::{BoardBuilder, Color, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece("a1".parse().unwrap(), Color::White, PieceKind::King)
//!     .piece("h8".parse().unwrap(), Color::Black, PieceKind::King)
//!     .piece("a8".parse().unwrap(), Color::Black, PieceKind::Rook)
//!     .build()
//!     .unwrap();
//! assert!(board.is_in_check(Color::White));
//! ```

use super::{Board, Color, PieceKind, SetupError, Square, BACK_RANK};

#[derive(Clone, Copy, Debug)]
struct Placement {
    square: Square,
    color: Color,
    kind: PieceKind,
    has_moved: bool,
}

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<Placement>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (file, kind) in (0u8..).zip(BACK_RANK) {
            builder = builder
                .piece_at(file, 0, Color::White, kind)
                .piece_at(file, 7, Color::Black, kind);
        }
        for file in 0..8 {
            builder = builder
                .piece_at(file, 1, Color::White, PieceKind::Pawn)
                .piece_at(file, 6, Color::Black, PieceKind::Pawn);
        }
        builder
    }

    fn piece_at(self, file: u8, rank: u8, color: Color, kind: PieceKind) -> Self {
        match Square::new(file, rank) {
            Some(square) => self.piece(square, color, kind),
            None => self,
        }
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.push(square, color, kind, false)
    }

    /// Place a piece that counts as having moved already.
    ///
    /// Pawns placed this way have no double step.
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.push(square, color, kind, true)
    }

    fn push(mut self, square: Square, color: Color, kind: PieceKind, has_moved: bool) -> Self {
        self.pieces.retain(|p| p.square != square);
        self.pieces.push(Placement {
            square,
            color,
            kind,
            has_moved,
        });
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.square != square);
        self
    }

    /// Build the board.
    ///
    /// Fails if a color was given two kings.
    pub fn build(self) -> Result<Board, SetupError> {
        let mut board = Board::empty();
        for placement in self.pieces {
            let id = board.place(placement.square, placement.color, placement.kind)?;
            board.pieces[id.index()].has_moved = placement.has_moved;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build().unwrap();
        let standard = Board::new();
        for square in Square::all() {
            let a = built.piece_at(square).map(|p| (p.color(), p.kind()));
            let b = standard.piece_at(square).map(|p| (p.color(), p.kind()));
            assert_eq!(a, b, "mismatch on {square}");
        }
        assert_eq!(built.to_string(), standard.to_string());
    }

    #[test]
    fn test_piece_replaces_existing() {
        let board = BoardBuilder::new()
            .piece(sq("e4"), Color::White, PieceKind::Knight)
            .piece(sq("e4"), Color::Black, PieceKind::Queen)
            .build()
            .unwrap();
        let piece = board.piece_at(sq("e4")).unwrap();
        assert_eq!(piece.color(), Color::Black);
        assert_eq!(piece.kind(), PieceKind::Queen);
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(sq("e2"))
            .build()
            .unwrap();
        assert!(board.is_empty(sq("e2")));
        assert_eq!(board.pieces().count(), 31);
    }

    #[test]
    fn test_moved_piece_flag() {
        let board = BoardBuilder::new()
            .moved_piece(sq("e2"), Color::White, PieceKind::Pawn)
            .build()
            .unwrap();
        assert!(board.piece_at(sq("e2")).unwrap().has_moved());
    }

    #[test]
    fn test_duplicate_king_rejected() {
        let err = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("d1"), Color::White, PieceKind::King)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::DuplicateKing {
                color: Color::White
            }
        );
    }
}
