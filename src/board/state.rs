use std::fmt;

use super::{Color, Move, Piece, PieceId, PieceKind, SetupError, Square, SquareSlot};

/// Square arena plus piece arena.
///
/// Squares and pieces refer to each other only through indices: a slot's
/// `occupier` is a `PieceId`, a piece's `square` is a `Square`. Captured
/// pieces stay in `pieces` with no square so undo can restore them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [SquareSlot; 64],
    pub(crate) pieces: Vec<Piece>,
    pub(crate) kings: [Option<PieceId>; 2],
    pub(crate) history: Vec<Move>,
}

pub(crate) const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Standard starting position, White on ranks 1 and 2.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            let (back, pawns) = match color {
                Color::White => (0, 1),
                Color::Black => (7, 6),
            };
            for (file, kind) in (0u8..).zip(BACK_RANK) {
                board.put(Square::new(file, back), color, kind);
            }
            for file in 0..8 {
                board.put(Square::new(file, pawns), color, PieceKind::Pawn);
            }
        }
        board
    }

    /// Board with no pieces and no history.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: std::array::from_fn(|idx| SquareSlot::vacant(Square::from_index_masked(idx))),
            pieces: Vec::with_capacity(32),
            kings: [None, None],
            history: Vec::new(),
        }
    }

    fn put(&mut self, square: Option<Square>, color: Color, kind: PieceKind) {
        if let Some(square) = square {
            // Only used on fresh boards with a single king per color.
            let _ = self.place(square, color, kind);
        }
    }

    /// Add a new piece to the arena during setup.
    ///
    /// Pieces are only ever created here; there is no promotion. The arena
    /// holds at most 256 pieces, captured ones included.
    pub fn place(
        &mut self,
        square: Square,
        color: Color,
        kind: PieceKind,
    ) -> Result<PieceId, SetupError> {
        if self.squares[square.index()].occupier.is_some() {
            return Err(SetupError::SquareOccupied { square });
        }
        if kind == PieceKind::King && self.kings[color.index()].is_some() {
            return Err(SetupError::DuplicateKing { color });
        }
        let id = u8::try_from(self.pieces.len())
            .map(PieceId)
            .map_err(|_| SetupError::ArenaFull)?;
        self.pieces.push(Piece::new(color, kind, square));
        self.squares[square.index()].occupier = Some(id);
        if kind == PieceKind::King {
            self.kings[color.index()] = Some(id);
        }
        Ok(id)
    }

    /// Arena lookup. Panics on an id that did not come from this board.
    #[inline]
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    /// Every piece ever placed, captured ones included
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(idx, piece)| (PieceId(idx as u8), piece))
    }

    /// Pieces of `color` still on the board, in arena order
    pub fn live_pieces(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces()
            .filter(move |(_, p)| p.color == color && p.square.is_some())
            .map(|(id, _)| id)
    }

    #[inline]
    #[must_use]
    pub fn slot(&self, square: Square) -> &SquareSlot {
        &self.squares[square.index()]
    }

    /// Checked coordinate lookup; off-board coordinates yield `None`
    #[must_use]
    pub fn slot_at(&self, file: i32, rank: i32) -> Option<&SquareSlot> {
        Square::from_coords(file, rank).map(|sq| self.slot(sq))
    }

    #[inline]
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<PieceId> {
        self.squares[square.index()].occupier
    }

    /// The piece on a square, if any
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.occupant(square).map(|id| self.piece(id))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].occupier.is_none()
    }

    /// Color of the piece on a square
    #[must_use]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(Piece::color)
    }

    /// Played plies, oldest first
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for rank in (0..8u8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8u8 {
                let ch = Square::new(file, rank)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |p| p.kind.to_diagram_char(p.color));
                write!(f, " {ch}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_place_rejects_occupied_square() {
        let mut board = Board::empty();
        board.place(sq("d4"), Color::White, PieceKind::Knight).unwrap();
        assert_eq!(
            board.place(sq("d4"), Color::Black, PieceKind::Pawn),
            Err(SetupError::SquareOccupied { square: sq("d4") })
        );
    }

    #[test]
    fn test_place_refuses_to_wrap_piece_ids() {
        let mut board = Board::empty();
        let first = board.place(sq("a1"), Color::White, PieceKind::Pawn).unwrap();
        // captured pieces keep their arena slots
        let captured = Piece {
            square: None,
            ..*board.piece(first)
        };
        board.pieces.resize(256, captured);

        let before = board.clone();
        assert_eq!(
            board.place(sq("h8"), Color::Black, PieceKind::Queen),
            Err(SetupError::ArenaFull)
        );
        assert_eq!(board, before);
        assert_eq!(board.piece_at(sq("a1")).map(Piece::kind), Some(PieceKind::Pawn));
    }
}
