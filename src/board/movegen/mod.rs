//! Per-piece destination generation.
//!
//! `destinations` is the raw generator: movement rules and same-color
//! blocking only. Check detection is built on it, so it never consults
//! check safety itself. `legal_moves` layers the exposure filter on top.

mod kings;
mod knights;
mod pawns;
mod sliders;

use log::debug;

use super::{Board, Color, Move, MoveError, MoveKind, MoveList, PieceId, PieceKind, Square};

impl Board {
    /// Destination squares for a piece, ignoring check safety.
    ///
    /// Captured pieces have no destinations.
    #[must_use]
    pub fn destinations(&self, id: PieceId) -> Vec<Square> {
        let piece = self.piece(id);
        let Some(from) = piece.square else {
            return Vec::new();
        };
        match piece.kind {
            PieceKind::Pawn => self.pawn_destinations(id, from),
            PieceKind::Knight => self.knight_destinations(piece.color, from),
            PieceKind::King => self.king_destinations(piece.color, from),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.slider_destinations(piece.kind, piece.color, from)
            }
        }
    }

    /// Turn a destination into a move record.
    ///
    /// Returns `None` when the destination holds a king: kings are never
    /// captured, the position must be prevented instead.
    pub(crate) fn build_move(&self, id: PieceId, to: Square) -> Option<Move> {
        let piece = self.piece(id);
        let from = piece.square?;
        let target = self.occupant(to);
        if target.is_some_and(|victim| self.piece(victim).kind == PieceKind::King) {
            return None;
        }
        let (kind, captured) = match target {
            Some(victim) => (MoveKind::Capture, Some(victim)),
            None if piece.kind == PieceKind::Pawn && to.file() != from.file() => {
                let victim = Square::new(to.file(), from.rank()).and_then(|sq| self.occupant(sq));
                (MoveKind::EnPassant, victim)
            }
            None => (MoveKind::Normal, None),
        };
        Some(Move {
            piece: id,
            captured,
            from,
            to,
            kind,
            first_move: !piece.has_moved,
        })
    }

    /// Every candidate move for `color`, in arena then destination order.
    ///
    /// Moves may still leave the mover's king attacked.
    #[must_use]
    pub fn pseudo_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for id in self.live_pieces(color) {
            moves.extend(
                self.destinations(id)
                    .into_iter()
                    .filter_map(|to| self.build_move(id, to)),
            );
        }
        moves
    }

    /// Candidate moves for `color` that keep its king safe.
    pub fn legal_moves(&mut self, color: Color) -> MoveList {
        let candidates = self.pseudo_moves(color);
        candidates
            .into_iter()
            .filter(|&mv| !self.would_expose_king(mv))
            .collect()
    }

    /// Legal destinations of whatever piece stands on `square`.
    ///
    /// Empty when the square is vacant.
    pub fn legal_destinations(&mut self, square: Square) -> Vec<Square> {
        let Some(id) = self.occupant(square) else {
            return Vec::new();
        };
        let candidates: MoveList = self
            .destinations(id)
            .into_iter()
            .filter_map(|to| self.build_move(id, to))
            .collect();
        candidates
            .into_iter()
            .filter(|&mv| !self.would_expose_king(mv))
            .map(Move::to)
            .collect()
    }

    /// Look up the legal move from `from` to `to`.
    pub fn find_legal_move(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        let id = self
            .occupant(from)
            .ok_or(MoveError::NoPieceAt { square: from })?;
        let candidate = if self.destinations(id).contains(&to) {
            self.build_move(id, to)
        } else {
            None
        };
        candidate
            .filter(|&mv| !self.would_expose_king(mv))
            .ok_or_else(|| {
                debug!("rejected {from}-{to}");
                MoveError::IllegalMove { from, to }
            })
    }
}
