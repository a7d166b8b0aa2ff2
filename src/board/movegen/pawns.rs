use super::super::{Board, PieceId, PieceKind, Square};

impl Board {
    pub(crate) fn pawn_destinations(&self, id: PieceId, from: Square) -> Vec<Square> {
        let pawn = self.piece(id);
        let color = pawn.color;
        let dir = color.pawn_direction();
        let mut targets = Vec::with_capacity(4);

        // No promotion, so a pawn on the last rank simply has no step.
        if let Some(one) = from.offset(0, dir).filter(|&sq| self.is_empty(sq)) {
            targets.push(one);
            if !pawn.has_moved && from.rank() == color.pawn_rank() {
                if let Some(two) = from.offset(0, 2 * dir).filter(|&sq| self.is_empty(sq)) {
                    targets.push(two);
                }
            }
        }

        for df in [-1, 1] {
            if let Some(diag) = from.offset(df, dir) {
                if self.color_on(diag) == Some(color.opponent()) {
                    targets.push(diag);
                }
            }
        }

        if let Some(ep) = self.en_passant_target(id) {
            targets.push(ep);
        }
        targets
    }

    /// Square a pawn may capture onto en passant, if any.
    ///
    /// Only the immediately preceding ply counts: it must be an enemy pawn's
    /// double step that landed beside this pawn. The target is the square
    /// that pawn skipped over.
    #[must_use]
    pub fn en_passant_target(&self, pawn: PieceId) -> Option<Square> {
        let piece = self.piece(pawn);
        let from = piece.square?;
        if piece.kind != PieceKind::Pawn || from.rank() != piece.color.en_passant_rank() {
            return None;
        }
        let last = self.last_move()?;
        let mover = self.piece(last.piece);
        let double_step = mover.kind == PieceKind::Pawn
            && mover.color != piece.color
            && last.from.file() == last.to.file()
            && last.from.rank().abs_diff(last.to.rank()) == 2;
        if !double_step || last.to.rank() != from.rank() || last.to.file().abs_diff(from.file()) != 1 {
            return None;
        }
        last.to
            .offset(0, piece.color.pawn_direction())
            .filter(|&sq| self.is_empty(sq))
    }
}
