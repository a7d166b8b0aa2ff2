use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Color, PieceKind, Square};

impl Board {
    /// Adjacent squares not held by a friendly piece or the enemy king.
    pub(crate) fn king_destinations(&self, color: Color, from: Square) -> Vec<Square> {
        KING_TARGETS[from.index()]
            .iter()
            .copied()
            .filter(|&to| match self.piece_at(to) {
                None => true,
                Some(p) => p.color != color && p.kind != PieceKind::King,
            })
            .collect()
    }
}
