use super::{Board, Color, PieceKind};

/// Per-rank bonus for pawns, counted from their own back rank
const PAWN_ADVANCE_BONUS: i32 = 10;
/// Per-step bonus for knights and bishops closer to the centre
const CENTRALIZATION_BONUS: i32 = 5;

impl Board {
    /// Static score, positive favours White.
    ///
    /// Material plus two positional terms: pawns earn credit for advancing,
    /// knights and bishops for standing near the centre.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.pieces
            .iter()
            .filter_map(|piece| {
                let sq = piece.square?;
                let positional = match piece.kind {
                    PieceKind::Pawn => {
                        let advanced = match piece.color {
                            Color::White => i32::from(sq.rank()),
                            Color::Black => 7 - i32::from(sq.rank()),
                        };
                        advanced * PAWN_ADVANCE_BONUS
                    }
                    PieceKind::Knight | PieceKind::Bishop => {
                        // Manhattan distance from the four centre squares' midpoint,
                        // in half-squares then halved. Always an exact integer.
                        let file = i32::from(sq.file());
                        let rank = i32::from(sq.rank());
                        let distance = ((7 - 2 * file).abs() + (7 - 2 * rank).abs()) / 2;
                        (8 - distance) * CENTRALIZATION_BONUS
                    }
                    PieceKind::Rook | PieceKind::Queen | PieceKind::King => 0,
                };
                Some(piece.color.sign() * (piece.kind.value() + positional))
            })
            .sum()
    }
}
