use super::super::{Board, Color, PieceKind, Square};

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

impl Board {
    pub(crate) fn slider_destinations(
        &self,
        kind: PieceKind,
        color: Color,
        from: Square,
    ) -> Vec<Square> {
        let rays: &[(i8, i8)] = match kind {
            PieceKind::Rook => &ORTHOGONAL,
            PieceKind::Bishop => &DIAGONAL,
            _ => &ALL_DIRECTIONS,
        };
        let mut targets = Vec::with_capacity(14);
        for &(df, dr) in rays {
            self.walk_ray(color, from, df, dr, &mut targets);
        }
        targets
    }

    /// Extend one ray until it leaves the board or meets a piece.
    /// An enemy blocker is included as a capture, a friendly one is not.
    fn walk_ray(&self, color: Color, from: Square, df: i8, dr: i8, out: &mut Vec<Square>) {
        let mut cursor = from;
        while let Some(next) = cursor.offset(df, dr) {
            match self.color_on(next) {
                None => out.push(next),
                Some(owner) => {
                    if owner != color {
                        out.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}
