use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, Square};

impl Board {
    pub(crate) fn knight_destinations(&self, color: Color, from: Square) -> Vec<Square> {
        KNIGHT_TARGETS[from.index()]
            .iter()
            .copied()
            .filter(|&to| self.color_on(to) != Some(color))
            .collect()
    }
}
