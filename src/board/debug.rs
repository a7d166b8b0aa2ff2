use super::{Board, PieceKind};

impl Board {
    /// Check the arena back-references agree in both directions.
    ///
    /// Every occupied slot names a piece standing on that slot, every live
    /// piece is named by its slot, and the king table points at kings.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let slots_agree = self.squares.iter().all(|slot| match slot.occupier {
            None => true,
            Some(id) => self
                .pieces
                .get(id.index())
                .is_some_and(|p| p.square == Some(slot.square)),
        });
        let pieces_agree = self.pieces().all(|(id, piece)| match piece.square {
            None => true,
            Some(sq) => self.squares[sq.index()].occupier == Some(id),
        });
        let kings_agree = self.kings.iter().flatten().all(|&id| {
            self.pieces
                .get(id.index())
                .is_some_and(|p| p.kind == PieceKind::King)
        });
        slots_agree && pieces_agree && kings_agree
    }

    /// Print the diagram and history, for poking at positions in tests.
    #[cfg(debug_assertions)]
    pub fn debug_print(&self) {
        println!("{self}");
        let plies: Vec<String> = self.history.iter().map(ToString::to_string).collect();
        println!("History: {}", plies.join(" "));
        println!("------------------------------------");
    }
}
