//! King safety: check, checkmate and stalemate detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Move, PieceId, Square};

/// Outcome of analysing the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    /// Not in check with no legal move. Reported, never acted on.
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("ongoing"),
            GameStatus::Check => f.write_str("check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => f.write_str("stalemate"),
        }
    }
}

impl Board {
    /// The live king of `color`, from the king table.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<PieceId> {
        self.kings[color.index()].filter(|&id| !self.piece(id).is_captured())
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.find_king(color).and_then(|id| self.piece(id).square)
    }

    /// True if any live piece of `by` has `target` among its raw destinations.
    #[must_use]
    pub fn is_attacked_by(&self, target: Square, by: Color) -> bool {
        self.live_pieces(by)
            .any(|id| self.destinations(id).contains(&target))
    }

    /// True iff an opposing piece's unfiltered destinations include the king.
    ///
    /// A board without a king of `color` is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|sq| self.is_attacked_by(sq, color.opponent()))
    }

    fn kings_touch(&self) -> bool {
        match (self.king_square(Color::White), self.king_square(Color::Black)) {
            (Some(w), Some(b)) => w.file().abs_diff(b.file()) <= 1 && w.rank().abs_diff(b.rank()) <= 1,
            _ => false,
        }
    }

    /// Would committing `mv` leave the mover's king attacked (or touching
    /// the other king)? The board is unchanged on return.
    pub fn would_expose_king(&mut self, mv: Move) -> bool {
        let color = self.piece(mv.piece).color;
        let after = self.speculate(mv);
        let exposed = after.is_in_check(color) || after.kings_touch();
        exposed
    }

    /// In check with every candidate move still exposing the king.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && self.legal_moves(color).is_empty()
    }

    /// Not in check, yet no legal move.
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && self.legal_moves(color).is_empty()
    }

    /// Classify the position for the side to move.
    pub fn status(&mut self, to_move: Color) -> GameStatus {
        let in_check = self.is_in_check(to_move);
        let stuck = self.legal_moves(to_move).is_empty();
        match (in_check, stuck) {
            (true, true) => GameStatus::Checkmate {
                winner: to_move.opponent(),
            },
            (true, false) => GameStatus::Check,
            (false, true) => GameStatus::Stalemate,
            (false, false) => GameStatus::Ongoing,
        }
    }
}
