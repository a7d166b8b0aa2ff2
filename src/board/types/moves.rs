//! Move types and move list.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceId;
use super::square::Square;

/// How a move interacts with the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Normal,
    Capture,
    /// Pawn capture onto the square an enemy pawn just skipped over
    EnPassant,
}

/// A single reversible ply.
///
/// `first_move` is refreshed by `Board::make_move` from the mover's
/// `has_moved` flag, so the history entry always restores it exactly.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub(crate) piece: PieceId,
    pub(crate) captured: Option<PieceId>,
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) kind: MoveKind,
    pub(crate) first_move: bool,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn piece(self) -> PieceId {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<PieceId> {
        self.captured
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn is_first_move(self) -> bool {
        self.first_move
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    /// Square the captured piece stands on before the move.
    ///
    /// Equal to `to` except for en passant, where the victim sits beside
    /// the capturing pawn.
    #[must_use]
    pub fn capture_square(self) -> Square {
        match self.kind {
            MoveKind::EnPassant => Square::new(self.to.file(), self.from.rank()).unwrap_or(self.to),
            MoveKind::Normal | MoveKind::Capture => self.to,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)?;
        if self.is_en_passant() {
            f.write_str(" e.p.")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self} piece={:?}", self.piece)?;
        if let Some(victim) = self.captured {
            write!(f, " captured={victim:?}")?;
        }
        write!(f, " first={})", self.first_move)
    }
}

pub type MoveList = Vec<Move>;
