use std::ops::Deref;

use log::trace;

use super::{Board, Move, MoveError, MoveKind};

impl Board {
    /// Commit a move and push it onto the history stack.
    ///
    /// The history entry records the mover's first-move flag and whatever
    /// actually stood on the capture square, so `undo_move` restores the
    /// board exactly.
    pub fn make_move(&mut self, mv: Move) {
        let mover = mv.piece.index();
        let first_move = !self.pieces[mover].has_moved;
        self.pieces[mover].has_moved = true;

        let capture_square = mv.capture_square();
        let captured = match mv.kind {
            MoveKind::EnPassant => mv.captured,
            MoveKind::Normal | MoveKind::Capture => self.squares[mv.to.index()].occupier,
        };
        if let Some(victim) = captured {
            self.squares[capture_square.index()].occupier = None;
            self.pieces[victim.index()].square = None;
        }

        self.squares[mv.from.index()].occupier = None;
        self.pieces[mover].square = Some(mv.to);
        self.squares[mv.to.index()].occupier = Some(mv.piece);

        let record = Move {
            captured,
            first_move,
            ..mv
        };
        trace!("make {record}");
        self.history.push(record);
        debug_assert!(self.is_consistent(), "board inconsistent after {record}");
    }

    /// Pop and reverse the most recent move.
    pub fn undo_move(&mut self) -> Result<Move, MoveError> {
        let mv = self.history.pop().ok_or(MoveError::EmptyHistory)?;
        let mover = mv.piece.index();
        if mv.first_move {
            self.pieces[mover].has_moved = false;
        }

        self.squares[mv.to.index()].occupier = None;
        if let Some(victim) = mv.captured {
            let square = mv.capture_square();
            self.squares[square.index()].occupier = Some(victim);
            self.pieces[victim.index()].square = Some(square);
        }

        self.squares[mv.from.index()].occupier = Some(mv.piece);
        self.pieces[mover].square = Some(mv.from);

        trace!("undo {mv}");
        debug_assert!(self.is_consistent(), "board inconsistent after undoing {mv}");
        Ok(mv)
    }

    /// Make `mv` for the lifetime of the returned guard.
    ///
    /// The guard derefs to the board read-only and undoes the move when
    /// dropped, so lookahead and check testing always leave the position
    /// untouched.
    pub fn speculate(&mut self, mv: Move) -> Speculation<'_> {
        self.make_move(mv);
        let depth = self.history.len();
        let record = self.history.last().copied().unwrap_or(mv);
        Speculation {
            board: self,
            depth,
            record,
        }
    }
}

/// Scoped make/undo pair returned by [`Board::speculate`].
pub struct Speculation<'a> {
    board: &'a mut Board,
    depth: usize,
    record: Move,
}

impl Speculation<'_> {
    /// Mutable access for searching below the speculated move.
    ///
    /// Anything made through it must be undone before the guard drops.
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        let history = &self.board.history;
        let on_top = history.len() == self.depth && history.last() == Some(&self.record);
        debug_assert!(on_top, "speculated {} is no longer the last ply", self.record);
        if on_top {
            let _ = self.board.undo_move();
        }
    }
}
