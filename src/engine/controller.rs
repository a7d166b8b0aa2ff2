//! Turn controller implementation.

use log::{debug, info, warn};

use crate::board::{
    Board, Color, GameStatus, Move, MoveError, PieceId, SearchEngine, SearchError, Square,
};

use super::{BoardGeometry, GameOptions};

/// A selected piece and the destinations computed when it was picked.
#[derive(Clone, Debug)]
struct Selection {
    square: Square,
    targets: Vec<Square>,
}

/// What a click did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing happened: empty or enemy square with no selection, off-board
    /// pixel, or the engine is to move.
    Ignored,
    /// A piece of the side to move is now selected.
    Selected { square: Square, targets: Vec<Square> },
    /// The selected square was clicked again.
    Deselected,
    /// The destination was not legal for the selected piece. Selection is
    /// cleared and the board is untouched.
    Rejected { from: Square, to: Square },
    /// The move was committed. `reply` is the engine's answer, if it moved;
    /// `status` describes the side to move afterwards (on checkmate the game
    /// has already been reset). When that reset hands White to the engine,
    /// `opening` is its first move of the new game and the human is to move.
    Moved {
        played: Move,
        reply: Option<Move>,
        status: GameStatus,
        opening: Option<Move>,
    },
}

/// One game session: board, turn, selection and the engine opponent.
///
/// When the engine has White, the host starts the first game with
/// [`Game::play_engine_move`]; after that the engine replies on its own,
/// including the opening move of every game started by a checkmate.
pub struct Game {
    board: Board,
    to_move: Color,
    selection: Option<Selection>,
    engine: SearchEngine,
    options: GameOptions,
    geometry: BoardGeometry,
}

impl Game {
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Game {
            board: Board::new(),
            to_move: Color::White,
            selection: None,
            engine: SearchEngine::new(options.search.clone()),
            geometry: BoardGeometry::new(options.square_size),
            options,
        }
    }

    /// Continue from a prepared position with `to_move` on turn.
    ///
    /// A checkmate still resets to the standard start.
    #[must_use]
    pub fn with_position(options: GameOptions, board: Board, to_move: Color) -> Self {
        Game {
            board,
            to_move,
            ..Game::new(options)
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    #[must_use]
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// Played plies, oldest first
    #[must_use]
    pub fn history(&self) -> &[Move] {
        self.board.history()
    }

    /// Currently selected square
    #[must_use]
    pub fn selected(&self) -> Option<Square> {
        self.selection.as_ref().map(|s| s.square)
    }

    /// Legal destinations of the selected piece, for highlighting
    #[must_use]
    pub fn highlighted(&self) -> &[Square] {
        self.selection.as_ref().map_or(&[][..], |s| s.targets.as_slice())
    }

    #[must_use]
    pub fn is_engine_turn(&self) -> bool {
        self.options.engine_color == Some(self.to_move)
    }

    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board.is_in_check(self.to_move)
    }

    /// Check, mate or stalemate for the side to move.
    pub fn status(&mut self) -> GameStatus {
        self.board.status(self.to_move)
    }

    /// Legal destinations for the piece on `square`, whoever owns it.
    pub fn legal_destinations(&mut self, square: Square) -> Vec<Square> {
        self.board.legal_destinations(square)
    }

    /// Start over from the initial position, White to move.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Color::White;
        self.selection = None;
        info!("new game");
    }

    fn own_piece_on(&self, square: Square) -> Option<PieceId> {
        self.board
            .occupant(square)
            .filter(|&id| self.board.piece(id).color() == self.to_move)
    }

    /// Feed a click on a board square into the selection state machine.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if self.is_engine_turn() {
            return ClickOutcome::Ignored;
        }
        match self.selection.take() {
            None => self.select(square),
            Some(current) if current.square == square => ClickOutcome::Deselected,
            Some(_) if self.own_piece_on(square).is_some() => self.select(square),
            Some(current) => {
                if !current.targets.contains(&square) {
                    debug!("{} cannot go to {square}", current.square);
                    return ClickOutcome::Rejected {
                        from: current.square,
                        to: square,
                    };
                }
                match self.board.find_legal_move(current.square, square) {
                    Ok(mv) => self.commit(mv),
                    Err(err) => {
                        debug!("{err}");
                        ClickOutcome::Rejected {
                            from: current.square,
                            to: square,
                        }
                    }
                }
            }
        }
    }

    /// Click at a pixel position; off-board pixels are ignored.
    pub fn click_pixel(&mut self, x: i32, y: i32) -> ClickOutcome {
        match self.geometry.square_at(x, y) {
            Some(square) => self.click(square),
            None => ClickOutcome::Ignored,
        }
    }

    fn select(&mut self, square: Square) -> ClickOutcome {
        if self.own_piece_on(square).is_none() {
            return ClickOutcome::Ignored;
        }
        let targets = self.board.legal_destinations(square);
        debug!("selected {square}, {} destinations", targets.len());
        self.selection = Some(Selection {
            square,
            targets: targets.clone(),
        });
        ClickOutcome::Selected { square, targets }
    }

    fn commit(&mut self, mv: Move) -> ClickOutcome {
        self.board.make_move(mv);
        let mut status = self.advance_turn();
        let mut reply = None;
        if self.is_engine_turn() && !status.is_game_over() {
            match self.play_engine_move() {
                Ok((engine_move, after)) => {
                    reply = Some(engine_move);
                    status = after;
                }
                Err(err) => warn!("engine could not reply: {err}"),
            }
        }
        let mut opening = None;
        if matches!(status, GameStatus::Checkmate { .. }) && self.is_engine_turn() {
            match self.play_engine_move() {
                Ok((engine_move, _)) => opening = Some(engine_move),
                Err(err) => warn!("engine could not open the new game: {err}"),
            }
        }
        ClickOutcome::Moved {
            played: mv,
            reply,
            status,
            opening,
        }
    }

    /// Search and play a move for the side to move, engine-controlled or not.
    ///
    /// Fails without touching the board when that side has no legal move.
    pub fn play_engine_move(&mut self) -> Result<(Move, GameStatus), SearchError> {
        let color = self.to_move;
        let mv = self.engine.select_best_move(&mut self.board, color)?;
        self.board.make_move(mv);
        debug!("engine played {mv} for {color}");
        Ok((mv, self.advance_turn()))
    }

    /// Hand the turn over and look at the new side's position.
    fn advance_turn(&mut self) -> GameStatus {
        self.selection = None;
        self.to_move = self.to_move.opponent();
        let status = self.board.status(self.to_move);
        match status {
            GameStatus::Checkmate { winner } => {
                info!("Checkmate, {winner} wins after {} plies", self.history().len());
                self.reset();
            }
            GameStatus::Stalemate => info!("Stalemate, {} has no legal move", self.to_move),
            GameStatus::Check => debug!("{} is in check", self.to_move),
            GameStatus::Ongoing => {}
        }
        status
    }

    /// Take back the last ply and give the turn back to whoever played it.
    pub fn undo(&mut self) -> Result<Move, MoveError> {
        let mv = self.board.undo_move()?;
        self.to_move = self.to_move.opponent();
        self.selection = None;
        debug!("undid {mv}");
        Ok(mv)
    }

    /// Undo plies until a human side is to move again.
    ///
    /// Against the engine this removes the engine's reply and the move
    /// before it. Returns the undone plies, most recent first.
    pub fn take_back(&mut self) -> Result<Vec<Move>, MoveError> {
        let mut undone = vec![self.undo()?];
        while self.is_engine_turn() && !self.board.history().is_empty() {
            undone.push(self.undo()?);
        }
        Ok(undone)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(GameOptions::default())
    }
}
