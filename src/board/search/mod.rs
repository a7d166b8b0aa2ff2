//! Minimax search with alpha-beta pruning.
//!
//! Raw scores are White-positive: White maximises, Black minimises. The
//! root converts them to the mover's point of view, adds the capture bonus
//! and keeps every move tying the best score. Captures win ties by victim
//! value; otherwise the seeded RNG picks.

mod constants;
mod log;
mod move_order;
mod params;
mod smp;

use std::time::Instant;

use ::log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{Board, Color, Move, SearchError};

pub use constants::{DEFAULT_DEPTH, INFINITY};
pub use self::log::{LogFacade, SearchInfo, SearchLogger};
pub use move_order::{order_moves, victim_value};
pub use params::SearchParams;

/// Work counters for one root search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn reset_search(&mut self) {
        self.nodes = 0;
        self.cutoffs = 0;
    }

    pub(crate) fn absorb(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// A root move with its score from the mover's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// `maximizing` means White is to move. A checkmated side scores
/// `-INFINITY` for White or `INFINITY` for Black; stalemate scores 0. Every
/// move explored is undone before returning.
pub fn minimax(
    board: &mut Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;
    if depth == 0 {
        return board.evaluate();
    }

    let side = if maximizing { Color::White } else { Color::Black };
    let mut moves = board.legal_moves(side);
    if moves.is_empty() {
        if !board.is_in_check(side) {
            return 0;
        }
        return if maximizing { -INFINITY } else { INFINITY };
    }
    order_moves(board, &mut moves);

    let mut best = if maximizing { -INFINITY } else { INFINITY };
    for mv in moves {
        let score = {
            let mut child = board.speculate(mv);
            minimax(child.board_mut(), depth - 1, alpha, beta, !maximizing, stats)
        };
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }
    best
}

/// Score one root move for `color` on `board`.
pub(crate) fn score_root_move(
    board: &mut Board,
    mv: Move,
    color: Color,
    params: &SearchParams,
    stats: &mut SearchStats,
) -> ScoredMove {
    let bonus = if params.capture_bonus {
        victim_value(board, mv)
    } else {
        0
    };
    let raw = {
        let mut child = board.speculate(mv);
        let white_next = color.opponent() == Color::White;
        minimax(child.board_mut(), params.depth, -INFINITY, INFINITY, white_next, stats)
    };
    ScoredMove {
        mv,
        score: color.sign() * raw + bonus,
    }
}

/// Root search driver: owns the parameters, the tie-break RNG and the
/// counters of the last search.
pub struct SearchEngine {
    params: SearchParams,
    rng: StdRng,
    stats: SearchStats,
    logger: Box<dyn SearchLogger + Send>,
}

impl SearchEngine {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        SearchEngine {
            params,
            rng,
            stats: SearchStats::default(),
            logger: Box::new(LogFacade),
        }
    }

    /// Replace where search summaries go.
    #[must_use]
    pub fn with_logger(mut self, logger: Box<dyn SearchLogger + Send>) -> Self {
        self.logger = logger;
        self
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Counters of the most recent root search
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score every legal root move, in generation order.
    pub fn score_root_moves(
        &mut self,
        board: &mut Board,
        color: Color,
    ) -> Result<Vec<ScoredMove>, SearchError> {
        self.stats.reset_search();
        let moves = board.legal_moves(color);
        if moves.is_empty() {
            warn!("{color} has no legal move to search");
            return Err(SearchError::NoLegalMoves { color });
        }
        if self.params.threads > 1 && moves.len() > 1 {
            let (scored, stats) = smp::score_root_parallel(board, color, &moves, &self.params);
            self.stats = stats;
            return Ok(scored);
        }
        let scored = moves
            .into_iter()
            .map(|mv| score_root_move(board, mv, color, &self.params, &mut self.stats))
            .collect();
        Ok(scored)
    }

    /// Pick the move to play for `color`.
    ///
    /// Never returns a move that leaves `color`'s king attacked.
    pub fn select_best_move(&mut self, board: &mut Board, color: Color) -> Result<Move, SearchError> {
        let start = Instant::now();
        let scored = self.score_root_moves(board, color)?;
        let best_score = scored
            .iter()
            .map(|s| s.score)
            .max()
            .ok_or(SearchError::NoLegalMoves { color })?;
        let ties: Vec<Move> = scored
            .iter()
            .filter(|s| s.score == best_score)
            .map(|s| s.mv)
            .collect();

        let best_capture = ties
            .iter()
            .copied()
            .filter(|mv| mv.is_capture())
            .fold(None, |best: Option<Move>, mv| match best {
                Some(b) if victim_value(board, b) >= victim_value(board, mv) => Some(b),
                _ => Some(mv),
            });
        let mut chosen = match best_capture {
            Some(mv) => mv,
            None => *ties
                .choose(&mut self.rng)
                .ok_or(SearchError::NoLegalMoves { color })?,
        };

        if board.would_expose_king(chosen) {
            if let Some(&safe) = ties.iter().find(|&&mv| !board.would_expose_king(mv)) {
                debug!("replacing {chosen} with {safe}: king would be exposed");
                chosen = safe;
            }
        }

        self.logger.info(&SearchInfo {
            color,
            depth: self.params.depth,
            best: chosen,
            score: best_score,
            ties: ties.len(),
            nodes: self.stats.nodes,
            cutoffs: self.stats.cutoffs,
            time_ms: start.elapsed().as_millis(),
        });
        Ok(chosen)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::new(SearchParams::default())
    }
}
