//! Root-parallel move scoring.
//!
//! Root moves are dealt round-robin to scoped worker threads. Each worker
//! searches on its own clone of the board, so no position is ever shared
//! mutably. Results carry their generation index and are re-sorted, which
//! keeps the outcome identical to the sequential search.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use parking_lot::Mutex;

use crate::board::{Board, Color, Move};

use super::{score_root_move, ScoredMove, SearchParams, SearchStats};

pub(crate) fn score_root_parallel(
    board: &Board,
    color: Color,
    moves: &[Move],
    params: &SearchParams,
) -> (Vec<ScoredMove>, SearchStats) {
    let threads = params.threads.clamp(1, moves.len().max(1));
    let results: Mutex<Vec<(usize, ScoredMove)>> = Mutex::new(Vec::with_capacity(moves.len()));
    let total_nodes = AtomicU64::new(0);
    let total_cutoffs = AtomicU64::new(0);

    thread::scope(|scope| {
        for worker in 0..threads {
            let results = &results;
            let total_nodes = &total_nodes;
            let total_cutoffs = &total_cutoffs;
            scope.spawn(move || {
                let mut local = board.clone();
                let mut stats = SearchStats::default();
                for (idx, &mv) in moves.iter().enumerate().skip(worker).step_by(threads) {
                    let scored = score_root_move(&mut local, mv, color, params, &mut stats);
                    results.lock().push((idx, scored));
                }
                total_nodes.fetch_add(stats.nodes, Ordering::Relaxed);
                total_cutoffs.fetch_add(stats.cutoffs, Ordering::Relaxed);
            });
        }
    });

    let mut results = results.into_inner();
    results.sort_by_key(|&(idx, _)| idx);
    let stats = SearchStats {
        nodes: total_nodes.into_inner(),
        cutoffs: total_cutoffs.into_inner(),
    };
    (results.into_iter().map(|(_, scored)| scored).collect(), stats)
}
