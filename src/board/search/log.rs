use std::fmt;

use ::log::info;

use super::super::{Color, Move};

/// Summary of one root search.
#[derive(Clone, Debug)]
pub struct SearchInfo {
    pub color: Color,
    pub depth: u32,
    pub best: Move,
    pub score: i32,
    pub ties: usize,
    pub nodes: u64,
    pub cutoffs: u64,
    pub time_ms: u128,
}

impl fmt::Display for SearchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} depth {} best {} score {} ties {} nodes {} cutoffs {} time {}ms",
            self.color,
            self.depth,
            self.best,
            self.score,
            self.ties,
            self.nodes,
            self.cutoffs,
            self.time_ms
        )
    }
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

/// Forwards summaries to the `log` facade at info level.
pub struct LogFacade;

impl SearchLogger for LogFacade {
    fn info(&self, info: &SearchInfo) {
        info!("search {info}");
    }
}
