//! Search constants.

/// Score of a side that has no legal move; also the open alpha-beta window
pub const INFINITY: i32 = 100_000;

/// Plies searched below each root move
pub const DEFAULT_DEPTH: u32 = 3;
