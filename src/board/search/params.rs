#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::DEFAULT_DEPTH;

/// Tunable knobs for the root search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParams {
    /// Plies searched below each root move
    pub depth: u32,
    /// Add the victim's value to a capturing root move's score
    pub capture_bonus: bool,
    /// Seed for the tie-break RNG; `None` draws from entropy
    pub seed: Option<u64>,
    /// Worker threads for root scoring
    pub threads: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: DEFAULT_DEPTH,
            capture_bonus: true,
            seed: None,
            threads: 1,
        }
    }
}
