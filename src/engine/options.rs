#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, SearchParams};

/// Side length of one square in pixels
pub const DEFAULT_SQUARE_SIZE: u32 = 100;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameOptions {
    /// Side played by the engine; `None` for two local players
    pub engine_color: Option<Color>,
    pub search: SearchParams,
    /// Pixel size of one square, for click mapping
    pub square_size: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            engine_color: Some(Color::Black),
            search: SearchParams::default(),
            square_size: DEFAULT_SQUARE_SIZE,
        }
    }
}

impl GameOptions {
    /// Both sides played by people at the same board.
    #[must_use]
    pub fn two_players() -> Self {
        GameOptions {
            engine_color: None,
            ..GameOptions::default()
        }
    }
}
