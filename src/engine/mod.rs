//! Turn controller for a two-player game with an optional engine side.
//!
//! The controller owns the board, whose turn it is and the current
//! selection. Hosts feed it clicks (as squares or pixels) and read back
//! what happened; when the engine's side comes up it searches and replies
//! synchronously before returning.

mod controller;
mod geometry;
mod options;

pub use controller::{ClickOutcome, Game};
pub use geometry::BoardGeometry;
pub use options::{GameOptions, DEFAULT_SQUARE_SIZE};
