//! Game engine
//!
//! Owns the session state for one play-through and drives the turn state
//! machine on top of the matcher in [`crate::core`].

mod board;
mod game;
mod puzzle;

pub use board::{Board, TurnRecord};
pub use game::{EngineState, GameEngine, PlaceError, Status, TurnError, TurnOutcome};
pub use puzzle::{Puzzle, PuzzleError};
