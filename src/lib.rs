//! Panel Repair
//!
//! A turn-based code-breaking puzzle: load utilities into chips, execute the
//! phase, and read the feedback until the hidden code is found or the repair
//! attempts run out.
//!
//! # Quick Start
//!
//! ```rust
//! use panel_repair::config::{DEMO, PuzzleConfig};
//! use panel_repair::engine::{GameEngine, TurnOutcome};
//!
//! let puzzle = PuzzleConfig::from_toml(DEMO).unwrap().puzzle().unwrap();
//! let mut engine = GameEngine::new(puzzle);
//!
//! engine.place("A1", "relay").unwrap();
//! match engine.execute_turn().unwrap() {
//!     TurnOutcome::ContinueWithHints(hints) => println!("{hints}"),
//!     outcome => println!("{outcome:?}"),
//! }
//! ```

// Core domain types and the matcher
pub mod core;

// Session state machine
pub mod engine;

// Puzzle definitions
pub mod config;

// Intent parsing, dispatch and session drivers
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
