//! Terminal output formatting
//!
//! Console rendering of the board and prompts, plus the terminal effects.

pub mod display;
pub mod effects;
pub mod formatters;

pub use display::{
    write_commands, write_hints, write_history, write_slots, write_status, write_symbols,
};
pub use effects::Effects;
