//! Core domain types for the repair puzzle
//!
//! This module contains the fundamental value types and the matcher that scores
//! a submitted sequence against the secret code. Everything here is pure: no
//! I/O, no session state.

mod hints;
mod sequence;
mod symbol;

pub use hints::{Evaluation, HintSummary, evaluate};
pub use sequence::{SecretCode, Sequence};
pub use symbol::{IdentError, SlotId, Symbol};
