//! Validated puzzle definition
//!
//! A [`Puzzle`] is everything a session needs at start: the secret code, the
//! slot identifiers, the symbol vocabulary and the turn budget. Construction
//! checks the invariants once so the engine can rely on them.

use crate::core::{SecretCode, SlotId, Symbol};
use rustc_hash::FxHashSet;

/// Error type for an inconsistent puzzle definition
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("puzzle needs at least one slot")]
    NoSlots,
    #[error("slot \"{0}\" is listed more than once")]
    DuplicateSlot(SlotId),
    #[error("symbol vocabulary must not be empty")]
    EmptyVocabulary,
    #[error("symbol \"{0}\" is listed more than once")]
    DuplicateSymbol(Symbol),
    #[error("code has {code} symbols but there are {slots} slots")]
    CodeLength { code: usize, slots: usize },
    #[error("code symbol \"{0}\" is not in the vocabulary")]
    UnknownCodeSymbol(Symbol),
    #[error("turn budget must be at least 1")]
    NoTurns,
}

/// A validated puzzle definition
#[derive(Debug, Clone)]
pub struct Puzzle {
    code: SecretCode,
    slots: Vec<SlotId>,
    vocabulary: Vec<Symbol>,
    turn_budget: usize,
}

impl Puzzle {
    /// Build a puzzle, checking every structural invariant
    ///
    /// # Errors
    /// Returns `PuzzleError` if there are no slots, a slot or symbol repeats,
    /// the vocabulary is empty, the code length differs from the slot count,
    /// the code uses a symbol outside the vocabulary, or the budget is zero.
    pub fn new(
        code: Vec<Symbol>,
        slots: Vec<SlotId>,
        vocabulary: Vec<Symbol>,
        turn_budget: usize,
    ) -> Result<Self, PuzzleError> {
        if slots.is_empty() {
            return Err(PuzzleError::NoSlots);
        }

        let mut seen_slots = FxHashSet::default();
        for slot in &slots {
            if !seen_slots.insert(slot) {
                return Err(PuzzleError::DuplicateSlot(slot.clone()));
            }
        }

        if vocabulary.is_empty() {
            return Err(PuzzleError::EmptyVocabulary);
        }

        let mut seen_symbols = FxHashSet::default();
        for symbol in &vocabulary {
            if !seen_symbols.insert(symbol) {
                return Err(PuzzleError::DuplicateSymbol(symbol.clone()));
            }
        }

        if code.len() != slots.len() {
            return Err(PuzzleError::CodeLength {
                code: code.len(),
                slots: slots.len(),
            });
        }

        if let Some(unknown) = code.iter().find(|symbol| !seen_symbols.contains(symbol)) {
            return Err(PuzzleError::UnknownCodeSymbol(unknown.clone()));
        }

        if turn_budget == 0 {
            return Err(PuzzleError::NoTurns);
        }

        Ok(Self {
            code: SecretCode::new(code),
            slots,
            vocabulary,
            turn_budget,
        })
    }

    #[inline]
    #[must_use]
    pub fn code(&self) -> &SecretCode {
        &self.code
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[SlotId] {
        &self.slots
    }

    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &[Symbol] {
        &self.vocabulary
    }

    #[inline]
    #[must_use]
    pub const fn turn_budget(&self) -> usize {
        self.turn_budget
    }

    /// Index of the slot named `name`
    #[must_use]
    pub fn slot_index(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.as_str() == name)
    }

    /// Vocabulary entry named `name`
    #[must_use]
    pub fn symbol(&self, name: &str) -> Option<&Symbol> {
        self.vocabulary.iter().find(|symbol| symbol.as_str() == name)
    }
}
