//! Sequences of symbols
//!
//! A [`Sequence`] is the guess under construction: one entry per slot, each
//! either a symbol or empty. A [`SecretCode`] is the fully populated target the
//! sequence is scored against.

use super::Symbol;
use std::fmt;

/// Marker printed for an empty slot
pub const EMPTY_MARKER: &str = "_";

/// A guess under construction, one optional symbol per slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(Vec<Option<Symbol>>);

impl Sequence {
    /// Create a sequence with every slot empty
    #[must_use]
    pub fn empty(slot_count: usize) -> Self {
        Self(vec![None; slot_count])
    }

    /// Create a sequence from explicit entries
    #[must_use]
    pub fn from_entries(entries: Vec<Option<Symbol>>) -> Self {
        Self(entries)
    }

    #[inline]
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Option<Symbol>] {
        &self.0
    }

    /// Symbol at the given slot index, if one has been placed
    ///
    /// # Panics
    /// Panics if `index` is out of range
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.0[index].as_ref()
    }

    /// Overwrite the entry at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of range
    pub fn set(&mut self, index: usize, symbol: Symbol) {
        self.0[index] = Some(symbol);
    }

    /// Number of slots holding a symbol
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|entry| entry.is_some()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Reset every slot to empty, returning the previous contents
    pub fn take(&mut self) -> Self {
        let slot_count = self.0.len();
        Self(std::mem::replace(&mut self.0, vec![None; slot_count]))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match entry {
                Some(symbol) => write!(f, "{symbol}")?,
                None => f.write_str(EMPTY_MARKER)?,
            }
        }
        Ok(())
    }
}

/// The hidden target sequence
///
/// Fixed for the lifetime of a session. It deliberately has no `Display`
/// impl and its `Debug` output is redacted so it cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretCode(Vec<Symbol>);

impl SecretCode {
    #[must_use]
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    #[inline]
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }
}

impl fmt::Debug for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretCode(<{} symbols redacted>)", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(text: &str) -> Symbol {
        Symbol::new(text).unwrap()
    }

    #[test]
    fn empty_sequence_has_no_symbols() {
        let sequence = Sequence::empty(4);
        assert_eq!(sequence.slot_count(), 4);
        assert_eq!(sequence.filled_count(), 0);
        assert!(!sequence.is_complete());
        assert!(sequence.entries().iter().all(Option::is_none));
    }

    #[test]
    fn set_overwrites_entry() {
        let mut sequence = Sequence::empty(2);
        sequence.set(1, sym("fuse"));
        sequence.set(1, sym("coil"));

        assert_eq!(sequence.get(0), None);
        assert_eq!(sequence.get(1), Some(&sym("coil")));
        assert_eq!(sequence.filled_count(), 1);
    }

    #[test]
    fn take_resets_to_empty() {
        let mut sequence = Sequence::empty(2);
        sequence.set(0, sym("fuse"));
        sequence.set(1, sym("coil"));
        assert!(sequence.is_complete());

        let taken = sequence.take();
        assert_eq!(taken.filled_count(), 2);
        assert_eq!(sequence, Sequence::empty(2));
    }

    #[test]
    fn display_marks_empty_slots() {
        let mut sequence = Sequence::empty(3);
        sequence.set(1, sym("relay"));
        assert_eq!(format!("{sequence}"), "_ relay _");
    }

    #[test]
    fn secret_code_debug_is_redacted() {
        let code = SecretCode::new(vec![sym("relay"), sym("fuse")]);
        let debug = format!("{code:?}");
        assert!(!debug.contains("relay"));
        assert!(debug.contains("2 symbols"));
    }
}
