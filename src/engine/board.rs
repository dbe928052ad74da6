//! Chronological record of executed turns

use crate::core::{HintSummary, Sequence};

/// One executed turn: the sequence as submitted and the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub sequence: Sequence,
    pub hints: HintSummary,
    pub solved: bool,
}

/// Append-only list of turn records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board(Vec<TurnRecord>);

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, record: TurnRecord) {
        self.0.push(record);
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[TurnRecord] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&TurnRecord> {
        self.0.last()
    }
}
