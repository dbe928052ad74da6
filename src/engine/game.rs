//! Turn state machine
//!
//! ```text
//! AwaitingInput --execute_turn--> AwaitingInput   (hints, turns left)
//!                             \-> Won             (code matched)
//!                             \-> Lost            (budget used up)
//! ```
//!
//! Turn execution itself is transient: it always folds back into one of the
//! three stored states before `execute_turn` returns.

use super::{Board, Puzzle, TurnRecord};
use crate::core::{Evaluation, HintSummary, Sequence, SlotId, Symbol, evaluate};
use crate::output::formatters::join;
use tracing::{debug, info};

/// Stored engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    AwaitingInput,
    Won,
    Lost,
}

impl EngineState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What happened when a turn was executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Solved,
    ContinueWithHints(HintSummary),
    /// Final turn used without solving; carries that turn's hints
    Exhausted(HintSummary),
}

/// Rejected placement; the session state is left untouched
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("utility must be valid: {}", join(.valid, ", "))]
    UnknownSymbol { given: String, valid: Vec<Symbol> },
    #[error("chip must be valid: {}", join(.valid, ", "))]
    UnknownSlot { given: String, valid: Vec<SlotId> },
}

/// Turn execution requested after the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("session is over ({0:?}); no further turns can be executed")]
    SessionOver(EngineState),
}

/// Read-only snapshot for prompt rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// 1-based number of the turn being built
    pub turn: usize,
    pub turns_remaining: usize,
    pub final_turn: bool,
    pub sequence: Sequence,
}

/// Session state for a single play-through
#[derive(Debug, Clone)]
pub struct GameEngine {
    puzzle: Puzzle,
    current: Sequence,
    turns_taken: usize,
    board: Board,
    state: EngineState,
}

impl GameEngine {
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let current = Sequence::empty(puzzle.slots().len());
        Self {
            puzzle,
            current,
            turns_taken: 0,
            board: Board::new(),
            state: EngineState::AwaitingInput,
        }
    }

    /// Put `symbol` into `slot` in the sequence under construction
    ///
    /// Overwriting a filled slot is allowed; the last placement wins.
    ///
    /// # Errors
    /// Returns `PlaceError` if the symbol is not in the vocabulary (checked
    /// first) or the slot does not exist. Nothing changes on error.
    pub fn place(&mut self, slot: &str, symbol: &str) -> Result<String, PlaceError> {
        let Some(symbol) = self.puzzle.symbol(symbol).cloned() else {
            return Err(PlaceError::UnknownSymbol {
                given: symbol.to_string(),
                valid: self.puzzle.vocabulary().to_vec(),
            });
        };
        let Some(index) = self.puzzle.slot_index(slot) else {
            return Err(PlaceError::UnknownSlot {
                given: slot.to_string(),
                valid: self.puzzle.slots().to_vec(),
            });
        };

        let message = format!("loaded {symbol} into {}.", self.puzzle.slots()[index]);
        debug!(slot, %symbol, "symbol placed");
        self.current.set(index, symbol);
        Ok(message)
    }

    /// Submit the current sequence and score it
    ///
    /// The sequence is scored as it stands, empty slots included, and then
    /// reset to empty for the next turn.
    ///
    /// # Errors
    /// Returns `TurnError::SessionOver` if the session already ended. This is
    /// an integration bug; drivers check [`GameEngine::state`] first.
    pub fn execute_turn(&mut self) -> Result<TurnOutcome, TurnError> {
        if self.state.is_terminal() {
            return Err(TurnError::SessionOver(self.state));
        }

        self.turns_taken += 1;
        let sequence = self.current.take();
        let evaluation = evaluate(self.puzzle.code(), &sequence);
        let hints = evaluation.hints();

        self.board.append(TurnRecord {
            sequence,
            hints,
            solved: evaluation.is_solved(),
        });

        let outcome = match evaluation {
            Evaluation::Solved => {
                self.state = EngineState::Won;
                TurnOutcome::Solved
            }
            Evaluation::Unsolved(hints) if self.turns_taken == self.puzzle.turn_budget() => {
                self.state = EngineState::Lost;
                TurnOutcome::Exhausted(hints)
            }
            Evaluation::Unsolved(hints) => TurnOutcome::ContinueWithHints(hints),
        };

        info!(
            turn = self.turns_taken,
            exact = hints.exact,
            misplaced = hints.misplaced,
            state = ?self.state,
            "turn executed"
        );
        Ok(outcome)
    }

    /// Every executed turn, oldest first
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        self.board.records()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        let turns_remaining = self.puzzle.turn_budget() - self.turns_taken;
        Status {
            turn: self.turns_taken + 1,
            turns_remaining,
            final_turn: turns_remaining == 1,
            sequence: self.current.clone(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[SlotId] {
        self.puzzle.slots()
    }

    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &[Symbol] {
        self.puzzle.vocabulary()
    }

    #[inline]
    #[must_use]
    pub const fn turn_budget(&self) -> usize {
        self.puzzle.turn_budget()
    }

    #[inline]
    #[must_use]
    pub const fn turns_taken(&self) -> usize {
        self.turns_taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(code: &[&str], vocabulary: &[&str], turns: usize) -> Puzzle {
        let sym = |s: &&str| Symbol::new(*s).unwrap();
        let slots = (0..code.len())
            .map(|i| SlotId::new(format!("slot{i}")).unwrap())
            .collect();
        Puzzle::new(
            code.iter().map(sym).collect(),
            slots,
            vocabulary.iter().map(sym).collect(),
            turns,
        )
        .unwrap()
    }

    fn xy_engine(turns: usize) -> GameEngine {
        GameEngine::new(puzzle(&["X", "Y"], &["X", "Y", "Z"], turns))
    }

    #[test]
    fn initial_state() {
        let engine = xy_engine(3);
        assert_eq!(engine.state(), EngineState::AwaitingInput);
        assert!(engine.history().is_empty());

        let status = engine.status();
        assert_eq!(status.turn, 1);
        assert_eq!(status.turns_remaining, 3);
        assert!(!status.final_turn);
        assert_eq!(status.sequence, Sequence::empty(2));
    }

    #[test]
    fn place_reports_loaded_symbol() {
        let mut engine = xy_engine(3);
        let message = engine.place("slot1", "Z").unwrap();
        assert_eq!(message, "loaded Z into slot1.");
        assert_eq!(
            engine.status().sequence.get(1).map(Symbol::as_str),
            Some("Z")
        );
    }

    #[test]
    fn place_unknown_symbol_is_noop() {
        let mut engine = xy_engine(3);
        engine.place("slot0", "X").unwrap();
        let before = engine.status();

        let err = engine.place("slot1", "Q").unwrap_err();
        assert!(matches!(err, PlaceError::UnknownSymbol { ref given, .. } if given == "Q"));
        assert_eq!(err.to_string(), "utility must be valid: X, Y, Z");
        assert_eq!(engine.status(), before);
    }

    #[test]
    fn place_unknown_slot_is_noop() {
        let mut engine = xy_engine(3);
        let err = engine.place("slot7", "X").unwrap_err();
        assert_eq!(err.to_string(), "chip must be valid: slot0, slot1");
        assert_eq!(engine.status().sequence, Sequence::empty(2));
    }

    #[test]
    fn symbol_is_checked_before_slot() {
        let mut engine = xy_engine(3);
        let err = engine.place("slot7", "Q").unwrap_err();
        assert!(matches!(err, PlaceError::UnknownSymbol { .. }));
    }

    #[test]
    fn place_overwrites_last_write_wins() {
        let mut engine = xy_engine(3);
        engine.place("slot0", "Z").unwrap();
        engine.place("slot0", "X").unwrap();
        assert_eq!(
            engine.status().sequence.get(0).map(Symbol::as_str),
            Some("X")
        );
    }

    #[test]
    fn two_turn_scenario() {
        let mut engine = xy_engine(2);

        engine.place("slot0", "X").unwrap();
        engine.place("slot1", "Z").unwrap();
        assert_eq!(
            engine.execute_turn(),
            Ok(TurnOutcome::ContinueWithHints(HintSummary::new(1, 0)))
        );
        assert_eq!(engine.status().sequence, Sequence::empty(2));
        assert!(engine.status().final_turn);

        engine.place("slot0", "X").unwrap();
        engine.place("slot1", "Y").unwrap();
        assert_eq!(engine.execute_turn(), Ok(TurnOutcome::Solved));
        assert_eq!(engine.state(), EngineState::Won);
        assert_eq!(engine.history().len(), 2);
        assert!(engine.history()[1].solved);
    }

    #[test]
    fn exhausting_budget_loses() {
        let mut engine = xy_engine(3);
        for turn in 1..=3 {
            engine.place("slot0", "Y").unwrap();
            let outcome = engine.execute_turn().unwrap();
            if turn < 3 {
                assert_eq!(
                    outcome,
                    TurnOutcome::ContinueWithHints(HintSummary::new(0, 1))
                );
            } else {
                assert_eq!(outcome, TurnOutcome::Exhausted(HintSummary::new(0, 1)));
            }
        }

        assert_eq!(engine.state(), EngineState::Lost);
        assert_eq!(engine.history().len(), 3);
        assert_eq!(engine.status().turns_remaining, 0);
    }

    #[test]
    fn solving_early_wins_regardless_of_budget() {
        let mut engine = xy_engine(10);
        engine.place("slot0", "X").unwrap();
        engine.place("slot1", "Y").unwrap();

        assert_eq!(engine.execute_turn(), Ok(TurnOutcome::Solved));
        assert_eq!(engine.state(), EngineState::Won);
        assert_eq!(engine.history().len(), 1);
        assert!(engine.history()[0].hints.is_empty());
    }

    #[test]
    fn solving_on_final_turn_wins() {
        let mut engine = xy_engine(1);
        engine.place("slot0", "X").unwrap();
        engine.place("slot1", "Y").unwrap();
        assert_eq!(engine.execute_turn(), Ok(TurnOutcome::Solved));
        assert_eq!(engine.state(), EngineState::Won);
    }

    #[test]
    fn incomplete_sequence_is_scored_as_submitted() {
        let mut engine = xy_engine(3);
        engine.place("slot1", "X").unwrap();

        let outcome = engine.execute_turn().unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::ContinueWithHints(HintSummary::new(0, 1))
        );
        assert_eq!(engine.history()[0].sequence.filled_count(), 1);
    }

    #[test]
    fn execute_after_termination_is_rejected() {
        let mut engine = xy_engine(1);
        engine.execute_turn().unwrap();
        assert_eq!(engine.state(), EngineState::Lost);

        assert_eq!(
            engine.execute_turn(),
            Err(TurnError::SessionOver(EngineState::Lost))
        );
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.turns_taken(), 1);
    }

    #[test]
    fn history_is_read_stable() {
        let mut engine = xy_engine(3);
        engine.place("slot0", "Z").unwrap();
        engine.execute_turn().unwrap();

        let first = engine.history().to_vec();
        let second = engine.history().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn history_records_submitted_sequence() {
        let mut engine = xy_engine(3);
        engine.place("slot0", "Y").unwrap();
        engine.place("slot1", "X").unwrap();
        engine.execute_turn().unwrap();

        let record = &engine.history()[0];
        assert_eq!(format!("{}", record.sequence), "Y X");
        assert_eq!(record.hints, HintSummary::new(0, 2));
        assert!(!record.solved);
    }
}
