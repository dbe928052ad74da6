//! Intent dispatch
//!
//! Applies one parsed [`Intent`] to the engine and reports what happened.
//! Rendering is left to the session driver.

use super::Intent;
use crate::engine::{GameEngine, PlaceError, TurnError, TurnOutcome};

/// Result of applying one intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Placed(String),
    Rejected(PlaceError),
    Turn(TurnOutcome),
    History,
    Status,
    Slots,
    Symbols,
    Commands,
    Quit,
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Won { turns: usize },
    Lost,
    /// Player quit or input ran out
    Abandoned,
}

/// Apply `intent` to `engine`
///
/// Only `ExecuteTurn` mutates the board; only `PlaceSymbol` and
/// `ExecuteTurn` touch the current sequence.
///
/// # Errors
///
/// Propagates `TurnError` if a turn is requested after the session ended.
pub fn dispatch(engine: &mut GameEngine, intent: Intent) -> Result<Response, TurnError> {
    let response = match intent {
        Intent::PlaceSymbol { symbol, slot } => match engine.place(&slot, &symbol) {
            Ok(message) => Response::Placed(message),
            Err(err) => Response::Rejected(err),
        },
        Intent::ExecuteTurn => Response::Turn(engine.execute_turn()?),
        Intent::ShowHistory => Response::History,
        Intent::ShowStatus => Response::Status,
        Intent::ShowSlots => Response::Slots,
        Intent::ShowSymbols => Response::Symbols,
        Intent::ShowCommands => Response::Commands,
        Intent::Quit => Response::Quit,
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HintSummary, SlotId, Symbol};
    use crate::engine::{EngineState, Puzzle};

    fn engine() -> GameEngine {
        let sym = |s: &str| Symbol::new(s).unwrap();
        let puzzle = Puzzle::new(
            vec![sym("X"), sym("Y")],
            vec![SlotId::new("c0").unwrap(), SlotId::new("c1").unwrap()],
            vec![sym("X"), sym("Y"), sym("Z")],
            2,
        )
        .unwrap();
        GameEngine::new(puzzle)
    }

    fn run(engine: &mut GameEngine, line: &str) -> Response {
        dispatch(engine, line.parse().unwrap()).unwrap()
    }

    #[test]
    fn place_then_execute() {
        let mut engine = engine();
        assert_eq!(
            run(&mut engine, "load X c0"),
            Response::Placed("loaded X into c0.".to_string())
        );
        assert_eq!(
            run(&mut engine, "execute"),
            Response::Turn(TurnOutcome::ContinueWithHints(HintSummary::new(1, 0)))
        );
    }

    #[test]
    fn rejected_place_is_reported() {
        let mut engine = engine();
        let response = run(&mut engine, "load W c0");
        assert!(matches!(
            response,
            Response::Rejected(PlaceError::UnknownSymbol { .. })
        ));
    }

    #[test]
    fn queries_do_not_mutate() {
        let mut engine = engine();
        run(&mut engine, "load Z c1");
        let before = engine.status();

        for line in ["show phases", "status", "show chips", "show utilities", "help"] {
            run(&mut engine, line);
        }

        assert_eq!(engine.status(), before);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn execute_after_end_propagates_error() {
        let mut engine = engine();
        run(&mut engine, "load X c0");
        run(&mut engine, "load Y c1");
        run(&mut engine, "execute");
        assert_eq!(engine.state(), EngineState::Won);

        let result = dispatch(&mut engine, Intent::ExecuteTurn);
        assert_eq!(result, Err(TurnError::SessionOver(EngineState::Won)));
    }
}
