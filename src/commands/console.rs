//! Console session
//!
//! Line-based play: prompt, read a command, apply it, render the response,
//! until the panel is repaired, the phases run out, or input ends.

use super::notify::{Notifier, NotifyProgress};
use super::{Intent, Response, SessionEnd, dispatch};
use crate::engine::{GameEngine, TurnOutcome};
use crate::output::effects::{START_ACTIONS, STOP_ACTIONS};
use crate::output::formatters::prompt;
use crate::output::{
    Effects, write_commands, write_hints, write_history, write_slots, write_status,
    write_symbols,
};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Run one console session to completion
///
/// `notifier` is invoked once, after a solving turn, before the closing
/// effect. Its failure is reported to the player but does not change the
/// returned [`SessionEnd`]. Everything except the execution bar animation,
/// which [`Effects::execution_bar`] draws on the terminal, goes to `out`.
///
/// # Errors
///
/// Returns an error on I/O failure, or if the engine rejects a turn because
/// the session already ended.
pub fn run_console<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    effects: &Effects,
    notifier: Option<&dyn Notifier>,
    input: R,
    mut out: W,
) -> Result<SessionEnd> {
    effects.diagnostic(&mut out, 10, "PROGRAM INITIATED.", START_ACTIONS)?;
    write_commands(&mut out)?;

    let mut lines = input.lines();

    loop {
        let status = engine.status();
        write!(out, "{}", prompt(&status, engine.slots()))?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            info!(turns = engine.turns_taken(), "input closed");
            return Ok(SessionEnd::Abandoned);
        };
        let line = line?;

        let intent = match line.parse::<Intent>() {
            Ok(intent) => intent,
            Err(err) => {
                writeln!(out, "{}", err.to_string().red())?;
                continue;
            }
        };

        match dispatch(engine, intent)? {
            Response::Placed(message) => writeln!(out, "{message}")?,
            Response::Rejected(err) => writeln!(out, "{}", err.to_string().red())?,
            Response::History => write_history(&mut out, engine)?,
            Response::Status => write_status(&mut out, engine)?,
            Response::Slots => write_slots(&mut out, engine)?,
            Response::Symbols => write_symbols(&mut out, engine)?,
            Response::Commands => write_commands(&mut out)?,
            Response::Quit => {
                effects.diagnostic(&mut out, 1, "PROGRAM TERMINATED.", STOP_ACTIONS)?;
                return Ok(SessionEnd::Abandoned);
            }
            Response::Turn(TurnOutcome::ContinueWithHints(hints)) => {
                effects.execution_bar(&mut out, "executing...", "unable to repair.")?;
                write_hints(&mut out, hints)?;
            }
            Response::Turn(TurnOutcome::Exhausted(hints)) => {
                effects.execution_bar(&mut out, "executing...", "unable to repair.")?;
                write_hints(&mut out, hints)?;
                writeln!(out, "\n{}\n", "ERROR! REPAIR ATTEMPTS EXCEEDED.".red().bold())?;
                effects.diagnostic(&mut out, 4, "PROGRAM TERMINATED.", STOP_ACTIONS)?;
                return Ok(SessionEnd::Lost);
            }
            Response::Turn(TurnOutcome::Solved) => {
                effects.execution_bar(&mut out, "executing...", "repaired.")?;
                if let Some(notifier) = notifier {
                    send_notification(&mut out, notifier)?;
                }
                effects.diagnostic(&mut out, 3, "PROGRAM TERMINATED.", STOP_ACTIONS)?;
                return Ok(SessionEnd::Won {
                    turns: engine.turns_taken(),
                });
            }
        }
    }
}

fn send_notification<W: Write>(out: &mut W, notifier: &dyn Notifier) -> Result<()> {
    writeln!(out, "transmitting data to server...")?;
    out.flush()?;

    let mut written = Ok(());
    let result = notifier.notify(&mut |step| {
        if written.is_ok() {
            written = writeln!(out, "{}", step.message()).and_then(|()| out.flush());
        }
    });
    written?;

    match result {
        Ok(()) => writeln!(out, "{}", "transmission complete.".green())?,
        Err(err) => {
            warn!(error = %err, "success notification failed");
            writeln!(out, "{}", "error transmitting data to server.".red())?;
        }
    }
    Ok(())
}
