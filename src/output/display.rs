//! Console rendering of engine state

use super::formatters::{framed, hint_lines, join, loadout};
use crate::core::HintSummary;
use crate::engine::GameEngine;
use colored::Colorize;
use std::io::{self, Write};

const RULE: &str = "##################################################";

/// Print the command reference box
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_commands<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{}", framed(""))?;
    writeln!(out, "{}", framed("COMMANDS"))?;
    writeln!(out, "{}", framed(""))?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{}", framed(""))?;
    for command in [
        "load utilX chipY",
        "execute",
        "status",
        "commands",
        "show phases",
        "show chips",
        "show utilities",
        "quit",
    ] {
        writeln!(out, "{}", framed(command))?;
    }
    writeln!(out, "{}", framed(""))?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{RULE}")
}

/// Print one framed box per executed turn, oldest first
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_history<W: Write>(out: &mut W, engine: &GameEngine) -> io::Result<()> {
    if engine.history().is_empty() {
        return writeln!(out, "no phases executed yet.");
    }

    for (i, record) in engine.history().iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "{}", framed(""))?;
        writeln!(out, "{}", framed(&format!("PHASE {}", i + 1)))?;
        writeln!(out, "{}", framed(""))?;
        writeln!(out, "{}", framed("SEQUENCE"))?;
        writeln!(out, "{}", framed(""))?;
        writeln!(out, "{}", framed(&loadout(engine.slots(), &record.sequence)))?;
        writeln!(out, "{}", framed(""))?;
        writeln!(out, "{}", framed("HINTS"))?;
        writeln!(out, "{}", framed(""))?;
        if record.solved {
            writeln!(out, "{}", framed("repaired."))?;
        } else {
            for line in hint_lines(record.hints) {
                writeln!(out, "{}", framed(&line))?;
            }
        }
        writeln!(out, "{RULE}")?;
    }
    Ok(())
}

/// Print the feedback for the turn just executed
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_hints<W: Write>(out: &mut W, hints: HintSummary) -> io::Result<()> {
    for line in hint_lines(hints) {
        writeln!(out, "{}", line.yellow())?;
    }
    Ok(())
}

/// Print turn counters and the loadout under construction
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_status<W: Write>(out: &mut W, engine: &GameEngine) -> io::Result<()> {
    let status = engine.status();
    writeln!(
        out,
        "phase {} of {}, {} remaining",
        status.turn,
        engine.turn_budget(),
        status.turns_remaining
    )?;
    writeln!(
        out,
        "loadout: {} ({} of {} chips loaded)",
        loadout(engine.slots(), &status.sequence),
        status.sequence.filled_count(),
        status.sequence.slot_count()
    )
}

/// Print the valid chip names
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_slots<W: Write>(out: &mut W, engine: &GameEngine) -> io::Result<()> {
    writeln!(out, "valid chips: {}", join(engine.slots(), ", "))
}

/// Print the valid utility names
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_symbols<W: Write>(out: &mut W, engine: &GameEngine) -> io::Result<()> {
    writeln!(out, "valid utilities: {}", join(engine.vocabulary(), ", "))
}
