//! Formatting utilities for terminal output

use crate::core::{HintSummary, Sequence, SlotId};
use crate::engine::Status;
use std::fmt::Display;

/// Inner width of the `##`-framed boxes
pub const FRAME_WIDTH: usize = 46;

/// Center `text` inside a `##` frame of [`FRAME_WIDTH`]
///
/// Odd padding goes to the left. Text wider than the frame is not truncated.
#[must_use]
pub fn framed(text: &str) -> String {
    let len = text.chars().count();
    let pad = FRAME_WIDTH.saturating_sub(len);
    let left = pad.div_ceil(2);
    let right = pad / 2;
    format!("##{}{text}{}##", " ".repeat(left), " ".repeat(right))
}

/// `utility` or `utilities` depending on `count`
#[must_use]
pub const fn utilities(count: usize) -> &'static str {
    if count == 1 { "utility" } else { "utilities" }
}

/// One line per feedback category, or a single "no feedback" line
#[must_use]
pub fn hint_lines(hints: HintSummary) -> Vec<String> {
    if hints.is_empty() {
        return vec!["no feedback available.".to_string()];
    }
    vec![
        format!("{} {} effective", hints.exact, utilities(hints.exact)),
        format!(
            "{} {} effective on another chip",
            hints.misplaced,
            utilities(hints.misplaced)
        ),
    ]
}

/// Display every item, separated by `separator`
#[must_use]
pub fn join<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// `A1:relay B2:_` style listing of a sequence against its slots
#[must_use]
pub fn loadout(slots: &[SlotId], sequence: &Sequence) -> String {
    slots
        .iter()
        .zip(sequence.entries())
        .map(|(slot, entry)| match entry {
            Some(symbol) => format!("{slot}:{symbol}"),
            None => format!("{slot}:_"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Input prompt for the turn being built
#[must_use]
pub fn prompt(status: &Status, slots: &[SlotId]) -> String {
    format!(
        "phase {}{} [ {} ]: ",
        status.turn,
        if status.final_turn {
            " (final phase)"
        } else {
            ""
        },
        loadout(slots, &status.sequence)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;

    fn slots() -> Vec<SlotId> {
        ["A1", "B2"]
            .iter()
            .map(|s| SlotId::new(*s).unwrap())
            .collect()
    }

    #[test]
    fn framed_centers_text() {
        let line = framed("abc");
        assert_eq!(line.chars().count(), FRAME_WIDTH + 4);
        assert_eq!(line, format!("##{}abc{}##", " ".repeat(22), " ".repeat(21)));
    }

    #[test]
    fn framed_empty_is_blank_row() {
        assert_eq!(framed(""), format!("##{}##", " ".repeat(FRAME_WIDTH)));
    }

    #[test]
    fn pluralization() {
        assert_eq!(utilities(1), "utility");
        assert_eq!(utilities(0), "utilities");
        assert_eq!(utilities(3), "utilities");
    }

    #[test]
    fn hint_lines_for_empty_hints() {
        assert_eq!(
            hint_lines(HintSummary::default()),
            vec!["no feedback available."]
        );
    }

    #[test]
    fn hint_lines_list_both_categories() {
        assert_eq!(
            hint_lines(HintSummary::new(1, 0)),
            vec![
                "1 utility effective",
                "0 utilities effective on another chip"
            ]
        );
    }

    #[test]
    fn join_uses_separator() {
        assert_eq!(join(&slots(), ", "), "A1, B2");
        assert_eq!(join(&slots(), " "), "A1 B2");
        assert_eq!(join::<SlotId>(&[], ", "), "");
    }

    #[test]
    fn loadout_marks_empty_slots() {
        let mut sequence = Sequence::empty(2);
        sequence.set(0, Symbol::new("relay").unwrap());
        assert_eq!(loadout(&slots(), &sequence), "A1:relay B2:_");
    }

    #[test]
    fn prompt_flags_final_phase() {
        let status = Status {
            turn: 8,
            turns_remaining: 1,
            final_turn: true,
            sequence: Sequence::empty(2),
        };
        assert_eq!(
            prompt(&status, &slots()),
            "phase 8 (final phase) [ A1:_ B2:_ ]: "
        );
    }
}
