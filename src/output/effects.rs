//! Terminal effects
//!
//! Scrolling "diagnostic" text typed out a few characters at a time, and the
//! execution bar shown while a turn runs. Both collapse to their final message
//! when effects are disabled.

use crate::config::PresentationConfig;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Verbs used while the program starts up
pub const START_ACTIONS: &[&str] = &[
    "testing",
    "activating",
    "opening",
    "allocating",
    "hooking",
    "creating",
    "notifying",
    "enhancing",
    "signalling",
];

/// Verbs used while the program shuts down
pub const STOP_ACTIONS: &[&str] = &[
    "terminating",
    "deactivating",
    "unloading",
    "deallocation of",
    "unhooking",
    "closing",
];

/// Verbs used while looking for a panel definition
pub const SEARCH_ACTIONS: &[&str] = &[
    "searching for",
    "seeking",
    "locating",
    "hosting",
    "connecting",
    "finding",
    "making",
    "building",
];

const KEYPHRASES: &[&str] = &[
    "transmission...",
    "radial controls...",
    "ciphers...",
    "phases...",
    "chips...",
    "utilities...",
];

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Steps of the execution bar
const BAR_STEPS: u64 = 20;

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn action_lines<R: Rng + ?Sized>(rng: &mut R, actions: &[&str]) -> String {
    let count = rng.random_range(1..=3);
    (0..count)
        .map(|_| format!("{} {}", pick(rng, actions), pick(rng, KEYPHRASES)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn noise_lines<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.random_range(1..=5);
    (0..count)
        .map(|_| {
            (0..50)
                .map(|_| char::from(LETTERS[rng.random_range(0..LETTERS.len())]))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn hex_line<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut line = (0..10)
        .map(|_| format!("0x{:02}", rng.random_range(0..100)))
        .collect::<Vec<_>>()
        .join(" ");
    line.push_str(&rng.random_range(0..10).to_string());
    line
}

/// Generate `blocks` blocks of diagnostic noise ending with `message`
#[must_use]
pub fn diagnostic_text<R: Rng + ?Sized>(
    rng: &mut R,
    blocks: usize,
    message: &str,
    actions: &[&str],
) -> String {
    let mut text = String::new();
    for _ in 0..blocks {
        text.push('\n');
        text.push_str(&action_lines(rng, actions));
        text.push_str("\n\n");
        text.push_str(&noise_lines(rng));
        text.push('\n');
        text.push_str(&hex_line(rng));
        text.push('\n');
        text.push_str(&hex_line(rng));
        text.push('\n');
    }
    text.push('\n');
    text.push_str(&action_lines(rng, actions));
    text.push_str(&format!("\n\n{message}\n"));
    text
}

/// Presentation switches for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effects {
    enabled: bool,
    load_time: Duration,
}

impl Effects {
    #[must_use]
    pub const fn new(enabled: bool, load_time: Duration) -> Self {
        Self { enabled, load_time }
    }

    /// No animation, no delays: only the final messages are written
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(false, Duration::ZERO)
    }

    #[must_use]
    pub const fn from_config(config: &PresentationConfig) -> Self {
        Self::new(config.effects, config.load_time())
    }

    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Type out diagnostic noise followed by `message`
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the writer.
    pub fn diagnostic<W: Write>(
        &self,
        out: &mut W,
        blocks: usize,
        message: &str,
        actions: &[&str],
    ) -> io::Result<()> {
        if !self.enabled {
            return writeln!(out, "{message}");
        }

        let mut rng = rand::rng();
        let chars: Vec<char> = diagnostic_text(&mut rng, blocks, message, actions)
            .chars()
            .collect();

        let mut index = 0;
        while index < chars.len() {
            let end = (index + rng.random_range(1..=3)).min(chars.len());
            let chunk: String = chars[index..end].iter().collect();
            write!(out, "{chunk}")?;
            out.flush()?;
            index = end;
            thread::sleep(Duration::from_millis(rng.random_range(2..=10)));
        }
        Ok(())
    }

    /// Run the execution bar labelled `pre`, then print `post`
    ///
    /// The bar is an animation on the terminal's stdout, never on `out`;
    /// indicatif hides it when stdout is not a terminal. Only `post` is
    /// written to `out`, so captured output is the same with effects on or off.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the writer.
    pub fn execution_bar<W: Write>(&self, out: &mut W, pre: &str, post: &str) -> io::Result<()> {
        if self.enabled {
            let bar = ProgressBar::with_draw_target(Some(BAR_STEPS), ProgressDrawTarget::stdout());
            bar.set_style(
                ProgressStyle::with_template("{prefix}     [{bar:20}] {percent}%")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            );
            bar.set_prefix(pre.to_string());
            for _ in 0..BAR_STEPS {
                thread::sleep(self.load_time);
                bar.inc(1);
            }
            bar.finish_and_clear();
        }
        writeln!(out, "{post}")
    }
}
