//! TUI application state and logic

use crate::commands::{Intent, Notifier, Response, SessionEnd, dispatch};
use crate::engine::{GameEngine, TurnOutcome};
use crate::output::formatters::{hint_lines, join, loadout};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Messages kept in the log panel
const MESSAGE_LIMIT: usize = 8;

/// Application state
pub struct App {
    pub engine: GameEngine,
    pub notifier: Option<Box<dyn Notifier>>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    pub end: Option<SessionEnd>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Command,
    /// Session over; only quitting is possible
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Hint,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(engine: GameEngine, notifier: Option<Box<dyn Notifier>>) -> Self {
        Self {
            engine,
            notifier,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "PROGRAM INITIATED.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type 'load <utility> <chip>', then 'execute'. 'commands' for help."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            input_mode: InputMode::Command,
            should_quit: false,
            end: None,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Parse and apply one command line
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects a turn because the session is over.
    pub fn handle_line(&mut self, line: &str) -> Result<()> {
        if self.input_mode == InputMode::Finished {
            return Ok(());
        }

        let intent = match line.parse::<Intent>() {
            Ok(intent) => intent,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return Ok(());
            }
        };

        match dispatch(&mut self.engine, intent)? {
            Response::Placed(message) => self.add_message(&message, MessageStyle::Info),
            Response::Rejected(err) => self.add_message(&err.to_string(), MessageStyle::Error),
            Response::History => {
                let text = format!("{} phases on the board", self.engine.history().len());
                self.add_message(&text, MessageStyle::Info);
            }
            Response::Status => {
                let status = self.engine.status();
                let text = format!(
                    "phase {} of {}: {}",
                    status.turn,
                    self.engine.turn_budget(),
                    loadout(self.engine.slots(), &status.sequence)
                );
                self.add_message(&text, MessageStyle::Info);
            }
            Response::Slots => {
                let text = format!("valid chips: {}", join(self.engine.slots(), ", "));
                self.add_message(&text, MessageStyle::Info);
            }
            Response::Symbols => {
                let text = format!("valid utilities: {}", join(self.engine.vocabulary(), ", "));
                self.add_message(&text, MessageStyle::Info);
            }
            Response::Commands => self.add_message(
                "load <utility> <chip> | execute | status | show chips | show utilities | quit",
                MessageStyle::Info,
            ),
            Response::Quit => {
                self.end = Some(SessionEnd::Abandoned);
                self.should_quit = true;
            }
            Response::Turn(outcome) => self.record_outcome(outcome),
        }

        Ok(())
    }

    fn record_outcome(&mut self, outcome: TurnOutcome) {
        match outcome {
            TurnOutcome::ContinueWithHints(hints) => {
                self.add_message("unable to repair.", MessageStyle::Error);
                for line in hint_lines(hints) {
                    self.add_message(&line, MessageStyle::Hint);
                }
            }
            TurnOutcome::Exhausted(hints) => {
                for line in hint_lines(hints) {
                    self.add_message(&line, MessageStyle::Hint);
                }
                self.add_message("ERROR! REPAIR ATTEMPTS EXCEEDED.", MessageStyle::Error);
                self.add_message("Press 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::Finished;
                self.end = Some(SessionEnd::Lost);
            }
            TurnOutcome::Solved => {
                self.add_message("repaired.", MessageStyle::Success);
                self.send_notification();
                self.add_message("Press 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::Finished;
                self.end = Some(SessionEnd::Won {
                    turns: self.engine.turns_taken(),
                });
            }
        }
    }

    fn send_notification(&mut self) {
        let Some(notifier) = &self.notifier else {
            return;
        };
        let mut steps = Vec::new();
        let result = notifier.notify(&mut |step| steps.push(step));
        for step in steps {
            self.add_message(step.message(), MessageStyle::Info);
        }

        match result {
            Ok(()) => self.add_message("transmission complete.", MessageStyle::Success),
            Err(err) => {
                warn!(error = %err, "success notification failed");
                self.add_message("error transmitting data to server.", MessageStyle::Error);
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<SessionEnd> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<SessionEnd> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                (_, KeyCode::Esc) | (InputMode::Finished, KeyCode::Char('q')) => {
                    app.should_quit = true;
                }
                (InputMode::Command, KeyCode::Char(c)) => app.input_buffer.push(c),
                (InputMode::Command, KeyCode::Backspace) => {
                    app.input_buffer.pop();
                }
                (InputMode::Command, KeyCode::Enter) => {
                    let line = std::mem::take(&mut app.input_buffer);
                    app.handle_line(&line)?;
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.end.unwrap_or(SessionEnd::Abandoned))
}
