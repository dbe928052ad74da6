//! TUI rendering with ratatui
//!
//! Board history on the left; phase gauge, loadout and message log on the right.

use super::app::{App, InputMode, MessageStyle};
use crate::engine::EngineState;
use crate::output::formatters::{hint_lines, join, loadout};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("PANEL REPAIR")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let slots = app.engine.slots();
    let items: Vec<ListItem> = app
        .engine
        .history()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("PHASE {:<3}", i + 1),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(loadout(slots, &record.sequence)),
            ])];
            if record.solved {
                lines.push(Line::styled(
                    "          repaired.",
                    Style::default().fg(Color::Green),
                ));
            } else {
                lines.extend(hint_lines(record.hints).into_iter().map(|hint| {
                    Line::styled(format!("          {hint}"), Style::default().fg(Color::Yellow))
                }));
            }
            ListItem::new(lines)
        })
        .collect();

    let board = List::new(items).block(
        Block::default()
            .title(" Phases ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Phase gauge
            Constraint::Length(4), // Loadout
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_phase_gauge(f, app, chunks[0]);
    render_loadout(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_phase_gauge(f: &mut Frame, app: &App, area: Rect) {
    let used = app.engine.turns_taken();
    let budget = app.engine.turn_budget();
    let percent = (used * 100 / budget).min(100) as u16;

    let color = match app.engine.state() {
        EngineState::Won => Color::Green,
        EngineState::Lost => Color::Red,
        EngineState::AwaitingInput if budget - used == 1 => Color::Yellow,
        EngineState::AwaitingInput => Color::Cyan,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Repair Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{used}/{budget} phases used"));

    f.render_widget(gauge, area);
}

fn render_loadout(f: &mut Frame, app: &App, area: Rect) {
    let status = app.engine.status();
    let title = if app.engine.state().is_terminal() {
        " Loadout ".to_string()
    } else if status.final_turn {
        format!(" Loadout: phase {} (final phase) ", status.turn)
    } else {
        format!(" Loadout: phase {} ", status.turn)
    };

    let paragraph = Paragraph::new(loadout(app.engine.slots(), &status.sequence))
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Hint => Style::default().fg(Color::Yellow),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Command => (" Command | Enter to submit ", Color::Yellow),
        InputMode::Finished => (" Session over | 'q' to quit ", Color::Green),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "chips: {} | utilities: {} | Esc: quit",
        join(app.engine.slots(), " "),
        join(app.engine.vocabulary(), " ")
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
