//! TUI rendering with ratatui
//!
//! Board, keyboard and statistics panels for the daily puzzle.

use super::app::{App, MessageStyle};
use crate::core::LetterStatus;
use crate::game::{SessionStatus, SessionView, Stats};
use crate::storage::PersistenceGateway;
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<W: WordSource, P: PersistenceGateway>(f: &mut Frame, app: &App<W, P>) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, &view, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Keyboard, messages, stats
        ])
        .split(chunks[1]);

    render_board(f, app, &view, main_chunks[0]);
    render_info_panel(f, app, &view, main_chunks[1]);

    render_input(f, app, &view, chunks[2]);
    render_status(f, app, &view, chunks[3]);
}

/// Tile style for a scored letter
fn tile_style(status: LetterStatus, high_contrast: bool) -> Style {
    let bg = match (status, high_contrast) {
        (LetterStatus::Correct, false) => Color::Green,
        (LetterStatus::Correct, true) => Color::Rgb(245, 121, 58),
        (LetterStatus::Present, false) => Color::Yellow,
        (LetterStatus::Present, true) => Color::Rgb(133, 192, 249),
        (LetterStatus::Absent, _) => Color::DarkGray,
    };
    let fg = if status == LetterStatus::Absent {
        Color::White
    } else {
        Color::Black
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn render_header(f: &mut Frame, view: &SessionView, area: Rect) {
    let header = Paragraph::new(format!("📅 DAILY WORD · {}", view.date))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<W: WordSource, P: PersistenceGateway>(
    f: &mut Frame,
    app: &App<W, P>,
    view: &SessionView,
    area: Rect,
) {
    let mut lines = Vec::with_capacity(view.attempt_limit * 2);

    for guess in &view.guesses {
        let spans: Vec<Span> = guess
            .pattern()
            .results()
            .iter()
            .flat_map(|r| {
                [
                    Span::styled(
                        format!(" {} ", r.letter),
                        tile_style(r.status, app.high_contrast),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let mut rows_left = view.remaining();
    if view.status == SessionStatus::InProgress && rows_left > 0 {
        lines.push(typing_row(&app.input_buffer, view));
        lines.push(Line::from(""));
        rows_left -= 1;
    }

    let empty = Style::default().fg(Color::DarkGray);
    for _ in 0..rows_left {
        lines.push(Line::from(Span::styled(" ·  ".repeat(view.word_length), empty)));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} letters ", view.word_length))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

/// Row being typed; the first letter is hinted until something is typed
fn typing_row(input: &str, view: &SessionView) -> Line<'static> {
    let typed = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let hint = Style::default().fg(Color::Cyan);
    let blank = Style::default().fg(Color::DarkGray);

    let mut letters = input.chars();
    let spans: Vec<Span> = (0..view.word_length)
        .flat_map(|i| {
            let tile = match letters.next() {
                Some(c) => Span::styled(format!("[{c}]"), typed),
                None if i == 0 => Span::styled(format!("[{}]", view.first_letter), hint),
                None => Span::styled("[ ]", blank),
            };
            [tile, Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn render_info_panel<W: WordSource, P: PersistenceGateway>(
    f: &mut Frame,
    app: &App<W, P>,
    view: &SessionView,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(5),    // Messages or summary
            Constraint::Length(3), // Win rate gauge
        ])
        .split(area);

    render_keyboard(f, app, view, chunks[0]);
    if app.show_summary {
        render_summary(f, app, view, chunks[1]);
    } else {
        render_messages(f, app, chunks[1]);
    }
    render_win_rate(f, app.manager.stats(), chunks[2]);
}

fn render_keyboard<W: WordSource, P: PersistenceGateway>(
    f: &mut Frame,
    app: &App<W, P>,
    view: &SessionView,
    area: Rect,
) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| match view.keyboard.get(&c) {
                    Some(&status) => {
                        Span::styled(c.to_string(), tile_style(status, app.high_contrast))
                    }
                    None => Span::raw(c.to_string()),
                })
                .flat_map(|key| [key, Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<W: WordSource, P: PersistenceGateway>(
    f: &mut Frame,
    app: &App<W, P>,
    area: Rect,
) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
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

fn render_summary<W: WordSource, P: PersistenceGateway>(
    f: &mut Frame,
    app: &App<W, P>,
    view: &SessionView,
    area: Rect,
) {
    let stats = app.manager.stats();
    let mut lines = Vec::new();

    if let Some(secret) = &view.secret {
        lines.push(Line::from(vec![
            Span::raw("Answer: "),
            Span::styled(
                secret.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines.push(Line::from(format!(
        "Played {} · Won {} · Streak {} (best {})",
        stats.games_played, stats.games_won, stats.current_streak, stats.max_streak
    )));
    lines.push(Line::from(""));

    let most = stats.distribution.values().copied().max().unwrap_or(0);
    for attempts in 1..=view.attempt_limit {
        let count = stats.distribution.get(&attempts).copied().unwrap_or(0);
        let bar_len = if most == 0 { 0 } else { (count * 16 / most) as usize };
        let highlight = matches!(view.status, SessionStatus::Won { attempts: a } if a == attempts);
        let color = if highlight { Color::Green } else { Color::DarkGray };
        lines.push(Line::from(vec![
            Span::raw(format!("{attempts}: ")),
            Span::styled("█".repeat(bar_len.max(1)), Style::default().fg(color)),
            Span::raw(format!(" {count}")),
        ]));
    }

    lines.push(Line::from(""));
    for row in app.summary().lines().skip(1) {
        lines.push(Line::from(row.to_string()));
    }

    let summary = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics | s: hide ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(summary, area);
}

fn render_win_rate(f: &mut Frame, stats: &Stats, area: Rect) {
    // Cast is safe: win rate is within [0, 100]
    let percent = stats.win_rate().round().clamp(0.0, 100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win Rate ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{percent}% of {} games", stats.games_played));

    f.render_widget(gauge, area);
}

fn render_input<W: WordSource, P: PersistenceGateway>(
    f: &mut Frame,
    app: &App<W, P>,
    view: &SessionView,
    area: Rect,
) {
    let (title, content, color) = match view.status {
        SessionStatus::Won { .. } => (
            " 🎉 SOLVED! | 's' statistics | 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        SessionStatus::Lost => (
            " Better luck tomorrow | 's' statistics | 'q' to quit ",
            String::new(),
            Color::Red,
        ),
        SessionStatus::InProgress => (
            " Type your guess | Enter to submit | Backspace to erase ",
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
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

fn render_status<W: WordSource, P: PersistenceGateway>(
    f: &mut Frame,
    app: &App<W, P>,
    view: &SessionView,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let attempt_text = format!("Attempts: {}/{}", view.guesses.len(), view.attempt_limit);
    let attempt = Paragraph::new(attempt_text).alignment(Alignment::Center);
    f.render_widget(attempt, chunks[0]);

    let stats = app.manager.stats();
    let stats_text = format!(
        "Streak: {} | Best: {}",
        stats.current_streak, stats.max_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let palette = if app.high_contrast {
        "Palette: high contrast"
    } else {
        "Palette: classic"
    };
    f.render_widget(Paragraph::new(palette).alignment(Alignment::Center), chunks[2]);

    let help_text = if app.is_finished() {
        "q: Quit | s: Stats | TAB: Palette"
    } else {
        "ESC: Quit | Enter: Submit | TAB: Palette"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
