//! TUI application state and logic

use crate::game::{SessionManager, SessionStatus, SessionView};
use crate::output::share_summary;
use crate::storage::PersistenceGateway;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<W: WordSource, P: PersistenceGateway> {
    pub manager: SessionManager<W, P>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub high_contrast: bool,
    pub show_summary: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<W: WordSource, P: PersistenceGateway> App<W, P> {
    #[must_use]
    pub fn new(manager: SessionManager<W, P>) -> Self {
        let high_contrast = manager.config().high_contrast;
        let mut app = Self {
            manager,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
            high_contrast,
            show_summary: false,
        };

        let view = app.manager.view();
        if view.status.is_terminal() {
            app.show_summary = true;
            app.add_message(
                "Today's puzzle is already finished. Come back tomorrow!",
                MessageStyle::Info,
            );
        } else {
            app.add_message(
                &format!(
                    "Find the {}-letter word starting with {}",
                    view.word_length, view.first_letter
                ),
                MessageStyle::Info,
            );
        }
        app
    }

    #[must_use]
    pub fn view(&self) -> SessionView {
        self.manager.view()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.manager.session().is_terminal()
    }

    /// Append a typed letter, up to the word length
    pub fn push_letter(&mut self, c: char) {
        if self.is_finished() || !c.is_alphabetic() {
            return;
        }
        let word_length = self.view().word_length;
        if self.input_buffer.chars().count() < word_length {
            self.input_buffer.extend(c.to_uppercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed word
    ///
    /// A rejected word stays in the buffer so it can be corrected.
    pub fn submit_input(&mut self) {
        if self.is_finished() {
            return;
        }

        let input = self.input_buffer.clone();
        match self.manager.submit(&input) {
            Ok(outcome) => {
                self.input_buffer.clear();
                if !outcome.persisted {
                    self.add_message("Progress could not be saved", MessageStyle::Error);
                }

                match outcome.status {
                    SessionStatus::Won { attempts } => {
                        let celebration = match attempts {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.show_summary = true;
                    }
                    SessionStatus::Lost => {
                        let answer = self.view().secret.unwrap_or_default();
                        self.add_message(
                            &format!("Out of attempts. The word was {answer}"),
                            MessageStyle::Error,
                        );
                        self.show_summary = true;
                    }
                    SessionStatus::InProgress => {
                        let remaining = self.manager.session().remaining();
                        self.add_message(
                            &format!(
                                "{remaining} {} left",
                                if remaining == 1 { "attempt" } else { "attempts" }
                            ),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Share text of the session so far
    #[must_use]
    pub fn summary(&self) -> String {
        share_summary(&self.view(), self.high_contrast)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.high_contrast = !self.high_contrast;
            }
            KeyCode::Char('q') if self.is_finished() => {
                self.should_quit = true;
            }
            KeyCode::Char('s') if self.is_finished() => {
                self.show_summary = !self.show_summary;
            }
            KeyCode::Char(c) => self.push_letter(c),
            KeyCode::Backspace => self.pop_letter(),
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource, P: PersistenceGateway>(app: App<W, P>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(summary)) => println!("{summary}"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Event loop; returns the share summary if the session ended
fn run_app<B, W, P>(terminal: &mut Terminal<B>, mut app: App<W, P>) -> Result<Option<String>>
where
    B: ratatui::backend::Backend,
    W: WordSource,
    P: PersistenceGateway,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.is_finished().then(|| app.summary()))
}
