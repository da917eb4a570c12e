//! TUI application state and logic

use crate::core::WORD_LEN;
use crate::game::{Game, GameConfig};
use crate::wordlists::WordBank;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub game: Game,
    pub bank: WordBank,
    pub input_buffer: String,
    pub message: Option<Message>,
    pub should_quit: bool,
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

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let game = config.new_game();
        Self {
            game,
            bank: config.bank,
            input_buffer: String::new(),
            message: Some(Message {
                text: "Type a 5 letter word and press Enter".to_string(),
                style: MessageStyle::Info,
            }),
            should_quit: false,
        }
    }

    fn set_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.message = Some(Message {
            text: text.into(),
            style,
        });
    }

    /// Submit the typed letters as a guess
    pub fn submit_guess(&mut self) {
        match self.game.submit(&self.input_buffer, &self.bank) {
            Ok(_) => {
                self.input_buffer.clear();
                if self.game.is_won() {
                    self.set_message("you won! Press q to quit", MessageStyle::Success);
                } else if self.game.is_complete() {
                    let text = format!("you lose! Answer was {}", self.game.answer());
                    self.set_message(text, MessageStyle::Error);
                } else {
                    let left = self.game.turns_remaining();
                    self.set_message(format!("{left} guesses left"), MessageStyle::Info);
                }
            }
            Err(e) => self.set_message(e.to_string(), MessageStyle::Error),
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            _ if self.game.is_complete() => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < WORD_LEN {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_guess(),
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
pub fn run_tui(app: App) -> Result<App> {
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            debug!(code = ?key.code, "key event");
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}
