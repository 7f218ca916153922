//! TUI application state and logic

use crate::dictionary::DictionaryIndex;
use crate::session::{RoundState, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Application state
pub struct App {
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub show_all: bool,
    pub should_quit: bool,
    last_tick: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(rows: usize, cols: usize, dictionary: DictionaryIndex) -> Self {
        let empty_dict = dictionary.is_empty();
        let mut session = Session::new(rows, cols);
        session.load_dictionary(dictionary);

        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            show_all: false,
            should_quit: false,
            last_tick: Instant::now(),
        };

        app.add_message(
            "Welcome! Press 's' to start a round.",
            MessageStyle::Info,
        );
        if empty_dict {
            app.add_message(
                "Dictionary is empty; rounds will have no solution list.",
                MessageStyle::Error,
            );
        }
        app
    }

    /// Start a fresh round and restart the tick clock
    pub fn start_round(&mut self) {
        if self.session.start() {
            self.show_all = false;
            self.input_buffer.clear();
            self.messages.clear();
            self.last_tick = Instant::now();
            self.add_message("Round started! Type words and press Enter.", MessageStyle::Info);
        } else {
            self.add_message("Dictionary not loaded yet.", MessageStyle::Error);
        }
    }

    /// End the round early
    pub fn stop_round(&mut self) {
        self.session.stop();
        self.on_round_end();
    }

    /// Submit whatever is in the input buffer
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let outcome = self.session.submit(&input);
        let style = if outcome.is_accepted() {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.add_message(outcome.message(), style);
    }

    /// Advance the countdown when a full second has passed
    ///
    /// Only ticks while running, so a poll firing after the round ended (or
    /// before one started) cannot mutate stale state.
    pub fn on_tick(&mut self) {
        if self.session.state() != RoundState::Running {
            return;
        }
        if self.last_tick.elapsed() >= Duration::from_secs(1) {
            self.last_tick = Instant::now();
            self.session.tick();
            if self.session.state() == RoundState::Ended {
                self.on_round_end();
            }
        }
    }

    fn on_round_end(&mut self) {
        if self.session.state() == RoundState::Ended {
            self.input_buffer.clear();
            self.add_message("Game over. Check missed words below.", MessageStyle::Info);
            self.add_message(
                "Press 's' for a new round, 'a' to reveal all words, 'q' to quit.",
                MessageStyle::Info,
            );
        }
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // Short poll timeout keeps the countdown moving while the keyboard is idle
    let poll_timeout = Duration::from_millis(200);

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.session.state() {
                    RoundState::Running => match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Esc => {
                            app.stop_round();
                        }
                        KeyCode::Enter => {
                            app.submit_input();
                        }
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                            app.input_buffer.push(c.to_ascii_uppercase());
                        }
                        _ => {}
                    },
                    RoundState::Idle | RoundState::Ended => match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('q') => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('s') | KeyCode::Enter => {
                            app.start_round();
                        }
                        KeyCode::Char('a') if app.session.state() == RoundState::Ended => {
                            app.show_all = !app.show_all;
                        }
                        _ => {}
                    },
                }
            }
        }

        app.on_tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(4, 4, DictionaryIndex::new(["cat", "cats", "ant"]))
    }

    #[test]
    fn new_app_is_idle() {
        let app = test_app();
        assert_eq!(app.session.state(), RoundState::Idle);
        assert!(!app.should_quit);
        assert!(!app.messages.is_empty());
    }

    #[test]
    fn start_round_enters_running() {
        let mut app = test_app();
        app.start_round();
        assert_eq!(app.session.state(), RoundState::Running);
        assert!(app.session.grid().is_some());
    }

    #[test]
    fn submit_takes_and_clears_buffer() {
        let mut app = test_app();
        app.start_round();
        app.input_buffer = "ZZZZZZZZ".to_string();
        app.submit_input();
        assert!(app.input_buffer.is_empty());
        // The outcome message lands in the log
        assert!(!app.messages.is_empty());
    }

    #[test]
    fn messages_are_capped() {
        let mut app = test_app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }

    #[test]
    fn stop_round_reports_game_over() {
        let mut app = test_app();
        app.start_round();
        app.stop_round();
        assert_eq!(app.session.state(), RoundState::Ended);
        assert!(app.messages.iter().any(|m| m.text.contains("Game over")));
    }
}
