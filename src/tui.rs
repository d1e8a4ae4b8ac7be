//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `Playing`: letter keys guess, `?` asks for a hint
//! - `GameOver`: `N` or ENTER starts a new game
//!
//! ESC quits from either state.

use crate::cli::hint_label;
use crate::controller::StateSnapshot;
use crate::game_state::{GameInterface, UserAction};
use crate::session::{ALPHABET, Signal, Status};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const KEYBOARD_ROW_LEN: usize = 13;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

/// Gallows drawings, indexed by parts shown (head, body, arms, legs).
const GALLOWS: [[&str; 6]; 7] = [
    ["  +---+", "  |   |", "      |", "      |", "      |", "======="],
    ["  +---+", "  |   |", "  O   |", "      |", "      |", "======="],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |", "======="],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |", "======="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "======="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "======="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "======="],
];

#[derive(Clone, Copy, PartialEq, Debug)]
enum KeyState {
    Unused,
    Hit,
    Miss,
    Eliminated,
}

impl KeyState {
    fn of(letter: char, snapshot: &StateSnapshot) -> Self {
        if !snapshot.guessed.contains(&letter) {
            Self::Unused
        } else if snapshot.pattern.contains(&Some(letter)) {
            Self::Hit
        } else if snapshot.hint_letters.contains(&letter) {
            Self::Eliminated
        } else {
            Self::Miss
        }
    }

    fn colors(self) -> (Color, Color) {
        match self {
            Self::Unused => (Color::DarkGray, Color::White),
            Self::Hit => (Color::Green, Color::Black),
            Self::Miss => (Color::Red, Color::White),
            Self::Eliminated => (Color::Gray, Color::Black),
        }
    }
}

/// Map the wrong count onto the seven gallows drawings.
fn gallows_index(wrong_count: u8, max_wrong: u8) -> usize {
    let last = GALLOWS.len() - 1;
    if max_wrong == 0 {
        return last;
    }
    (usize::from(wrong_count) * last).div_ceil(usize::from(max_wrong)).min(last)
}

#[derive(Debug)]
enum TuiState {
    Playing,
    GameOver,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    snapshot: Option<StateSnapshot>,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            snapshot: None,
            state: TuiState::Playing,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let snapshot = self.snapshot.as_ref();
        let state = &self.state;
        let message = self.message.as_str();
        let error_message = self.error_message.as_str();
        let status = self.status.as_str();
        self.terminal.draw(|f| {
            Self::render_static(f, snapshot, state, message, error_message, status);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(
        f: &mut Frame,
        snapshot: Option<&StateSnapshot>,
        state: &TuiState,
        message: &str,
        error_message: &str,
        status: &str,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(10), // Gallows and word
                Constraint::Length(4),  // Keyboard
                Constraint::Min(4),     // Messages
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        if let Some(snapshot) = snapshot {
            Self::render_board(f, chunks[1], snapshot);
            Self::render_keyboard(f, chunks[2], snapshot);
        }
        Self::render_info(f, chunks[3], message, error_message);
        Self::render_status(f, chunks[4], status);
        Self::render_instructions(f, chunks[5], state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, snapshot: &StateSnapshot) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(14), Constraint::Min(20)])
            .split(area);

        let drawing = GALLOWS[gallows_index(snapshot.wrong_count, snapshot.max_wrong)];
        let gallows_style = if snapshot.status == Status::Lost {
            ERROR_STYLE
        } else {
            Style::default()
        };
        let lines: Vec<Line> = drawing
            .iter()
            .map(|row| Line::from(Span::styled(*row, gallows_style)))
            .collect();
        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
            columns[0],
        );

        let word_style = match snapshot.status {
            Status::Won => SUCCESS_STYLE,
            Status::Lost => ERROR_STYLE,
            Status::InProgress => HEADER_STYLE,
        };
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(format!("  {snapshot}"), word_style)),
            Line::from(""),
            Line::from(format!(
                "  Wrong guesses: {}/{}",
                snapshot.wrong_count, snapshot.max_wrong
            )),
        ];
        if snapshot.status == Status::InProgress {
            lines.push(Line::from(Span::styled(
                format!("  {}", hint_label(snapshot.hint_stage)),
                INFO_STYLE,
            )));
        }
        f.render_widget(
            Paragraph::new(lines).block(Block::default().title("Word").borders(Borders::ALL)),
            columns[1],
        );
    }

    fn render_keyboard(f: &mut Frame, area: Rect, snapshot: &StateSnapshot) {
        let lines: Vec<Line> = ALPHABET
            .chunks(KEYBOARD_ROW_LEN)
            .map(|row| {
                let mut spans = vec![Span::raw(" ")];
                for letter in row {
                    let (bg_color, fg_color) = KeyState::of(*letter, snapshot).colors();
                    spans.push(Span::styled(
                        format!(" {letter} "),
                        Style::default().fg(fg_color).bg(bg_color),
                    ));
                    spans.push(Span::raw(" "));
                }
                Line::from(spans)
            })
            .collect();
        f.render_widget(
            Paragraph::new(lines).block(Block::default().title("Letters").borders(Borders::ALL)),
            area,
        );
    }

    fn render_info(f: &mut Frame, area: Rect, message: &str, error_message: &str) {
        let mut lines = Vec::new();
        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(message, MESSAGE_STYLE)]));
        }
        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::Playing => "A-Z: Guess | ?: Hint | ESC: Quit",
            TuiState::GameOver => "N / ENTER: New Game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != KeyEventKind::Press || Self::has_modifier_keys(&key) {
            return Ok(None);
        }
        debug_log!("handle_input() - Key event received: {:?}", key.code);

        Ok(match self.state {
            TuiState::Playing => self.handle_playing_input(key),
            TuiState::GameOver => Self::handle_game_over_input(key),
        })
    }

    fn handle_playing_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        match key.code {
            KeyCode::Esc => Some(UserAction::Exit),
            KeyCode::Char('?') => Some(UserAction::Hint),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(UserAction::Guess(c)),
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
                None
            }
            _ => None,
        }
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') | KeyCode::Enter => Some(UserAction::NewGame),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

impl GameInterface for TuiInterface {
    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_state(&mut self, snapshot: &StateSnapshot) {
        self.snapshot = Some(snapshot.clone());
        self.status = format!("{} wrong guess(es) left", snapshot.remaining_wrong());
        self.draw_or_log();
    }

    fn display_signal(&mut self, signal: Signal) {
        self.error_message = signal.to_string();
        self.draw_or_log();
    }

    fn display_hint(&mut self, message: &str) {
        self.message = format!("Hint: {message}");
        self.draw_or_log();
    }

    fn display_game_over(&mut self, snapshot: &StateSnapshot) {
        self.state = TuiState::GameOver;
        self.message = match snapshot.status {
            Status::Won => "✓ You won!".to_string(),
            _ => format!(
                "You lost! The word was: {}",
                snapshot.word.as_deref().unwrap_or_default()
            ),
        };
        self.status = "Game Over".to_string();
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        self.state = TuiState::Playing;
        self.message = format!("New game started. Drawing from {word_count} words.");
        self.error_message.clear();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
