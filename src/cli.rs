use crate::controller::StateSnapshot;
use crate::game_state::{GameInterface, UserAction};
use crate::session::{HintStage, Signal, Status};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Hangman in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Wrong guesses allowed before the game is lost
    #[arg(short = 'm', long = "max-wrong", default_value_t = crate::session::DEFAULT_MAX_WRONG)]
    pub max_wrong: u8,

    /// Seed for reproducible games
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Use the line-mode interface instead of the TUI
    #[arg(long)]
    pub plain: bool,

    /// Write log output to this file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum CommandInput {
    Action(UserAction),
    Invalid(String),
}

/// Parse one line of player input.
pub fn parse_command(line: &str) -> CommandInput {
    let input = line.trim();
    let mut chars = input.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c == '?' {
            return CommandInput::Action(UserAction::Hint);
        }
        // Validation of the letter itself belongs to the game.
        return CommandInput::Action(UserAction::Guess(c));
    }

    match input.to_lowercase().as_str() {
        "hint" => CommandInput::Action(UserAction::Hint),
        "new" | "next" => CommandInput::Action(UserAction::NewGame),
        "exit" | "quit" => CommandInput::Action(UserAction::Exit),
        _ => CommandInput::Invalid(input.to_string()),
    }
}

#[must_use]
pub fn gallows_line(snapshot: &StateSnapshot) -> String {
    let mut line = format!(
        "Wrong guesses: {}/{}  Misses: {}",
        snapshot.wrong_count,
        snapshot.max_wrong,
        snapshot.misses().iter().collect::<String>()
    );
    let eliminated = snapshot.eliminated();
    if !eliminated.is_empty() {
        line.push_str("  Eliminated: ");
        line.extend(eliminated);
    }
    line
}

#[must_use]
pub fn hint_label(stage: HintStage) -> &'static str {
    match stage {
        HintStage::Unused => "Hint 1: word length",
        HintStage::Length => "Hint 2: eliminate letters (costs a guess)",
        HintStage::HalfLetters => "Hint 3: reveal vowels (costs a guess)",
        HintStage::Vowels => "No hints left",
    }
}

pub fn display_state(snapshot: &StateSnapshot) {
    println!("\n  {snapshot}");
    println!("{}", gallows_line(snapshot));
    if snapshot.status == Status::InProgress {
        println!("{}", hint_label(snapshot.hint_stage));
    }
}

pub fn display_game_over(snapshot: &StateSnapshot) {
    match snapshot.status {
        Status::Won => println!("You won!"),
        Status::Lost => println!(
            "You lost! The word was: {}",
            snapshot.word.as_deref().unwrap_or_default()
        ),
        Status::InProgress => {}
    }
    println!("Type 'new' to play again or 'exit' to quit.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_action(&mut self) -> Option<UserAction> {
        println!("\nGuess a letter ('hint' or '?', 'new', 'exit'):");
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            // End of input ends the session.
            Ok(0) | Err(_) => return Some(UserAction::Exit),
            Ok(_) => {}
        }
        match parse_command(&line) {
            CommandInput::Action(action) => Some(action),
            CommandInput::Invalid(text) => {
                println!("Unrecognized input: '{text}'");
                None
            }
        }
    }

    fn display_state(&mut self, snapshot: &StateSnapshot) {
        display_state(snapshot);
    }

    fn display_signal(&mut self, signal: Signal) {
        println!("Rejected: {signal}");
    }

    fn display_hint(&mut self, message: &str) {
        println!("Hint: {message}");
    }

    fn display_game_over(&mut self, snapshot: &StateSnapshot) {
        display_game_over(snapshot);
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        println!("New game started. Drawing from {word_count} words.");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn action(line: &str) -> Option<UserAction> {
        match parse_command(line) {
            CommandInput::Action(action) => Some(action),
            CommandInput::Invalid(_) => None,
        }
    }

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::parse_from(["hangman"]);
        assert_eq!(cli.wordbank_path, None);
        assert_eq!(cli.max_wrong, 6);
        assert_eq!(cli.seed, None);
        assert!(!cli.plain);
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = Cli::parse_from([
            "hangman", "-i", "words.txt", "--max-wrong", "8", "--seed", "7", "--plain",
        ]);
        assert_eq!(cli.wordbank_path, Some(PathBuf::from("words.txt")));
        assert_eq!(cli.max_wrong, 8);
        assert_eq!(cli.seed, Some(7));
        assert!(cli.plain);
    }

    #[test]
    fn test_parse_command_letters() {
        assert_eq!(action("a\n"), Some(UserAction::Guess('a')));
        assert_eq!(action("  Q  "), Some(UserAction::Guess('Q')));
        // a single non-letter still reaches the game, which rejects it
        assert_eq!(action("7"), Some(UserAction::Guess('7')));
    }

    #[test]
    fn test_parse_command_words() {
        assert_eq!(action("hint"), Some(UserAction::Hint));
        assert_eq!(action("?"), Some(UserAction::Hint));
        assert_eq!(action("NEW"), Some(UserAction::NewGame));
        assert_eq!(action("next"), Some(UserAction::NewGame));
        assert_eq!(action("Exit"), Some(UserAction::Exit));
        assert_eq!(action("quit"), Some(UserAction::Exit));
        assert_eq!(action("ab"), None);
        assert_eq!(action(""), None);
    }

    #[test]
    fn test_read_action_eof_exits() {
        let mut ui = CliInterface::new(Cursor::new(""));
        assert_eq!(ui.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_action_sequence() {
        let mut ui = CliInterface::new(Cursor::new("c\nbogus\nhint\n"));
        assert_eq!(ui.read_action(), Some(UserAction::Guess('c')));
        assert_eq!(ui.read_action(), None);
        assert_eq!(ui.read_action(), Some(UserAction::Hint));
        assert_eq!(ui.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_gallows_line_separates_eliminated_letters() {
        let snapshot = StateSnapshot {
            word_length: 3,
            pattern: vec![Some('C'), None, None],
            word: None,
            guessed: ['C', 'Q', 'B', 'D'].into_iter().collect(),
            hint_letters: ['B', 'D'].into_iter().collect(),
            wrong_count: 2,
            max_wrong: 6,
            hint_stage: HintStage::HalfLetters,
            status: Status::InProgress,
        };
        assert_eq!(
            gallows_line(&snapshot),
            "Wrong guesses: 2/6  Misses: Q  Eliminated: BD"
        );
    }

    #[test]
    fn test_hint_label_per_stage() {
        assert_eq!(hint_label(HintStage::Unused), "Hint 1: word length");
        assert_eq!(hint_label(HintStage::Vowels), "No hints left");
    }
}
