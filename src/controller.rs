//! Session lifecycle and the action/query API used by front ends.

use crate::error::ConfigError;
use crate::guess::apply_guess;
use crate::hint::apply_hint;
use crate::random::RandomSource;
use crate::session::{DEFAULT_MAX_WRONG, GameSession, HintStage, Signal, Status};
use crate::wordbank::WordBank;
use crate::{debug_log, info_log};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub max_wrong: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_wrong: DEFAULT_MAX_WRONG,
        }
    }
}

/// Read-only view of a session.
///
/// The full word is only present once the game has ended; until then the
/// `pattern` carries `None` for every hidden position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateSnapshot {
    pub word_length: usize,
    pub pattern: Vec<Option<char>>,
    pub word: Option<String>,
    pub guessed: BTreeSet<char>,
    pub hint_letters: BTreeSet<char>,
    pub wrong_count: u8,
    pub max_wrong: u8,
    pub hint_stage: HintStage,
    pub status: Status,
}

impl StateSnapshot {
    fn of(session: &GameSession) -> Self {
        let status = session.status();
        Self {
            word_length: session.word().len(),
            pattern: session.pattern(),
            word: status
                .is_over()
                .then(|| session.word().iter().collect()),
            guessed: session.guessed().clone(),
            hint_letters: session.hint_letters().clone(),
            wrong_count: session.wrong_count(),
            max_wrong: session.max_wrong(),
            hint_stage: session.hint_stage(),
            status,
        }
    }

    #[must_use]
    pub fn remaining_wrong(&self) -> u8 {
        self.max_wrong.saturating_sub(self.wrong_count)
    }

    /// Letters the player guessed that are not in the word.
    #[must_use]
    pub fn misses(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|c| !self.hint_letters.contains(c) && !self.pattern.contains(&Some(*c)))
            .collect()
    }

    /// Letters ruled out by hints rather than guessed.
    #[must_use]
    pub fn eliminated(&self) -> Vec<char> {
        self.hint_letters
            .iter()
            .copied()
            .filter(|c| !self.pattern.contains(&Some(*c)))
            .collect()
    }
}

impl fmt::Display for StateSnapshot {
    /// `C _ T` while playing, the whole word once the game is over.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: Vec<String> = match &self.word {
            Some(word) => word.chars().map(String::from).collect(),
            None => self
                .pattern
                .iter()
                .map(|slot| slot.map_or_else(|| "_".to_string(), String::from))
                .collect(),
        };
        f.write_str(&letters.join(" "))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessReport {
    pub snapshot: StateSnapshot,
    pub signal: Signal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintReport {
    pub snapshot: StateSnapshot,
    pub signal: Signal,
    pub message: Option<String>,
}

/// Owns the word bank, the random source and the current session.
///
/// Every action runs to completion on `&mut self`; share a controller across
/// threads by wrapping it in a single `Mutex`.
#[derive(Debug)]
pub struct SessionController<R> {
    bank: WordBank,
    rng: R,
    config: GameConfig,
    session: GameSession,
}

impl<R: RandomSource> SessionController<R> {
    /// Validate the configuration and start the first session.
    pub fn new(bank: WordBank, mut rng: R, config: GameConfig) -> Result<Self, ConfigError> {
        if config.max_wrong == 0 {
            return Err(ConfigError::ZeroMaxWrong);
        }
        let session = GameSession::new(bank.draw(&mut rng), config.max_wrong);
        info_log!(
            "SessionController::new() - {} words, max_wrong={}",
            bank.len(),
            config.max_wrong
        );
        Ok(Self {
            bank,
            rng,
            config,
            session,
        })
    }

    /// Replace the session with a fresh draw.
    pub fn new_game(&mut self) -> StateSnapshot {
        self.session = GameSession::new(self.bank.draw(&mut self.rng), self.config.max_wrong);
        debug_log!(
            "new_game() - word drawn, length {}",
            self.session.word().len()
        );
        self.current_state()
    }

    pub fn guess_letter(&mut self, letter: char) -> GuessReport {
        let signal = apply_guess(&mut self.session, letter);
        self.check_invariants();
        GuessReport {
            snapshot: self.current_state(),
            signal,
        }
    }

    pub fn use_hint(&mut self) -> HintReport {
        let outcome = apply_hint(&mut self.session, &mut self.rng);
        self.check_invariants();
        HintReport {
            snapshot: self.current_state(),
            signal: outcome.signal,
            message: outcome.message,
        }
    }

    #[must_use]
    pub fn current_state(&self) -> StateSnapshot {
        StateSnapshot::of(&self.session)
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.bank.len()
    }

    fn check_invariants(&self) {
        debug_assert_eq!(
            self.session.wrong_count(),
            self.session.derived_wrong_count(),
            "wrong count drifted from guessed letters"
        );
    }
}
