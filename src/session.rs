//! Session data model: the hidden word, guessed letters, counters and the
//! derived win/loss status.

use std::collections::BTreeSet;
use std::fmt;

pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];
pub const DEFAULT_MAX_WRONG: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != Self::InProgress
    }
}

/// Outcome code of a player action. Rejections leave the session untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    Ok,
    AlreadyGuessed,
    InvalidInput,
    GameOver,
    NoHintAvailable,
    HintBlocked,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Ok => "ok",
            Self::AlreadyGuessed => "letter already guessed",
            Self::InvalidInput => "enter a single letter A-Z",
            Self::GameOver => "game is over",
            Self::NoHintAvailable => "no hints left",
            Self::HintBlocked => "hint not available",
        };
        f.write_str(text)
    }
}

/// Hint tiers consumed so far. `Vowels` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HintStage {
    #[default]
    Unused,
    /// Word length told
    Length,
    /// Half of the letters absent from the word eliminated
    HalfLetters,
    /// Vowels revealed
    Vowels,
}

impl HintStage {
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Unused => Some(Self::Length),
            Self::Length => Some(Self::HalfLetters),
            Self::HalfLetters => Some(Self::Vowels),
            Self::Vowels => None,
        }
    }

    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Unused => 0,
            Self::Length => 1,
            Self::HalfLetters => 2,
            Self::Vowels => 3,
        }
    }

    /// Wrong guesses charged by the hints consumed so far.
    #[must_use]
    pub fn charges(self) -> u8 {
        self.as_u8().saturating_sub(1)
    }
}

/// Normalize player input to an uppercase alphabet letter.
#[must_use]
pub fn normalize_letter(input: char) -> Option<char> {
    let letter = input.to_ascii_uppercase();
    letter.is_ascii_uppercase().then_some(letter)
}

/// One play-through, from word draw to Won/Lost.
///
/// Fields are only mutated through the guess and hint engines; a new game
/// replaces the whole value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) word: Vec<char>,
    pub(crate) guessed: BTreeSet<char>,
    /// Letters added by hints that the player had not guessed themselves
    pub(crate) hint_letters: BTreeSet<char>,
    pub(crate) wrong_count: u8,
    pub(crate) hint_stage: HintStage,
    pub(crate) max_wrong: u8,
}

impl GameSession {
    /// Start a session for `word`, which must be non-empty uppercase `A-Z`.
    #[must_use]
    pub fn new(word: Vec<char>, max_wrong: u8) -> Self {
        debug_assert!(!word.is_empty());
        debug_assert!(word.iter().all(char::is_ascii_uppercase));
        Self {
            word,
            guessed: BTreeSet::new(),
            hint_letters: BTreeSet::new(),
            wrong_count: 0,
            hint_stage: HintStage::Unused,
            max_wrong,
        }
    }

    #[must_use]
    pub fn word(&self) -> &[char] {
        &self.word
    }

    #[must_use]
    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    #[must_use]
    pub fn hint_letters(&self) -> &BTreeSet<char> {
        &self.hint_letters
    }

    #[must_use]
    pub fn wrong_count(&self) -> u8 {
        self.wrong_count
    }

    #[must_use]
    pub fn hint_stage(&self) -> HintStage {
        self.hint_stage
    }

    #[must_use]
    pub fn max_wrong(&self) -> u8 {
        self.max_wrong
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.word.contains(&letter)
    }

    /// Won beats Lost when both hold.
    #[must_use]
    pub fn status(&self) -> Status {
        if self.word.iter().all(|c| self.guessed.contains(c)) {
            Status::Won
        } else if self.wrong_count >= self.max_wrong {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    /// Player-guessed letters that are not in the word.
    #[must_use]
    pub fn direct_misses(&self) -> usize {
        self.guessed
            .iter()
            .filter(|c| !self.hint_letters.contains(c) && !self.contains(**c))
            .count()
    }

    /// The wrong count as derived from the guessed set and hint charges.
    #[must_use]
    pub fn derived_wrong_count(&self) -> u8 {
        let misses = u8::try_from(self.direct_misses()).unwrap_or(u8::MAX);
        misses
            .saturating_add(self.hint_stage.charges())
            .min(self.max_wrong)
    }

    /// `Some(letter)` where the position is revealed, `None` where hidden.
    #[must_use]
    pub fn pattern(&self) -> Vec<Option<char>> {
        self.word
            .iter()
            .map(|c| self.guessed.contains(c).then_some(*c))
            .collect()
    }
}
