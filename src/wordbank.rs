use crate::debug_log;
use crate::error::WordBankError;
use crate::random::RandomSource;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

fn normalize_word(line: &str) -> Option<String> {
    let word = line.trim().to_uppercase();
    (!word.is_empty() && word.chars().all(|c| c.is_ascii_uppercase())).then_some(word)
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_word).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_word(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Location of an optional user word list: `<config_dir>/hangman/words.txt`.
#[must_use]
pub fn default_wordbank_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hangman").join("words.txt"))
}

/// Fixed, non-empty corpus of uppercase words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Build a bank from already-normalized words.
    ///
    /// Fails if the list is empty or any entry is not purely `A-Z`.
    pub fn new(words: Vec<String>) -> Result<Self, WordBankError> {
        if let Some(bad) = words
            .iter()
            .find(|w| w.is_empty() || !w.chars().all(|c| c.is_ascii_uppercase()))
        {
            return Err(WordBankError::InvalidWord(bad.clone()));
        }
        if words.is_empty() {
            return Err(WordBankError::Empty);
        }
        Ok(Self { words })
    }

    /// The compiled-in sample corpus.
    pub fn embedded() -> Result<Self, WordBankError> {
        Self::new(load_wordbank_from_str(EMBEDDED_WORDBANK))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Pick one word uniformly at random.
    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<char> {
        let index = rng.next_index(self.words.len());
        debug_log!("WordBank::draw() - index {} of {}", index, self.words.len());
        self.words[index].chars().collect()
    }
}
