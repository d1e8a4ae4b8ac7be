use thiserror::Error;

/// The word corpus could not be used to start a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordBankError {
    /// No valid word remained after normalization
    #[error("word bank contains no usable words")]
    Empty,
    /// A word contained something other than the letters A-Z
    #[error("invalid word in word bank: {0:?}")]
    InvalidWord(String),
}

/// Game configuration rejected before the first session starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    WordBank(#[from] WordBankError),
    #[error("max wrong guesses must be at least 1")]
    ZeroMaxWrong,
}
