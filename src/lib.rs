// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod controller;
pub mod error;
pub mod game_state;
pub mod guess;
pub mod hint;
pub mod logging;
pub mod random;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use controller::{GameConfig, GuessReport, HintReport, SessionController, StateSnapshot};
pub use error::{ConfigError, WordBankError};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use random::{RandomSource, ScriptedRandom, StdRandom};
pub use session::{HintStage, Signal, Status};
pub use wordbank::{WordBank, load_wordbank_from_file, load_wordbank_from_str};
