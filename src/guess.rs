use crate::debug_log;
use crate::session::{GameSession, Signal, normalize_letter};

/// Apply a single-letter guess.
///
/// Checked in order: finished game, malformed input, repeated letter. Any
/// rejection leaves `session` unchanged.
pub fn apply_guess(session: &mut GameSession, input: char) -> Signal {
    if session.status().is_over() {
        debug_log!("apply_guess() - rejected {:?}: game over", input);
        return Signal::GameOver;
    }
    let Some(letter) = normalize_letter(input) else {
        debug_log!("apply_guess() - rejected {:?}: not a letter", input);
        return Signal::InvalidInput;
    };
    if session.guessed.contains(&letter) {
        debug_log!("apply_guess() - rejected '{}': already guessed", letter);
        return Signal::AlreadyGuessed;
    }

    session.guessed.insert(letter);
    if !session.contains(letter) {
        session.wrong_count = (session.wrong_count + 1).min(session.max_wrong);
    }
    debug_log!(
        "apply_guess() - '{}' accepted, wrong={}/{}, status={:?}",
        letter,
        session.wrong_count,
        session.max_wrong,
        session.status()
    );
    Signal::Ok
}
