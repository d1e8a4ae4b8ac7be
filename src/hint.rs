//! Three-tier hint machine.
//!
//! - `Unused` → `Length`: tells the word length, free
//! - `Length` → `HalfLetters`: eliminates half of the unguessed letters that
//!   are not in the word, costs one wrong guess
//! - `HalfLetters` → `Vowels`: marks every vowel guessed, costs one wrong guess
//!
//! Hints are refused once a single wrong guess remains, so a hint's cost can
//! never end the game on its own.

use crate::random::{RandomSource, choose_distinct};
use crate::session::{ALPHABET, GameSession, HintStage, Signal, VOWELS};
use crate::{debug_log, info_log};

/// Result of a hint request. `message` is set only when a hint was given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintOutcome {
    pub signal: Signal,
    pub message: Option<String>,
}

impl HintOutcome {
    fn rejected(signal: Signal) -> Self {
        debug_log!("apply_hint() - rejected: {:?}", signal);
        Self {
            signal,
            message: None,
        }
    }

    fn given(message: String) -> Self {
        Self {
            signal: Signal::Ok,
            message: Some(message),
        }
    }
}

/// Apply the next hint tier, or report why none was given.
pub fn apply_hint<R: RandomSource + ?Sized>(
    session: &mut GameSession,
    rng: &mut R,
) -> HintOutcome {
    if session.status().is_over() {
        return HintOutcome::rejected(Signal::GameOver);
    }
    let Some(next) = session.hint_stage.next() else {
        return HintOutcome::rejected(Signal::NoHintAvailable);
    };
    if session.wrong_count >= session.max_wrong.saturating_sub(1) {
        return HintOutcome::rejected(Signal::HintBlocked);
    }

    let message = match session.hint_stage {
        HintStage::Unused => format!("Word length: {}", session.word.len()),
        HintStage::Length => {
            let remaining: Vec<char> = ALPHABET
                .iter()
                .copied()
                .filter(|c| !session.guessed.contains(c) && !session.contains(*c))
                .collect();
            let eliminated = choose_distinct(rng, &remaining, remaining.len() / 2);
            for letter in &eliminated {
                reveal(session, *letter);
            }
            charge(session);
            format!("Eliminated {} letters not in the word", eliminated.len())
        }
        HintStage::HalfLetters | HintStage::Vowels => {
            for letter in VOWELS {
                reveal(session, letter);
            }
            charge(session);
            "Vowels revealed".to_string()
        }
    };
    session.hint_stage = next;

    info_log!(
        "apply_hint() - stage {} given, wrong={}/{}, status={:?}",
        next.as_u8(),
        session.wrong_count,
        session.max_wrong,
        session.status()
    );
    HintOutcome::given(message)
}

fn reveal(session: &mut GameSession, letter: char) {
    if session.guessed.insert(letter) {
        session.hint_letters.insert(letter);
    }
}

fn charge(session: &mut GameSession) {
    session.wrong_count = (session.wrong_count + 1).min(session.max_wrong);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guess::apply_guess;
    use crate::random::{ScriptedRandom, StdRandom};
    use crate::session::{DEFAULT_MAX_WRONG, Status};

    fn session(word: &str) -> GameSession {
        GameSession::new(word.chars().collect(), DEFAULT_MAX_WRONG)
    }

    #[test]
    fn test_length_hint_is_free() {
        let mut s = session("CAT");
        let outcome = apply_hint(&mut s, &mut ScriptedRandom::zeros());
        assert_eq!(outcome.signal, Signal::Ok);
        assert_eq!(outcome.message.as_deref(), Some("Word length: 3"));
        assert_eq!(s.hint_stage(), HintStage::Length);
        assert_eq!(s.wrong_count(), 0);
        assert!(s.guessed().is_empty());
    }

    #[test]
    fn test_half_letters_hint_on_cat() {
        let mut s = session("CAT");
        let mut rng = StdRandom::seeded(3);
        apply_hint(&mut s, &mut rng);
        let outcome = apply_hint(&mut s, &mut rng);

        assert_eq!(outcome.signal, Signal::Ok);
        assert_eq!(s.guessed().len(), 11);
        assert!(s.guessed().iter().all(|c| !"CAT".contains(*c)));
        assert_eq!(s.wrong_count(), 1);
        assert_eq!(s.hint_stage(), HintStage::HalfLetters);
        assert_eq!(s.hint_letters(), s.guessed());
    }

    #[test]
    fn test_half_letters_hint_with_scripted_source() {
        let mut s = session("CAT");
        let mut rng = ScriptedRandom::zeros();
        apply_hint(&mut s, &mut rng);
        apply_hint(&mut s, &mut rng);
        // With index 0 each draw, partial Fisher-Yates keeps the alphabetical prefix.
        let expected: Vec<char> = "BDEFGHIJKLM".chars().collect();
        assert_eq!(s.guessed().iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_half_letters_skips_guessed_letters() {
        let mut s = session("CAT");
        apply_guess(&mut s, 'Z');
        apply_guess(&mut s, 'C');
        let mut rng = ScriptedRandom::zeros();
        apply_hint(&mut s, &mut rng);
        apply_hint(&mut s, &mut rng);
        // 26 - {C,A,T} - {Z} = 22 remaining, half is 11
        assert_eq!(s.hint_letters().len(), 11);
        assert!(!s.hint_letters().contains(&'Z'));
        assert_eq!(s.wrong_count(), 2);
        assert_eq!(s.wrong_count(), s.derived_wrong_count());
    }

    #[test]
    fn test_half_letters_with_nothing_remaining_still_charges() {
        let mut s = GameSession::new("CAT".chars().collect(), 30);
        for letter in ALPHABET.iter().filter(|c| !"CAT".contains(**c)) {
            apply_guess(&mut s, *letter);
        }
        assert_eq!(s.wrong_count(), 23);
        let mut rng = ScriptedRandom::zeros();
        apply_hint(&mut s, &mut rng);
        let outcome = apply_hint(&mut s, &mut rng);
        assert_eq!(outcome.signal, Signal::Ok);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Eliminated 0 letters not in the word")
        );
        assert_eq!(s.wrong_count(), 24);
        assert_eq!(s.hint_stage(), HintStage::HalfLetters);
    }

    #[test]
    fn test_vowel_hint_reveals_all_vowels() {
        let mut s = session("RHYTHM");
        apply_guess(&mut s, 'E');
        let mut rng = ScriptedRandom::zeros();
        apply_hint(&mut s, &mut rng);
        apply_hint(&mut s, &mut rng);
        let vowels_before: Vec<char> = VOWELS
            .iter()
            .copied()
            .filter(|v| s.guessed().contains(v))
            .collect();
        let outcome = apply_hint(&mut s, &mut rng);

        assert_eq!(outcome.message.as_deref(), Some("Vowels revealed"));
        assert!(VOWELS.iter().all(|v| s.guessed().contains(v)));
        assert!(vowels_before.contains(&'E'));
        assert!(!s.hint_letters().contains(&'E'));
        assert_eq!(s.hint_stage(), HintStage::Vowels);
        assert_eq!(s.wrong_count(), 3);
        assert_eq!(s.wrong_count(), s.derived_wrong_count());
    }

    #[test]
    fn test_vowel_hint_can_win() {
        let mut s = session("AUDIO");
        apply_guess(&mut s, 'D');
        let mut rng = ScriptedRandom::zeros();
        apply_hint(&mut s, &mut rng);
        apply_hint(&mut s, &mut rng);
        assert_eq!(s.status(), Status::InProgress);
        apply_hint(&mut s, &mut rng);
        assert_eq!(s.status(), Status::Won);
    }

    #[test]
    fn test_fourth_hint_is_unavailable() {
        let mut s = session("KOTLIN");
        let mut rng = StdRandom::seeded(11);
        for _ in 0..3 {
            assert_eq!(apply_hint(&mut s, &mut rng).signal, Signal::Ok);
        }
        let before = s.clone();
        let outcome = apply_hint(&mut s, &mut rng);
        assert_eq!(outcome.signal, Signal::NoHintAvailable);
        assert_eq!(outcome.message, None);
        assert_eq!(s, before);
    }

    #[test]
    fn test_hint_blocked_with_one_guess_left() {
        let mut s = session("DOG");
        for letter in ['X', 'Y', 'Z', 'W', 'V'] {
            apply_guess(&mut s, letter);
        }
        assert_eq!(s.wrong_count(), DEFAULT_MAX_WRONG - 1);
        let before = s.clone();
        let outcome = apply_hint(&mut s, &mut ScriptedRandom::zeros());
        assert_eq!(outcome.signal, Signal::HintBlocked);
        assert_eq!(s, before);
    }

    #[test]
    fn test_hint_blocked_even_for_free_stage() {
        let mut s = GameSession::new("DOG".chars().collect(), 1);
        let outcome = apply_hint(&mut s, &mut ScriptedRandom::zeros());
        assert_eq!(outcome.signal, Signal::HintBlocked);
        assert_eq!(s.hint_stage(), HintStage::Unused);
    }

    #[test]
    fn test_hint_after_game_over() {
        let mut s = session("GO");
        apply_guess(&mut s, 'G');
        apply_guess(&mut s, 'O');
        let before = s.clone();
        let outcome = apply_hint(&mut s, &mut ScriptedRandom::zeros());
        assert_eq!(outcome.signal, Signal::GameOver);
        assert_eq!(s, before);
    }

    #[test]
    fn test_hint_cost_never_loses() {
        let mut s = session("DOG");
        for letter in ['X', 'Y', 'Z', 'W'] {
            apply_guess(&mut s, letter);
        }
        let mut rng = ScriptedRandom::zeros();
        assert_eq!(apply_hint(&mut s, &mut rng).signal, Signal::Ok);
        assert_eq!(apply_hint(&mut s, &mut rng).signal, Signal::Ok);
        assert_eq!(s.wrong_count(), DEFAULT_MAX_WRONG - 1);
        assert_eq!(s.status(), Status::InProgress);
        assert_eq!(apply_hint(&mut s, &mut rng).signal, Signal::HintBlocked);
    }

    #[test]
    fn test_eliminated_letter_cannot_be_guessed() {
        let mut s = session("CAT");
        let mut rng = ScriptedRandom::zeros();
        apply_hint(&mut s, &mut rng);
        apply_hint(&mut s, &mut rng);
        assert_eq!(apply_guess(&mut s, 'B'), Signal::AlreadyGuessed);
    }
}
