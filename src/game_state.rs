use crate::controller::{SessionController, StateSnapshot};
use crate::random::RandomSource;
use crate::session::{Signal, Status};
use crate::{debug_log, info_log};

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    Hint,
    NewGame,
    Exit,
}

/// Seam between the game loop and a front end (line-mode CLI or TUI).
pub trait GameInterface {
    /// Next player action. `None` means the input was unusable; ask again.
    fn read_action(&mut self) -> Option<UserAction>;

    fn display_state(&mut self, snapshot: &StateSnapshot);

    /// A rejected action. The state shown last is still current.
    fn display_signal(&mut self, signal: Signal);

    fn display_hint(&mut self, message: &str);

    fn display_game_over(&mut self, snapshot: &StateSnapshot);

    fn display_new_game_message(&mut self, word_count: usize);

    fn display_exit_message(&mut self);
}

pub fn game_loop<R, I>(controller: &mut SessionController<R>, interface: &mut I)
where
    R: RandomSource,
    I: GameInterface + ?Sized,
{
    info_log!("game_loop() - starting");
    interface.display_state(&controller.current_state());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                let snapshot = controller.new_game();
                interface.display_new_game_message(controller.word_count());
                interface.display_state(&snapshot);
            }
            UserAction::Guess(letter) => {
                let report = controller.guess_letter(letter);
                show_outcome(interface, report.signal, &report.snapshot);
            }
            UserAction::Hint => {
                let report = controller.use_hint();
                if let Some(message) = &report.message {
                    interface.display_hint(message);
                }
                show_outcome(interface, report.signal, &report.snapshot);
            }
        }
    }
}

fn show_outcome<I: GameInterface + ?Sized>(
    interface: &mut I,
    signal: Signal,
    snapshot: &StateSnapshot,
) {
    if signal != Signal::Ok {
        interface.display_signal(signal);
        return;
    }
    interface.display_state(snapshot);
    if snapshot.status != Status::InProgress {
        info_log!("game_loop() - game finished: {:?}", snapshot.status);
        interface.display_game_over(snapshot);
    }
}
