use hangman::cli::{Cli, CliInterface, parse_cli};
use hangman::logging::init_logging;
use hangman::tui::TuiInterface;
use hangman::wordbank::{EMBEDDED_WORDBANK, default_wordbank_path};
use hangman::{
    GameConfig, SessionController, StdRandom, WordBank, game_loop, info_log,
    load_wordbank_from_file, load_wordbank_from_str,
};
use std::io;
use std::process::ExitCode;

fn load_words(cli: &Cli) -> io::Result<Vec<String>> {
    if let Some(path) = &cli.wordbank_path {
        return load_wordbank_from_file(path);
    }
    if let Some(path) = default_wordbank_path()
        && path.is_file()
    {
        info_log!("Using word list from {}", path.display());
        return load_wordbank_from_file(path);
    }
    Ok(load_wordbank_from_str(EMBEDDED_WORDBANK))
}

fn main() -> ExitCode {
    let cli = parse_cli();
    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Failed to open log file: {e}");
        return ExitCode::FAILURE;
    }

    let words = match load_words(&cli) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load word bank: {e}");
            return ExitCode::FAILURE;
        }
    };
    let rng = cli.seed.map_or_else(StdRandom::from_entropy, StdRandom::seeded);
    let config = GameConfig {
        max_wrong: cli.max_wrong,
    };
    let mut controller = match WordBank::new(words)
        .map_err(Into::into)
        .and_then(|bank| SessionController::new(bank, rng, config))
    {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("Loaded {} words.", controller.word_count());

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut controller, &mut interface);
        return ExitCode::SUCCESS;
    }

    match TuiInterface::new() {
        Ok(mut interface) => {
            game_loop(&mut controller, &mut interface);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to start the terminal UI: {e}");
            ExitCode::FAILURE
        }
    }
}
