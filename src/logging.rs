// Conditional logging macros - only active in debug builds

use chrono::Local;
use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const DEFAULT_FILTER: &str = "warn";

/// Install the global logger.
///
/// Level comes from `RUST_LOG` (default `warn`). When `log_file` is given the
/// output goes there instead of stderr, which the TUI owns while it runs.
pub fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // Only one global logger can be set; later calls keep the first.
    let _ = builder.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_is_ok() {
        assert!(init_logging(None).is_ok());
        assert!(init_logging(None).is_ok());
    }

    #[test]
    fn test_init_logging_bad_path_fails() {
        assert!(init_logging(Some(Path::new("/nonexistent/dir/hangman.log"))).is_err());
    }
}
