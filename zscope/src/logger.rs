// zscope/src/logger.rs
//! Logging bootstrap for the zscope binary and its tests.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger` on stderr.
///
/// `RUST_LOG` applies unless `level_override` is given. Calling this more than
/// once is harmless; later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr);

    if let Some(level) = level_override {
        builder.filter_level(level);
    }

    let _ = builder.try_init();
}

/// Picks the log level from the `--quiet`/`--debug` flags.
///
/// The TUI owns the terminal, so it logs nothing unless debugging was asked for.
pub fn level_for(quiet: bool, debug: bool, interactive: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else if interactive {
        Some(LevelFilter::Off)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(level_for(true, true, false), Some(LevelFilter::Off));
        assert_eq!(level_for(false, true, true), Some(LevelFilter::Debug));
        assert_eq!(level_for(false, false, true), Some(LevelFilter::Off));
        assert_eq!(level_for(false, false, false), None);
    }
}
