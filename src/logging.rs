//! Logging initialization.
//!
//! Structured logging via `tracing` to stderr, with verbosity from repeated
//! `-v` flags and environment-based override via `APPCONFIG_CHECK_LOG_LEVEL`.
//! The report's stdout lines never go through this layer.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::ColorChoice;

/// Environment variable that overrides the verbosity-derived filter.
pub const LOG_LEVEL_ENV: &str = "APPCONFIG_CHECK_LOG_LEVEL";

/// Maps a verbosity level to a tracing directive string.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"` (saturates)
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initializes the global tracing subscriber.
///
/// If `APPCONFIG_CHECK_LOG_LEVEL` is set it takes precedence over
/// `verbosity`. Module targets are shown from `-vv` upward. ANSI color
/// follows `color`, where `Auto` means "stderr is a terminal and `NO_COLOR`
/// is unset".
///
/// Uses `try_init()` so calling this more than once (e.g. in tests) is safe.
pub fn init_logging(verbosity: u8, color: ColorChoice) {
    let default_directive = verbosity_to_directive(verbosity);

    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let show_target = verbosity >= 2;

    let use_ansi = match color {
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_target(show_target)
        .with_writer(std::io::stderr)
        .try_init();
}
