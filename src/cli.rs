//! CLI argument definitions
//!
//! Clap derive structs for `appconfig-check` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Checks an AppConfig manifest against the cPanel/WHM registration rules.
#[derive(Parser, Debug)]
#[command(name = "appconfig-check", author, version, about)]
pub struct Cli {
    /// Path to the AppConfig manifest.
    #[arg(value_name = "MANIFEST", default_value = "uniquenotify.conf")]
    pub manifest: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress stderr logging; stdout diagnostics are unaffected.
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output control for stderr logging.
    #[arg(long, default_value = "auto", env = "APPCONFIG_CHECK_COLOR")]
    pub color: ColorChoice,
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest_path() {
        let cli = Cli::try_parse_from(["appconfig-check"]).unwrap();
        assert_eq!(cli.manifest, PathBuf::from("uniquenotify.conf"));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_explicit_manifest_path() {
        let cli = Cli::try_parse_from(["appconfig-check", "plugins/notify.conf"]).unwrap();
        assert_eq!(cli.manifest, PathBuf::from("plugins/notify.conf"));
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["appconfig-check", "-vvv"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::try_parse_from(["appconfig-check", "--quiet"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_color_never() {
        let cli = Cli::try_parse_from(["appconfig-check", "--color", "never"]).unwrap();
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let result = Cli::try_parse_from(["appconfig-check", "--color", "sometimes"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_extra_positional_rejected() {
        let result = Cli::try_parse_from(["appconfig-check", "a.conf", "b.conf"]);
        assert!(result.is_err(), "only one manifest per run");
    }

    #[test]
    fn test_help_output() {
        let result = Cli::try_parse_from(["appconfig-check", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let result = Cli::try_parse_from(["appconfig-check", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
