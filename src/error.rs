//! Error types for `appconfig-check`
//!
//! One variant per way a manifest can fail its checks, plus the I/O channel
//! for failures outside the rules. The `Display` strings are the exact
//! diagnostic lines users see.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for the `appconfig-check` CLI.
pub struct ExitCode;

impl ExitCode {
    /// Every check passed
    pub const SUCCESS: i32 = 0;

    /// A check failed, or the run hit an unexpected error
    pub const FAILURE: i32 = 1;
}

// ============================================================================
// Check Errors
// ============================================================================

/// A failed manifest check, or an error that prevented checking at all.
///
/// Rule variants (everything except [`CheckError::Io`]) are reported as
/// `✗ `-prefixed diagnostics and turn the run into a clean failure.
/// [`CheckError::Io`] propagates to the entry point, which reports it and
/// still exits with [`ExitCode::FAILURE`] rather than a panic.
#[derive(Debug, Error)]
pub enum CheckError {
    /// No file exists at the manifest path
    #[error("AppConfig file not found: {path}")]
    MissingFile {
        /// Path to the missing manifest
        path: PathBuf,
    },

    /// The file is not a decodable YAML mapping
    #[error("Invalid YAML syntax: {message}")]
    InvalidSyntax {
        /// Error message from the decoder
        message: String,
    },

    /// A required key is absent from the manifest
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// A key the host no longer accepts is present, whatever its value
    #[error("Deprecated field found: {field} (this may cause registration failures)")]
    DeprecatedField {
        /// Name of the deprecated field
        field: &'static str,
    },

    /// A required field holds something other than a non-blank string
    #[error("'{field}' must be a non-empty string")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
    },

    /// The url value does not start with `/`
    #[error("'url' must start with '/'")]
    RelativeUrl,

    /// I/O failure outside the checks (permissions, non-UTF-8 bytes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Returns `true` for variants that are rule diagnostics rather than
    /// unexpected errors.
    ///
    /// Rule failures are printed inline and end the run with a failure
    /// banner; anything else escapes to the entry point's catch-all.
    #[must_use]
    pub const fn is_rule_failure(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `appconfig-check` operations.
pub type Result<T> = std::result::Result<T, CheckError>;

// ============================================================================
// Tests
// ============================================================================
