//! Manifest loading
//!
//! Path → decoded YAML mapping: existence check, read, BOM strip, parse.
//! The document stays a loose [`Mapping`] so the checks can tell key-absent
//! from key-present-with-null or key-present-with-non-string.

use std::path::Path;

use serde_yaml::Mapping;

use crate::error::{CheckError, Result};

/// Loads and decodes the manifest at `path`.
///
/// # Errors
///
/// - [`CheckError::MissingFile`] if nothing exists at `path`.
/// - [`CheckError::InvalidSyntax`] if the contents are not a YAML mapping.
/// - [`CheckError::Io`] if the file exists but cannot be read (permissions,
///   non-UTF-8 bytes).
pub fn load_document(path: &Path) -> Result<Mapping> {
    if !path.exists() {
        return Err(CheckError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(path = %path.display(), "reading manifest");
    let raw = std::fs::read_to_string(path)?;

    parse_document(&raw)
}

/// Decodes manifest text into a YAML mapping.
///
/// Strips a leading UTF-8 BOM before parsing. A document whose root is not
/// a mapping (a bare scalar, a list, an empty/null document) fails here with
/// the decoder's shape error.
///
/// # Errors
///
/// Returns [`CheckError::InvalidSyntax`] carrying the decoder's message.
pub fn parse_document(raw: &str) -> Result<Mapping> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    serde_yaml::from_str(raw).map_err(|e| CheckError::InvalidSyntax {
        message: e.to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================
