//! Registration checks
//!
//! The fixed rule sequence over a decoded manifest mapping: required keys
//! present, deprecated keys absent, values non-blank strings, url rooted.
//! The first violated rule ends the run; later rules are never evaluated.

use serde_yaml::Mapping;

use crate::error::{CheckError, Result};
use crate::manifest::schema::{AppConfig, DEPRECATED_FIELDS, REQUIRED_FIELDS};

/// Runs every registration check against a decoded manifest.
///
/// Check order is part of the contract: required-key presence in
/// [`REQUIRED_FIELDS`] order, then deprecated-key absence in
/// [`DEPRECATED_FIELDS`] order, then per-field value checks, then the url
/// prefix rule. The document is never mutated.
///
/// # Errors
///
/// Returns the first failed check as its [`CheckError`] variant.
pub fn check_document(doc: &Mapping) -> Result<AppConfig> {
    for field in REQUIRED_FIELDS {
        if doc.get(field).is_none() {
            return Err(CheckError::MissingField { field });
        }
    }

    // Presence alone disqualifies; the value is deliberately not inspected,
    // so feature: null and icon: "" fail the same way as real values.
    for field in DEPRECATED_FIELDS {
        if doc.get(field).is_some() {
            return Err(CheckError::DeprecatedField { field });
        }
    }

    let name = require_string(doc, "name")?;
    let version = require_string(doc, "version")?;
    let description = require_string(doc, "description")?;
    let url = require_string(doc, "url")?;

    // The raw value, not the trimmed one: "  /x" passes the blank check
    // above but is still not a rooted path.
    if !url.starts_with('/') {
        return Err(CheckError::RelativeUrl);
    }

    tracing::debug!(name, version, "manifest passed all checks");

    Ok(AppConfig {
        name: name.to_string(),
        version: version.to_string(),
        description: description.to_string(),
        url: url.to_string(),
    })
}

/// Reads a required field's value as a non-blank string.
///
/// Presence was already verified; this enforces the type and the
/// trims-to-non-empty rule.
fn require_string<'doc>(doc: &'doc Mapping, field: &'static str) -> Result<&'doc str> {
    doc.get(field)
        .and_then(serde_yaml::Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or(CheckError::InvalidValue { field })
}

// ============================================================================
// Tests
// ============================================================================
