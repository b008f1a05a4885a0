//! AppConfig manifest schema
//!
//! The field tables driving the check order, and the typed manifest produced
//! once every check has passed.

use serde::{Deserialize, Serialize};

/// Required manifest keys, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "version", "description", "url"];

/// Keys the host no longer accepts, in the order they are checked.
///
/// Presence alone fails the manifest; the value is never inspected.
pub const DEPRECATED_FIELDS: [&str; 2] = ["feature", "icon"];

/// A validated AppConfig manifest.
///
/// Holds the raw string values exactly as they appear in the document;
/// trimming happens only inside the checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Plugin display name shown in the panel.
    pub name: String,

    /// Plugin version string.
    pub version: String,

    /// Short description shown alongside the panel entry.
    pub description: String,

    /// Panel URL, rooted at the host (leading `/`).
    pub url: String,
}
