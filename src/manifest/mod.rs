//! AppConfig manifest handling
//!
//! Loads a manifest as a YAML mapping and runs the registration checks
//! against it in their fixed order.

pub mod checks;
pub mod loader;
pub mod schema;

pub use checks::check_document;
pub use loader::{load_document, parse_document};
pub use schema::{AppConfig, DEPRECATED_FIELDS, REQUIRED_FIELDS};

use std::path::Path;

use crate::error::Result;

/// Loads the manifest at `path` and runs every check against it.
///
/// # Errors
///
/// Returns the first failed check, or [`crate::error::CheckError::Io`] if
/// the file exists but could not be read.
pub fn check_file(path: &Path) -> Result<AppConfig> {
    let doc = loader::load_document(path)?;
    checks::check_document(&doc)
}
