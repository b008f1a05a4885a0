//! Validation report
//!
//! The user-facing run: banners and diagnostics on stdout, in a fixed order.
//! Stdout is the product surface; ambient logging stays on stderr so
//! verbosity never perturbs these lines.

use std::path::Path;

use crate::error::Result;
use crate::manifest;

/// Banner separator line.
const SEPARATOR: &str =
    "============================================================";

/// Runs the full validation report for the manifest at `path`.
///
/// Prints the opening banner, the per-check diagnostics, and the closing
/// verdict banner. Returns `Ok(true)` when every check passed and
/// `Ok(false)` when a check failed (already reported inline).
///
/// # Errors
///
/// Returns [`crate::error::CheckError::Io`] for failures outside the checks
/// (permissions, non-UTF-8 bytes); the caller reports those and exits
/// nonzero.
pub fn run(path: &Path) -> Result<bool> {
    println!("{SEPARATOR}");
    println!("AppConfig Validation");
    println!("{SEPARATOR}");
    println!();
    println!("Testing AppConfig file format...");

    match manifest::check_file(path) {
        Ok(config) => {
            println!("✓ AppConfig format is valid");
            println!("  - name: {}", config.name);
            println!("  - version: {}", config.version);
            println!("  - description: {}", config.description);
            println!("  - url: {}", config.url);
            println!();
            println!("{SEPARATOR}");
            println!("✅ All AppConfig checks passed!");
            println!("{SEPARATOR}");
            Ok(true)
        }
        Err(e) if e.is_rule_failure() => {
            tracing::info!(error = %e, "manifest failed a check");
            println!("✗ {e}");
            println!();
            println!("{SEPARATOR}");
            println!("❌ AppConfig validation failed!");
            println!("{SEPARATOR}");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// Tests
// ============================================================================
