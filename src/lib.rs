//! `appconfig-check` - AppConfig manifest validation for cPanel/WHM plugins
//!
//! This library backs the `appconfig-check` binary: it loads an AppConfig
//! manifest, runs the registration checks in their fixed order, and renders
//! the pass/fail report.

pub mod cli;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod report;
