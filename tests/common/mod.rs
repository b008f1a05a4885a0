//! Shared helpers for integration tests.
//!
//! Spawns the real `appconfig-check` binary so tests exercise the full
//! stdout/exit-code contract, not just the library surface.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Handle on the compiled `appconfig-check` binary.
pub struct CheckProcess;

impl CheckProcess {
    /// Runs the binary with the given arguments and waits for it to exit.
    pub fn spawn(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_appconfig-check"))
            .args(args)
            .output()
            .expect("failed to spawn appconfig-check")
    }

    /// Runs the binary with `dir` as its working directory.
    pub fn spawn_in(dir: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_appconfig-check"))
            .current_dir(dir)
            .args(args)
            .output()
            .expect("failed to spawn appconfig-check")
    }

    /// Runs the binary against a committed fixture.
    pub fn check_fixture(name: &str) -> Output {
        let path = Self::fixture_path(name);
        Self::spawn(&[path.to_str().expect("non-UTF-8 fixture path")])
    }

    /// Absolute path to a committed fixture file.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}

/// Decodes captured stdout as UTF-8.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
