//! Common test utilities shared across integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path of the bizquery binary built by cargo for this test run
pub fn bizquery_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_bizquery"))
}

/// Run the bizquery binary in the specified directory with colors disabled
pub fn run_bizquery_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(bizquery_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute bizquery binary")
}
