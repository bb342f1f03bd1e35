//! Provides functionality for interfacing with Git.

use std::process::Command;

/// Initialises a new Git repository in the given directory.
pub fn init_repository(path: &str) -> bool {
    Command::new("git")
        .arg("init")
        .arg(path)
        .output()
        .ok()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
