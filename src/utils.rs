// file: src/utils.rs
// version: 1.0.0
// guid: 92d6b0e4-5a17-4c83-bf29-3e8d1a6c470f

//! Small helpers shared by the CLI commands

use std::path::PathBuf;

/// Check if a command exists in PATH
pub fn command_exists(command: &str) -> bool {
    which::which(command).is_ok()
}

/// Expand a user-supplied path (tilde and environment-free form)
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
