//! Domain error kinds for vault operations
//!
//! All four kinds are terminal for the current invocation: they are
//! reported on stderr and the process exits with status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the user by the four commands
#[derive(Debug, Error)]
pub enum Error {
    /// The vault path given to `setup` does not exist
    #[error("Vault path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// The vault path given to `setup` exists but is not a directory
    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// `save`, `list`, or `get` was run before `setup`
    #[error("Vault not configured. Run 'setup' first.")]
    VaultNotConfigured,

    /// `get` found no prompt with a matching stem or title
    #[error("Prompt not found: {0}")]
    PromptNotFound(String),
}
