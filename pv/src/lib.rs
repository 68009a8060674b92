//! PromptVault - Markdown prompt manager for an Obsidian-style vault
//!
//! Stores prompt documents as Markdown files with YAML frontmatter under a
//! user-designated vault directory, and retrieves them by filename stem or
//! frontmatter title.
//!
//! # Architecture
//!
//! ```text
//! <vault>/
//! └── Claude-Prompts/
//!     ├── Code-Review.md       # frontmatter + "# title" header + body
//!     └── agents/
//!         └── Summarizer.md    # subfolders are created on demand
//! ```
//!
//! There is no index: every operation rescans the prompts folder. The
//! config record lives outside the vault and only points at it.
//!
//! # Example
//!
//! ```ignore
//! use promptvault::{Vault, parse_tags};
//!
//! let vault = Vault::open("/home/user/vault/Claude-Prompts");
//! let path = vault.save("Code Review", "Review the diff below.", None, &parse_tags(None))?;
//! let body = vault.read_body(&path)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod frontmatter;
mod vault;

pub use error::Error;
pub use vault::{PromptEntry, Vault, parse_tags, sanitize_title};

/// Folder created under the vault root when none is configured
pub const DEFAULT_PROMPTS_FOLDER: &str = "Claude-Prompts";

/// Sentinel tag prepended to every saved prompt
pub const PROMPT_TAG: &str = "claude-prompt";

/// Preview width in characters for `list` output
pub const PREVIEW_WIDTH: usize = 60;
