//! CLI argument parsing for promptvault

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pv")]
#[command(author, version, about = "Markdown prompt manager for an Obsidian-style vault", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure the vault path
    Setup {
        /// Path to the vault directory (may use ~)
        #[arg(required = true)]
        vault_path: String,
    },

    /// Save a prompt to the vault
    Save {
        /// Prompt title
        #[arg(required = true)]
        title: String,

        /// Prompt content
        #[arg(required = true)]
        content: String,

        /// Subfolder within the prompts folder
        #[arg(short, long)]
        folder: Option<String>,

        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// List prompts
    List {
        /// Filter by search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Print a prompt's body content
    Get {
        /// Prompt name (filename stem) or frontmatter title
        #[arg(required = true)]
        name: String,
    },
}
