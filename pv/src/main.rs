//! PromptVault - Markdown prompt manager
//!
//! CLI entry point: parses arguments, loads the config record, and
//! dispatches to one handler per subcommand. Human-readable reports go to
//! stdout; `get` prints the bare prompt body for downstream consumption.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use promptvault::Vault;
use promptvault::cli::{Cli, Command};
use promptvault::config::{Config, expand_tilde};
use promptvault::error::Error;
use promptvault::parse_tags;

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("promptvault starting");

    match cli.command {
        Command::Setup { vault_path } => cmd_setup(config, cli.config.as_ref(), &vault_path),
        Command::Save {
            title,
            content,
            folder,
            tags,
        } => cmd_save(&config, &title, &content, folder.as_deref(), tags.as_deref()),
        Command::List { search } => cmd_list(&config, search.as_deref()),
        Command::Get { name } => cmd_get(&config, &name),
    }
}

/// Configure the vault location and create the prompts folder
fn cmd_setup(mut config: Config, config_path: Option<&PathBuf>, vault_path: &str) -> Result<()> {
    let expanded = expand_tilde(vault_path);

    if !expanded.exists() {
        return Err(Error::PathNotFound(expanded).into());
    }

    let resolved = fs::canonicalize(&expanded)
        .with_context(|| format!("Failed to resolve vault path: {}", expanded.display()))?;
    if !resolved.is_dir() {
        return Err(Error::NotADirectory(resolved).into());
    }

    config.vault_path = resolved.to_string_lossy().to_string();
    config.save(config_path)?;

    let prompts_path = resolved.join(&config.prompts_folder);
    fs::create_dir_all(&prompts_path)
        .with_context(|| format!("Failed to create prompts folder: {}", prompts_path.display()))?;

    println!("{} Vault configured: {}", "✓".green(), resolved.display());
    println!("  Prompts folder: {}", prompts_path.display());
    Ok(())
}

/// Save a prompt document into the vault
fn cmd_save(config: &Config, title: &str, content: &str, folder: Option<&str>, tags: Option<&str>) -> Result<()> {
    let prompts_path = config.prompts_path().ok_or(Error::VaultNotConfigured)?;
    let vault = Vault::open(&prompts_path);

    let path = vault.save(title, content, folder, &parse_tags(tags))?;

    println!("{} Saved: {}", "✓".green(), path.display());
    Ok(())
}

/// List prompts, optionally filtered by a search term
fn cmd_list(config: &Config, search: Option<&str>) -> Result<()> {
    let prompts_path = config.prompts_path().ok_or(Error::VaultNotConfigured)?;

    // Missing folder is not an error: nothing has been saved yet
    if !prompts_path.exists() {
        println!("No prompts folder found at: {}", prompts_path.display());
        return Ok(());
    }

    let vault = Vault::open(&prompts_path);
    let entries = vault.list(search)?;

    if entries.is_empty() {
        match search {
            Some(term) if !vault.stems()?.is_empty() => println!("No prompts matching '{}'", term),
            _ => println!("No prompts found."),
        }
        return Ok(());
    }

    println!("Found {} prompt(s):", entries.len());
    println!();
    for entry in entries {
        println!("  {}", entry.title.cyan());
        println!("    Path: {}", entry.rel_path.display());
        if !entry.preview.is_empty() {
            println!("    Preview: {}", entry.preview.dimmed());
        }
        println!();
    }
    Ok(())
}

/// Print a prompt's body to stdout
fn cmd_get(config: &Config, name: &str) -> Result<()> {
    let prompts_path = config.prompts_path().ok_or(Error::VaultNotConfigured)?;
    let vault = Vault::open(&prompts_path);

    match vault.resolve(name)? {
        Some(path) => {
            let body = vault.read_body(&path)?;
            println!("{}", body);
            Ok(())
        }
        None => {
            eprintln!("Error: {}", Error::PromptNotFound(name.to_string()));
            eprintln!();
            eprintln!("Available prompts:");
            for stem in vault.stems()? {
                eprintln!("  - {}", stem);
            }
            std::process::exit(1);
        }
    }
}
