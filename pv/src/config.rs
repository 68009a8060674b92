//! Configuration for promptvault
//!
//! A single fixed-shape record persisted as pretty-printed JSON. Read at
//! the start of every command; written only by `setup`. A missing file or
//! missing fields fall back to defaults, so an unconfigured install is
//! represented by an empty `vault_path`.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Absolute path to the vault root; empty until `setup` has run
    #[serde(default)]
    pub vault_path: String,

    /// Folder under the vault root holding managed prompts
    #[serde(default = "default_prompts_folder")]
    pub prompts_folder: String,
}

fn default_prompts_folder() -> String {
    crate::DEFAULT_PROMPTS_FOLDER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault_path: String::new(),
            prompts_folder: default_prompts_folder(),
        }
    }
}

impl Config {
    /// Load config from the given file (or the default location), falling
    /// back to defaults when the file does not exist
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        let config_path = path.cloned().unwrap_or_else(default_config_path);

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
        Ok(config)
    }

    /// Save config to the given file (or the default location) as
    /// pretty-printed JSON with a trailing newline
    pub fn save(&self, path: Option<&PathBuf>) -> Result<()> {
        let config_path = path.cloned().unwrap_or_else(default_config_path);

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;
        Ok(())
    }

    /// Full path to the prompts folder, or None while unconfigured
    pub fn prompts_path(&self) -> Option<PathBuf> {
        if self.vault_path.is_empty() {
            return None;
        }
        Some(Path::new(&self.vault_path).join(&self.prompts_folder))
    }
}

/// Default config location: `<config dir>/promptvault/config.json`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promptvault")
        .join("config.json")
}

/// Expand a leading `~` to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
