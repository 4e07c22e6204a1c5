//! Runtime configuration.
//!
//! Settings come from an optional JSON file at
//! `<config dir>/hist-finder/config.json` (or `$HIST_FINDER_CONFIG`). Every
//! key is optional. The history file can additionally be chosen with the
//! first command line argument or `$HIST_FINDER_HISTFILE`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, bail};
use serde::{Deserialize, Serialize};

use crate::clipboard::ClipboardConfig;
use crate::search::MatchStrategy;

pub const CONFIG_ENV: &str = "HIST_FINDER_CONFIG";
pub const HISTFILE_ENV: &str = "HIST_FINDER_HISTFILE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// History file to search; `~/.zsh_history` when unset.
    pub history_path: Option<PathBuf>,
    /// Quiet period after the last keystroke before results are ranked.
    pub debounce_ms: u64,
    /// Upper bound on the number of ranked rows.
    pub max_results: usize,
    pub match_strategy: MatchStrategy,
    pub clipboard: ClipboardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_path: None,
            debounce_ms: 300,
            max_results: 32,
            match_strategy: MatchStrategy::default(),
            clipboard: ClipboardConfig::default(),
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when it does not exist.
    ///
    /// A path given through `$HIST_FINDER_CONFIG` must exist.
    pub fn load() -> anyhow::Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config JSON at {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.max_results == 0 {
            bail!("max_results must be at least 1");
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Pick the history file: command line, then environment, then config,
    /// then `~/.zsh_history`.
    pub fn resolve_history_path(&self, cli_arg: Option<PathBuf>) -> anyhow::Result<PathBuf> {
        if let Some(path) = cli_arg {
            return Ok(path);
        }
        if let Some(path) = std::env::var_os(HISTFILE_ENV) {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = &self.history_path {
            return Ok(path.clone());
        }
        default_history_path()
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hist-finder").join("config.json"))
}

fn default_history_path() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().context("Cannot determine home directory for ~/.zsh_history")?;
    Ok(home.join(".zsh_history"))
}
