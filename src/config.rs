//! Configuration file loader for block-kill
//!
//! Loads and parses ~/.config/block-kill/config.toml configuration file.

use crate::blocklist::Blocklist;
use crate::error::BlockKillError;
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Executable names to terminate
    pub blocklist: Option<ProcessList>,
}

/// List of process names
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ProcessList {
    /// Process names in the list
    pub processes: Vec<String>,
}

impl Config {
    /// Load configuration from ~/.config/block-kill/config.toml
    ///
    /// Returns default config if file doesn't exist.
    /// Returns default config with warning on parse error.
    pub fn load() -> Self {
        Self::load_from_path(Self::config_path())
    }

    /// Load configuration from a specific path, falling back to defaults
    pub fn load_from_path(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            return Self::with_defaults();
        };

        if !path.exists() {
            return Self::with_defaults();
        }

        match Self::load_strict(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{} ({}). Using defaults.", e, path.display());
                Self::with_defaults()
            }
        }
    }

    /// Load configuration from a file that must exist and parse
    ///
    /// Used for an explicit `--config` path, where silently falling back to
    /// the defaults would hide a typo.
    pub fn load_strict(path: &Path) -> Result<Self, BlockKillError> {
        let content = fs::read_to_string(path).map_err(|e| {
            BlockKillError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let mut config = toml::from_str::<Config>(&content)
            .map_err(|e| BlockKillError::ConfigError(e.to_string()))?;
        config.merge_defaults();
        Ok(config)
    }

    /// Get the default config file path (XDG-compliant)
    ///
    /// Returns `~/.config/block-kill/config.toml` on Linux
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|config_dir| config_dir.join("block-kill"))
    }

    /// Create config with the built-in blocklist
    pub fn with_defaults() -> Self {
        Config {
            blocklist: Some(ProcessList {
                processes: Self::default_blocklist(),
            }),
        }
    }

    fn merge_defaults(&mut self) {
        if self.blocklist.is_none() {
            self.blocklist = Some(ProcessList {
                processes: Self::default_blocklist(),
            });
        }
    }

    /// Built-in blocklist: browsers, shells and chat/game clients on Windows
    pub fn default_blocklist() -> Vec<String> {
        [
            "chrome.exe",
            "msedge.exe",
            "firefox.exe",
            "opera.exe",
            "cmd.exe",
            "powershell.exe",
            "discord.exe",
            "skype.exe",
            "whatsapp.exe",
            "telegram.exe",
            "teams.exe",
            "steam.exe",
            "notepad.exe",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Build the normalized blocklist
    ///
    /// An explicitly empty list is an error: the enforcer would have nothing
    /// to do.
    pub fn blocklist(&self) -> Result<Blocklist, BlockKillError> {
        let blocklist = match &self.blocklist {
            Some(list) => Blocklist::new(&list.processes),
            None => Blocklist::new(Self::default_blocklist()),
        };
        if blocklist.is_empty() {
            return Err(BlockKillError::EmptyBlocklist);
        }
        Ok(blocklist)
    }
}
