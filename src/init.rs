//! Init command module for block-kill
//!
//! Generates a configuration file listing the built-in blocklist.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::BlockKillError;

/// Init command for generating configuration file
pub struct InitCommand;

impl InitCommand {
    /// Write the sample configuration to `path`, or to the default location
    ///
    /// # Arguments
    /// * `path` - Target file; `None` means `~/.config/block-kill/config.toml`
    /// * `force` - If true, overwrite existing file without confirmation
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - Path to the generated file
    /// * `Err(BlockKillError)` - If generation fails
    pub fn execute(path: Option<&Path>, force: bool) -> Result<PathBuf, BlockKillError> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Config::config_path().ok_or_else(|| {
                BlockKillError::ConfigCreationError(
                    "Unable to determine config path".to_string(),
                )
            })?,
        };

        if config_path.exists() && !force && !Self::confirm_overwrite(&config_path)? {
            return Err(BlockKillError::ConfigCreationError(
                "Operation cancelled".to_string(),
            ));
        }

        if let Some(dir) = config_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                BlockKillError::ConfigCreationError(format!(
                    "Failed to create directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        fs::write(&config_path, Self::default_config_content()).map_err(|e| {
            BlockKillError::ConfigCreationError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(config_path)
    }

    /// Generate default configuration content with comments
    pub fn default_config_content() -> String {
        let entries: Vec<String> = Config::default_blocklist()
            .iter()
            .map(|name| format!("    \"{}\",", name))
            .collect();

        format!(
            r#"# block-kill configuration file
# Processes whose executable name matches an entry below are terminated
# within a few hundred milliseconds of starting.

# Blocklist: executable names, matched case-insensitively and exactly.
# Include the suffix the OS reports (e.g. "notepad.exe" on Windows).
[blocklist]
processes = [
{}
]
"#,
            entries.join("\n")
        )
    }

    /// Ask user for confirmation to overwrite existing file
    fn confirm_overwrite(path: &Path) -> Result<bool, BlockKillError> {
        eprint!(
            "Config file already exists at {}. Overwrite? [y/N]: ",
            path.display()
        );
        io::stderr().flush().map_err(|e| {
            BlockKillError::ConfigCreationError(format!("Failed to flush stderr: {}", e))
        })?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(|e| {
            BlockKillError::ConfigCreationError(format!("Failed to read input: {}", e))
        })?;

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }
}
