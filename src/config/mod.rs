//! Configuration system for linequill.
//!
//! This module provides the configuration structure for linequill with sensible
//! defaults and support for serialization/deserialization via serde. Configuration
//! is loaded from a TOML file and merged with command-line arguments.
//!
//! # Example
//!
//! ```
//! use linequill::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.prompt, ">");
//! assert_eq!(config.undo_limit, 0);
//!
//! // Create custom configuration
//! let custom = Config {
//!     show_row_cursor: true,
//!     ..Config::default()
//! };
//! assert!(custom.show_row_cursor);
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the linequill application.
///
/// # Fields
///
/// * `prompt` - Text printed before each command is read (default: ">")
/// * `show_row_cursor` - Highlight the character under the cursor at startup (default: false)
/// * `show_line_cursor` - Mark the current line at startup (default: false)
/// * `undo_limit` - Maximum number of undo entries to keep, 0 for unlimited (default: 0)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Prompt shown before each command
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Highlight the character under the cursor
    #[serde(default)]
    pub show_row_cursor: bool,

    /// Mark the current line
    #[serde(default)]
    pub show_line_cursor: bool,

    /// Maximum number of undo entries to keep (0 = unlimited)
    #[serde(default)]
    pub undo_limit: usize,
}

/// Returns the default prompt.
fn default_prompt() -> String {
    ">".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_row_cursor: false,
            show_line_cursor: false,
            undo_limit: 0,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/linequill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("linequill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        Self::load_from(&config_path).unwrap_or_else(|err| {
            tracing::warn!("Ignoring config file: {:#}", err);
            Self::default()
        })
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike `load`, a missing or malformed file is an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Saves configuration to an explicit path.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("show_row_cursor = true").unwrap();
        assert!(config.show_row_cursor);
        assert_eq!(config.prompt, ">");
        assert_eq!(config.undo_limit, 0);
    }

    #[test]
    fn test_config_path_ends_with_file_name() {
        if let Some(path) = Config::config_path() {
            assert!(path.ends_with(".config/linequill/config.toml"));
        }
    }
}
