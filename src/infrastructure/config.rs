//! Configuration management

use crate::error::{UmError, Result};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the optional config file in the entries directory
pub const CONFIG_FILE: &str = ".um.toml";

/// Filenames considered entries: the `[0-9]*.md` glob
pub const DEFAULT_PATTERN: &str = r"^[0-9].*\.md$";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Regex an entry filename must match
    pub pattern: String,

    /// Editor command for `um next --edit`
    pub editor: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pattern: DEFAULT_PATTERN.to_string(),
            editor: Self::detect_default_editor(),
        }
    }
}

impl Config {
    /// Load config from .um.toml in the given directory, falling back to
    /// defaults when there is none
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no {} in {}, using defaults", CONFIG_FILE, path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(UmError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| UmError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))
    }

    /// Compile the entry filename pattern
    pub fn pattern_regex(&self) -> Result<Regex> {
        Regex::new(&self.pattern)
            .map_err(|e| UmError::Config(format!("Invalid pattern '{}': {}", self.pattern, e)))
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    fn detect_default_editor() -> String {
        if cfg!(windows) {
            "notepad".to_string()
        } else {
            "vi".to_string()
        }
    }
}
