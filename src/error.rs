//! Error types for um

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for um application
#[derive(Debug, Error)]
pub enum UmError {
    #[error("um files not found: {0}")]
    NoEntries(String),

    #[error("Invalid entry filename: {0}")]
    InvalidFilename(String),

    #[error("File already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("error opening file: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),
}

impl UmError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            UmError::NoEntries(_) => 2,
            UmError::InvalidFilename(_) => 3,
            UmError::AlreadyExists(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            UmError::NoEntries(pattern) => {
                format!(
                    "um files not found: {}\n\n\
                    Suggestions:\n\
                    • Run um from the directory holding your entries\n\
                    • Set UM_ROOT environment variable to your entries directory\n\
                    • Check the 'pattern' key in .um.toml",
                    pattern
                )
            }
            UmError::InvalidFilename(name) => {
                format!(
                    "Invalid entry filename: '{}'\n\n\
                    Entry filenames look like <number>.<descriptor>.md\n\
                    Examples:\n\
                    0001.md\n\
                    0042.groceries.md",
                    name
                )
            }
            UmError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor in .um.toml: editor = \"vim\"",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using UmError
pub type Result<T> = std::result::Result<T, UmError>;
