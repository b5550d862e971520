//! Editor integration for opening new entries

use crate::error::{Result, UmError};
use std::path::Path;
use std::process::Command;

/// Session for opening files in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command line
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open a file and wait for the editor to exit
    pub fn open(&self, file_path: &Path) -> Result<()> {
        let mut command = self.command_for(file_path)?;
        let program = command.get_program().to_string_lossy().to_string();

        let status = command.status().map_err(|e| {
            UmError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;
        if !status.success() {
            return Err(UmError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }
        Ok(())
    }

    /// Split the command line into program and arguments, file path last
    fn command_for(&self, file_path: &Path) -> Result<Command> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| UmError::Editor("Editor command is empty".to_string()))?;

        let mut command = Command::new(program);
        command.args(parts).arg(file_path);
        Ok(command)
    }
}
