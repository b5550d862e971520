//! Rename use case
//!
//! Renaming an entry changes its descriptor, keeps its number, and rewrites
//! the `# title` line so the header names the new file.

use crate::domain::filename::{retitle, EntryName};
use crate::error::Result;
use crate::infrastructure::{EntryRepository, FileSystemRepository};
use std::path::Path;

/// Service for renaming entries
pub struct MoveEntryService {
    repository: FileSystemRepository,
}

impl MoveEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        MoveEntryService { repository }
    }

    /// Rename `filename` to carry `descriptor`, returning the new filename
    pub fn execute(&self, filename: &str, descriptor: &str) -> Result<String> {
        let leaf = Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(filename);
        let name = EntryName::parse(leaf)?.with_descriptor(descriptor);

        let content = retitle(&self.repository.read_entry(filename)?, &name);
        let target = Path::new(filename).with_file_name(&name);
        let target = target.to_string_lossy();

        self.repository.replace_entry(filename, &target, &content)?;
        log::info!("renamed {} to {}", filename, target);
        Ok(name)
    }
}
