//! Last/next entry use cases

use crate::domain::filename::{new_entry_content, EntryName};
use crate::error::Result;
use crate::infrastructure::{EditorSession, FileSystemRepository};
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

/// Service for finding and creating numbered entries
pub struct NextEntryService {
    repository: FileSystemRepository,
}

impl NextEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        NextEntryService { repository }
    }

    /// Filename of the lexically last entry
    pub fn last(&self) -> Result<String> {
        self.repository.last_entry()
    }

    /// Filename the next entry would get
    pub fn next_name(&self, descriptor: &str) -> Result<String> {
        let last = self.repository.last_entry()?;
        EntryName::parse(&last)?.next(descriptor)
    }

    /// Create the next entry dated today.
    ///
    /// `tags` is a comma separated list; each becomes a `+ tag` line.
    pub fn create(&self, descriptor: &str, tags: &str) -> Result<PathBuf> {
        self.create_on(descriptor, tags, Local::now().date_naive())
    }

    fn create_on(&self, descriptor: &str, tags: &str, date: NaiveDate) -> Result<PathBuf> {
        let name = self.next_name(descriptor)?;
        let tags: Vec<String> = tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        let path = self
            .repository
            .create_entry(&name, &new_entry_content(&name, date, &tags))?;
        log::info!("created {}", path.display());
        Ok(path)
    }

    /// Open an entry in the configured editor
    pub fn edit(&self, path: &Path) -> Result<()> {
        EditorSession::new(self.repository.config().get_editor()).open(path)
    }
}
