//! Concatenate use case

use crate::domain::concat::{concatenate, CatOptions};
use crate::error::Result;
use crate::infrastructure::{EntryRepository, FileSystemRepository};

/// Service for concatenating entries named in a filelist
pub struct CatService {
    repository: FileSystemRepository,
}

impl CatService {
    /// Filenames are read relative to the repository root
    pub fn new(repository: FileSystemRepository) -> Self {
        CatService { repository }
    }

    /// Read every listed entry and join them into one document
    pub fn execute(&self, filelist: &[String], options: CatOptions) -> Result<String> {
        let sources = self.repository.load_sources(filelist)?;
        let contents: Vec<&str> = sources.iter().map(|s| s.content.as_str()).collect();
        Ok(concatenate(&contents, options))
    }
}
