//! File system repository

use crate::domain::Source;
use crate::error::{Result, UmError};
use crate::infrastructure::Config;
use regex::Regex;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Environment variable overriding the entries directory
pub const ROOT_ENV: &str = "UM_ROOT";

/// Abstract repository of entry files
pub trait EntryRepository {
    /// Entry filenames in lexical order
    fn list_entries(&self) -> Result<Vec<String>>;

    /// Read one file, relative to the root unless absolute
    fn read_entry(&self, filename: &str) -> Result<String>;

    /// Read every listed file, aborting on the first failure
    fn load_sources(&self, filelist: &[String]) -> Result<Vec<Source>> {
        filelist
            .iter()
            .map(|f| Ok(Source::new(f.as_str(), self.read_entry(f)?)))
            .collect()
    }
}

/// File system implementation of EntryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    config: Config,
    pattern: Regex,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory and config
    pub fn new(root: PathBuf, config: Config) -> Result<Self> {
        let pattern = config.pattern_regex()?;
        Ok(FileSystemRepository {
            root,
            config,
            pattern,
        })
    }

    /// Open the repository at `UM_ROOT`, or the current directory
    pub fn discover() -> Result<Self> {
        let root = match std::env::var(ROOT_ENV) {
            Ok(root) => PathBuf::from(root),
            Err(_) => std::env::current_dir()?,
        };
        Self::open(root)
    }

    /// Open the repository at `root`, loading its config
    pub fn open(root: PathBuf) -> Result<Self> {
        let config = Config::load_from_dir(&root)?;
        Self::new(root, config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The lexically last entry filename
    pub fn last_entry(&self) -> Result<String> {
        self.list_entries()?
            .pop()
            .ok_or_else(|| UmError::NoEntries(self.config.pattern.clone()))
    }

    /// Write a new entry, refusing to overwrite an existing file
    pub fn create_entry(&self, filename: &str, content: &str) -> Result<PathBuf> {
        let path = self.root.join(filename);
        if path.exists() {
            return Err(UmError::AlreadyExists(path));
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Replace entry `from` with a new file `to` holding `content`
    pub fn replace_entry(&self, from: &str, to: &str, content: &str) -> Result<PathBuf> {
        let from_path = self.root.join(from);
        if !from_path.exists() {
            return Err(UmError::Read {
                path: from_path,
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        let to_path = self.root.join(to);
        if to_path != from_path && to_path.exists() {
            return Err(UmError::AlreadyExists(to_path));
        }

        fs::write(&to_path, content)?;
        if to_path != from_path {
            fs::remove_file(&from_path)?;
        }
        Ok(to_path)
    }
}

impl EntryRepository for FileSystemRepository {
    fn list_entries(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| UmError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if self.pattern.is_match(name) {
                names.push(name.to_string());
            }
        }

        names.sort();
        log::debug!("found {} entries in {}", names.len(), self.root.display());
        Ok(names)
    }

    fn read_entry(&self, filename: &str) -> Result<String> {
        let path = self.root.join(filename);
        fs::read_to_string(&path).map_err(|source| UmError::Read { path, source })
    }
}
