//! Numbered entry filenames
//!
//! Entries are named `<number>.<descriptor>.md`, e.g. `0042.groceries.md`.
//! The number orders entries; its width is preserved when counting on.

use crate::domain::entry::DATE_FORMAT;
use crate::error::{Result, UmError};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Title line prefix of an entry header
pub const TITLE_PREFIX: &str = "# ";

fn filename_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([0-9]+)\.[^.]*\.*md$").unwrap())
}

/// The numbered part of an entry filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryName {
    number: String,
}

impl EntryName {
    /// Parse the number out of an entry filename
    pub fn parse(filename: &str) -> Result<Self> {
        let caps = filename_regex()
            .captures(filename)
            .ok_or_else(|| UmError::InvalidFilename(filename.to_string()))?;
        Ok(EntryName {
            number: caps[1].to_string(),
        })
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Filename of the entry following this one.
    ///
    /// An empty descriptor yields `<number>.md`.
    pub fn next(&self, descriptor: &str) -> Result<String> {
        let next = self
            .number
            .parse::<u64>()
            .ok()
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| UmError::InvalidFilename(self.number.clone()))?;
        let width = self.number.len();
        Ok(format!("{:0width$}.{}md", next, dotted(descriptor)))
    }

    /// This entry's filename with a new descriptor
    pub fn with_descriptor(&self, descriptor: &str) -> String {
        format!("{}.{}md", self.number, dotted(descriptor))
    }
}

fn dotted(descriptor: &str) -> String {
    if descriptor.is_empty() {
        String::new()
    } else {
        format!("{}.", descriptor)
    }
}

/// Replace the `# title` line of `content` with one naming `filename`,
/// or prepend it when the content has no title.
pub fn retitle(content: &str, filename: &str) -> String {
    let title = format!("{}{}", TITLE_PREFIX, filename);
    if !content.starts_with(TITLE_PREFIX) {
        return format!("{}\n{}", title, content);
    }
    match content.split_once('\n') {
        Some((_, rest)) => format!("{}\n{}", title, rest),
        None => title,
    }
}

/// Header of a freshly created entry
pub fn new_entry_content(filename: &str, date: NaiveDate, tags: &[String]) -> String {
    let mut content = format!("{}{}\n: {}\n", TITLE_PREFIX, filename, date.format(DATE_FORMAT));
    for tag in tags {
        content.push_str(&format!("+ {}\n", tag));
    }
    content.push('\n');
    content
}
