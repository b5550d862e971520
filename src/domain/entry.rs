//! Entry header parsing
//!
//! An entry is a markdown file whose first block is a header:
//!
//! ```text
//! # 01.foo.md
//! : 2024.09.25
//! + bar
//! + foo
//!
//! Body text.
//! ```
//!
//! The header ends at the first blank line. Only `: date` and `+ tag` lines
//! inside it are recognised.

use chrono::NaiveDate;
use regex::Regex;
use std::path::Path;

/// Date layout used in headers and in range arguments
pub const DATE_FORMAT: &str = "%Y.%m.%d";

const DATE_PATTERN: &str = r"(?m)^: ([.0-9]+?)$";
const TAG_PATTERN: &str = r"(?m)^\+ (.+)$";

/// Separates the header from the body
pub const HEADER_END: &str = "\n\n";

/// One parsed entry file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Base name of the file, unique within a run
    pub filename: String,

    /// Header date. `None` when missing or malformed, which sorts before any real date.
    pub date: Option<NaiveDate>,

    /// Full raw file content
    pub content: String,

    /// Tags in header order, duplicates kept
    pub tags: Vec<String>,
}

/// Raw file content as handed over by file loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub filename: String,
    pub content: String,
}

impl Source {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Source {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// Parse a `YYYY.MM.DD` date.
///
/// Every field must be zero padded to its full width: `2024.9.25` and
/// `24.09.25` are rejected rather than read loosely.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !has_date_layout(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

fn has_date_layout(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'.',
            _ => b.is_ascii_digit(),
        })
}

/// Return the header of an entry: everything before the first blank line,
/// or the whole content when there is no body.
pub fn header(content: &str) -> &str {
    content
        .split_once(HEADER_END)
        .map_or(content, |(head, _)| head)
}

/// Header recogniser with its line patterns compiled once.
///
/// Build one per process and lend it to every parse call.
#[derive(Debug, Clone)]
pub struct HeaderParser {
    date_regex: Regex,
    tag_regex: Regex,
}

impl Default for HeaderParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderParser {
    pub fn new() -> Self {
        HeaderParser {
            date_regex: Regex::new(DATE_PATTERN).expect("date pattern is valid"),
            tag_regex: Regex::new(TAG_PATTERN).expect("tag pattern is valid"),
        }
    }

    /// Parse raw file content into an [`Entry`].
    ///
    /// Never fails: a bad or missing date leaves `date` unset.
    pub fn parse(&self, filename: &str, content: &str) -> Entry {
        let head = header(content);
        Entry {
            filename: basename(filename),
            date: self.date(head),
            content: content.to_string(),
            tags: self.tags(head),
        }
    }

    /// Parse every source, keeping their order
    pub fn parse_all(&self, sources: &[Source]) -> Vec<Entry> {
        sources
            .iter()
            .map(|s| self.parse(&s.filename, &s.content))
            .collect()
    }

    fn date(&self, header: &str) -> Option<NaiveDate> {
        let caps = self.date_regex.captures(header)?;
        parse_date(&caps[1])
    }

    fn tags(&self, header: &str) -> Vec<String> {
        self.tag_regex
            .captures_iter(header)
            .map(|cap| cap[1].to_string())
            .collect()
    }
}

fn basename(filename: &str) -> String {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(filename)
        .to_string()
}
