//! Tag query use case
//!
//! Orchestrates the full pipeline from raw files to the rendered report:
//! parse headers, narrow by date, index, resolve the query, optionally
//! invert, compute adjacencies and render.

use crate::domain::tags::{invert, resolve, Adjacencies, Query, Report, TagIndex};
use crate::domain::{DateRange, Entry, FileSet, HeaderParser, Source};
use crate::error::Result;
use crate::infrastructure::{EntryRepository, FileSystemRepository};
use std::io::Write;

/// Options for a tag query run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions {
    /// Query string, empty for every tagged file
    pub query: String,

    /// `YYYY.MM.DD` or `YYYY.MM.DD-YYYY.MM.DD`
    pub date: Option<String>,

    /// Report the files that do not match
    pub invert: bool,

    /// Add tag statistics to the report
    pub verbose: bool,
}

/// Everything one query run produces, owned so a [`Report`] can borrow it
struct QueryRun {
    entries: Vec<Entry>,
    index: TagIndex,
    files: FileSet,
    adjacencies: TagIndex,
    query: Query,
}

impl QueryRun {
    fn evaluate(parser: &HeaderParser, sources: &[Source], options: &TagOptions) -> Self {
        let query = Query::parse(&options.query);

        let mut entries = parser.parse_all(sources);
        if let Some(range) = options.date.as_deref().filter(|d| !d.is_empty()) {
            entries = DateRange::parse(range).filter(entries);
        }
        let index = TagIndex::build(&entries);

        // resolve before inverting so the inversion respects combined queries
        let mut files = resolve(&index, &query);
        if options.invert {
            files = invert(&entries, &files);
        }
        let adjacencies = Adjacencies::build(&entries, &files).reduce(&query, options.invert);

        log::debug!(
            "query '{}' matched {} of {} entries",
            query,
            files.len(),
            entries.len()
        );

        QueryRun {
            entries,
            index,
            files,
            adjacencies,
            query,
        }
    }

    fn report(&self, verbose: bool) -> Report<'_> {
        Report {
            entries: &self.entries,
            index: &self.index,
            files: &self.files,
            adjacencies: &self.adjacencies,
            query: &self.query,
            verbose,
        }
    }
}

/// Run the query engine over already loaded files and return the report
pub fn run_query(parser: &HeaderParser, sources: &[Source], options: &TagOptions) -> String {
    QueryRun::evaluate(parser, sources, options)
        .report(options.verbose)
        .render()
}

/// Service for running tag queries against a directory of entries
pub struct TagQueryService {
    repository: FileSystemRepository,
    parser: HeaderParser,
}

impl TagQueryService {
    /// Create new tag query service
    pub fn new(repository: FileSystemRepository) -> Self {
        TagQueryService {
            repository,
            parser: HeaderParser::new(),
        }
    }

    /// Execute the query and write the report to `sink`.
    ///
    /// `filelist` overrides discovery, e.g. with filenames piped into stdin.
    /// Relative names are resolved against the repository root.
    pub fn execute<W: Write>(
        &self,
        options: &TagOptions,
        filelist: Option<Vec<String>>,
        sink: W,
    ) -> Result<()> {
        let filelist = match filelist {
            Some(files) => files,
            None => self.repository.list_entries()?,
        };
        let sources = self.repository.load_sources(&filelist)?;

        QueryRun::evaluate(&self.parser, &sources, options)
            .report(options.verbose)
            .write_to(sink)?;
        Ok(())
    }
}
