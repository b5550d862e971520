//! Report rendering
//!
//! The plain report is the sorted filename list, ready to pipe into `um cat`.
//! It always ends in a newline, so an empty result is a single blank line.
//! The verbose report adds tag statistics in a small TOML-like layout:
//!
//! ```text
//! [files]
//! 01.foo.md
//!
//! [tags]
//! bar                 = 3
//!
//! [adjacencies]
//! foo                 = 1   : 1
//!
//! [sums]
//! files               = 1   : 6
//! adjacencies         = 1   : 4
//! ```
//!
//! Rows are ordered by count, then by tag name.

use crate::domain::entry::Entry;
use crate::domain::set::FileSet;
use crate::domain::tags::index::TagIndex;
use crate::domain::tags::query::{Operator, Query};
use std::io::Write;

/// Width of the key column
const KEY_WIDTH: usize = 20;

/// Everything the renderer needs from one query run
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub entries: &'a [Entry],
    pub index: &'a TagIndex,
    pub files: &'a FileSet,
    pub adjacencies: &'a TagIndex,
    pub query: &'a Query,
    pub verbose: bool,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct TagCount<'a> {
    count: usize,
    name: &'a str,
}

fn ordered(mut counts: Vec<TagCount<'_>>) -> Vec<TagCount<'_>> {
    counts.sort();
    counts
}

impl<'a> Report<'a> {
    pub fn render(&self) -> String {
        let files = self.file_list();
        if !self.verbose {
            return files;
        }

        let mut out = String::new();
        out.push_str("[files]\n");
        out.push_str(&files);
        out.push('\n');

        out.push_str("[tags]\n");
        for t in self.query_tags() {
            out.push_str(&format!("{:<KEY_WIDTH$}= {}\n", t.name, t.count));
        }
        out.push('\n');

        out.push_str("[adjacencies]\n");
        for t in self.adjacent_tags() {
            out.push_str(&format!(
                "{:<KEY_WIDTH$}= {:<3} : {}\n",
                t.name,
                t.count,
                self.index.count(t.name)
            ));
        }
        out.push('\n');

        out.push_str("[sums]\n");
        out.push_str(&format!(
            "{:<KEY_WIDTH$}= {:<3} : {}\n",
            "files",
            self.files.len(),
            self.entries.len()
        ));
        out.push_str(&format!(
            "{:<KEY_WIDTH$}= {:<3} : {}\n",
            "adjacencies",
            self.adjacencies.len(),
            self.index.len()
        ));
        out.push('\n');

        out
    }

    /// Render into a sink
    pub fn write_to<W: Write>(&self, mut sink: W) -> std::io::Result<()> {
        sink.write_all(self.render().as_bytes())?;
        sink.flush()
    }

    /// Sorted filenames, newline terminated. An empty set is a lone newline.
    fn file_list(&self) -> String {
        format!("{}\n", self.files.sorted().join("\n"))
    }

    /// Every indexed tag for a wild query, otherwise the query's own tags
    fn query_tags(&self) -> Vec<TagCount<'a>> {
        let index = self.index;
        let query = self.query;
        let counts: Vec<TagCount<'a>> = if query.op == Operator::Wild {
            index
                .iter()
                .map(|(name, files)| TagCount {
                    count: files.len(),
                    name,
                })
                .collect()
        } else {
            query
                .tags
                .iter()
                .map(|name| TagCount {
                    count: index.count(name),
                    name,
                })
                .collect()
        };
        ordered(counts)
    }

    fn adjacent_tags(&self) -> Vec<TagCount<'a>> {
        ordered(
            self.adjacencies
                .iter()
                .map(|(name, files)| TagCount {
                    count: files.len(),
                    name,
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tags::adjacency::Adjacencies;
    use crate::domain::tags::resolve::{invert, resolve};
    use crate::domain::tags::test_support::{corpus, scenario_a};

    fn render(query: &str, inverted: bool, verbose: bool) -> String {
        render_over(corpus(), query, inverted, verbose)
    }

    fn render_over(entries: Vec<Entry>, query: &str, inverted: bool, verbose: bool) -> String {
        let index = TagIndex::build(&entries);
        let query = Query::parse(query);
        let mut files = resolve(&index, &query);
        if inverted {
            files = invert(&entries, &files);
        }
        let adjacencies = Adjacencies::build(&entries, &files).reduce(&query, inverted);
        Report {
            entries: &entries,
            index: &index,
            files: &files,
            adjacencies: &adjacencies,
            query: &query,
            verbose,
        }
        .render()
    }

    #[test]
    fn test_plain_report_is_sorted_file_list() {
        assert_eq!(
            render("bar", false, false),
            "01.foo.md\n02.foo.md\n03.bar.md\n"
        );
    }

    #[test]
    fn test_plain_report_empty() {
        assert_eq!(render("qaz", false, false), "\n");
    }

    #[test]
    fn test_verbose_report_empty_files() {
        let out = render("qaz", false, true);
        assert!(out.starts_with("[files]\n\n\n[tags]\nqaz                 = 0\n\n"));
    }

    #[test]
    fn test_verbose_three_entry_golden() {
        let expected = "\
[files]
01.foo.md
02.foo.md
03.bar.md

[tags]
bar                 = 3

[adjacencies]
foo                 = 1   : 1
science             = 2   : 2

[sums]
files               = 3   : 3
adjacencies         = 2   : 3

";
        assert_eq!(render_over(scenario_a(), "bar", false, true), expected);
    }

    #[test]
    fn test_inverted_wild_without_untagged_files() {
        assert_eq!(render_over(scenario_a(), "", true, false), "\n");
    }

    #[test]
    fn test_verbose_report_golden() {
        let expected = "\
[files]
01.foo.md
02.foo.md
03.bar.md

[tags]
bar                 = 3

[adjacencies]
foo                 = 1   : 1
science             = 2   : 3

[sums]
files               = 3   : 6
adjacencies         = 2   : 4

";
        assert_eq!(render("bar", false, true), expected);
    }

    #[test]
    fn test_verbose_wild_lists_every_tag_by_count_then_name() {
        let expected = "\
[files]
01.foo.md
02.foo.md
03.bar.md
04.qux.md
06.qux.md

[tags]
foo                 = 1
qux                 = 2
bar                 = 3
science             = 3

[adjacencies]

[sums]
files               = 5   : 6
adjacencies         = 0   : 4

";
        assert_eq!(render("", false, true), expected);
    }

    #[test]
    fn test_verbose_inverted_wild() {
        let expected = "\
[files]
05.baz.md

[tags]
foo                 = 1
qux                 = 2
bar                 = 3
science             = 3

[adjacencies]

[sums]
files               = 1   : 6
adjacencies         = 0   : 4

";
        assert_eq!(render("", true, true), expected);
    }

    #[test]
    fn test_verbose_unknown_tag_counts_zero() {
        let out = render("qaz,foo", false, true);
        assert!(out.contains("[tags]\nqaz                 = 0\nfoo                 = 1\n\n"));
    }

    #[test]
    fn test_write_to_sink() {
        let entries = corpus();
        let index = TagIndex::build(&entries);
        let query = Query::parse("foo");
        let files = resolve(&index, &query);
        let adjacencies = TagIndex::new();
        let mut buf = Vec::new();
        Report {
            entries: &entries,
            index: &index,
            files: &files,
            adjacencies: &adjacencies,
            query: &query,
            verbose: false,
        }
        .write_to(&mut buf)
        .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "01.foo.md\n");
    }
}
