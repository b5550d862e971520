//! Tag co-occurrence within a resolved file set

use crate::domain::entry::Entry;
use crate::domain::set::FileSet;
use crate::domain::tags::index::TagIndex;
use crate::domain::tags::query::Query;
use std::collections::BTreeMap;

/// Full adjacency: tag → other tag → files where both appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacencies {
    tags: BTreeMap<String, TagIndex>,
}

impl Adjacencies {
    /// Record co-occurrences for every entry whose filename is in `files`.
    ///
    /// Other tags are taken by position, so a tag repeated within one entry
    /// is adjacent to itself.
    pub fn build(entries: &[Entry], files: &FileSet) -> Self {
        let mut adjacencies = Adjacencies::default();

        for entry in entries.iter().filter(|e| files.contains(&e.filename)) {
            for (i, tag) in entry.tags.iter().enumerate() {
                let others = adjacencies.tags.entry(tag.clone()).or_default();
                for (_, other) in entry.tags.iter().enumerate().filter(|(j, _)| *j != i) {
                    others.entry(other).add([entry.filename.as_str()]);
                }
            }
        }
        adjacencies
    }

    /// Co-occurring tags for `tag`
    pub fn get(&self, tag: &str) -> Option<&TagIndex> {
        self.tags.get(tag)
    }

    /// Collapse to a single other tag → files map.
    ///
    /// Normally only the query's own tags are consulted and the query tags are
    /// left out of the result. When `invert` is set the file population is
    /// already the inverted set, so every tag's adjacencies are flattened.
    pub fn reduce(&self, query: &Query, invert: bool) -> TagIndex {
        let mut reduced = TagIndex::new();

        if invert {
            for others in self.tags.values() {
                for (other, files) in others {
                    reduced.entry(other).union_with([files]);
                }
            }
            return reduced;
        }

        for qtag in &query.tags {
            let Some(others) = self.get(qtag) else {
                continue;
            };
            for (other, files) in others {
                if !query.has_tag(other) {
                    reduced.entry(other).union_with([files]);
                }
            }
        }
        reduced
    }
}
