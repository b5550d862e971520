//! Tag → filename index

use crate::domain::entry::Entry;
use crate::domain::set::FileSet;
use std::collections::btree_map::{self, BTreeMap};

/// Maps each tag to the set of filenames carrying it.
///
/// Also used for the reduced adjacency map (other tag → files).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tags: BTreeMap<String, FileSet>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold entries into an index
    pub fn build(entries: &[Entry]) -> Self {
        let mut index = TagIndex::new();
        for entry in entries {
            for tag in &entry.tags {
                index.entry(tag).add([entry.filename.as_str()]);
            }
        }
        index
    }

    /// The set for `tag`, allocated on first use
    pub fn entry(&mut self, tag: &str) -> &mut FileSet {
        self.tags.entry(tag.to_string()).or_default()
    }

    pub fn get(&self, tag: &str) -> Option<&FileSet> {
        self.tags.get(tag)
    }

    /// Number of files carrying `tag`, 0 when unknown
    pub fn count(&self, tag: &str) -> usize {
        self.get(tag).map_or(0, FileSet::len)
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FileSet> {
        self.tags.iter()
    }

    pub fn sets(&self) -> btree_map::Values<'_, String, FileSet> {
        self.tags.values()
    }
}

impl<'a> IntoIterator for &'a TagIndex {
    type Item = (&'a String, &'a FileSet);
    type IntoIter = btree_map::Iter<'a, String, FileSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
