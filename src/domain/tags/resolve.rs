//! Query resolution against the tag index

use crate::domain::entry::Entry;
use crate::domain::set::FileSet;
use crate::domain::tags::index::TagIndex;
use crate::domain::tags::query::{Operator, Query};

/// Resolve a query to the set of matching filenames.
///
/// The result is always a fresh set; the index is never modified. Unknown
/// tags contribute the empty set.
pub fn resolve(index: &TagIndex, query: &Query) -> FileSet {
    let Some((first, rest)) = query.tags.split_first() else {
        return FileSet::new();
    };

    if query.op == Operator::Wild && first.is_empty() {
        let mut all = FileSet::new();
        all.union_with(index.sets());
        return all;
    }

    let mut files = index.get(first).cloned().unwrap_or_default();
    for tag in rest {
        let empty = FileSet::new();
        let other = index.get(tag).unwrap_or(&empty);
        match query.op {
            Operator::Or => files.union_with([other]),
            Operator::And => files.intersect_with(other),
            Operator::Single | Operator::Wild => {}
        }
    }
    files
}

/// Filenames of the entries that are not in `files`.
///
/// Run after [`resolve`] so that inverting a combined query respects the
/// combination.
pub fn invert(entries: &[Entry], files: &FileSet) -> FileSet {
    entries
        .iter()
        .map(|e| e.filename.as_str())
        .filter(|name| !files.contains(name))
        .collect()
}
