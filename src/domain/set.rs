//! Filename sets
//!
//! `FileSet` is the currency of the query engine: the tag index, the resolved
//! query result and the adjacency maps are all built from it. Combining two
//! sets that someone else still reads goes through [`union`] and
//! [`intersection`], which never touch their inputs. The mutating methods are
//! for sets the caller owns outright.

use std::collections::BTreeSet;

/// An unordered set of filenames
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    members: BTreeSet<String>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert every given member. Inserting an existing member is a no-op.
    pub fn add<I, S>(&mut self, members: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members.extend(members.into_iter().map(Into::into));
    }

    /// s ∪ t, in place
    pub fn union_with<'a, I>(&mut self, others: I)
    where
        I: IntoIterator<Item = &'a FileSet>,
    {
        for other in others {
            self.members.extend(other.members.iter().cloned());
        }
    }

    /// s ∩ t, in place
    pub fn intersect_with(&mut self, other: &FileSet) {
        self.members.retain(|m| other.contains(m));
    }

    /// All current members. No ordering guarantee is part of the contract.
    pub fn members(&self) -> Vec<&str> {
        self.members.iter().map(String::as_str).collect()
    }

    /// Members sorted lexically
    pub fn sorted(&self) -> Vec<&str> {
        let mut members = self.members();
        members.sort_unstable();
        members
    }

    pub fn contains(&self, member: &str) -> bool {
        self.members.contains(member)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FileSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = FileSet::new();
        set.add(iter);
        set
    }
}

/// a ∪ b as a fresh set
pub fn union(a: &FileSet, b: &FileSet) -> FileSet {
    let mut out = a.clone();
    out.union_with([b]);
    out
}

/// a ∩ b as a fresh set
pub fn intersection(a: &FileSet, b: &FileSet) -> FileSet {
    let mut out = a.clone();
    out.intersect_with(b);
    out
}
