//! Ordering a filelist by a key filelist
//!
//! Lines named in the key come out in key order. Lines the key does not
//! name follow them in source order.

use std::collections::{BTreeMap, HashMap};

/// Positions recorded from a key filelist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortKey {
    positions: HashMap<String, usize>,
}

impl SortKey {
    /// Record the position of every key line. A repeated line keeps its last position.
    pub fn new<S: AsRef<str>>(key: &[S]) -> Self {
        let positions = key
            .iter()
            .enumerate()
            .map(|(i, line)| (line.as_ref().to_string(), i))
            .collect();
        SortKey { positions }
    }

    pub fn position(&self, line: &str) -> Option<usize> {
        self.positions.get(line).copied()
    }

    /// Reorder `source`.
    ///
    /// Keyed lines occupy one slot each, so a keyed line listed twice in
    /// `source` comes out once. Unkeyed lines are kept as they are.
    pub fn order<'a, S: AsRef<str>>(&self, source: &'a [S]) -> Vec<&'a str> {
        let mut keyed = BTreeMap::new();
        let mut rest = Vec::new();
        for line in source.iter().map(AsRef::as_ref) {
            if line.is_empty() {
                continue;
            }
            match self.position(line) {
                Some(i) => {
                    keyed.insert(i, line);
                }
                None => rest.push(line),
            }
        }
        keyed.into_values().chain(rest).collect()
    }

    /// Reorder `source` into a newline terminated filelist
    pub fn sort<S: AsRef<str>>(&self, source: &[S]) -> String {
        format!("{}\n", self.order(source).join("\n"))
    }
}
