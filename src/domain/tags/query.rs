//! Tag query parsing
//!
//! The query language is one line with a single kind of separator:
//!
//! - `bar` matches files tagged `bar`
//! - `bar,foo` matches files tagged `bar` or `foo`
//! - `bar+science` matches files tagged both `bar` and `science`
//! - the empty query matches every tagged file
//!
//! `,` is tried before `+`, so a query mixing both is read as an OR whose
//! parts still contain `+`.
//!
//! # Examples
//!
//! ```
//! use um::domain::tags::{Operator, Query};
//!
//! let query = Query::parse("bar+science");
//! assert_eq!(query.op, Operator::And);
//! assert_eq!(query.tags, vec!["bar", "science"]);
//! ```

/// How the tags of a query combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// One tag
    Single,

    /// Any listed tag
    Or,

    /// All listed tags
    And,

    /// Every tagged file
    Wild,
}

impl Operator {
    /// Source separator, `None` for operators without one
    pub fn separator(self) -> Option<char> {
        match self {
            Operator::Or => Some(','),
            Operator::And => Some('+'),
            Operator::Single | Operator::Wild => None,
        }
    }
}

/// Parsed tag query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub op: Operator,
    pub tags: Vec<String>,
}

impl Query {
    pub fn new(op: Operator, tags: Vec<String>) -> Self {
        Query { op, tags }
    }

    /// The query matching every tagged file
    pub fn wild() -> Self {
        Query::new(Operator::Wild, vec![String::new()])
    }

    /// Parse a query string. Total: every input yields a query.
    pub fn parse(query: &str) -> Self {
        if query.is_empty() {
            return Query::wild();
        }

        if query.contains(',') && query.contains('+') {
            log::warn!(
                "query '{}' mixes ',' and '+': only ',' is applied",
                query
            );
        }

        for op in [Operator::Or, Operator::And] {
            let Some(sep) = op.separator() else {
                continue;
            };
            let parts: Vec<String> = query.split(sep).map(str::to_string).collect();
            if parts.len() > 1 {
                return Query::new(op, parts);
            }
        }

        Query::new(Operator::Single, vec![query.to_string()])
    }

    /// True when `tag` is one of the query's own tags
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.op.separator() {
            Some(sep) => write!(f, "{}", self.tags.join(sep.to_string().as_str())),
            None => write!(f, "{}", self.tags.join("")),
        }
    }
}
