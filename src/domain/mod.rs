//! Domain layer - Entries, tag queries and reports

pub mod concat;
pub mod date_range;
pub mod entry;
pub mod filename;
pub mod set;
pub mod sort;
pub mod tags;

pub use date_range::DateRange;
pub use entry::{Entry, HeaderParser, Source};
pub use filename::EntryName;
pub use set::FileSet;
pub use sort::SortKey;
