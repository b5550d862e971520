//! Tag query engine

pub mod adjacency;
pub mod index;
pub mod query;
pub mod report;
pub mod resolve;

// Re-export main types
pub use adjacency::Adjacencies;
pub use index::TagIndex;
pub use query::{Operator, Query};
pub use report::Report;
pub use resolve::{invert, resolve};
