//! Application layer - Use cases and orchestration

pub mod cat;
pub mod move_entry;
pub mod next_entry;
pub mod tag_query;

pub use cat::CatService;
pub use move_entry::MoveEntryService;
pub use next_entry::NextEntryService;
pub use tag_query::{run_query, TagOptions, TagQueryService};
