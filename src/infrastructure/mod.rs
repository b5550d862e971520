//! Infrastructure layer - External I/O

pub mod config;
pub mod editor;
pub mod repository;
pub mod stdin;

pub use config::Config;
pub use editor::EditorSession;
pub use repository::{EntryRepository, FileSystemRepository};
