//! um - Tag queries over a directory of numbered markdown entries
//!
//! Each entry carries a small header with a title, a `: YYYY.MM.DD` date and
//! `+ tag` lines. um answers which files carry a tag combination and which
//! other tags co-occur with it.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::UmError;
