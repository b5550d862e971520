//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "um")]
#[command(about = "Tag queries over numbered markdown entries", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List files matching a tag query (a, a,b for OR, a+b for AND)
    Tag {
        /// Tag query; empty matches every tagged file
        #[arg(default_value = "")]
        query: String,

        /// Date range: YYYY.MM.DD[-YYYY.MM.DD]
        #[arg(short, long)]
        date: Option<String>,

        /// Invert match
        #[arg(short, long)]
        invert: bool,

        /// Print a verbose summary
        #[arg(short, long)]
        verbose: bool,
    },

    /// Cat entries together using a filelist, removing headers by default
    Cat {
        /// Filelist, one filename per line. Read from stdin if omitted
        filelist: Option<PathBuf>,

        /// Base directory prepended to files in the filelist
        #[arg(short, long)]
        base: Option<PathBuf>,

        /// Keep entry headers. Overrides --keep-title
        #[arg(short = 'd', long)]
        keep_header: bool,

        /// Keep entry titles
        #[arg(short = 't', long)]
        keep_title: bool,
    },

    /// Print the last entry filename
    Last,

    /// Create the next entry
    Next {
        /// File descriptor placed between number and extension
        #[arg(default_value = "")]
        descriptor: String,

        /// Comma separated tags for the new header
        #[arg(default_value = "")]
        tags: String,

        /// Open the new entry in the editor
        #[arg(short, long)]
        edit: bool,
    },

    /// Sort a filelist using a key filelist
    Sort {
        /// Filelist to sort. Read from stdin if omitted
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Filelist whose order is applied
        #[arg(short, long)]
        key: PathBuf,

        /// Write the sorted list back to the key file
        #[arg(short, long)]
        write: bool,
    },

    /// Rename an entry descriptor while updating its header
    Mv {
        /// Current filename
        filename: String,

        /// New descriptor
        descriptor: String,
    },
}
