//! Filelists from pipes and files

use crate::error::{Result, UmError};
use std::fs::File;
use std::io::{BufRead, BufReader, IsTerminal};
use std::path::Path;

/// Read one filename per line, skipping blank lines
pub fn read_filelist<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim_end_matches('\r');
        if !name.is_empty() {
            files.push(name.to_string());
        }
    }
    Ok(files)
}

/// Read a filelist file
pub fn read_filelist_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| UmError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_filelist(BufReader::new(file))
}

/// The filelist named by `path`, or else the one piped into stdin.
///
/// Fails when neither is available.
pub fn filelist_from(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => read_filelist_file(path),
        None => piped_filelist()?.ok_or_else(|| {
            UmError::Config(
                "No filelist: pass a filelist file or pipe filenames into stdin".to_string(),
            )
        }),
    }
}

/// The filelist piped into stdin, if any.
///
/// `None` when stdin is a terminal or the pipe carried no filenames, so
/// callers can fall back to discovery.
pub fn piped_filelist() -> Result<Option<Vec<String>>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let files = read_filelist(stdin.lock())?;
    if files.is_empty() {
        return Ok(None);
    }
    log::debug!("read {} filenames from stdin", files.len());
    Ok(Some(files))
}
