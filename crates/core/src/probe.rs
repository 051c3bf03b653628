use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("cannot access {path}: {source}")]
    NotAccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ProbeError {
    fn not_accessible(path: &Path, source: io::Error) -> Self {
        ProbeError::NotAccessible {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// What a path points at, after following symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Neither a regular file nor a directory (socket, fifo, ...)
    Other,
}

/// Stat a path and report what it is.
///
/// Follows symlinks, so a link to a directory classifies as a directory.
pub fn classify(path: &Path) -> Result<EntryKind, ProbeError> {
    let metadata = fs::metadata(path).map_err(|e| ProbeError::not_accessible(path, e))?;

    if metadata.is_dir() {
        Ok(EntryKind::Directory)
    } else if metadata.is_file() {
        Ok(EntryKind::File)
    } else {
        Ok(EntryKind::Other)
    }
}

/// List the names of a directory's immediate children.
///
/// Names are returned sorted; the filesystem's enumeration order is not
/// stable across platforms and nothing downstream may rely on it.
pub fn list_entries(path: &Path) -> Result<Vec<String>, ProbeError> {
    let entries = fs::read_dir(path).map_err(|e| ProbeError::not_accessible(path, e))?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    Ok(names)
}
