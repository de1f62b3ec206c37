//! Source file input.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A source file could not be read.
#[derive(Debug, Error)]
#[error("cannot read file `{}`: {source}", path.display())]
pub struct InputError {
    /// The path that failed.
    pub path: PathBuf,
    /// The underlying I/O error.
    #[source]
    pub source: io::Error,
}

/// Read a whole source file into memory.
///
/// The scanner operates on the complete byte content, so the file is read
/// in one shot. Bytes, not `String`: source files are treated as raw bytes
/// throughout the front end.
pub fn read_source(path: &Path) -> Result<Vec<u8>, InputError> {
    std::fs::read(path).map_err(|source| InputError {
        path: path.to_path_buf(),
        source,
    })
}
