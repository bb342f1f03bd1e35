//! Provides filesystem access for exported documents.

use std::fs::{create_dir_all, write};
use std::path::{Path, PathBuf};

/// A filesystem error.
#[derive(Clone, Debug)]
pub enum Error {
    /// The path could not be found.
    NotFound(String),
    /// The path could not be read.
    Read,
    /// The path could not be written.
    Write,
}

/// Saves a rendered document as `name` inside `dir`, creating the directory if necessary.
///
/// Returns the path of the saved document.
pub fn save_document(
    dir: impl AsRef<Path>,
    name: &str,
    contents: &str,
) -> Result<PathBuf, Error> {
    let dir = dir.as_ref();
    create_dir_all(dir).map_err(|_| Error::Write)?;

    let path = dir.join(name);
    write(&path, contents).map_err(|_| Error::Write)?;

    Ok(path)
}
