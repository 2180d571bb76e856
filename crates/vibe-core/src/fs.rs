//! Filesystem helpers for deployment writes.

use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Create the parent directory of `path`, including missing ancestors.
///
/// Succeeds when the directory already exists.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    Ok(())
}

/// Write `contents` to `path`, fully replacing any existing file.
///
/// The write goes to a temp file in the same directory first and is renamed
/// over the destination, so readers never observe a half-written file.
pub fn atomic_write(path: &Path, contents: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}
