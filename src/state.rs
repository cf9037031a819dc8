//! Filesystem helpers for the state document.
//!
//! Directory creation is always an explicit call made by a command, never a
//! side effect of resolving a path.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const TEMP_SUFFIX: &str = "tmp";

/// Ensure the parent directory exists for a given path.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Create `dir` (and its parents) if missing. Returns whether it had to be created.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> io::Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    Ok(true)
}

/// Sibling path used while writing `path`.
#[must_use]
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

/// Replace `path` with `contents` atomically.
///
/// The bytes go to a sibling temp file which is synced and then renamed over the
/// target, so readers see either the old document or the new one, never a
/// truncated file. The temp file is removed if any step fails.
///
/// # Errors
/// Returns an error if the temp file cannot be written or renamed.
pub fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let temp_path = temp_path_for(path);

    let result = write_synced(&temp_path, contents).and_then(|()| fs::rename(&temp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_synced(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
