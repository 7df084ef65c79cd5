//! Copy and delete primitives for mutating the old tree

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Copy `src` over `dst` atomically.
///
/// The bytes are written to a hidden temp file next to `dst` and renamed into
/// place, so `dst` is either the old image or the complete new one. The temp
/// name starts with `.` and is therefore never picked up by the enumerator.
pub fn copy_atomic(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        ensure_dir(parent)?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        dst.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = dst.with_file_name(&temp_name);

    if let Err(e) = copy_and_sync(src, &temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, dst).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::io(dst, e)
    })
}

fn copy_and_sync(src: &Path, temp_path: &Path) -> Result<()> {
    fs::copy(src, temp_path).map_err(|e| Error::io(src, e))?;
    File::open(temp_path)
        .and_then(|f| f.sync_all())
        .map_err(|e| Error::io(temp_path, e))
}

/// Delete a file, tolerating it being gone already.
///
/// Returns `true` when this call removed the file.
pub fn remove_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "File already removed");
            Ok(false)
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Create `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Check that `path` is an existing directory and return its canonical form.
pub fn require_dir(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    dunce::canonicalize(path).map_err(|e| Error::io(path, e))
}
