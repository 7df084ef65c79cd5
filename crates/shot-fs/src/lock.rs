//! Advisory single-writer lock on an old tree

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Name of the lock file placed in the locked root. Hidden, so it is never
/// mistaken for a locale. The file persists after release; only the lock on
/// it is dropped, so every writer contends on the same inode.
pub const LOCK_FILE_NAME: &str = ".shot-sync.lock";

/// Exclusive lock held for the lifetime of a sync against one old tree.
///
/// The reconciler assumes it owns the old tree; callers that may run
/// concurrently take this lock first.
#[derive(Debug)]
pub struct TreeLock {
    file: File,
    path: PathBuf,
}

impl TreeLock {
    /// Try to lock `root` without blocking.
    pub fn acquire(root: &Path) -> Result<Self> {
        let path = root.join(LOCK_FILE_NAME);
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| Error::io(&path, e))?;

        file.try_lock_exclusive()
            .map_err(|_| Error::LockFailed { path: path.clone() })?;

        tracing::debug!(path = %path.display(), "Acquired tree lock");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TreeLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
