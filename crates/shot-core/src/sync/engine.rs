//! SyncEngine facade

use std::path::PathBuf;

use crate::Result;
use crate::config::SyncOptions;
use crate::report::SyncReport;

use super::tree::reconcile_trees;

/// Engine for reconciling a new screenshot tree into an old one
///
/// Holds no state between runs: every [`run`](Self::run) re-reads both trees.
#[derive(Debug, Clone)]
pub struct SyncEngine {
    old_root: PathBuf,
    new_root: PathBuf,
    options: SyncOptions,
}

impl SyncEngine {
    /// Create a new SyncEngine
    ///
    /// # Arguments
    ///
    /// * `old_root` - Tree that receives the updates
    /// * `new_root` - Read-only source tree
    /// * `options` - Mask and dry-run settings
    pub fn new(old_root: impl Into<PathBuf>, new_root: impl Into<PathBuf>, options: SyncOptions) -> Self {
        Self {
            old_root: old_root.into(),
            new_root: new_root.into(),
            options,
        }
    }

    /// Run one reconciliation pass.
    ///
    /// # Errors
    ///
    /// Fails before any mutation if either root is not a directory. Failures
    /// during processing return [`Error::Aborted`](crate::Error::Aborted)
    /// with the work already completed.
    pub fn run(&self) -> Result<SyncReport> {
        reconcile_trees(&self.old_root, &self.new_root, &self.options)
    }

    /// Classify every file without modifying the old tree.
    pub fn plan(&self) -> Result<SyncReport> {
        let options = SyncOptions {
            dry_run: true,
            ..self.options
        };
        reconcile_trees(&self.old_root, &self.new_root, &options)
    }
}
