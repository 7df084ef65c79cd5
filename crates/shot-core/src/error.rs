//! Error types for shot-core

use std::path::PathBuf;

use crate::report::SyncReport;

/// Result type for shot-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while comparing or reconciling screenshots
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A mask fraction outside `[0, 1]`
    #[error("Invalid {name} fraction {value}: expected a value between 0 and 1")]
    InvalidFraction { name: &'static str, value: f64 },

    /// An image could not be read or decoded
    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A run stopped partway through.
    ///
    /// `partial` holds every locale processed before the failure plus the
    /// counts of the failing locale up to the failing file. Those mutations
    /// are already on disk.
    #[error("Sync aborted in locale {locale}{}: {source}", at_file(.file))]
    Aborted {
        locale: String,
        file: Option<String>,
        partial: Box<SyncReport>,
        #[source]
        source: Box<Error>,
    },

    /// Filesystem error from shot-fs
    #[error(transparent)]
    Fs(#[from] shot_fs::Error),
}

fn at_file(file: &Option<String>) -> String {
    file.as_deref().map(|f| format!(" at {f}")).unwrap_or_default()
}

impl Error {
    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// The report of work completed before an aborted run, if any.
    pub fn partial_report(&self) -> Option<&SyncReport> {
        match self {
            Self::Aborted { partial, .. } => Some(partial),
            _ => None,
        }
    }
}
