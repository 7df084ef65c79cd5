//! Filesystem layer for screenshot sync
//!
//! Enumerates locale folders and PNG screenshots in a deterministic order and
//! provides the copy/delete primitives the reconciler mutates the old tree with.

pub mod config;
pub mod error;
pub mod io;
pub mod listing;
pub mod lock;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use listing::{ImageEntry, LocaleDir, image_map, is_hidden, is_png, list_images, list_locales};
pub use lock::TreeLock;
pub use path::NormalizedPath;
