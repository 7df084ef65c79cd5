//! Locale and screenshot enumeration
//!
//! A locale is a direct, non-hidden child directory of a tree root. A
//! screenshot is a direct, non-hidden regular file of a locale folder whose
//! extension is `png` in any letter case. Both listings are sorted by name so
//! that reconciliation order and reports are reproducible.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Extension (compared case-insensitively) of the files that take part in a sync.
pub const IMAGE_EXTENSION: &str = "png";

/// A locale folder under a tree root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDir {
    pub name: String,
    pub path: PathBuf,
}

/// A screenshot inside a locale folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub name: String,
    pub path: PathBuf,
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Whether `name` carries a `.png` extension, ignoring case.
pub fn is_png(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION))
}

/// List the locale folders under `root`, ascending by name.
///
/// A missing root is an empty tree, not an error.
pub fn list_locales(root: &Path) -> Result<Vec<LocaleDir>> {
    let mut locales: Vec<LocaleDir> = visible_children(root)?
        .into_iter()
        .filter(|(_, path)| path.is_dir())
        .map(|(name, path)| LocaleDir { name, path })
        .collect();
    locales.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(locales)
}

/// List the screenshots directly inside `folder`, ascending by name.
///
/// A missing folder yields an empty list.
pub fn list_images(folder: &Path) -> Result<Vec<ImageEntry>> {
    let mut images: Vec<ImageEntry> = visible_children(folder)?
        .into_iter()
        .filter(|(name, path)| is_png(name) && path.is_file())
        .map(|(name, path)| ImageEntry { name, path })
        .collect();
    images.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(images)
}

/// The filename -> path mapping of one locale folder.
pub fn image_map(folder: &Path) -> Result<BTreeMap<String, PathBuf>> {
    Ok(list_images(folder)?
        .into_iter()
        .map(|entry| (entry.name, entry.path))
        .collect())
}

fn visible_children(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                tracing::warn!(?raw, dir = %dir.display(), "Skipping entry with non UTF-8 name");
                continue;
            }
        };
        if is_hidden(&name) {
            continue;
        }
        children.push((name, path));
    }
    Ok(children)
}
