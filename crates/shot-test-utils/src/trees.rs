//! [`TestTrees`] builder for old/new screenshot tree scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use tempfile::TempDir;

/// Which of the two trees to operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

/// A temporary directory holding `old/` and `new/` tree roots.
///
/// # Example
///
/// ```rust,no_run
/// use shot_test_utils::{Side, TestTrees, screenshot};
///
/// let trees = TestTrees::new();
/// trees.write_png(Side::Old, "de", "home.png", &screenshot(200, 400, 1));
/// assert_eq!(trees.files(Side::Old, "de"), vec!["home.png"]);
/// ```
pub struct TestTrees {
    temp_dir: TempDir,
}

impl Default for TestTrees {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTrees {
    /// Create empty `old/` and `new/` roots.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("old")).unwrap();
        fs::create_dir(temp_dir.path().join("new")).unwrap();
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn old_root(&self) -> PathBuf {
        self.root(Side::Old)
    }

    pub fn new_root(&self) -> PathBuf {
        self.root(Side::New)
    }

    pub fn root(&self, side: Side) -> PathBuf {
        match side {
            Side::Old => self.temp_dir.path().join("old"),
            Side::New => self.temp_dir.path().join("new"),
        }
    }

    pub fn locale_dir(&self, side: Side, locale: &str) -> PathBuf {
        self.root(side).join(locale)
    }

    /// Create an (empty) locale folder.
    pub fn mkdir(&self, side: Side, locale: &str) -> PathBuf {
        let dir = self.locale_dir(side, locale);
        fs::create_dir_all(&dir)
            .unwrap_or_else(|e| panic!("mkdir: failed to create {}: {e}", dir.display()));
        dir
    }

    /// Encode `image` as PNG at `<side>/<locale>/<name>`.
    pub fn write_png(&self, side: Side, locale: &str, name: &str, image: &RgbImage) -> PathBuf {
        let path = self.mkdir(side, locale).join(name);
        image
            .save_with_format(&path, ImageFormat::Png)
            .unwrap_or_else(|e| panic!("write_png: failed to write {}: {e}", path.display()));
        path
    }

    /// Write raw bytes, e.g. a corrupt PNG or a non-image file.
    pub fn write_file(&self, side: Side, locale: &str, name: &str, content: &[u8]) -> PathBuf {
        let path = self.mkdir(side, locale).join(name);
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("write_file: failed to write {}: {e}", path.display()));
        path
    }

    pub fn read(&self, side: Side, locale: &str, name: &str) -> Vec<u8> {
        let path = self.locale_dir(side, locale).join(name);
        fs::read(&path).unwrap_or_else(|e| panic!("read: failed to read {}: {e}", path.display()))
    }

    /// Every entry name in a locale folder, hidden ones included, sorted.
    /// Empty when the folder does not exist.
    pub fn files(&self, side: Side, locale: &str) -> Vec<String> {
        let dir = self.locale_dir(side, locale);
        if !dir.exists() {
            return Vec::new();
        }
        let mut names: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn exists(&self, side: Side, locale: &str) -> bool {
        self.locale_dir(side, locale).exists()
    }
}
