//! Mask and run configuration
//!
//! The mask fractions used to be process-wide settings; here they are plain
//! values carried in [`SyncOptions`] through every call.

use std::path::Path;

use serde::{Deserialize, Serialize};
use shot_fs::{ConfigStore, NormalizedPath};

use crate::{Error, Result};

/// Default fraction of the image height covered by the status bar mask.
pub const DEFAULT_TOP_IGNORE: f64 = 0.06;

/// Default fraction of the image width covered by the status bar mask.
pub const DEFAULT_LEFT_IGNORE: f64 = 0.26;

/// Extent of the masked status-bar region, as fractions of the image size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaskConfig {
    top_ignore_fraction: f64,
    left_ignore_fraction: f64,
}

impl MaskConfig {
    /// Create a mask, rejecting fractions outside `[0, 1]` and NaN.
    pub fn new(top_ignore_fraction: f64, left_ignore_fraction: f64) -> Result<Self> {
        Ok(Self {
            top_ignore_fraction: check_fraction("top-ignore", top_ignore_fraction)?,
            left_ignore_fraction: check_fraction("left-ignore", left_ignore_fraction)?,
        })
    }

    pub fn top_ignore_fraction(&self) -> f64 {
        self.top_ignore_fraction
    }

    pub fn left_ignore_fraction(&self) -> f64 {
        self.left_ignore_fraction
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            top_ignore_fraction: DEFAULT_TOP_IGNORE,
            left_ignore_fraction: DEFAULT_LEFT_IGNORE,
        }
    }
}

fn check_fraction(name: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidFraction { name, value })
    }
}

/// Options for a reconciliation run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SyncOptions {
    pub mask: MaskConfig,
    /// Classify every file but leave the old tree untouched.
    pub dry_run: bool,
}

/// On-disk configuration file.
///
/// ```toml
/// [mask]
/// top_ignore = 0.06
/// left_ignore = 0.26
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    pub mask: MaskSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaskSection {
    pub top_ignore: Option<f64>,
    pub left_ignore: Option<f64>,
}

impl SyncConfig {
    /// Load a `.toml` or `.json` configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(ConfigStore::new().load(&NormalizedPath::new(path))?)
    }

    /// Build the effective mask: explicit overrides win over file values,
    /// file values win over the defaults.
    pub fn resolve_mask(&self, top: Option<f64>, left: Option<f64>) -> Result<MaskConfig> {
        let top = top.or(self.mask.top_ignore).unwrap_or(DEFAULT_TOP_IGNORE);
        let left = left.or(self.mask.left_ignore).unwrap_or(DEFAULT_LEFT_IGNORE);
        tracing::debug!(top, left, "Resolved mask configuration");
        MaskConfig::new(top, left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_mask_matches_constants() {
        let mask = MaskConfig::default();
        assert_eq!(mask.top_ignore_fraction(), 0.06);
        assert_eq!(mask.left_ignore_fraction(), 0.26);
    }

    #[rstest]
    #[case(-0.01, 0.2)]
    #[case(0.2, 1.5)]
    #[case(f64::NAN, 0.2)]
    #[case(0.2, f64::INFINITY)]
    fn out_of_range_fractions_are_rejected(#[case] top: f64, #[case] left: f64) {
        assert!(matches!(
            MaskConfig::new(top, left),
            Err(Error::InvalidFraction { .. })
        ));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(MaskConfig::new(0.0, 1.0).is_ok());
    }

    #[test]
    fn mask_serializes_its_fractions() {
        let value = serde_json::to_value(MaskConfig::default()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "top_ignore_fraction": 0.06, "left_ignore_fraction": 0.26 })
        );
    }

    #[test]
    fn overrides_take_precedence_over_file() {
        let config = SyncConfig {
            mask: MaskSection {
                top_ignore: Some(0.1),
                left_ignore: Some(0.3),
            },
        };

        let mask = config.resolve_mask(Some(0.08), None).unwrap();

        assert_eq!(mask.top_ignore_fraction(), 0.08);
        assert_eq!(mask.left_ignore_fraction(), 0.3);
    }

    #[test]
    fn empty_config_resolves_to_defaults() {
        let mask = SyncConfig::default().resolve_mask(None, None).unwrap();
        assert_eq!(mask, MaskConfig::default());
    }

    #[test]
    fn load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot-sync.toml");
        std::fs::write(&path, "[mask]\ntop_ignore = 0.05\n").unwrap();

        let config = SyncConfig::load(&path).unwrap();

        assert_eq!(config.mask.top_ignore, Some(0.05));
        assert_eq!(config.mask.left_ignore, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot-sync.toml");
        std::fs::write(&path, "[mask]\ntop = 0.05\n").unwrap();

        assert!(matches!(
            SyncConfig::load(&path),
            Err(Error::Fs(shot_fs::Error::ConfigParse { .. }))
        ));
    }
}
