//! Reconciliation report model
//!
//! Pure data returned to the caller; nothing here touches the filesystem.

use serde::{Deserialize, Serialize};

/// Warning text for a locale that exists only in the old tree.
pub fn missing_locale_warning(locale: &str) -> String {
    format!("Locale folder missing in NEW (kept as-is): {}", locale)
}

/// Outcome for one locale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleStats {
    pub locale: String,
    pub changed: usize,
    pub added: usize,
    pub removed: usize,
    /// Removed files as `locale/filename`, ascending.
    pub removed_files: Vec<String>,
    /// The locale folder does not exist in the new tree; nothing was touched.
    pub missing_in_new: bool,
}

impl LocaleStats {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::default()
        }
    }

    pub fn missing(locale: impl Into<String>) -> Self {
        Self {
            missing_in_new: true,
            ..Self::new(locale)
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.changed == 0 && self.added == 0 && self.removed == 0
    }
}

/// Sums over all locales
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub changed: usize,
    pub added: usize,
    pub removed: usize,
}

impl Totals {
    pub fn from_stats(stats: &[LocaleStats]) -> Self {
        stats.iter().fold(Self::default(), |acc, st| Self {
            changed: acc.changed + st.changed,
            added: acc.added + st.added,
            removed: acc.removed + st.removed,
        })
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Report from a reconciliation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Locales present in the old tree (ascending), followed by locales that
    /// only exist in the new tree (ascending).
    pub per_locale: Vec<LocaleStats>,
    pub totals: Totals,
    pub warnings: Vec<String>,
    /// Counts describe what would have happened; nothing was written.
    #[serde(default)]
    pub dry_run: bool,
}

impl SyncReport {
    /// Build a report; totals are always derived from `per_locale`.
    pub fn from_parts(per_locale: Vec<LocaleStats>, warnings: Vec<String>) -> Self {
        Self {
            totals: Totals::from_stats(&per_locale),
            per_locale,
            warnings,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// All removed files in report order.
    pub fn removed_files(&self) -> Vec<&str> {
        self.per_locale
            .iter()
            .flat_map(|st| st.removed_files.iter().map(String::as_str))
            .collect()
    }

    pub fn locale(&self, name: &str) -> Option<&LocaleStats> {
        self.per_locale.iter().find(|st| st.locale == name)
    }

    /// Whether the run changed nothing.
    pub fn is_noop(&self) -> bool {
        self.totals.is_zero()
    }
}
