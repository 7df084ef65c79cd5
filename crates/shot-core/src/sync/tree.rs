//! Whole-tree reconciliation across locales

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use shot_fs::{io, list_locales};

use crate::config::SyncOptions;
use crate::report::{LocaleStats, SyncReport, missing_locale_warning};
use crate::{Error, Result};

use super::locale::{reconcile_locale, reconcile_new_locale};

/// Reconcile every locale of `new_root` into `old_root`.
///
/// Both roots must be existing directories; this is checked before anything
/// is touched. Locales of the old tree are processed first in ascending
/// order, then locales that only exist in the new tree, also ascending.
/// A locale missing from the new tree is kept and reported as a warning.
pub fn reconcile_trees(old_root: &Path, new_root: &Path, options: &SyncOptions) -> Result<SyncReport> {
    let old_root = io::require_dir(old_root)?;
    let new_root = io::require_dir(new_root)?;

    tracing::info!(
        old = %old_root.display(),
        new = %new_root.display(),
        dry_run = options.dry_run,
        "Reconciling screenshot trees"
    );

    let old_locales = list_locales(&old_root)?;
    let new_locales: BTreeMap<String, PathBuf> = list_locales(&new_root)?
        .into_iter()
        .map(|l| (l.name, l.path))
        .collect();

    let mut per_locale: Vec<LocaleStats> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    for locale in &old_locales {
        let new_folder = new_locales.get(&locale.name).map(PathBuf::as_path);
        match reconcile_locale(&locale.path, new_folder, options) {
            Ok(stats) => {
                if stats.missing_in_new {
                    warnings.push(missing_locale_warning(&stats.locale));
                }
                per_locale.push(stats);
            }
            Err(err) => return Err(with_completed(err, per_locale, warnings, options)),
        }
    }

    let only_new = new_locales
        .iter()
        .filter(|(name, _)| !old_locales.iter().any(|l| &l.name == *name));
    for (_, new_folder) in only_new {
        match reconcile_new_locale(&old_root, new_folder, options) {
            Ok(stats) => per_locale.push(stats),
            Err(err) => return Err(with_completed(err, per_locale, warnings, options)),
        }
    }

    let report = SyncReport::from_parts(per_locale, warnings).with_dry_run(options.dry_run);
    tracing::info!(
        changed = report.totals.changed,
        added = report.totals.added,
        removed = report.totals.removed,
        warnings = report.warnings.len(),
        "Reconciliation finished"
    );
    Ok(report)
}

/// Prepend the locales finished before a failure to the partial report.
fn with_completed(
    err: Error,
    mut completed: Vec<LocaleStats>,
    warnings: Vec<String>,
    options: &SyncOptions,
) -> Error {
    match err {
        Error::Aborted {
            locale,
            file,
            partial,
            source,
        } => {
            completed.extend(partial.per_locale);
            Error::Aborted {
                locale,
                file,
                partial: Box::new(SyncReport::from_parts(completed, warnings).with_dry_run(options.dry_run)),
                source,
            }
        }
        other => other,
    }
}
