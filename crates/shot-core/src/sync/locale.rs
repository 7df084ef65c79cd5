//! Per-locale three-way reconciliation

use std::path::Path;

use shot_fs::{NormalizedPath, image_map, io, list_images};

use crate::compare;
use crate::config::SyncOptions;
use crate::report::{LocaleStats, SyncReport};
use crate::{Error, Result};

/// Reconcile one locale folder of the old tree against its counterpart.
///
/// With no counterpart (or one that does not exist) the old folder is left
/// untouched and the stats are flagged `missing_in_new`. Otherwise files in
/// both folders are compared and overwritten when they differ, files only in
/// the old folder are deleted, and files only in the new folder are copied in.
/// Each group is processed in ascending name order.
pub fn reconcile_locale(
    old_folder: &Path,
    new_folder: Option<&Path>,
    options: &SyncOptions,
) -> Result<LocaleStats> {
    let locale = folder_name(old_folder);

    let Some(new_folder) = new_folder.filter(|p| p.exists()) else {
        tracing::warn!(locale = %locale, "Locale folder missing in new tree, keeping old folder");
        return Ok(LocaleStats::missing(locale));
    };

    let mut stats = LocaleStats::new(&locale);
    let mut current = None;
    match apply_locale(old_folder, new_folder, options, &mut stats, &mut current) {
        Ok(()) => {
            tracing::info!(
                locale = %stats.locale,
                changed = stats.changed,
                added = stats.added,
                removed = stats.removed,
                "Locale reconciled"
            );
            Ok(stats)
        }
        Err(source) => Err(aborted(stats, current, options, source)),
    }
}

fn apply_locale(
    old_folder: &Path,
    new_folder: &Path,
    options: &SyncOptions,
    stats: &mut LocaleStats,
    current: &mut Option<String>,
) -> Result<()> {
    let old_files = image_map(old_folder)?;
    let new_files = image_map(new_folder)?;

    for (name, old_path) in &old_files {
        let Some(new_path) = new_files.get(name) else {
            continue;
        };
        *current = Some(name.clone());
        if compare::equivalent(old_path, new_path, &options.mask)? {
            tracing::debug!(locale = %stats.locale, file = %name, "Unchanged");
            continue;
        }
        if !options.dry_run {
            io::copy_atomic(new_path, old_path)?;
        }
        stats.changed += 1;
        tracing::debug!(locale = %stats.locale, file = %name, "Changed");
    }

    for (name, old_path) in old_files.iter().filter(|(n, _)| !new_files.contains_key(*n)) {
        *current = Some(name.clone());
        if !options.dry_run {
            io::remove_if_exists(old_path)?;
        }
        stats.removed += 1;
        stats
            .removed_files
            .push(NormalizedPath::qualified(&stats.locale, name).into());
        tracing::debug!(locale = %stats.locale, file = %name, "Removed");
    }

    for (name, new_path) in new_files.iter().filter(|(n, _)| !old_files.contains_key(*n)) {
        *current = Some(name.clone());
        if !options.dry_run {
            io::copy_atomic(new_path, &old_folder.join(name))?;
        }
        stats.added += 1;
        tracing::debug!(locale = %stats.locale, file = %name, "Added");
    }

    Ok(())
}

/// Bootstrap a locale that only exists in the new tree.
///
/// Creates `old_root/<locale>` and copies every screenshot into it.
pub fn reconcile_new_locale(
    old_root: &Path,
    new_folder: &Path,
    options: &SyncOptions,
) -> Result<LocaleStats> {
    let locale = folder_name(new_folder);
    let old_folder = old_root.join(&locale);

    let mut stats = LocaleStats::new(&locale);
    let mut current = None;
    let result = copy_locale(&old_folder, new_folder, options, &mut stats, &mut current);

    match result {
        Ok(()) => {
            tracing::info!(locale = %stats.locale, added = stats.added, "New locale added");
            Ok(stats)
        }
        Err(source) => Err(aborted(stats, current, options, source)),
    }
}

fn copy_locale(
    old_folder: &Path,
    new_folder: &Path,
    options: &SyncOptions,
    stats: &mut LocaleStats,
    current: &mut Option<String>,
) -> Result<()> {
    if !options.dry_run {
        io::ensure_dir(old_folder)?;
    }
    for image in list_images(new_folder)? {
        *current = Some(image.name.clone());
        if !options.dry_run {
            io::copy_atomic(&image.path, &old_folder.join(&image.name))?;
        }
        stats.added += 1;
    }
    Ok(())
}

fn aborted(stats: LocaleStats, file: Option<String>, options: &SyncOptions, source: Error) -> Error {
    tracing::error!(locale = %stats.locale, file = ?file, error = %source, "Locale reconciliation failed");
    Error::Aborted {
        locale: stats.locale.clone(),
        file,
        partial: Box::new(SyncReport::from_parts(vec![stats], Vec::new()).with_dry_run(options.dry_run)),
        source: Box::new(source),
    }
}

fn folder_name(folder: &Path) -> String {
    folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
