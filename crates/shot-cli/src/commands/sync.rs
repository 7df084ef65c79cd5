//! Sync command implementation
//!
//! Validates both roots, takes the single-writer lock on OLD, runs the engine
//! and prints the report.

use std::fmt::Write as _;
use std::path::Path;

use colored::Colorize;

use shot_core::{MaskConfig, SyncEngine, SyncOptions, SyncReport};
use shot_fs::{TreeLock, io};

use crate::error::{CliError, Result};

/// Resolved settings for one sync invocation
#[derive(Debug, Clone, Copy)]
pub struct SyncArgs {
    pub mask: MaskConfig,
    pub dry_run: bool,
    pub json: bool,
    /// Take the lock file in OLD while writing.
    pub lock: bool,
}

/// Run the sync command
pub fn run_sync(old: &Path, new: &Path, args: &SyncArgs) -> Result<()> {
    let old_root = io::require_dir(old)?;
    let new_root = io::require_dir(new)?;
    if old_root == new_root {
        return Err(CliError::user(format!(
            "OLD and NEW refer to the same directory: {}",
            old_root.display()
        )));
    }

    let _lock = if args.lock && !args.dry_run {
        Some(TreeLock::acquire(&old_root)?)
    } else {
        None
    };

    if !args.json {
        let verb = if args.dry_run { "Planning sync of" } else { "Syncing" };
        println!(
            "{} {} {} into {}",
            "=>".blue().bold(),
            verb,
            new_root.display(),
            old_root.display()
        );
    }

    let options = SyncOptions {
        mask: args.mask,
        dry_run: args.dry_run,
    };
    let engine = SyncEngine::new(old_root, new_root, options);

    match engine.run() {
        Ok(report) => print_report(&report, args.json),
        Err(err) => {
            if let Some(partial) = err.partial_report() {
                if !args.json {
                    println!("{} Sync stopped early. Completed so far:", "ERROR".red().bold());
                }
                print_report(partial, args.json)?;
            }
            Err(err.into())
        }
    }
}

fn print_report(report: &SyncReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_report(report));
    }
    Ok(())
}

/// Human-readable report.
///
/// Locales are listed by name; removed files and warnings follow in report
/// order.
pub fn render_report(report: &SyncReport) -> String {
    let mut out = String::new();

    if report.dry_run {
        let _ = writeln!(out, "\n{} Dry run, nothing was written.", "NOTE".yellow().bold());
    }

    let _ = writeln!(out, "\n{}", "Per-locale summary:".bold());
    let mut locales: Vec<_> = report.per_locale.iter().collect();
    locales.sort_by(|a, b| a.locale.cmp(&b.locale));
    for st in locales {
        let extra = if st.missing_in_new {
            format!(" {}", "(MISSING in NEW)".yellow())
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "- {}{}: changed={}, added={}, removed={}",
            st.locale, extra, st.changed, st.added, st.removed
        );
    }

    let _ = writeln!(out, "\n{}", "Overall summary:".bold());
    let _ = writeln!(
        out,
        "- changed={}, added={}, removed={}",
        report.totals.changed, report.totals.added, report.totals.removed
    );

    let removed = report.removed_files();
    if !removed.is_empty() {
        let _ = writeln!(out, "\n{}", "Removed files:".bold());
        for item in removed {
            let _ = writeln!(out, "- {}", item);
        }
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(out, "\n{}", "Warnings:".yellow().bold());
        for warning in &report.warnings {
            let _ = writeln!(out, "- {}", warning);
        }
    }

    out
}
