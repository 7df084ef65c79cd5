//! Screenshot tree reconciliation
//!
//! Merges a freshly produced tree of per-locale PNG screenshots ("new") into
//! the tree that is kept under version control ("old"). Files present on both
//! sides are compared perceptually with a masked status-bar region, so a
//! different clock time does not count as a change.
//!
//! ```text
//!            SyncEngine / reconcile_trees
//!                       |
//!               reconcile_locale (per locale)
//!                 |              |
//!          compare::equivalent   shot_fs (listing, copy, delete)
//!                 |
//!          phash::PerceptualHash
//! ```
//!
//! # Example
//!
//! ```no_run
//! use shot_core::{SyncEngine, SyncOptions};
//!
//! fn example() -> shot_core::Result<()> {
//!     let engine = SyncEngine::new("screenshots", "downloads", SyncOptions::default());
//!     let report = engine.run()?;
//!     println!("changed={}", report.totals.changed);
//!     Ok(())
//! }
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod phash;
pub mod report;
pub mod sync;

pub use compare::{Comparison, MaskRect, compare_images, equivalent};
pub use config::{DEFAULT_LEFT_IGNORE, DEFAULT_TOP_IGNORE, MaskConfig, SyncConfig, SyncOptions};
pub use error::{Error, Result};
pub use phash::PerceptualHash;
pub use report::{LocaleStats, SyncReport, Totals};
pub use sync::{SyncEngine, reconcile_locale, reconcile_new_locale, reconcile_trees};
