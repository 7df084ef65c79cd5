//! Locale and tree reconciliation
//!
//! Runs are fail-fast: the first error stops the run and is returned as
//! [`Error::Aborted`](crate::Error::Aborted), carrying the report of what was
//! already written. No rollback is attempted; re-running after fixing the
//! cause converges because updated files compare as equivalent.

mod engine;
mod locale;
mod tree;

pub use engine::SyncEngine;
pub use locale::{reconcile_locale, reconcile_new_locale};
pub use tree::reconcile_trees;
