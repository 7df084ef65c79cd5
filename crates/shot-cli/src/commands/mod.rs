//! Command implementations for shot-cli

pub mod compare;
pub mod sync;

pub use compare::run_compare;
pub use sync::{SyncArgs, run_sync};
