//! Shared test fixtures for the screenshot-sync workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`images`]: deterministic screenshot images and edits inside/outside
//!   the status-bar mask
//! - [`trees`]: [`TestTrees`](trees::TestTrees), an old/new tree pair in a
//!   temporary directory

pub mod images;
pub mod trees;

pub use images::{screenshot, with_clock, with_content_change};
pub use trees::{Side, TestTrees};
