//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shot_core::{MaskConfig, SyncConfig};

use crate::error::Result;

/// Screenshot sync - merge freshly rendered locale screenshots into a tree,
/// ignoring status-bar clock differences
#[derive(Parser, Debug)]
#[command(name = "shot-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Sync NEW screenshots into OLD
    ///
    /// Changed screenshots are overwritten, screenshots missing from NEW are
    /// deleted, and new screenshots are copied in. A locale folder missing
    /// from NEW is kept as-is and reported as a warning.
    ///
    /// Examples:
    ///   shot-sync sync screenshots/ downloads/
    ///   shot-sync sync screenshots/ downloads/ --dry-run
    ///   shot-sync sync screenshots/ downloads/ --top-ignore 0.08 --json
    Sync {
        /// Root folder with the existing screenshots (updated in place)
        old: PathBuf,

        /// Root folder with the new screenshots (read only)
        new: PathBuf,

        #[command(flatten)]
        mask: MaskArgs,

        /// Report what would change without touching OLD
        #[arg(long)]
        dry_run: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,

        /// Do not take the lock file in OLD
        #[arg(long)]
        no_lock: bool,
    },

    /// Compare two screenshots the way sync does
    Compare {
        /// First image
        old: PathBuf,

        /// Second image
        new: PathBuf,

        #[command(flatten)]
        mask: MaskArgs,

        /// Output the comparison as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Status-bar mask settings shared by all commands
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct MaskArgs {
    /// Fraction of the image height to ignore at the top [default: 0.06]
    #[arg(long, value_name = "FRACTION")]
    pub top_ignore: Option<f64>,

    /// Fraction of the image width to ignore at the left [default: 0.26]
    #[arg(long, value_name = "FRACTION")]
    pub left_ignore: Option<f64>,

    /// Configuration file (.toml or .json) with a [mask] section
    #[arg(long, value_name = "FILE", env = "SHOT_SYNC_CONFIG")]
    pub config: Option<PathBuf>,
}

impl MaskArgs {
    /// Flags override the config file, which overrides the defaults.
    pub fn resolve(&self) -> Result<MaskConfig> {
        let config = match &self.config {
            Some(path) => SyncConfig::load(path)?,
            None => SyncConfig::default(),
        };
        Ok(config.resolve_mask(self.top_ignore, self.left_ignore)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_sync_with_flags() {
        let cli = Cli::parse_from([
            "shot-sync",
            "sync",
            "old",
            "new",
            "--top-ignore",
            "0.1",
            "--dry-run",
        ]);

        match cli.command {
            Some(Commands::Sync {
                old,
                new,
                mask,
                dry_run,
                json,
                no_lock,
            }) => {
                assert_eq!(old, PathBuf::from("old"));
                assert_eq!(new, PathBuf::from("new"));
                assert_eq!(mask.top_ignore, Some(0.1));
                assert_eq!(mask.left_ignore, None);
                assert!(dry_run);
                assert!(!json);
                assert!(!no_lock);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn mask_args_default_to_constants() {
        let mask = MaskArgs::default().resolve().unwrap();
        assert_eq!(mask, MaskConfig::default());
    }

    #[test]
    fn mask_args_reject_out_of_range() {
        let args = MaskArgs {
            left_ignore: Some(2.0),
            ..MaskArgs::default()
        };
        assert!(args.resolve().is_err());
    }
}
