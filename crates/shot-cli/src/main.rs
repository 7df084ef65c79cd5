//! Screenshot sync CLI
//!
//! The command-line front end for reconciling locale screenshot trees.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Screenshot sync CLI", "shot-sync".green().bold());
            println!();
            println!("Run {} for available commands.", "shot-sync --help".cyan());
            Ok(())
        }
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(verbose: bool) {
    if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    } else if let Ok(filter) = EnvFilter::try_from_default_env() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sync {
            old,
            new,
            mask,
            dry_run,
            json,
            no_lock,
        } => {
            let options = commands::SyncArgs {
                mask: mask.resolve()?,
                dry_run,
                json,
                lock: !no_lock,
            };
            commands::run_sync(&old, &new, &options)
        }
        Commands::Compare {
            old,
            new,
            mask,
            json,
        } => commands::run_compare(&old, &new, &mask.resolve()?, json),
    }
}
