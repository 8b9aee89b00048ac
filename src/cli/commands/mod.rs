//! Command implementations for the goods importer CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Each command is
//! implemented in its own module.

pub mod check;
pub mod shared;
pub mod upload;

// Re-export the main types for convenient access
pub use shared::UploadStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the goods importer
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `upload`: parse a goods file, submit valid records, report counts
/// - `check`: parse-only validation report with no network access
pub async fn run(args: Args) -> Result<UploadStats> {
    match args.get_command() {
        Commands::Upload(upload_args) => upload::run_upload(upload_args).await,
        Commands::Check(check_args) => check::run_check(check_args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_stats_re_export() {
        // Verify that UploadStats is properly re-exported
        let stats = UploadStats::default();
        assert_eq!(stats.products_parsed, 0);
        assert_eq!(stats.products_created, None);
    }
}
