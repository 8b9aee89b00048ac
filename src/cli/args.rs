//! Command-line argument definitions for the goods importer
//!
//! This module defines the complete CLI interface using the clap derive
//! API, with per-command validation and logging-level helpers.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the goods importer
///
/// Imports pipe-delimited goods files into a partner product catalog via
/// its bulk-creation HTTP API.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "goods-importer",
    version,
    about = "Import pipe-delimited goods files into a partner product catalog",
    long_about = "Reads a pipe-delimited goods file, validates each line into a product \
                  record, and submits the valid records to the catalog's bulk-creation \
                  endpoint in a single request. Rejected lines are reported with their \
                  line numbers and reasons; valid lines are still submitted when some \
                  lines fail."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the goods importer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a goods file and submit the valid records (main command)
    Upload(UploadArgs),
    /// Parse a goods file and report validation results without submitting
    Check(CheckArgs),
}

/// Arguments for the upload command (parse and submit)
#[derive(Debug, Clone, Parser)]
pub struct UploadArgs {
    /// Goods file to import (pipe-delimited text, one product per line)
    #[arg(value_name = "FILE")]
    pub input_file: PathBuf,

    /// Bulk-creation endpoint URL
    ///
    /// Overrides the config file and the GOODS_IMPORTER_ENDPOINT variable.
    #[arg(long = "endpoint", value_name = "URL", help = "Bulk-creation endpoint URL")]
    pub endpoint_url: Option<String>,

    /// Partner API key
    ///
    /// Prefer the GOODS_IMPORTER_API_KEY environment variable; this flag
    /// exists for one-off runs and leaks the key into shell history.
    #[arg(long = "api-key", value_name = "KEY", help = "Partner API key")]
    pub api_key: Option<String>,

    /// Branch the imported products are assigned to
    #[arg(long = "branch-id", value_name = "ID", help = "Branch id for imported products")]
    pub branch_id: Option<i64>,

    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECS", help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/goods-importer/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Parse and report without submitting anything
    #[arg(long = "dry-run", help = "Show what would be submitted without sending the request")]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and the final summary. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the final summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the check command (parse-only validation report)
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Goods file to validate
    #[arg(value_name = "FILE")]
    pub input_file: PathBuf,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Maximum rejected lines listed in the report
    #[arg(
        long = "max-errors",
        value_name = "COUNT",
        help = "Maximum rejected lines listed in the report"
    )]
    pub max_errors: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Output format for the validation report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the validation report"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl UploadArgs {
    /// Validate the upload command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_file.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_file.display()
            )));
        }

        if !self.input_file.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_file.display()
            )));
        }

        if let Some(timeout) = self.timeout_secs {
            if timeout == 0 {
                return Err(Error::configuration(
                    "Request timeout must be greater than 0 seconds".to_string(),
                ));
            }
        }

        if let Some(endpoint) = &self.endpoint_url {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(Error::configuration(format!(
                    "Endpoint URL must start with http:// or https://, got '{}'",
                    endpoint
                )));
            }
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress spinners (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl CheckArgs {
    /// Validate the check command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_file.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_file.display()
            )));
        }

        if !self.input_file.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_file.display()
            )));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
