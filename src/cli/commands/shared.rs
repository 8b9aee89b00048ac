//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! the upload and check command implementations.

use crate::app::models::LineError;
use crate::cli::args::{CheckArgs, UploadArgs};
use crate::config::Config;
use crate::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Processing statistics for reporting across commands
#[derive(Debug, Clone, Default)]
pub struct UploadStats {
    /// Number of non-blank lines read from the input file
    pub lines_read: usize,
    /// Number of product records parsed
    pub products_parsed: usize,
    /// Number of lines rejected by validation
    pub lines_rejected: usize,
    /// Number of products the endpoint reports as created (None until a
    /// submission happened and the endpoint reported a count)
    pub products_created: Option<u64>,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl UploadStats {
    /// Calculate parse success rate as a percentage
    pub fn parse_success_rate(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            (self.products_parsed as f64 / self.lines_read as f64) * 100.0
        }
    }
}

/// Set up structured logging for the upload command
pub fn setup_upload_logging(args: &UploadArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("goods_importer={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Set up structured logging for the check command
pub fn setup_check_logging(args: &CheckArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("goods_importer={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach, then apply CLI overrides
pub fn load_upload_configuration(args: &UploadArgs) -> Result<Config> {
    let mut config = Config::load_layered(args.config_file.as_deref())?;

    if let Some(endpoint) = &args.endpoint_url {
        config.submission.endpoint_url = endpoint.clone();
    }
    if let Some(api_key) = &args.api_key {
        config.submission.api_key = Some(api_key.clone());
    }
    if let Some(branch_id) = args.branch_id {
        config.submission.branch_id = branch_id;
    }
    if let Some(timeout) = args.timeout_secs {
        config.submission.request_timeout_secs = timeout;
    }

    config.validate()?;
    Ok(config)
}

/// Load configuration for the check command (no submission settings needed)
pub fn load_check_configuration(args: &CheckArgs) -> Result<Config> {
    let mut config = Config::load_layered(args.config_file.as_deref())?;

    if let Some(max_errors) = args.max_errors {
        config.import.error_preview_limit = max_errors;
    }

    config.validate()?;
    Ok(config)
}

/// Create a steady-tick spinner for long-running steps
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Print a capped listing of rejected lines for operator diagnosis
pub fn print_error_preview(errors: &[LineError], limit: usize) {
    if errors.is_empty() {
        return;
    }

    println!("\n⚠️  Rejected Lines:");
    for error in errors.iter().take(limit) {
        println!(
            "   • {} {} {}",
            format!("line {}", error.line).red().bold(),
            format!("[{}]", error.reason).yellow(),
            error.raw.dimmed()
        );
    }
    if errors.len() > limit {
        println!("   • ... and {} more rejected lines", errors.len() - limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::LineErrorKind;

    #[test]
    fn test_upload_stats_default() {
        let stats = UploadStats::default();
        assert_eq!(stats.lines_read, 0);
        assert_eq!(stats.products_parsed, 0);
        assert_eq!(stats.products_created, None);
    }

    #[test]
    fn test_parse_success_rate() {
        let stats = UploadStats {
            lines_read: 8,
            products_parsed: 6,
            lines_rejected: 2,
            products_created: None,
            processing_time: std::time::Duration::from_secs(1),
        };
        assert_eq!(stats.parse_success_rate(), 75.0);

        assert_eq!(UploadStats::default().parse_success_rate(), 0.0);
    }

    #[test]
    fn test_print_error_preview_handles_empty_list() {
        // Must not panic or print headers for an empty error list
        print_error_preview(&[], 10);
    }

    #[test]
    fn test_print_error_preview_with_overflow() {
        let errors: Vec<LineError> = (1..=5)
            .map(|line| LineError {
                line,
                raw: format!("bad|line|{}", line),
                reason: LineErrorKind::ColumnCountBelowMinimum,
            })
            .collect();

        // Smoke test: capped listing with the overflow trailer
        print_error_preview(&errors, 3);
    }
}
