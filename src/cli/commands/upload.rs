//! Upload command implementation for the goods importer CLI
//!
//! This module contains the complete import workflow: configuration
//! loading, file parsing, batch submission, and report generation.

use super::shared::{
    UploadStats, create_spinner, load_upload_configuration, print_error_preview,
    setup_upload_logging,
};
use crate::app::services::goods_parser::{GoodsParser, ParseOutcome};
use crate::app::services::upload_client::UploadClient;
use crate::cli::args::{OutputFormat, UploadArgs};
use crate::{Error, Result};
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Upload command runner for the goods importer
///
/// This function orchestrates the entire import workflow:
/// 1. Set up logging and configuration
/// 2. Parse the goods file into records and error descriptors
/// 3. Submit valid records in a single bulk request (unless dry-run)
/// 4. Generate summary statistics
pub async fn run_upload(args: UploadArgs) -> Result<UploadStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_upload_logging(&args)?;

    info!("Starting goods import");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration with the layered approach
    let config = load_upload_configuration(&args)?;
    debug!("Loaded configuration for endpoint {}", config.submission.endpoint_url);

    // Parse the input file
    let parser = GoodsParser::new(config.import.category_id);
    let outcome = parser.parse_file(&args.input_file)?;

    if args.show_progress() && matches!(args.output_format, OutputFormat::Human) {
        print_error_preview(&outcome.errors, config.import.error_preview_limit);
    }

    // All-lines-failed is fatal for the upload as a whole
    if outcome.stats.is_complete_failure() {
        return Err(Error::no_valid_records(outcome.stats.lines_rejected));
    }

    let mut stats = UploadStats {
        lines_read: outcome.stats.total_lines,
        products_parsed: outcome.stats.products_parsed,
        lines_rejected: outcome.stats.lines_rejected,
        products_created: None,
        processing_time: start_time.elapsed(),
    };

    if outcome.products.is_empty() {
        // Empty file: nothing to submit and nothing failed
        warn!("Input file contained no non-blank lines, nothing to submit");
        stats.processing_time = start_time.elapsed();
        generate_final_report(&args, &stats, &outcome, args.dry_run)?;
        return Ok(stats);
    }

    if args.dry_run {
        info!(
            "Dry run: {} products would be submitted",
            outcome.products.len()
        );
        stats.processing_time = start_time.elapsed();
        generate_final_report(&args, &stats, &outcome, true)?;
        return Ok(stats);
    }

    // Submit the batch with a spinner for interactive runs
    let client = UploadClient::new(&config)?;

    let spinner = if args.show_progress() {
        Some(create_spinner(&format!(
            "Submitting {} products...",
            outcome.products.len()
        )))
    } else {
        None
    };

    let submission = client.submit(&outcome.products).await;

    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    let response = submission?;
    stats.products_created = response.created.or(Some(outcome.products.len() as u64));
    stats.processing_time = start_time.elapsed();

    if let Some(message) = &response.message {
        info!("Endpoint message: {}", message);
    }

    generate_final_report(&args, &stats, &outcome, false)?;

    info!(
        "Import completed in {:.2}s: {} products submitted, {} lines rejected",
        stats.processing_time.as_secs_f64(),
        stats.products_parsed,
        stats.lines_rejected
    );

    Ok(stats)
}

/// Generate the final report based on output format
fn generate_final_report(
    args: &UploadArgs,
    stats: &UploadStats,
    outcome: &ParseOutcome,
    dry_run: bool,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => generate_human_report(stats, dry_run),
        OutputFormat::Json => generate_json_report(stats, outcome, dry_run),
        OutputFormat::Csv => generate_csv_report(stats, dry_run),
    }
}

/// Generate human-readable report
fn generate_human_report(stats: &UploadStats, dry_run: bool) -> Result<()> {
    let duration = HumanDuration(stats.processing_time);

    if dry_run {
        println!("\n🔍 Goods Import Dry Run Complete");
    } else {
        println!("\n🎉 Goods Import Complete!");
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Import Summary:");
    println!("   • Lines read: {}", stats.lines_read);
    println!(
        "   • Products parsed: {} ({:.1}% of lines)",
        stats.products_parsed,
        stats.parse_success_rate()
    );
    println!("   • Lines rejected: {}", stats.lines_rejected);
    match stats.products_created {
        Some(created) => println!("   • Products created remotely: {}", created),
        None => println!("   • Products created remotely: none (not submitted)"),
    }
    println!("   • Processing time: {}", duration);

    if stats.lines_rejected > 0 {
        println!(
            "\n⚠️  {} lines were rejected; fix them and re-run to import the rest",
            stats.lines_rejected
        );
    }

    println!();
    Ok(())
}

/// Generate JSON report for scripting
fn generate_json_report(stats: &UploadStats, outcome: &ParseOutcome, dry_run: bool) -> Result<()> {
    let json_stats = serde_json::json!({
        "dry_run": dry_run,
        "lines_read": stats.lines_read,
        "products_parsed": stats.products_parsed,
        "lines_rejected": stats.lines_rejected,
        "parse_success_rate_percent": stats.parse_success_rate(),
        "products_created": stats.products_created,
        "processing_time_seconds": stats.processing_time.as_secs_f64(),
        "completed_at": chrono::Utc::now().to_rfc3339(),
        "errors": outcome.errors,
    });

    println!("{}", serde_json::to_string_pretty(&json_stats).unwrap());
    Ok(())
}

/// Generate CSV report for data analysis
fn generate_csv_report(stats: &UploadStats, dry_run: bool) -> Result<()> {
    println!("metric,value");
    println!("dry_run,{}", dry_run);
    println!("lines_read,{}", stats.lines_read);
    println!("products_parsed,{}", stats.products_parsed);
    println!("lines_rejected,{}", stats.lines_rejected);
    println!(
        "parse_success_rate_percent,{:.2}",
        stats.parse_success_rate()
    );
    println!(
        "products_created,{}",
        stats
            .products_created
            .map(|n| n.to_string())
            .unwrap_or_default()
    );
    println!(
        "processing_time_seconds,{:.2}",
        stats.processing_time.as_secs_f64()
    );

    Ok(())
}
