//! Core goods file parser implementation
//!
//! This module provides line splitting, per-line validation in fixed order,
//! and product record assembly. Parsing is a pure function of the input
//! text; all malformed input is captured as error descriptors rather than
//! raised errors.

use std::path::Path;
use tracing::{debug, info};

use super::field_parsers::{parse_finite_number, split_line_fields};
use super::stats::{ParseOutcome, ParseStats};
use crate::app::models::{LineError, LineErrorKind, Product};
use crate::constants::{MIN_FIELD_COUNT, fields};
use crate::{Error, Result};

/// Parser for pipe-delimited goods files
///
/// Holds the fixed category id assigned to every record built by this
/// import path. The parser keeps no other state; repeated calls recompute
/// both output lists from scratch.
#[derive(Debug, Clone)]
pub struct GoodsParser {
    category_id: i64,
}

impl GoodsParser {
    /// Create a new parser with the category assigned to imported products
    pub fn new(category_id: i64) -> Self {
        Self { category_id }
    }

    /// Parse a goods file from disk and return records with statistics
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseOutcome> {
        info!("Parsing goods file: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                Error::file_not_found(file_path.display().to_string())
            }
            std::io::ErrorKind::InvalidData => Error::input_format(
                file_path.display().to_string(),
                "file is not valid UTF-8 text",
            ),
            _ => Error::io(
                format!("Failed to read file {}", file_path.display()),
                e,
            ),
        })?;

        Ok(self.parse_text(&content))
    }

    /// Parse goods file text into product records and error descriptors
    ///
    /// Every non-blank trimmed line yields exactly one outcome. Line numbers
    /// are assigned by position in the filtered non-blank sequence, starting
    /// at 1; blank lines consume no line number.
    pub fn parse_text(&self, content: &str) -> ParseOutcome {
        let mut products = Vec::new();
        let mut errors = Vec::new();

        let lines: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        for (index, line) in lines.iter().enumerate() {
            let line_number = index + 1;

            match self.parse_line(line) {
                Ok(product) => products.push(product),
                Err(reason) => {
                    debug!("Rejected line {}: {} ({})", line_number, reason, line);
                    errors.push(LineError {
                        line: line_number,
                        raw: (*line).to_string(),
                        reason,
                    });
                }
            }
        }

        let stats = ParseStats {
            total_lines: lines.len(),
            products_parsed: products.len(),
            lines_rejected: errors.len(),
        };

        info!(
            "Parsed {} products from {} lines ({} rejected)",
            stats.products_parsed, stats.total_lines, stats.lines_rejected
        );

        ParseOutcome {
            products,
            errors,
            stats,
        }
    }

    /// Validate one non-blank line and build its product record
    ///
    /// Checks run in fixed order and short-circuit on the first failure, so
    /// each rejected line carries exactly one reason.
    fn parse_line(&self, line: &str) -> std::result::Result<Product, LineErrorKind> {
        let parts = split_line_fields(line);

        if parts.len() < MIN_FIELD_COUNT {
            return Err(LineErrorKind::ColumnCountBelowMinimum);
        }

        let name = parts[fields::NAME];
        let barcode = parts[fields::BARCODE];

        if name.is_empty() {
            return Err(LineErrorKind::EmptyName);
        }
        if barcode.is_empty() {
            return Err(LineErrorKind::EmptyBarcode);
        }

        let price =
            parse_finite_number(parts[fields::PRICE]).ok_or(LineErrorKind::InvalidPrice)?;
        let quantity =
            parse_finite_number(parts[fields::QUANTITY]).ok_or(LineErrorKind::InvalidQuantity)?;

        Ok(Product::new(
            name.to_string(),
            barcode.to_string(),
            price,
            quantity,
            self.category_id,
        ))
    }
}
